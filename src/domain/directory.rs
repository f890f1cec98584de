//! Arena-based binary search tree keyed by contact name.

use std::cmp::Ordering;

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::instrument;

use crate::domain::contact::Contact;

/// Tree node owning one contact and its child links.
#[derive(Debug)]
struct Node {
    contact: Contact,
    /// Names strictly less than this node's name
    left: Option<Index>,
    /// Names greater than or equal to this node's name
    right: Option<Index>,
}

impl Node {
    fn new(contact: Contact) -> Self {
        Self {
            contact,
            left: None,
            right: None,
        }
    }
}

/// In-memory contact store ordered by name.
///
/// Nodes live in a generational arena and form an unbalanced binary search
/// tree: byte-wise smaller names sit in left subtrees, equal or greater names
/// in right subtrees. The shape is purely a function of insertion order and
/// is never rebalanced, so feeding sorted input (such as a previously
/// exported file) degrades lookups from O(log n) to O(n).
///
/// Duplicate names are stored, not merged: the newcomer routes right of its
/// equal, and exact-name lookup returns the first occurrence on the search
/// path. The later duplicate stays visible to traversal but is unreachable
/// by name until the earlier one is removed.
#[derive(Debug)]
pub struct Directory {
    /// Arena storage for all tree nodes
    arena: Arena<Node>,
    /// Index of the root node, None for an empty directory
    root: Option<Index>,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Number of stored contacts, duplicates included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a contact at the first free slot on its search path.
    ///
    /// Insertion always succeeds; the tree only grows. No validation happens
    /// at this level.
    #[instrument(level = "trace", skip(self, contact), fields(name = %contact.name))]
    pub fn insert(&mut self, contact: Contact) {
        let Some(mut current) = self.root else {
            self.root = Some(self.arena.insert(Node::new(contact)));
            return;
        };
        loop {
            let Some(node) = self.arena.get(current) else {
                return;
            };
            let goes_left = contact.name < node.contact.name;
            let next = if goes_left { node.left } else { node.right };
            match next {
                Some(child) => current = child,
                None => {
                    let leaf = self.arena.insert(Node::new(contact));
                    if let Some(parent) = self.arena.get_mut(current) {
                        if goes_left {
                            parent.left = Some(leaf);
                        } else {
                            parent.right = Some(leaf);
                        }
                    }
                    return;
                }
            }
        }
    }

    /// Look up a contact by exact name.
    ///
    /// The equality check happens before descending further, so with
    /// duplicate names this returns the occurrence closest to the root.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, name: &str) -> Option<&Contact> {
        let idx = self.find_index(name)?;
        self.arena.get(idx).map(|node| &node.contact)
    }

    /// Overwrite phone and email of the first contact matching `name`.
    ///
    /// The name itself is immutable through this operation; changing a name
    /// would require re-inserting under the new key. Returns false when no
    /// contact matches.
    #[instrument(level = "trace", skip(self, phone, email))]
    pub fn update(&mut self, name: &str, phone: &str, email: &str) -> bool {
        let Some(idx) = self.find_index(name) else {
            return false;
        };
        match self.arena.get_mut(idx) {
            Some(node) => {
                node.contact.phone = phone.to_string();
                node.contact.email = email.to_string();
                true
            }
            None => false,
        }
    }

    fn find_index(&self, name: &str) -> Option<Index> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = self.arena.get(idx)?;
            current = match name.cmp(node.contact.name.as_str()) {
                Ordering::Equal => return Some(idx),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Remove the first node on `name`'s search path with a matching name.
    ///
    /// Returns the detached contact, or `None` when nothing matches.
    #[instrument(level = "trace", skip(self))]
    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        let (root, removed) = self.remove_at(self.root, name);
        self.root = root;
        removed
    }

    /// Remove `name` from the subtree rooted at `slot`. Returns the index
    /// that takes over the slot plus the detached contact.
    ///
    /// A node with at most one child is freed and its child spliced into the
    /// slot. A node with two children keeps its slot: the in-order
    /// successor's fields are copied over its own, then the successor (which
    /// has no left child by construction) is removed from the right subtree.
    /// The tree shape therefore only changes on the successor side.
    fn remove_at(&mut self, slot: Option<Index>, name: &str) -> (Option<Index>, Option<Contact>) {
        let Some(idx) = slot else {
            return (None, None);
        };
        let (order, left, right) = match self.arena.get(idx) {
            Some(node) => (name.cmp(node.contact.name.as_str()), node.left, node.right),
            None => return (slot, None),
        };
        match order {
            Ordering::Less => {
                let (new_left, removed) = self.remove_at(left, name);
                if let Some(node) = self.arena.get_mut(idx) {
                    node.left = new_left;
                }
                (Some(idx), removed)
            }
            Ordering::Greater => {
                let (new_right, removed) = self.remove_at(right, name);
                if let Some(node) = self.arena.get_mut(idx) {
                    node.right = new_right;
                }
                (Some(idx), removed)
            }
            Ordering::Equal => match (left, right) {
                (None, child) | (child, None) => {
                    let contact = self.arena.remove(idx).map(|node| node.contact);
                    (child, contact)
                }
                (Some(_), Some(right_idx)) => {
                    let Some(successor) = self.leftmost_contact(right_idx) else {
                        return (Some(idx), None);
                    };
                    let (new_right, _) = self.remove_at(Some(right_idx), &successor.name);
                    match self.arena.get_mut(idx) {
                        Some(node) => {
                            node.right = new_right;
                            let original = std::mem::replace(&mut node.contact, successor);
                            (Some(idx), Some(original))
                        }
                        None => (Some(idx), None),
                    }
                }
            },
        }
    }

    /// Clone of the smallest-named contact in the subtree rooted at `start`.
    fn leftmost_contact(&self, start: Index) -> Option<Contact> {
        let mut current = start;
        loop {
            let node = self.arena.get(current)?;
            match node.left {
                Some(left) => current = left,
                None => return Some(node.contact.clone()),
            }
        }
    }

    /// Lazy in-order traversal, ascending by name. Each call starts a fresh
    /// pass over the current tree.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> InOrderIter {
        InOrderIter::new(self)
    }

    /// Longest root-to-leaf path, zero for an empty directory.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.root.map_or(0, |root| self.calculate_depth(root))
    }

    fn calculate_depth(&self, idx: Index) -> usize {
        match self.arena.get(idx) {
            Some(node) => {
                let left = node.left.map_or(0, |child| self.calculate_depth(child));
                let right = node.right.map_or(0, |child| self.calculate_depth(child));
                1 + left.max(right)
            }
            None => 0,
        }
    }

    /// Drop every node in one pass and reset the root.
    ///
    /// Safe on an empty directory; the arena releases each slot exactly once
    /// and stays reusable for further inserts.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Render the tree shape for display, children indented under parents.
    pub fn to_tree(&self) -> Option<Tree<String>> {
        self.root.map(|root| self.build_tree(root))
    }

    fn build_tree(&self, idx: Index) -> Tree<String> {
        let Some(node) = self.arena.get(idx) else {
            return Tree::new(String::new());
        };
        let leaves: Vec<Tree<String>> = [node.left, node.right]
            .into_iter()
            .flatten()
            .map(|child| self.build_tree(child))
            .collect();
        Tree::new(node.contact.name.clone()).with_leaves(leaves)
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Contact;
    type IntoIter = InOrderIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator driven by an explicit left-spine stack, no recursion.
pub struct InOrderIter<'a> {
    directory: &'a Directory,
    stack: Vec<Index>,
}

impl<'a> InOrderIter<'a> {
    fn new(directory: &'a Directory) -> Self {
        let mut iter = Self {
            directory,
            stack: Vec::new(),
        };
        iter.push_left_spine(directory.root);
        iter
    }

    /// Stack the left spine of `subtree` so its smallest name pops first.
    fn push_left_spine(&mut self, subtree: Option<Index>) {
        let mut current = subtree;
        while let Some(idx) = current {
            self.stack.push(idx);
            current = self.directory.arena.get(idx).and_then(|node| node.left);
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.directory.arena.get(idx)?;
        self.push_left_spine(node.right);
        Some(&node.contact)
    }
}
