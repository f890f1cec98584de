//! Tests for the name-ordered directory store

use rolo::domain::{Contact, Directory};
use rolo::util::testing;

fn contact(name: &str) -> Contact {
    Contact::new(
        name,
        "+11234567890",
        format!("{}@example.com", name.to_lowercase()),
    )
}

/// Insert one contact per name, in the given order.
fn directory_of(names: &[&str]) -> Directory {
    let mut directory = Directory::new();
    for name in names {
        directory.insert(contact(name));
    }
    directory
}

fn collect_names(directory: &Directory) -> Vec<String> {
    directory.iter().map(|c| c.name.clone()).collect()
}

/// Deterministic scramble, enough to produce a bushy insertion order.
fn scramble(names: &mut Vec<String>, mut seed: usize) {
    for i in 0..names.len() {
        seed = (8121 * seed + 28411) % 134456;
        let j = seed % names.len();
        names.swap(i, j);
    }
}

// =============================================================================
// insert / traversal ordering
// =============================================================================

#[test]
fn given_unordered_inserts_when_traversing_then_names_ascend() {
    // Arrange
    let mut directory = directory_of(&["Bob", "Alice", "Carol"]);

    // Act
    let names = collect_names(&directory);

    // Assert
    assert_eq!(names, ["Alice", "Bob", "Carol"]);
    assert_eq!(directory.len(), 3);

    // Removing the root keeps the rest in order
    assert!(directory.remove("Bob").is_some());
    assert_eq!(collect_names(&directory), ["Alice", "Carol"]);
    assert!(directory.find("Bob").is_none());
}

#[test]
fn given_scrambled_inserts_when_traversing_then_order_holds() {
    testing::init_test_setup();

    // Arrange
    let mut names: Vec<String> = (0..200).map(|i| format!("Name{:03}", i)).collect();
    scramble(&mut names, 42);

    let mut directory = Directory::new();
    for name in &names {
        directory.insert(contact(name));
    }

    // Act
    let traversed = collect_names(&directory);

    // Assert
    let mut expected = names.clone();
    expected.sort();
    assert_eq!(traversed, expected);
    assert_eq!(directory.len(), 200);
}

#[test]
fn given_sorted_inserts_when_measuring_depth_then_tree_is_a_chain() {
    // Arrange: ascending input, every node goes right
    let mut directory = Directory::new();
    for i in 0..40 {
        directory.insert(contact(&format!("Name{:03}", i)));
    }

    // Assert
    assert_eq!(directory.depth(), 40);
}

#[test]
fn given_directory_when_iterating_twice_then_both_passes_are_identical() {
    let directory = directory_of(&["Dora", "Bea", "Frank", "Arlo"]);

    let first = collect_names(&directory);
    let mut second = Vec::new();
    for contact in &directory {
        second.push(contact.name.clone());
    }

    assert_eq!(first, second);
}

// =============================================================================
// find / update
// =============================================================================

#[test]
fn given_inserted_contacts_when_finding_by_name_then_each_is_reachable() {
    let directory = directory_of(&["Bob", "Alice", "Carol"]);

    for name in ["Alice", "Bob", "Carol"] {
        let found = directory.find(name).expect("contact should be found");
        assert_eq!(found.name, name);
    }
}

#[test]
fn given_missing_name_when_finding_then_returns_none() {
    let directory = directory_of(&["Bob", "Alice"]);

    assert!(directory.find("Zed").is_none());
    assert!(directory.find("bob").is_none()); // byte-wise ordering, case matters
}

#[test]
fn given_contact_when_updating_then_payload_changes_in_place() {
    // Arrange
    let mut directory = directory_of(&["Bob", "Alice"]);

    // Act
    let updated = directory.update("Bob", "+49876543210", "bob@new.example.org");

    // Assert
    assert!(updated);
    let bob = directory.find("Bob").unwrap();
    assert_eq!(bob.phone, "+49876543210");
    assert_eq!(bob.email, "bob@new.example.org");
    assert_eq!(directory.len(), 2);
}

#[test]
fn given_missing_name_when_updating_then_reports_false() {
    let mut directory = directory_of(&["Alice"]);

    assert!(!directory.update("Zed", "+11234567890", "zed@example.com"));
}

// =============================================================================
// remove
// =============================================================================

#[test]
fn given_leaf_node_when_removing_then_rest_keeps_order() {
    let mut directory = directory_of(&["Bea", "Arlo", "Cleo"]);

    let removed = directory.remove("Arlo");

    assert_eq!(removed.unwrap().name, "Arlo");
    assert_eq!(collect_names(&directory), ["Bea", "Cleo"]);
    assert!(directory.find("Arlo").is_none());
}

#[test]
fn given_node_with_one_child_when_removing_then_child_splices_up() {
    // Cleo -> Arlo -> Bea: Arlo has a single right child
    let mut directory = directory_of(&["Cleo", "Arlo", "Bea"]);

    let removed = directory.remove("Arlo");

    assert_eq!(removed.unwrap().name, "Arlo");
    assert_eq!(collect_names(&directory), ["Bea", "Cleo"]);
    assert_eq!(directory.len(), 2);
}

#[test]
fn given_node_with_two_children_when_removing_then_successor_takes_its_place() {
    // Dora is the root with two full subtrees
    let mut directory = directory_of(&["Dora", "Bea", "Frank", "Arlo", "Cleo", "Evan", "Gus"]);

    let removed = directory.remove("Dora");

    assert_eq!(removed.unwrap().name, "Dora");
    assert_eq!(
        collect_names(&directory),
        ["Arlo", "Bea", "Cleo", "Evan", "Frank", "Gus"]
    );
    assert_eq!(directory.len(), 6);

    // The in-order successor kept its own payload
    let evan = directory.find("Evan").unwrap();
    assert_eq!(evan.email, "evan@example.com");
}

#[test]
fn given_missing_name_when_removing_then_returns_none() {
    let mut directory = directory_of(&["Alice"]);

    assert!(directory.remove("Zed").is_none());
    assert_eq!(directory.len(), 1);
}

#[test]
fn given_repeated_removals_when_emptying_the_tree_then_directory_is_reusable() {
    let mut directory = directory_of(&["Bea", "Arlo", "Cleo"]);

    for name in ["Bea", "Arlo", "Cleo"] {
        assert!(directory.remove(name).is_some());
    }

    assert!(directory.is_empty());
    assert_eq!(directory.len(), 0);

    directory.insert(contact("Dora"));
    assert_eq!(collect_names(&directory), ["Dora"]);
}

// =============================================================================
// duplicate names
// =============================================================================

#[test]
fn given_duplicate_names_when_inserting_then_both_are_stored() {
    let mut directory = Directory::new();
    directory.insert(Contact::new("Bob", "+11111111111", "bob@one.example.com"));
    directory.insert(Contact::new("Bob", "+12222222222", "bob@two.example.com"));

    assert_eq!(directory.len(), 2);
    assert_eq!(collect_names(&directory), ["Bob", "Bob"]);
}

#[test]
fn given_duplicate_names_when_finding_then_first_on_path_wins() {
    let mut directory = Directory::new();
    directory.insert(Contact::new("Bob", "+11111111111", "bob@one.example.com"));
    directory.insert(Contact::new("Bob", "+12222222222", "bob@two.example.com"));

    // The earlier insert sits closer to the root and shadows the duplicate
    assert_eq!(directory.find("Bob").unwrap().phone, "+11111111111");

    // Removing the shadowing entry uncovers the duplicate
    let removed = directory.remove("Bob").unwrap();
    assert_eq!(removed.phone, "+11111111111");
    assert_eq!(directory.find("Bob").unwrap().phone, "+12222222222");
    assert_eq!(directory.len(), 1);
}

// =============================================================================
// empty directory / teardown
// =============================================================================

#[test]
fn given_empty_directory_when_operating_then_every_op_is_a_noop() {
    let mut directory = Directory::new();

    assert!(directory.is_empty());
    assert_eq!(directory.len(), 0);
    assert_eq!(directory.depth(), 0);
    assert!(directory.find("Anyone").is_none());
    assert!(directory.remove("Anyone").is_none());
    assert!(!directory.update("Anyone", "+11234567890", "a@b.com"));
    assert!(directory.iter().next().is_none());
    assert!(directory.to_tree().is_none());

    directory.clear();
    assert!(directory.is_empty());
}

#[test]
fn given_populated_directory_when_clearing_then_it_can_be_refilled() {
    let mut directory = directory_of(&["Bea", "Arlo", "Cleo"]);

    directory.clear();

    assert!(directory.is_empty());
    assert_eq!(directory.len(), 0);
    assert!(directory.iter().next().is_none());

    directory.insert(contact("Dora"));
    assert_eq!(directory.len(), 1);
    assert!(directory.find("Dora").is_some());
}

// =============================================================================
// tree rendering
// =============================================================================

#[test]
fn given_contacts_when_rendering_tree_then_root_comes_first() {
    let directory = directory_of(&["Bea", "Arlo", "Cleo"]);

    let rendered = directory.to_tree().expect("non-empty tree").to_string();

    assert!(rendered.starts_with("Bea"));
    assert!(rendered.contains("Arlo"));
    assert!(rendered.contains("Cleo"));
}
