//! Interactive menu shell
//!
//! The directory starts empty and lives for the session only; Export and
//! Import move contacts to and from disk explicitly. Every outcome is
//! rendered as a message and the loop continues, so leaving the shell always
//! succeeds.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::services::ContactService;
use crate::cli::output;
use crate::util;

/// Run the menu loop until Exit is chosen or input ends.
pub fn run(default_file: &Path) {
    debug!("starting interactive shell");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut service = ContactService::new();

    loop {
        print_menu();
        let Some(choice) = read_line(&mut lines) else {
            break;
        };
        match choice.trim() {
            "1" => add(&mut service, &mut lines),
            "2" => update(&mut service, &mut lines),
            "3" => search(&service, &mut lines),
            "4" => delete(&mut service, &mut lines),
            "5" => display_all(&service),
            "6" => export(&service, &mut lines, default_file),
            "7" => import(&mut service, &mut lines, default_file),
            "0" => {
                output::info("Exiting the directory.");
                break;
            }
            _ => output::warning("Invalid choice. Please try again."),
        }
    }
}

fn print_menu() {
    println!();
    output::header("Telephone Directory Menu:");
    output::detail("1. Add Contact");
    output::detail("2. Update Contact");
    output::detail("3. Search Contact");
    output::detail("4. Delete Contact");
    output::detail("5. Display All Contacts");
    output::detail("6. Export Contacts");
    output::detail("7. Import Contacts");
    output::detail("0. Exit");
    output::prompt("Enter your choice:");
}

/// Next input line; None on end of input or a read error.
fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    lines.next()?.ok()
}

fn prompt_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Option<String> {
    output::prompt(message);
    read_line(lines)
}

/// Prompt for a filename; empty input falls back to the contacts file.
fn prompt_file(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
    default_file: &Path,
) -> Option<PathBuf> {
    output::prompt(&format!("{} [{}]", message, default_file.display()));
    let line = read_line(lines)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Some(default_file.to_path_buf())
    } else {
        Some(PathBuf::from(trimmed))
    }
}

fn add(service: &mut ContactService, lines: &mut impl Iterator<Item = io::Result<String>>) {
    let Some(name) = prompt_line(lines, "Enter name:") else {
        return;
    };
    let Some(phone) = prompt_line(lines, "Enter phone number:") else {
        return;
    };
    let Some(email) = prompt_line(lines, "Enter email:") else {
        return;
    };
    match service.add(&name, &phone, &email) {
        Ok(()) => output::success("Contact added successfully."),
        Err(e) => output::warning(&e),
    }
}

fn update(service: &mut ContactService, lines: &mut impl Iterator<Item = io::Result<String>>) {
    let Some(name) = prompt_line(lines, "Enter name to update:") else {
        return;
    };
    let Some(phone) = prompt_line(lines, "Enter new phone number:") else {
        return;
    };
    let Some(email) = prompt_line(lines, "Enter new email:") else {
        return;
    };
    match service.update(&name, &phone, &email) {
        Ok(()) => output::success("Contact updated successfully."),
        Err(e) => output::warning(&e),
    }
}

fn search(service: &ContactService, lines: &mut impl Iterator<Item = io::Result<String>>) {
    let Some(name) = prompt_line(lines, "Enter name to search:") else {
        return;
    };
    match service.find(&name) {
        Ok(contact) => output::info(&format!("Found: {}", contact)),
        Err(e) => output::warning(&e),
    }
}

fn delete(service: &mut ContactService, lines: &mut impl Iterator<Item = io::Result<String>>) {
    let Some(name) = prompt_line(lines, "Enter name to delete:") else {
        return;
    };
    match service.remove(&name) {
        Ok(_) => output::success("Contact deleted successfully."),
        Err(e) => output::warning(&e),
    }
}

fn display_all(service: &ContactService) {
    if service.is_empty() {
        output::info("The directory is empty.");
        return;
    }
    output::header("Contacts:");
    for contact in service.contacts() {
        output::info(contact);
    }
}

fn export(
    service: &ContactService,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    default_file: &Path,
) {
    let Some(target) = prompt_file(lines, "Enter filename to export to:", default_file) else {
        return;
    };
    if target == default_file {
        // The contacts file may live in a data directory that does not exist
        // yet; a failure surfaces through the export itself
        util::path::ensure_parent(&target).ok();
    }
    match service.export(&target) {
        Ok(_) => output::success(&format!(
            "Contacts exported successfully to {}.",
            target.display()
        )),
        Err(e) => output::warning(&e),
    }
}

fn import(
    service: &mut ContactService,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    default_file: &Path,
) {
    let Some(source) = prompt_file(lines, "Enter filename to import from:", default_file) else {
        return;
    };
    match service.import(&source) {
        Ok(outcome) => {
            for (line, reason) in &outcome.rejected {
                output::warning(&format!("{}:{}: {}", source.display(), line, reason));
            }
            output::success(&format!(
                "Contacts imported successfully from {}.",
                source.display()
            ));
        }
        Err(e) => output::warning(&e),
    }
}
