//! One-shot command dispatch
//!
//! Every data command here is file-backed: load the contacts file, apply the
//! operation, save. The interactive shell in [`crate::cli::shell`] works on a
//! session-local directory instead.

use std::fs;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Generator};
use tracing::{debug, instrument};

use crate::application::services::{ContactService, ImportOutcome};
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::{output, shell};
use crate::config::{self, Settings};
use crate::util::path::ensure_parent;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    let contacts_file = cli
        .file
        .clone()
        .unwrap_or_else(|| settings.contacts_file.clone());
    debug!("contacts file: {}", contacts_file.display());

    match &cli.command {
        None => {
            shell::run(&contacts_file);
            Ok(())
        }
        Some(Commands::Add { name, phone, email }) => _add(&contacts_file, name, phone, email),
        Some(Commands::Update { name, phone, email }) => {
            _update(&contacts_file, name, phone, email)
        }
        Some(Commands::Search { name }) => _search(&contacts_file, name),
        Some(Commands::Delete { name }) => _delete(&contacts_file, name),
        Some(Commands::List) => _list(&contacts_file),
        Some(Commands::Tree) => _tree(&contacts_file),
        Some(Commands::Export { path }) => _export(&contacts_file, path.as_deref()),
        Some(Commands::Import { path }) => _import(&contacts_file, path),
        Some(Commands::Config { command }) => _config(command, &settings),
        Some(Commands::Completion { shell }) => {
            _completion(*shell);
            Ok(())
        }
    }
}

/// Load the contacts file into a fresh service.
///
/// A missing file is an empty directory, not an error; the first saving
/// command creates it. Invalid records already in the file are warned about
/// and dropped from the loaded set.
fn _load(file: &Path) -> CliResult<ContactService> {
    let mut service = ContactService::new();
    if file.exists() {
        let outcome = service.import(file)?;
        _report_rejected(file, &outcome);
        debug!("loaded {} contacts from {}", outcome.imported, file.display());
    }
    Ok(service)
}

fn _report_rejected(path: &Path, outcome: &ImportOutcome) {
    for (line, reason) in &outcome.rejected {
        output::warning(&format!("{}:{}: {}", path.display(), line, reason));
    }
}

/// Write the directory back to the contacts file, creating its directory on
/// first use.
fn _save(service: &ContactService, file: &Path) -> CliResult<usize> {
    ensure_parent(file).map_err(|source| ApplicationError::ExportFile {
        path: file.to_path_buf(),
        source,
    })?;
    Ok(service.export(file)?)
}

#[instrument]
fn _add(file: &Path, name: &str, phone: &str, email: &str) -> CliResult<()> {
    let mut service = _load(file)?;
    service.add(name, phone, email)?;
    _save(&service, file)?;
    output::success(&format!("Added {}", name));
    Ok(())
}

#[instrument]
fn _update(file: &Path, name: &str, phone: &str, email: &str) -> CliResult<()> {
    let mut service = _load(file)?;
    service.update(name, phone, email)?;
    _save(&service, file)?;
    output::success(&format!("Updated {}", name));
    Ok(())
}

#[instrument]
fn _search(file: &Path, name: &str) -> CliResult<()> {
    let service = _load(file)?;
    let contact = service.find(name)?;
    output::info(&format!("Found: {}", contact));
    Ok(())
}

#[instrument]
fn _delete(file: &Path, name: &str) -> CliResult<()> {
    let mut service = _load(file)?;
    let removed = service.remove(name)?;
    _save(&service, file)?;
    output::success(&format!("Deleted {}", removed.name));
    Ok(())
}

#[instrument]
fn _list(file: &Path) -> CliResult<()> {
    let service = _load(file)?;
    if service.is_empty() {
        output::info("The directory is empty.");
        return Ok(());
    }
    output::header("Contacts:");
    for contact in service.contacts() {
        output::info(contact);
    }
    Ok(())
}

#[instrument]
fn _tree(file: &Path) -> CliResult<()> {
    let service = _load(file)?;
    match service.directory().to_tree() {
        Some(tree) => output::info(&tree),
        None => output::info("The directory is empty."),
    }
    Ok(())
}

#[instrument]
fn _export(file: &Path, path: Option<&Path>) -> CliResult<()> {
    let service = _load(file)?;
    let count = match path {
        Some(target) => service.export(target)?,
        None => _save(&service, file)?,
    };
    let target = path.unwrap_or(file);
    output::success(&format!("Exported {} contacts to {}", count, target.display()));
    Ok(())
}

#[instrument]
fn _import(file: &Path, source: &Path) -> CliResult<()> {
    let mut service = _load(file)?;
    let outcome = service.import(source)?;
    _report_rejected(source, &outcome);
    _save(&service, file)?;
    output::success(&format!(
        "Imported {} contacts from {}",
        outcome.imported,
        source.display()
    ));
    Ok(())
}

fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(settings).map_err(|e| {
                ApplicationError::Config {
                    message: e.to_string(),
                }
            })?;
            output::header("Active configuration:");
            output::info(&rendered);
            Ok(())
        }
        ConfigCommands::Path => {
            match config::global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::warning("no config directory available on this platform"),
            }
            output::detail(&format!(
                "contacts file: {}",
                settings.contacts_file.display()
            ));
            Ok(())
        }
        ConfigCommands::Init => _config_init(),
    }
}

fn _config_init() -> CliResult<()> {
    let Some(path) = config::global_config_path() else {
        return Err(CliError::Usage(
            "no config directory available on this platform".to_string(),
        ));
    };
    if path.exists() {
        return Err(CliError::Usage(format!(
            "config already exists: {}",
            path.display()
        )));
    }
    ensure_parent(&path).map_err(|source| ApplicationError::ExportFile {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, Settings::template()).map_err(|source| ApplicationError::ExportFile {
        path: path.clone(),
        source,
    })?;
    output::success(&format!("Created {}", path.display()));
    Ok(())
}

fn _completion<G: Generator>(gen: G) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(gen, &mut cmd, name, &mut io::stdout());
}
