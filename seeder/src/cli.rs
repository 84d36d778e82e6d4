//! Command-line support for the `load-registries` binary.
//!
//! Settings resolution, seeding and snapshot output live here so the binary
//! stays a thin shell and the behaviour can be exercised in tests without
//! spawning a process.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::info;

use crate::config::{SeederSettings, SettingsError};
use crate::domain::ports::LedgerError;
use crate::domain::{LoadRegistries, RegistrySeeder};
use crate::outbound::memory::InMemoryLedger;

/// Failures surfaced by the `load-registries` command.
#[derive(Debug, Error)]
pub enum LoadRegistriesError {
    /// Settings could not be read from the CLI, environment or files.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Loader diagnostic.
        message: String,
    },
    /// Settings were read but are unusable.
    #[error(transparent)]
    InvalidSettings(#[from] SettingsError),
    /// The async runtime could not be built.
    #[error("failed to create Tokio runtime: {0}")]
    Runtime(#[source] io::Error),
    /// The ledger rejected the `LoadRegistries` transaction.
    #[error("loadRegistries transaction failed: {0}")]
    Seeding(#[source] LedgerError),
    /// The registries could not be read back after seeding.
    #[error("failed to read registry snapshot: {0}")]
    Snapshot(#[source] LedgerError),
    /// The snapshot could not be encoded as JSON.
    #[error("failed to serialise registry snapshot: {0}")]
    Serialise(#[from] serde_json::Error),
    /// The snapshot could not be written to its destination.
    #[error("failed to write snapshot to {path}: {source}")]
    SnapshotWrite {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Records held by the ledger after seeding.
    pub record_count: usize,
    /// File the snapshot was written to; `None` when it went to `out`.
    pub snapshot_path: Option<PathBuf>,
}

/// Resolve settings from `args` (program name first), the environment and
/// configuration files.
///
/// # Errors
///
/// Returns [`LoadRegistriesError::Settings`] when the layers cannot be merged.
pub fn resolve_settings<I, T>(args: I) -> Result<SeederSettings, LoadRegistriesError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    SeederSettings::load_from_iter(args).map_err(|error| LoadRegistriesError::Settings {
        message: error.to_string(),
    })
}

/// Seed an in-memory ledger according to `args` and emit its snapshot.
///
/// The snapshot goes to the configured file, or to `out` when none is set.
///
/// # Errors
///
/// Returns the first [`LoadRegistriesError`] raised while resolving
/// settings, seeding, or writing the snapshot.
pub fn run<I, T>(args: I, out: impl Write) -> Result<RunSummary, LoadRegistriesError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let settings = resolve_settings(args)?;
    let namespaces = settings.namespaces()?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(LoadRegistriesError::Runtime)?;

    let ledger = Arc::new(InMemoryLedger::new(namespaces.clone()));
    let seeder = RegistrySeeder::new(Arc::clone(&ledger), namespaces);
    let transaction = LoadRegistries::new(&DefaultClock);
    runtime
        .block_on(seeder.load_registries(&transaction))
        .map_err(LoadRegistriesError::Seeding)?;

    let snapshot = ledger.snapshot().map_err(LoadRegistriesError::Snapshot)?;
    let payload = serde_json::to_string_pretty(&snapshot)?;
    let record_count = snapshot.record_count();
    match settings.snapshot_path() {
        Some(path) => {
            write_snapshot(path, &payload)?;
            info!(
                path = %path.display(),
                records = record_count,
                "registry snapshot written"
            );
        }
        None => write_to(out, &payload)?,
    }
    Ok(RunSummary {
        record_count,
        snapshot_path: settings.snapshot_path().map(Path::to_path_buf),
    })
}

fn write_to(mut out: impl Write, payload: &str) -> Result<(), LoadRegistriesError> {
    writeln!(out, "{payload}").map_err(|source| LoadRegistriesError::SnapshotWrite {
        path: PathBuf::from("<stdout>"),
        source,
    })
}

fn write_snapshot(path: &Path, payload: &str) -> Result<(), LoadRegistriesError> {
    let write_error = |source| LoadRegistriesError::SnapshotWrite {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        write_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "snapshot path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(write_error)?;
    dir.write(Path::new(file_name), format!("{payload}\n"))
        .map_err(write_error)
}
