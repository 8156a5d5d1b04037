//! Configuration for the campusnet CLI.
//!
//! Every tunable has a compile-time default and can be overridden at runtime
//! via a dedicated environment variable. The database path can additionally
//! be overridden with `--db` on the command line.

use std::path::PathBuf;

use campus_store::SeparationPolicy;

/// Database location under `$HOME` (production default).
const DEFAULT_DB_PATH: &str = ".local/share/campusnet/campus.db";

/// Fallback for development when `HOME` is unset.
const DEV_DB_PATH: &str = "./data/campus.db";

/// Default size of the SQLite connection pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CAMPUSNET_SEPARATION_POLICY: {0}")]
    SeparationPolicy(#[from] campus_store::UnknownSeparationPolicy),
}

/// Get the SQLite database path.
///
/// Priority:
/// 1. `CAMPUSNET_DB_PATH` env variable if set
/// 2. `$HOME/.local/share/campusnet/campus.db` if HOME is set
/// 3. `./data/campus.db` as fallback
pub fn get_db_path() -> PathBuf {
    db_path_from(
        std::env::var("CAMPUSNET_DB_PATH").ok(),
        std::env::var("HOME").ok(),
    )
}

fn db_path_from(explicit: Option<String>, home: Option<String>) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }

    if let Some(home) = home {
        return PathBuf::from(home).join(DEFAULT_DB_PATH);
    }

    PathBuf::from(DEV_DB_PATH)
}

/// Get the maximum number of pooled connections.
///
/// Reads `CAMPUSNET_MAX_CONNECTIONS`; falls back to `5` when unset, zero, or
/// not a valid `u32`.
pub fn get_max_connections() -> u32 {
    max_connections_from(std::env::var("CAMPUSNET_MAX_CONNECTIONS").ok().as_deref())
}

fn max_connections_from(value: Option<&str>) -> u32 {
    value
        .and_then(|v| v.trim().parse().ok())
        .filter(|&n: &u32| n > 0)
        .unwrap_or(DEFAULT_MAX_CONNECTIONS)
}

/// Get how unreachable pairs are treated by the remote-pairs query.
///
/// Reads `CAMPUSNET_SEPARATION_POLICY` (`reachable` or
/// `include-disconnected`). Unlike the other getters an unrecognised value
/// is an error rather than a silent fallback.
pub fn get_separation_policy() -> Result<SeparationPolicy, ConfigError> {
    separation_policy_from(std::env::var("CAMPUSNET_SEPARATION_POLICY").ok().as_deref())
}

fn separation_policy_from(value: Option<&str>) -> Result<SeparationPolicy, ConfigError> {
    match value {
        Some(v) => Ok(v.parse()?),
        None => Ok(SeparationPolicy::default()),
    }
}
