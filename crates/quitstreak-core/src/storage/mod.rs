mod store;

pub use store::HabitStore;

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/quitstreak[-dev]/` based on QUITSTREAK_ENV.
///
/// Set QUITSTREAK_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the data directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("QUITSTREAK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("quitstreak-dev")
    } else {
        base_dir.join("quitstreak")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
