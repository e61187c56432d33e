//! `dtex -clean` — remove every workspace.

use dtex_config::Settings;

use crate::error::FatalError;

/// Removes the temporary root. A missing root is fine.
pub fn run(settings: &Settings) -> Result<(), FatalError> {
    dtex_workspace::clean(&settings.temp_root)?;
    Ok(())
}
