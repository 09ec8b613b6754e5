use anyhow::Result;

use tabglide_core::AppConfig;

/// Write the current (or default) configuration to disk so it can be edited.
pub fn run(config: &AppConfig) -> Result<()> {
    let path = AppConfig::config_path()?;
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }
    config.save()?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
