use anyhow::{bail, Result};

use carousel_core::AppConfig;

/// Print the effective configuration as TOML
pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default configuration, refusing to overwrite an existing file
pub fn init() -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }
    AppConfig::default().save()?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

pub fn path() -> Result<()> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}
