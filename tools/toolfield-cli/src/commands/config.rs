//! Show or initialise the configuration file.

use toolfield_common::config::{config_file_path, AppConfig};

pub fn run(config: &AppConfig, init: bool, force: bool) -> anyhow::Result<()> {
    let path = config_file_path();

    if init {
        if path.exists() && !force {
            anyhow::bail!(
                "Config file already exists at {} (use --force to overwrite)",
                path.display()
            );
        }
        let written = AppConfig::default().save()?;
        println!("Wrote default config to {}", written.display());
        return Ok(());
    }

    println!("# {}", path.display());
    if !path.exists() {
        println!("# (not present; showing defaults)");
    }
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
