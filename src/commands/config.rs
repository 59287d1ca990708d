use std::path::{Path, PathBuf};

use anyhow::Result;
use daygrid_core::daygrid_config::DaygridConfig;
use owo_colors::OwoColorize;

fn resolve(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(DaygridConfig::config_path()?),
    }
}

pub fn path(config_path: Option<&Path>) -> Result<()> {
    println!("{}", resolve(config_path)?.display());
    Ok(())
}

pub fn init(config_path: Option<&Path>) -> Result<()> {
    let path = resolve(config_path)?;
    if path.exists() {
        anyhow::bail!("Config file already exists at {}", path.display());
    }

    DaygridConfig::create_default_config(&path)?;
    println!("{} {}", "Created".green(), path.display());
    Ok(())
}
