use anyhow::{Context, Result};
use std::env;

use evalscope_core::{Config, RemoteConfig};

pub fn init_command(force: bool) -> Result<()> {
    let config_path = env::current_dir()
        .context("Failed to get current directory")?
        .join(".evalscope.json");

    if config_path.exists() && !force {
        println!(
            "⚠️  {} already exists (use --force to overwrite)",
            config_path.display()
        );
        return Ok(());
    }

    // Remote section included so the endpoint fields are discoverable;
    // without an API key the pipeline stays local-only
    let config = Config {
        remote: Some(RemoteConfig::default()),
        ..Config::default()
    };
    config.save_to_file(&config_path)?;

    println!("✅ Wrote {}", config_path.display());
    println!("\n📌 Set EVALSCOPE_API_KEY to enable the remote analysis path");

    Ok(())
}
