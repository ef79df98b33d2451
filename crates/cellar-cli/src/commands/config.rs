use std::path::Path;

use anyhow::Result;
use cellar_config::Config;

pub fn handle(explicit: Option<&Path>, config: &Config) -> Result<()> {
    match explicit {
        Some(path) => println!("# {}", path.display()),
        None => println!("# {}", Config::config_path().display()),
    }
    print!("{}", toml::to_string_pretty(config)?);

    Ok(())
}
