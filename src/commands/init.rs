use std::io::{self, Write};

use crate::config::{self, Config, DEFAULT_BASE_URL};
use crate::error::{Result, UserdeskError};

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("userdesk configuration");
    println!("======================\n");

    let base_url = prompt(&format!("Users collection URL [{DEFAULT_BASE_URL}]: "))?;
    let base_url = if base_url.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        base_url
    };
    let collection = config::normalize_collection(&base_url)?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| UserdeskError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    let config_content = format!("base_url = \"{collection}\"\n");
    std::fs::write(&config_path, config_content).map_err(|e| UserdeskError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'userdesk' commands!");

    Ok(())
}
