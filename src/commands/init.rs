use std::io::{self, Write};

use crate::config::Config;
use crate::error::{Result, UsersError};

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        print!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Users CLI Configuration");
    println!("=======================\n");

    print!("Enter the user API base URL [http://localhost:8040]: ");
    io::stdout().flush()?;

    let mut api_url = String::new();
    io::stdin().read_line(&mut api_url)?;
    let api_url = api_url.trim();

    // Create config directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| UsersError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    let config_content = if api_url.is_empty() {
        String::new()
    } else {
        format!("api_url = \"{api_url}\"\n")
    };

    std::fs::write(&config_path, config_content).map_err(|e| UsersError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'users' commands!");

    Ok(())
}
