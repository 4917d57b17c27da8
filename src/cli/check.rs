use std::path::Path;

use crate::cli::json_output::{AmiSummary, CheckResponse};
use filegate::api::Portal;
use filegate::error::{FilegateError, Result};

pub fn run(config: &Path, json: bool) -> Result<()> {
    let portal = Portal::load(config)?;
    let users: Vec<String> = portal
        .auth()
        .credentials()
        .usernames()
        .map(String::from)
        .collect();

    if json {
        let response = CheckResponse {
            config: config.display().to_string(),
            users,
            download_roots: portal.download_roots().to_vec(),
            upload_path: portal
                .upload_enabled()
                .then(|| portal.upload_path().to_string()),
            ami: portal.ami_registry().map(|ami| AmiSummary {
                command: ami.command().display().to_string(),
                entries: ami.len(),
            }),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&response)
                .map_err(|e| FilegateError::Serialization(e.to_string()))?
        );
        return Ok(());
    }

    println!("Config: {}", config.display());
    println!("Users: {}", users.join(", "));
    if portal.download_roots().is_empty() {
        println!("Download roots: (none)");
    } else {
        println!("Download roots:");
        for root in portal.download_roots() {
            println!("  {}", root);
        }
    }
    if portal.upload_enabled() {
        println!("Upload path: {}", portal.upload_path());
    } else {
        println!("Upload path: (disabled)");
    }
    match portal.ami_registry() {
        Some(ami) => println!(
            "Ami: {} ({} entries)",
            ami.command().display(),
            ami.len()
        ),
        None => println!("Ami: (not configured)"),
    }
    Ok(())
}
