use crate::cli::json_output::{AmiResponse, AmiServerItem};
use filegate::ami;
use filegate::error::{FilegateError, Result};

pub fn run(dir: &str, json: bool) -> Result<()> {
    let registry = ami::load(dir).ok_or_else(|| {
        FilegateError::Other(format!(
            "No readable {} in '{}'",
            ami::CONTROL_FILE,
            dir
        ))
    })?;

    let mut servers: Vec<(&String, &String)> = registry.servers().iter().collect();
    servers.sort();

    if json {
        let response = AmiResponse {
            command: registry.command().display().to_string(),
            servers: servers
                .into_iter()
                .map(|(id, name)| AmiServerItem {
                    id: id.clone(),
                    name: name.clone(),
                })
                .collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&response)
                .map_err(|e| FilegateError::Serialization(e.to_string()))?
        );
        return Ok(());
    }

    if servers.is_empty() {
        eprintln!("No ami directives found.");
        return Ok(());
    }
    for (id, name) in servers {
        println!("{} -> {}", id, name);
    }
    Ok(())
}
