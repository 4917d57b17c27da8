use std::io::{self, Read};
use std::path::Path;

use crate::cli::json_output::VerifyResponse;
use filegate::api::Portal;
use filegate::error::{FilegateError, Result};
use filegate::session::MemorySession;

pub fn run(username: &str, config: &Path, addr: &str, json: bool) -> Result<()> {
    let portal = Portal::load(config)?;

    let mut password = String::new();
    io::stdin()
        .read_to_string(&mut password)
        .map_err(|e| FilegateError::Other(format!("Failed to read from stdin: {}", e)))?;
    // Trim trailing newline (common when piping echo)
    let password = password.trim_end_matches(|c| c == '\n' || c == '\r');

    let mut session = MemorySession::new();
    if !portal.login(&mut session, username, password, addr)? {
        return Err(FilegateError::AuthFailed(format!(
            "invalid credentials for '{}'",
            username
        )));
    }

    let user = portal
        .current_user(&session)
        .ok_or_else(|| FilegateError::Other("session did not resolve after login".into()))?;
    let logged_out = portal.logout(&mut session)?;

    if portal.current_user(&session).is_some() {
        return Err(FilegateError::Other("session still active after logout".into()));
    }

    if json {
        let response = VerifyResponse {
            username: user.username.clone(),
            ip: user.ip_addr.clone(),
            logged_in_at: user.logged_in_at.to_rfc3339(),
            logged_out,
        };
        println!(
            "{}",
            serde_json::to_string(&response)
                .map_err(|e| FilegateError::Serialization(e.to_string()))?
        );
        return Ok(());
    }

    println!("{}", user.actor_name());
    eprintln!("Login, session lookup and logout succeeded for '{}'.", user.username);
    Ok(())
}
