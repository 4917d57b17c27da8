//! Filegate: configuration loading and session-backed authentication for a
//! small file-sharing portal.
//!
//! The HTTP layer (routing, templates, static mounts, upload handling) lives
//! outside this crate and talks to it through [`api::Portal`] and the
//! [`session::SessionStore`] trait.
//!
//! # Quick start
//!
//! ```no_run
//! use filegate::api::Portal;
//! use filegate::session::MemorySession;
//!
//! let portal = Portal::load(std::path::Path::new("./config.json"))?;
//! let mut session = MemorySession::new();
//! if portal.login(&mut session, "alice", "secret", "10.0.0.2:51000")? {
//!     let user = portal.current_user(&session).expect("just logged in");
//!     println!("hello {} from {}", user.username, user.ip_addr);
//! }
//! portal.logout(&mut session)?;
//! # Ok::<(), filegate::error::FilegateError>(())
//! ```

pub mod ami;
pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod session;
pub mod types;
