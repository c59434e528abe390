//! Library half of the `pl` binary.
//!
//! Exposes the REST client and the session manager so integration tests
//! can drive them directly against a mock server.

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub(crate) mod profile_commands;
pub(crate) mod session;
pub(crate) mod user_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use commands::Commands;
pub use profile_commands::ProfileCommands;
pub use session::{PersistedSession, SessionManager, SessionSnapshot, SessionState, SessionStore};
pub use user_commands::UserCommands;
