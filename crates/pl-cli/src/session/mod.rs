pub(crate) mod manager;
pub(crate) mod state;
pub(crate) mod store;

pub use manager::{SessionManager, SessionSnapshot};
pub use state::SessionState;
pub use store::{PersistedSession, SessionStore};
