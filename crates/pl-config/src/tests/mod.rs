mod edge_cases;
mod server;

use std::env;

use tempfile::TempDir;

/// Restores an environment variable to its pre-test value on drop.
///
/// Tests touching the environment also carry `#[serial]`; the guard only
/// protects variables across tests, not within a parallel run.
pub(crate) struct EnvGuard {
    key: &'static str,
    saved: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let guard = Self::capture(key);
        unsafe { env::set_var(key, value) };
        guard
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let guard = Self::capture(key);
        unsafe { env::remove_var(key) };
        guard
    }

    fn capture(key: &'static str) -> Self {
        Self {
            key,
            saved: env::var(key).ok(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.saved.take() {
            Some(value) => unsafe { env::set_var(self.key, value) },
            None => unsafe { env::remove_var(self.key) },
        }
    }
}

/// Create a temp config directory and point PL_CONFIG_DIR at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("PL_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}
