use serde::Serialize;

/// Result of a connect call. `connected` is true whether the edge was just
/// created or already existed; repeat calls look identical.
#[derive(Debug, Serialize)]
pub struct ConnectResponse {
    pub connected: bool,
}
