//! Error types for the runner registration adapter

use glider_client::ClientError;
use thiserror::Error;

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Errors that can occur while reconciling a runner registration
#[derive(Debug, Error)]
pub enum AdapterError {
    /// `name` was set in the declared configuration
    ///
    /// The registration endpoint does not persist a runner name, so
    /// accepting the attribute would record state the remote side never
    /// holds. Rejected before any remote call.
    #[error(
        "setting the 'name' attribute is not supported: the registration API does not persist it; remove 'name' from the configuration"
    )]
    NameNotSupported,

    /// Create was invoked without a registration token
    #[error("a registration token is required to register a runner")]
    MissingRegistrationToken,

    /// The operation requires a runner id but the resource has none
    #[error("runner has no id; it was never created or has been removed from the remote side")]
    MissingId,

    /// A remote API call failed
    #[error("remote API call failed: {0}")]
    Client(#[from] ClientError),
}
