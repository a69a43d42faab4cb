//! Invite email port.

use thiserror::Error;

/// Errors raised by email adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailPortError {
    /// The adapter refused the address.
    #[error("email address rejected: {address}")]
    Rejected { address: String },

    /// Delivery to the mail backend failed.
    #[error("email transport failed: {message}")]
    Transport { message: String },
}

/// Sends invitation emails.
#[cfg_attr(test, mockall::automock)]
pub trait EmailPort {
    fn send_invite_email(&self, address: &str) -> Result<(), EmailPortError>;
}

/// Sends an invite through the injected [`EmailPort`].
#[derive(Debug)]
pub struct SendInviteEmailUseCase<P> {
    port: P,
}

impl<P: EmailPort> SendInviteEmailUseCase<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Errors from the port are returned as-is.
    pub fn execute(&self, address: &str) -> Result<(), EmailPortError> {
        tracing::debug!(address, "sending invite email");
        self.port.send_invite_email(address)
    }
}
