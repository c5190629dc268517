//! Error conventions shared across the workspace.
//!
//! A poll cycle has a single failure taxonomy: [`PollError`]. Every failure
//! is caught at the outermost scope of its own cycle and logged — no retry,
//! no user-visible error state, and never fatal to the schedule.

use crate::view::Region;

/// Boxed cause carried across a port boundary.
///
/// Adapters wrap their concrete errors (transport, decoding, terminal IO)
/// so the application layer stays free of adapter crate types.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of one poll cycle.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    /// The status request could not be sent or the response not received.
    #[error("status request failed")]
    Fetch(#[source] SourceError),
    /// The response body is not a valid status snapshot.
    #[error("status payload could not be decoded")]
    Decode(#[source] SourceError),
    /// The display rejected the update.
    #[error("display update failed")]
    Display(#[from] DisplayError),
}

impl PollError {
    /// Wrap a transport-level failure.
    pub fn fetch(err: impl Into<SourceError>) -> Self {
        Self::Fetch(err.into())
    }

    /// Wrap a body-decoding failure.
    pub fn decode(err: impl Into<SourceError>) -> Self {
        Self::Decode(err.into())
    }
}

/// Failure to project a view onto the display.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// A target region is absent from the display surface.
    #[error("unknown display region `{0}`")]
    UnknownRegion(Region),
    /// Writing to the display surface failed.
    #[error("failed to write to the display")]
    Io(#[from] std::io::Error),
}
