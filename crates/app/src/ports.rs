//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

use std::future::Future;

use flueview_domain::error::{DisplayError, PollError};
use flueview_domain::snapshot::StatusSnapshot;
use flueview_domain::view::StatusView;

/// Produces status snapshots from the backing endpoint.
pub trait StatusSource: Send + Sync {
    /// Fetch the latest snapshot.
    ///
    /// Implementations classify their failures as [`PollError::Fetch`]
    /// (transport) or [`PollError::Decode`] (body).
    fn fetch(&self) -> impl Future<Output = Result<StatusSnapshot, PollError>> + Send;
}

/// Applies a rendered view to the display surface.
///
/// Applying is all-or-nothing: on failure every region keeps its previous
/// content. Applying the same view twice must yield identical display state.
pub trait StatusDisplay: Send + Sync {
    /// Project `view` onto the display regions.
    fn apply(&self, view: &StatusView) -> impl Future<Output = Result<(), DisplayError>> + Send;
}

impl<T: StatusSource> StatusSource for std::sync::Arc<T> {
    fn fetch(&self) -> impl Future<Output = Result<StatusSnapshot, PollError>> + Send {
        (**self).fetch()
    }
}

impl<T: StatusDisplay> StatusDisplay for std::sync::Arc<T> {
    fn apply(&self, view: &StatusView) -> impl Future<Output = Result<(), DisplayError>> + Send {
        (**self).apply(view)
    }
}
