//! Progress reporting hook for long pair searches.

/// Observer notified once per evaluated parent pair.
///
/// Implementations are shared across rayon workers, so they must be `Sync`.
pub trait Progress: Sync {
    /// One more pair has been evaluated.
    fn advance(&self);
}

/// No-op progress.
impl Progress for () {
    fn advance(&self) {}
}
