use crate::shared::Result;

/// OutputPresenter port for presenting a rendered snapshot
///
/// This port abstracts the output destination used in print mode.
pub trait OutputPresenter {
    /// Presents the rendered snapshot bytes unchanged
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &[u8]) -> Result<()>;
}
