//! Error taxonomy.
//!
//! The only construction-time failure is [`OtpError::InvalidConfiguration`]:
//! a requested cell count outside the supported range. It is fatal to the
//! widget - no cells are created and the caller must reconstruct with a
//! valid size. Everything past construction is non-erroring by design:
//! events only ever reference existing cells, and boundary transitions are
//! explicit no-ops.

use thiserror::Error;

/// Hard cap on the number of cells in a row.
pub const MAX_CELLS: usize = 10;

/// Errors produced by the crate.
#[derive(Debug, Error)]
pub enum OtpError {
    /// The requested cell count is outside `1..=MAX_CELLS`.
    #[error("invalid cell count {requested}: an OTP row holds between 1 and 10 cells")]
    InvalidConfiguration { requested: usize },

    /// The layout engine failed to compute cell positions.
    #[error("layout computation failed: {0}")]
    Layout(#[from] taffy::TaffyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_message() {
        let err = OtpError::InvalidConfiguration { requested: 11 };
        let msg = err.to_string();
        assert!(msg.contains("11"));
        assert!(msg.contains("invalid cell count"));
    }
}
