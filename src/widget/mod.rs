//! Widget Module - The OTP input component
//!
//! - [`OtpInput`] - the row of cells plus its focus sequencer
//! - [`OtpProps`] - construction properties

mod otp;
mod types;

pub use otp::OtpInput;
pub use types::{ChangeCallback, OtpProps};
