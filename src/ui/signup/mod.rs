//! Sign-up wizard slice.
//!
//! Linear step machine: method selection → personal details → OTP
//! verification → password creation → complete. Same OTP semantics as the
//! sign-in wizard; the password step additionally requires a matching
//! confirmation before anything is submitted.

mod intent;
mod reducer;
mod state;

pub use intent::{SignUpField, SignUpIntent};
pub use reducer::SignUpReducer;
pub use state::{SignUpCall, SignUpState, SignUpStep};
