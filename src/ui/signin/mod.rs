//! Sign-in wizard slice.
//!
//! A branching step machine: method selection → auth choice →
//! password or OTP verification → complete. Back edges return to the
//! immediately preceding step; method selection is terminal backwards
//! (leaving from there is the shell's job).

mod intent;
mod reducer;
mod state;

pub use intent::SignInIntent;
pub use reducer::SignInReducer;
pub use state::{AuthCall, AuthChoice, LoginMethod, SignInState, SignInStep, OTP_RESEND_SECONDS};
