use crate::ui::mvi::UiState;
use crate::ui::otp::OtpEntry;
use crate::ui::signin::LoginMethod;

/// The wizard's steps, in forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignUpStep {
    #[default]
    Method,
    Details,
    Otp,
    Password,
    Complete,
}

/// Async work requested by a reducer transition (see the sign-in slice for
/// the request/drain contract).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpCall {
    SendCode,
    VerifyOtp,
    CreateAccount,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignUpState {
    pub step: SignUpStep,
    pub method: LoginMethod,
    pub full_name: String,
    /// Email address or mobile number, per `method`.
    pub identifier: String,
    pub date_of_birth: String,
    pub agree_terms: bool,
    pub password: String,
    pub confirm_password: String,
    pub otp: OtpEntry,
    pub otp_timer: u16,
    pub can_resend: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub pending: Option<SignUpCall>,
}

impl UiState for SignUpState {}

impl SignUpState {
    /// Drains the requested async call, if any. Runtime-side only.
    pub fn take_pending(&mut self) -> Option<SignUpCall> {
        self.pending.take()
    }
}
