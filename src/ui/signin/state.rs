use crate::ui::mvi::UiState;
use crate::ui::otp::OtpEntry;

/// Seconds until a new code may be requested after sending one.
pub const OTP_RESEND_SECONDS: u16 = 30;

/// How the user identifies themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMethod {
    #[default]
    Email,
    Mobile,
}

impl LoginMethod {
    pub fn label(self) -> &'static str {
        match self {
            LoginMethod::Email => "Email Address",
            LoginMethod::Mobile => "Mobile Number",
        }
    }
}

/// How the identifier is verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthChoice {
    #[default]
    Password,
    Otp,
}

/// The wizard's steps, in forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInStep {
    #[default]
    Method,
    AuthChoice,
    Password,
    Otp,
    Complete,
}

/// Async work requested by a reducer transition.
///
/// The reducer records the request; the runtime takes it, runs the call,
/// and feeds the outcome back as an intent. Exactly one call can be
/// pending at a time because every request also sets `loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthCall {
    SendCode,
    VerifyPassword,
    VerifyOtp,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignInState {
    pub step: SignInStep,
    pub method: LoginMethod,
    pub auth_choice: AuthChoice,
    /// Email address or mobile number, per `method`.
    pub identifier: String,
    pub password: String,
    pub remember_me: bool,
    pub otp: OtpEntry,
    /// Countdown until resend unlocks, in seconds.
    pub otp_timer: u16,
    pub can_resend: bool,
    pub loading: bool,
    /// Inline validation or verification failure message for the current step.
    pub error: Option<String>,
    pub pending: Option<AuthCall>,
}

impl UiState for SignInState {}

impl SignInState {
    /// Drains the requested async call, if any. Runtime-side only.
    pub fn take_pending(&mut self) -> Option<AuthCall> {
        self.pending.take()
    }
}
