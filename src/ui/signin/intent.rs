use crate::ui::mvi::Intent;
use crate::ui::signin::state::{AuthChoice, LoginMethod};

#[derive(Debug, Clone)]
pub enum SignInIntent {
    // Method step
    SelectMethod(LoginMethod),
    IdentifierChar(char),
    IdentifierBackspace,
    SubmitMethod,

    // Auth-choice step
    SelectAuth(AuthChoice),
    SubmitAuthChoice,

    // Password step
    PasswordChar(char),
    PasswordBackspace,
    ToggleRememberMe,
    SubmitPassword,

    // OTP step
    OtpChar(char),
    OtpBackspace,
    SubmitOtp,
    ResendCode,
    /// One second elapsed while the countdown is running.
    TimerTick,

    // Async completions, fed back by the runtime
    CodeSent,
    CodeSendFailed { message: String },
    AuthSucceeded,
    AuthFailed { message: String },

    /// Return to the immediately preceding step.
    Back,
}

impl Intent for SignInIntent {}
