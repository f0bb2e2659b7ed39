use crate::ui::mvi::Intent;
use crate::ui::signin::LoginMethod;

/// Text fields of the details and password steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpField {
    FullName,
    Identifier,
    DateOfBirth,
    Password,
    ConfirmPassword,
}

#[derive(Debug, Clone)]
pub enum SignUpIntent {
    // Method step
    SelectMethod(LoginMethod),
    SubmitMethod,

    // Details step
    FieldChar(SignUpField, char),
    FieldBackspace(SignUpField),
    ToggleTerms,
    SubmitDetails,

    // OTP step
    OtpChar(char),
    OtpBackspace,
    SubmitOtp,
    ResendCode,
    TimerTick,

    // Password step
    SubmitPassword,

    // Async completions, fed back by the runtime
    CodeSent,
    CodeSendFailed { message: String },
    CodeVerified,
    VerifyFailed { message: String },
    AccountCreated,
    CreateFailed { message: String },

    /// Return to the immediately preceding step.
    Back,
}

impl Intent for SignUpIntent {}
