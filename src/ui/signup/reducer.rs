use crate::ui::mvi::Reducer;
use crate::ui::signin::OTP_RESEND_SECONDS;
use crate::ui::signup::intent::{SignUpField, SignUpIntent};
use crate::ui::signup::state::{SignUpCall, SignUpState, SignUpStep};

pub struct SignUpReducer;

impl SignUpReducer {
    fn field_mut(state: &mut SignUpState, field: SignUpField) -> Option<&mut String> {
        // Each field is editable only while its step is showing.
        match (state.step, field) {
            (SignUpStep::Details, SignUpField::FullName) => Some(&mut state.full_name),
            (SignUpStep::Details, SignUpField::Identifier) => Some(&mut state.identifier),
            (SignUpStep::Details, SignUpField::DateOfBirth) => Some(&mut state.date_of_birth),
            (SignUpStep::Password, SignUpField::Password) => Some(&mut state.password),
            (SignUpStep::Password, SignUpField::ConfirmPassword) => {
                Some(&mut state.confirm_password)
            }
            _ => None,
        }
    }
}

impl Reducer for SignUpReducer {
    type State = SignUpState;
    type Intent = SignUpIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SignUpIntent::SelectMethod(method) => {
                if state.step == SignUpStep::Method {
                    state.method = method;
                }
            }
            SignUpIntent::SubmitMethod => {
                if state.step == SignUpStep::Method {
                    state.step = SignUpStep::Details;
                    state.error = None;
                }
            }

            SignUpIntent::FieldChar(field, c) => {
                if !c.is_control() {
                    if let Some(value) = Self::field_mut(&mut state, field) {
                        value.push(c);
                    }
                }
            }
            SignUpIntent::FieldBackspace(field) => {
                if let Some(value) = Self::field_mut(&mut state, field) {
                    value.pop();
                }
            }
            SignUpIntent::ToggleTerms => {
                if state.step == SignUpStep::Details {
                    state.agree_terms = !state.agree_terms;
                }
            }
            SignUpIntent::SubmitDetails => {
                if state.step == SignUpStep::Details && !state.loading {
                    if state.full_name.trim().is_empty()
                        || state.identifier.trim().is_empty()
                        || state.date_of_birth.trim().is_empty()
                    {
                        state.error = Some("Please fill in all fields".to_string());
                    } else if !state.agree_terms {
                        state.error = Some("Please accept the terms to continue".to_string());
                    } else {
                        state.loading = true;
                        state.error = None;
                        state.pending = Some(SignUpCall::SendCode);
                    }
                }
            }

            SignUpIntent::OtpChar(c) => {
                if state.step == SignUpStep::Otp && !state.loading {
                    state.otp.input(c);
                }
            }
            SignUpIntent::OtpBackspace => {
                if state.step == SignUpStep::Otp && !state.loading {
                    state.otp.backspace();
                }
            }
            SignUpIntent::SubmitOtp => {
                if state.step == SignUpStep::Otp && !state.loading {
                    if state.otp.is_complete() {
                        state.loading = true;
                        state.error = None;
                        state.pending = Some(SignUpCall::VerifyOtp);
                    } else {
                        state.error = Some("Please enter the complete code".to_string());
                    }
                }
            }
            SignUpIntent::ResendCode => {
                if state.step == SignUpStep::Otp && state.can_resend && !state.loading {
                    state.loading = true;
                    state.error = None;
                    state.pending = Some(SignUpCall::SendCode);
                }
            }
            SignUpIntent::TimerTick => {
                if state.step == SignUpStep::Otp && state.otp_timer > 0 {
                    state.otp_timer -= 1;
                    if state.otp_timer == 0 {
                        state.can_resend = true;
                    }
                }
            }

            SignUpIntent::SubmitPassword => {
                if state.step == SignUpStep::Password && !state.loading {
                    if state.password.is_empty() {
                        state.error = Some("Please choose a password".to_string());
                    } else if state.password != state.confirm_password {
                        // Local failure, no transition.
                        state.error = Some("Passwords do not match".to_string());
                    } else {
                        state.loading = true;
                        state.error = None;
                        state.pending = Some(SignUpCall::CreateAccount);
                    }
                }
            }

            SignUpIntent::CodeSent => {
                state.loading = false;
                state.step = SignUpStep::Otp;
                state.otp.clear();
                state.otp_timer = OTP_RESEND_SECONDS;
                state.can_resend = false;
            }
            SignUpIntent::CodeSendFailed { message }
            | SignUpIntent::VerifyFailed { message }
            | SignUpIntent::CreateFailed { message } => {
                state.loading = false;
                state.error = Some(message);
            }
            SignUpIntent::CodeVerified => {
                state.loading = false;
                state.step = SignUpStep::Password;
            }
            SignUpIntent::AccountCreated => {
                state.loading = false;
                state.step = SignUpStep::Complete;
            }

            SignUpIntent::Back => {
                state.error = None;
                state.step = match state.step {
                    SignUpStep::Details => SignUpStep::Method,
                    SignUpStep::Otp => SignUpStep::Details,
                    SignUpStep::Password => SignUpStep::Otp,
                    // Method is terminal backwards; Complete never goes back.
                    other => other,
                };
            }
        }
        state
    }
}
