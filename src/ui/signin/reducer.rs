use crate::ui::mvi::Reducer;
use crate::ui::signin::intent::SignInIntent;
use crate::ui::signin::state::{
    AuthCall, AuthChoice, SignInState, SignInStep, OTP_RESEND_SECONDS,
};

pub struct SignInReducer;

impl Reducer for SignInReducer {
    type State = SignInState;
    type Intent = SignInIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SignInIntent::SelectMethod(method) => {
                if state.step == SignInStep::Method {
                    state.method = method;
                }
            }
            SignInIntent::IdentifierChar(c) => {
                if state.step == SignInStep::Method && !c.is_control() {
                    state.identifier.push(c);
                }
            }
            SignInIntent::IdentifierBackspace => {
                if state.step == SignInStep::Method {
                    state.identifier.pop();
                }
            }
            SignInIntent::SubmitMethod => {
                if state.step == SignInStep::Method {
                    if state.identifier.trim().is_empty() {
                        state.error = Some(format!("Please enter your {}", state.method.label().to_lowercase()));
                    } else {
                        state.step = SignInStep::AuthChoice;
                        state.error = None;
                    }
                }
            }

            SignInIntent::SelectAuth(choice) => {
                if state.step == SignInStep::AuthChoice {
                    state.auth_choice = choice;
                }
            }
            SignInIntent::SubmitAuthChoice => {
                if state.step == SignInStep::AuthChoice && !state.loading {
                    match state.auth_choice {
                        AuthChoice::Password => {
                            state.step = SignInStep::Password;
                            state.error = None;
                        }
                        AuthChoice::Otp => {
                            state.loading = true;
                            state.error = None;
                            state.pending = Some(AuthCall::SendCode);
                        }
                    }
                }
            }

            SignInIntent::PasswordChar(c) => {
                if state.step == SignInStep::Password && !c.is_control() {
                    state.password.push(c);
                }
            }
            SignInIntent::PasswordBackspace => {
                if state.step == SignInStep::Password {
                    state.password.pop();
                }
            }
            SignInIntent::ToggleRememberMe => {
                if state.step == SignInStep::Password {
                    state.remember_me = !state.remember_me;
                }
            }
            SignInIntent::SubmitPassword => {
                if state.step == SignInStep::Password && !state.loading {
                    if state.password.is_empty() {
                        state.error = Some("Please enter your password".to_string());
                    } else {
                        state.loading = true;
                        state.error = None;
                        state.pending = Some(AuthCall::VerifyPassword);
                    }
                }
            }

            SignInIntent::OtpChar(c) => {
                if state.step == SignInStep::Otp && !state.loading {
                    state.otp.input(c);
                }
            }
            SignInIntent::OtpBackspace => {
                if state.step == SignInStep::Otp && !state.loading {
                    state.otp.backspace();
                }
            }
            SignInIntent::SubmitOtp => {
                if state.step == SignInStep::Otp && !state.loading {
                    if state.otp.is_complete() {
                        state.loading = true;
                        state.error = None;
                        state.pending = Some(AuthCall::VerifyOtp);
                    } else {
                        // No transition: the code must be complete first.
                        state.error = Some("Please enter the complete code".to_string());
                    }
                }
            }
            SignInIntent::ResendCode => {
                if state.step == SignInStep::Otp && state.can_resend && !state.loading {
                    state.loading = true;
                    state.error = None;
                    state.pending = Some(AuthCall::SendCode);
                }
            }
            SignInIntent::TimerTick => {
                if state.step == SignInStep::Otp && state.otp_timer > 0 {
                    state.otp_timer -= 1;
                    if state.otp_timer == 0 {
                        state.can_resend = true;
                    }
                }
            }

            // Covers both the initial send (from auth-choice) and a resend
            // (already on the OTP step): fresh countdown, cleared slots.
            SignInIntent::CodeSent => {
                state.loading = false;
                state.step = SignInStep::Otp;
                state.otp.clear();
                state.otp_timer = OTP_RESEND_SECONDS;
                state.can_resend = false;
            }
            SignInIntent::CodeSendFailed { message } => {
                state.loading = false;
                state.error = Some(message);
            }
            SignInIntent::AuthSucceeded => {
                state.loading = false;
                state.step = SignInStep::Complete;
            }
            SignInIntent::AuthFailed { message } => {
                // Stay on the current step; no rollback beyond stopping the
                // spinner and surfacing the message.
                state.loading = false;
                state.error = Some(message);
            }

            SignInIntent::Back => {
                state.error = None;
                state.step = match state.step {
                    SignInStep::AuthChoice => SignInStep::Method,
                    SignInStep::Password | SignInStep::Otp => SignInStep::AuthChoice,
                    // Method is terminal backwards; Complete never goes back.
                    other => other,
                };
            }
        }
        state
    }
}
