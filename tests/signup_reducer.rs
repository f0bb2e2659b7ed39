use giftmart::ui::mvi::Reducer;
use giftmart::ui::signup::{
    SignUpCall, SignUpField, SignUpIntent, SignUpReducer, SignUpState, SignUpStep,
};

fn reduce(state: SignUpState, intent: SignUpIntent) -> SignUpState {
    SignUpReducer::reduce(state, intent)
}

fn type_into(mut state: SignUpState, field: SignUpField, text: &str) -> SignUpState {
    for c in text.chars() {
        state = reduce(state, SignUpIntent::FieldChar(field, c));
    }
    state
}

/// Completes the method and details steps and delivers the code, leaving
/// the wizard on the OTP step.
fn at_otp_step() -> SignUpState {
    let state = reduce(SignUpState::default(), SignUpIntent::SubmitMethod);
    let state = type_into(state, SignUpField::FullName, "Asha Rao");
    let state = type_into(state, SignUpField::Identifier, "asha@example.com");
    let state = type_into(state, SignUpField::DateOfBirth, "1990-04-01");
    let mut state = reduce(state, SignUpIntent::ToggleTerms);
    state = reduce(state, SignUpIntent::SubmitDetails);
    assert_eq!(state.take_pending(), Some(SignUpCall::SendCode));
    reduce(state, SignUpIntent::CodeSent)
}

/// Continues from the OTP step through verification to the password step.
fn at_password_step() -> SignUpState {
    let mut state = at_otp_step();
    for c in ['1', '2', '3', '4', '5', '6'] {
        state = reduce(state, SignUpIntent::OtpChar(c));
    }
    state = reduce(state, SignUpIntent::SubmitOtp);
    assert_eq!(state.take_pending(), Some(SignUpCall::VerifyOtp));
    reduce(state, SignUpIntent::CodeVerified)
}

#[test]
fn details_submit_requires_all_fields() {
    let state = reduce(SignUpState::default(), SignUpIntent::SubmitMethod);
    let mut state = reduce(state, SignUpIntent::SubmitDetails);
    assert_eq!(state.step, SignUpStep::Details);
    assert!(state.error.is_some());
    assert_eq!(state.take_pending(), None);
}

#[test]
fn details_submit_requires_terms_acceptance() {
    let state = reduce(SignUpState::default(), SignUpIntent::SubmitMethod);
    let state = type_into(state, SignUpField::FullName, "Asha Rao");
    let state = type_into(state, SignUpField::Identifier, "asha@example.com");
    let state = type_into(state, SignUpField::DateOfBirth, "1990-04-01");
    let mut state = reduce(state, SignUpIntent::SubmitDetails);
    assert_eq!(state.step, SignUpStep::Details);
    assert_eq!(
        state.error.as_deref(),
        Some("Please accept the terms to continue")
    );
    assert_eq!(state.take_pending(), None);
}

#[test]
fn accepted_details_request_a_code_and_enter_otp() {
    let state = at_otp_step();
    assert_eq!(state.step, SignUpStep::Otp);
    assert_eq!(state.otp_timer, 30);
    assert!(!state.can_resend);
}

#[test]
fn otp_verification_advances_to_password() {
    let state = at_password_step();
    assert_eq!(state.step, SignUpStep::Password);
    assert!(!state.loading);
}

#[test]
fn mismatched_passwords_fail_locally_without_transition() {
    let state = at_password_step();
    let state = type_into(state, SignUpField::Password, "hunter2");
    let state = type_into(state, SignUpField::ConfirmPassword, "hunter3");
    let mut state = reduce(state, SignUpIntent::SubmitPassword);

    assert_eq!(state.step, SignUpStep::Password);
    assert_eq!(state.error.as_deref(), Some("Passwords do not match"));
    assert_eq!(state.take_pending(), None);
    assert!(!state.loading);
}

#[test]
fn matching_passwords_create_the_account() {
    let state = at_password_step();
    let state = type_into(state, SignUpField::Password, "hunter2");
    let state = type_into(state, SignUpField::ConfirmPassword, "hunter2");
    let mut state = reduce(state, SignUpIntent::SubmitPassword);

    assert!(state.loading);
    assert_eq!(state.take_pending(), Some(SignUpCall::CreateAccount));

    state = reduce(state, SignUpIntent::AccountCreated);
    assert_eq!(state.step, SignUpStep::Complete);
    assert!(!state.loading);
}

#[test]
fn incomplete_otp_is_rejected() {
    let mut state = at_otp_step();
    state = reduce(state, SignUpIntent::OtpChar('1'));
    state = reduce(state, SignUpIntent::SubmitOtp);
    assert_eq!(state.step, SignUpStep::Otp);
    assert!(state.error.is_some());
    assert_eq!(state.take_pending(), None);
}

#[test]
fn code_send_failure_surfaces_and_stays_put() {
    let state = reduce(SignUpState::default(), SignUpIntent::SubmitMethod);
    let state = type_into(state, SignUpField::FullName, "Asha Rao");
    let state = type_into(state, SignUpField::Identifier, "asha@example.com");
    let state = type_into(state, SignUpField::DateOfBirth, "1990-04-01");
    let state = reduce(state, SignUpIntent::ToggleTerms);
    let mut state = reduce(state, SignUpIntent::SubmitDetails);
    state.take_pending();

    state = reduce(
        state,
        SignUpIntent::CodeSendFailed {
            message: "Network unreachable".to_string(),
        },
    );
    assert_eq!(state.step, SignUpStep::Details);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Network unreachable"));
}

#[test]
fn back_edges_walk_the_steps_in_reverse() {
    let state = at_password_step();
    let state = reduce(state, SignUpIntent::Back);
    assert_eq!(state.step, SignUpStep::Otp);
    let state = reduce(state, SignUpIntent::Back);
    assert_eq!(state.step, SignUpStep::Details);
    let state = reduce(state, SignUpIntent::Back);
    assert_eq!(state.step, SignUpStep::Method);
    let state = reduce(state, SignUpIntent::Back);
    assert_eq!(state.step, SignUpStep::Method);
}

#[test]
fn fields_are_only_editable_on_their_step() {
    // Typing into the password field while on the details step is ignored.
    let state = reduce(SignUpState::default(), SignUpIntent::SubmitMethod);
    let state = type_into(state, SignUpField::Password, "early");
    assert_eq!(state.password, "");
}
