//! Intent → reducer → state primitives for the UI slices.
//!
//! Each stateful UI piece (the auth wizards) is a slice: a state type, an
//! intent enum covering user actions and async completions, and a reducer
//! that is the only place transitions happen.
//!
//! Reducers are pure: (state, intent) → state. When a transition needs
//! async work (send a code, verify credentials) it records the request in
//! the state; the runtime drains it after dispatch and feeds the outcome
//! back in as another intent.

/// Marker trait for slice state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for slice intents: user actions, timer ticks, and async
/// task completions.
pub trait Intent: Send + 'static {}

/// A slice's transition function.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Process an intent and return the new state. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
