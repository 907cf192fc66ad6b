use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It never
/// performs I/O: anything with a side effect is returned as an `Effect` for
/// the caller to run, and the outcome comes back as another intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;
    type Effect;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Effect>);
}
