//! Reducer trait for entity containers.

use super::intent::Intent;
use super::state::StoreState;

/// Folds request lifecycle intents into a container snapshot.
///
/// Containers never mutate their snapshot directly; every transition goes
/// through `reduce`, which performs no I/O.
pub trait Reducer {
    type State: StoreState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
