//! Reducer for entity container state.

use std::marker::PhantomData;

use crate::model::Entity;
use crate::store::mvi::Reducer;
use crate::store::sort;

use super::intent::EntityIntent;
use super::state::EntityState;

/// Pure state transitions for an entity container.
///
/// Fulfilled intents replace whole fields. Fetch intents only touch
/// `loading`, mutation intents only touch `updating`.
pub struct EntityReducer<E>(PhantomData<E>);

impl<E: Entity> Reducer for EntityReducer<E> {
    type State = EntityState<E>;
    type Intent = EntityIntent<E>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EntityIntent::FetchPending => EntityState {
                loading: true,
                update_success: false,
                error_message: None,
                ..state
            },

            EntityIntent::ListFulfilled {
                mut entities,
                sort,
                unsorted,
            } => {
                sort::apply(&mut entities, sort.as_ref(), unsorted);
                EntityState {
                    entities,
                    loading: false,
                    ..state
                }
            }

            EntityIntent::EntityFulfilled { entity } => EntityState {
                entity,
                loading: false,
                ..state
            },

            EntityIntent::FetchRejected { message } => EntityState {
                loading: false,
                error_message: Some(message),
                ..state
            },

            EntityIntent::MutationPending => EntityState {
                updating: true,
                update_success: false,
                error_message: None,
                ..state
            },

            EntityIntent::SaveFulfilled { entity } => EntityState {
                entity,
                updating: false,
                update_success: true,
                ..state
            },

            EntityIntent::DeleteFulfilled => EntityState {
                entity: E::default(),
                updating: false,
                update_success: true,
                ..state
            },

            EntityIntent::MutationRejected { message } => EntityState {
                updating: false,
                update_success: false,
                error_message: Some(message),
                ..state
            },

            EntityIntent::Reset => EntityState {
                entity: E::default(),
                ..state
            },
        }
    }
}
