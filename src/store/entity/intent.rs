//! Intents dispatched by an entity container.

use crate::store::mvi::Intent;
use crate::store::sort::{Sort, UnsortedOrder};

/// Request lifecycle events for one entity type.
#[derive(Debug, Clone)]
pub enum EntityIntent<E> {
    /// A list or single fetch started.
    FetchPending,

    /// A list fetch completed.
    ListFulfilled {
        entities: Vec<E>,
        /// Criterion the list was requested with.
        sort: Option<Sort>,
        /// Ordering to use when `sort` is `None`.
        unsorted: UnsortedOrder,
    },

    /// A single fetch completed.
    EntityFulfilled { entity: E },

    /// A list or single fetch failed.
    FetchRejected { message: String },

    /// A create, update, partial update or delete started.
    MutationPending,

    /// A create, update or partial update completed.
    SaveFulfilled { entity: E },

    /// A delete completed.
    DeleteFulfilled,

    /// A mutation failed.
    MutationRejected { message: String },

    /// Clear the selected record before a "create new" flow.
    Reset,
}

impl<E: Send + 'static> Intent for EntityIntent<E> {}
