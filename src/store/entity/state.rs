//! Snapshot of one entity type's remote state.

use crate::model::Entity;
use crate::store::mvi::StoreState;

/// Last-known remote state plus request lifecycle flags.
///
/// `loading` covers list and single fetches, `updating` covers mutations.
/// The two are independent: a fetch and a mutation can be in flight at once.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityState<E> {
    /// Records from the last successful list fetch, client-sorted.
    pub entities: Vec<E>,
    /// Record being viewed, edited or deleted.
    pub entity: E,
    pub loading: bool,
    pub updating: bool,
    /// Set when a mutation succeeds; cleared when the next request starts.
    pub update_success: bool,
    /// Last failure, cleared when the next request starts.
    pub error_message: Option<String>,
}

impl<E: Entity> Default for EntityState<E> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            entity: E::default(),
            loading: false,
            updating: false,
            update_success: false,
            error_message: None,
        }
    }
}

impl<E: Entity> StoreState for EntityState<E> {}

impl<E: Entity> EntityState<E> {
    /// Whether any request is in flight.
    pub fn is_busy(&self) -> bool {
        self.loading || self.updating
    }

    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}
