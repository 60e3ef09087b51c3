//! Async operations for one entity type.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::{ApiError, ResourceClient};
use crate::model::Entity;
use crate::store::mvi::Reducer;
use crate::store::sort::{Sort, UnsortedOrder};

use super::intent::EntityIntent;
use super::reducer::EntityReducer;
use super::state::EntityState;

/// Remote-state container for entity type `E`.
///
/// Every operation dispatches a pending intent, awaits the collaborator and
/// dispatches a fulfilled or rejected intent. Failures end up in
/// [`EntityState::error_message`]; operations never return errors.
///
/// Successful mutations start a list re-fetch as a separate task and return
/// a [`Refetch`] handle for it. Until that task settles, `entities` may not
/// reflect the mutation, and a concurrent `fetch_list` may apply its result
/// before or after it: whichever completes last wins.
pub struct EntityContainer<E: Entity> {
    client: ResourceClient<E>,
    state: Arc<watch::Sender<EntityState<E>>>,
    unsorted: UnsortedOrder,
}

impl<E: Entity> Clone for EntityContainer<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            state: Arc::clone(&self.state),
            unsorted: self.unsorted,
        }
    }
}

/// The list re-fetch started by a successful mutation.
///
/// Dropping the handle does not cancel the re-fetch.
#[derive(Debug)]
pub struct Refetch(JoinHandle<()>);

impl Refetch {
    /// Waits until the re-fetch has applied its result to the state.
    pub async fn settled(self) {
        if let Err(e) = self.0.await {
            tracing::error!(error = %e, "List re-fetch task failed");
        }
    }
}

impl<E: Entity> EntityContainer<E> {
    pub fn new(client: ResourceClient<E>, unsorted: UnsortedOrder) -> Self {
        let (state, _) = watch::channel(EntityState::default());
        Self {
            client,
            state: Arc::new(state),
            unsorted,
        }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> EntityState<E> {
        self.state.borrow().clone()
    }

    /// Receiver notified after every state transition.
    pub fn subscribe(&self) -> watch::Receiver<EntityState<E>> {
        self.state.subscribe()
    }

    /// Fetches the whole collection and sorts it client-side.
    pub async fn fetch_list(&self, sort: Option<Sort>) {
        self.dispatch(EntityIntent::FetchPending);
        match self.client.list(sort.as_ref()).await {
            Ok(entities) => self.dispatch(EntityIntent::ListFulfilled {
                entities,
                sort,
                unsorted: self.unsorted,
            }),
            Err(e) => self.reject_fetch("fetch_list", e),
        }
    }

    /// Fetches one record into `entity`.
    pub async fn fetch_one(&self, id: i32) {
        self.dispatch(EntityIntent::FetchPending);
        match self.client.get(id).await {
            Ok(entity) => self.dispatch(EntityIntent::EntityFulfilled { entity }),
            Err(e) => self.reject_fetch("fetch_one", e),
        }
    }

    /// Creates a record. Returns the re-fetch handle on success.
    pub async fn create(&self, entity: E) -> Option<Refetch> {
        self.dispatch(EntityIntent::MutationPending);
        let result = self.client.create(&entity).await;
        self.finish_save("create", result)
    }

    /// Replaces the record identified by `entity.id`.
    pub async fn update(&self, entity: E) -> Option<Refetch> {
        self.dispatch(EntityIntent::MutationPending);
        let result = self.client.update(&entity).await;
        self.finish_save("update", result)
    }

    /// Sends only the non-empty fields of `entity` to its id.
    pub async fn partial_update(&self, entity: E) -> Option<Refetch> {
        self.dispatch(EntityIntent::MutationPending);
        let result = self.client.partial_update(&entity).await;
        self.finish_save("partial_update", result)
    }

    /// Deletes a record and clears `entity`.
    pub async fn delete(&self, id: i32) -> Option<Refetch> {
        self.dispatch(EntityIntent::MutationPending);
        match self.client.delete(id).await {
            Ok(()) => {
                let refetch = self.spawn_refetch();
                self.dispatch(EntityIntent::DeleteFulfilled);
                Some(refetch)
            }
            Err(e) => {
                self.reject_mutation("delete", e);
                None
            }
        }
    }

    /// Clears `entity` back to the empty record.
    pub fn reset(&self) {
        self.dispatch(EntityIntent::Reset);
    }

    fn dispatch(&self, intent: EntityIntent<E>) {
        self.state.send_modify(|state| {
            *state = EntityReducer::<E>::reduce(std::mem::take(state), intent);
        });
    }

    fn finish_save(&self, operation: &'static str, result: Result<E, ApiError>) -> Option<Refetch> {
        match result {
            Ok(entity) => {
                let refetch = self.spawn_refetch();
                self.dispatch(EntityIntent::SaveFulfilled { entity });
                Some(refetch)
            }
            Err(e) => {
                self.reject_mutation(operation, e);
                None
            }
        }
    }

    /// Starts an unsorted list fetch on its own task.
    ///
    /// The pending intent is applied before returning so the mutation's
    /// fulfilled intent, applied afterwards, keeps `update_success` set.
    fn spawn_refetch(&self) -> Refetch {
        self.dispatch(EntityIntent::FetchPending);
        let container = self.clone();
        Refetch(tokio::spawn(async move {
            match container.client.list(None).await {
                Ok(entities) => container.dispatch(EntityIntent::ListFulfilled {
                    entities,
                    sort: None,
                    unsorted: container.unsorted,
                }),
                Err(e) => container.reject_fetch("refetch", e),
            }
        }))
    }

    fn reject_fetch(&self, operation: &'static str, error: ApiError) {
        tracing::warn!(
            resource = E::RESOURCE,
            operation,
            kind = error.kind(),
            status = error.status(),
            error = %error,
            "Fetch failed"
        );
        self.dispatch(EntityIntent::FetchRejected {
            message: error.to_string(),
        });
    }

    fn reject_mutation(&self, operation: &'static str, error: ApiError) {
        tracing::warn!(
            resource = E::RESOURCE,
            operation,
            kind = error.kind(),
            status = error.status(),
            error = %error,
            "Mutation failed"
        );
        self.dispatch(EntityIntent::MutationRejected {
            message: error.to_string(),
        });
    }
}
