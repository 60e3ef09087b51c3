//! Remote-state container for a single entity type.
//!
//! - `state.rs` - Snapshot with lifecycle flags
//! - `intent.rs` - Request lifecycle events
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `container.rs` - Async operations that talk to the collaborator

mod container;
mod intent;
mod reducer;
mod state;

pub use container::{EntityContainer, Refetch};
pub use intent::EntityIntent;
pub use reducer::EntityReducer;
pub use state::EntityState;
