//! Remote-state containers and the MVI primitives they are built on.

pub mod entity;
pub mod mvi;
mod registry;
mod sort;

pub use entity::{EntityContainer, EntityIntent, EntityReducer, EntityState, Refetch};
pub use registry::EntityStores;
pub use sort::{Direction, Sort, SortParseError, UnsortedOrder, ASC, DESC};
