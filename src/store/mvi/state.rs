//! Snapshot trait for entity containers.

/// Snapshot published by a container after each transition.
///
/// Snapshots are cloned out to readers and compared to detect changes;
/// `Default` is the state before any request.
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}
