//! Intent trait for entity containers.

/// A request lifecycle event (pending, fulfilled or rejected) or a local
/// action such as resetting the selected record.
pub trait Intent: Send + 'static {}
