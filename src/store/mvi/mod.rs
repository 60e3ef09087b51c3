//! Model-View-Intent (MVI) primitives for remote entity state.
//!
//! Every container change flows through a reducer:
//!
//! ```text
//! Operation ──→ Intent ──→ Reducer ──→ State ──→ View
//!     ↑                                           │
//!     └───────────────────────────────────────────┘
//! ```
//!
//! - **State**: snapshot the view reads
//! - **Intent**: request lifecycle events (pending, fulfilled, rejected)
//! - **Reducer**: pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
