//! Domain records served by the REST collaborator.

mod appointment;
mod entity;
mod items;
mod treatement;

pub use appointment::Appointment;
pub use entity::{Entity, Payload, SortValue};
pub use items::Items;
pub use treatement::Treatement;
