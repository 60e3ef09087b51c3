//! Remote-state containers for the Items, Treatement and Appointment
//! resources of a REST collaborator.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;
