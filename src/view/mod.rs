//! View-side helpers: form input binding and date-time marshalling.

pub mod datetime;
mod form;

pub use form::{EditForm, FormError};
