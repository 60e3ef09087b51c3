//! Binding between user-entered values and entity records.

use chrono::Local;
use thiserror::Error;

use crate::model::{Appointment, Entity, Items, Treatement};
use crate::view::datetime::{self, DisplayTimeError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{resource} has no field '{field}'")]
    UnknownField {
        resource: &'static str,
        field: String,
    },

    #[error("Invalid id '{0}'")]
    InvalidId(String),

    #[error("Expected field=value, got '{0}'")]
    MalformedInput(String),

    #[error(transparent)]
    DateTime(#[from] DisplayTimeError),
}

/// Edit form and read-only detail pane of an entity.
pub trait EditForm: Entity {
    /// Applies one user-entered value. Empty text clears the field.
    fn apply_input(&mut self, field: &str, value: &str) -> Result<(), FormError>;

    /// Label/value rows for a detail pane.
    fn detail_rows(&self) -> Vec<(&'static str, String)>;

    /// Applies a `field=value` pair.
    fn apply_assignment(&mut self, assignment: &str) -> Result<(), FormError> {
        let (field, value) = assignment
            .split_once('=')
            .ok_or_else(|| FormError::MalformedInput(assignment.to_string()))?;
        self.apply_input(field.trim(), value)
    }
}

fn parse_id(value: &str) -> Result<Option<i32>, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| FormError::InvalidId(value.to_string()))
}

fn text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn show<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn unknown<E: Entity>(field: &str) -> FormError {
    FormError::UnknownField {
        resource: E::RESOURCE,
        field: field.to_string(),
    }
}

impl EditForm for Items {
    fn apply_input(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        match field {
            "id" => self.id = parse_id(value)?,
            "name" => self.name = text(value),
            "description" => self.description = text(value),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }

    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", show(self.id)),
            ("Name", show(self.name.as_deref())),
            ("Description", show(self.description.as_deref())),
        ]
    }
}

impl EditForm for Treatement {
    fn apply_input(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        match field {
            "id" => self.id = parse_id(value)?,
            "name" => self.name = text(value),
            "description" => self.description = text(value),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }

    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", show(self.id)),
            ("Name", show(self.name.as_deref())),
            ("Description", show(self.description.as_deref())),
        ]
    }
}

// Start times are entered and shown in the machine's local zone.
impl EditForm for Appointment {
    fn apply_input(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        match field {
            "id" => self.id = parse_id(value)?,
            "startTime" => self.start_time = datetime::from_display(value, &Local)?,
            "period" => self.period = text(value),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }

    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", show(self.id)),
            (
                "Start Time",
                show(self.start_time.map(|t| datetime::to_display(&t, &Local))),
            ),
            ("Period", show(self.period.as_deref())),
        ]
    }
}
