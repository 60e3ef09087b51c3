//! Client-side ordering of fetched lists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Entity, SortValue};

/// Marker that selects ascending order in a `field,direction` criterion.
pub const ASC: &str = "asc";
pub const DESC: &str = "desc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// A `field,direction` sort criterion.
///
/// Any direction other than `asc` means descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: Direction,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortParseError {
    #[error("Sort criterion '{0}' has no field name")]
    MissingField(String),
}

impl Sort {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}

impl FromStr for Sort {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s.split_once(',').unwrap_or((s, ""));
        let field = field.trim();
        if field.is_empty() {
            return Err(SortParseError::MissingField(s.to_string()));
        }
        let direction = if direction.trim() == ASC {
            Direction::Asc
        } else {
            Direction::Desc
        };
        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Asc => ASC,
            Direction::Desc => DESC,
        };
        write!(f, "{},{}", self.field, direction)
    }
}

/// Ordering applied when a list is fetched without a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsortedOrder {
    /// Inverts the arrival order. Kept as the default so existing
    /// screens list records exactly as before.
    #[default]
    Reversed,
    /// Keeps the order the server returned.
    Arrival,
}

/// Sorts `entities` in place. Equal values keep their arrival order.
pub(crate) fn apply<E: Entity>(entities: &mut [E], sort: Option<&Sort>, unsorted: UnsortedOrder) {
    let Some(sort) = sort else {
        if unsorted == UnsortedOrder::Reversed {
            entities.reverse();
        }
        return;
    };

    entities.sort_by(|a, b| {
        let a = a.sort_value(&sort.field);
        let b = b.sort_value(&sort.field);
        match sort.direction {
            Direction::Asc => SortValue::compare(a.as_ref(), b.as_ref()),
            Direction::Desc => SortValue::compare(b.as_ref(), a.as_ref()),
        }
    });
}
