use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Payload, SortValue};

/// A booked appointment.
///
/// `period` carries an ISO-8601 duration (`PT45M`) as sent by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Appointment {
    pub id: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
    pub period: Option<String>,
}

impl Entity for Appointment {
    const RESOURCE: &'static str = "appointments";

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn clean(&self) -> Payload {
        Payload::new()
            .id(self.id)
            .timestamp("startTime", self.start_time.as_ref())
            .text("period", self.period.as_deref())
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "id" => self.id.map(|id| SortValue::Int(id.into())),
            "startTime" => self.start_time.map(SortValue::Timestamp),
            "period" => self.period.clone().map(SortValue::Text),
            _ => None,
        }
    }
}
