use serde::{Deserialize, Serialize};

use super::entity::{Entity, Payload, SortValue};

/// A stock item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Items {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Entity for Items {
    const RESOURCE: &'static str = "items";

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn clean(&self) -> Payload {
        Payload::new()
            .id(self.id)
            .text("name", self.name.as_deref())
            .text("description", self.description.as_deref())
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "id" => self.id.map(|id| SortValue::Int(id.into())),
            "name" => self.name.clone().map(SortValue::Text),
            "description" => self.description.clone().map(SortValue::Text),
            _ => None,
        }
    }
}
