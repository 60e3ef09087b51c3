use serde::{Deserialize, Serialize};

use super::entity::{Entity, Payload, SortValue};

/// A treatment on offer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Treatement {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Entity for Treatement {
    const RESOURCE: &'static str = "treatements";

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_keeps_id_and_drops_blank_text() {
        let treatement = Treatement {
            id: Some(2),
            name: Some("Massage".into()),
            description: Some(String::new()),
        };
        assert_eq!(
            treatement.clean().into_json(),
            serde_json::json!({"id": 2, "name": "Massage"})
        );
    }

    #[test]
    fn null_and_missing_fields_deserialize_as_absent() {
        let treatement: Treatement =
            serde_json::from_str(r#"{"id": 2, "name": null}"#).unwrap();
        assert_eq!(treatement.id, Some(2));
        assert_eq!(treatement.name, None);
        assert_eq!(treatement.description, None);
    }

    #[test]
    fn sort_values_by_field() {
        let treatement = Treatement {
            id: Some(2),
            name: Some("Massage".into()),
            description: None,
        };
        assert_eq!(treatement.sort_value("id"), Some(SortValue::Int(2)));
        assert_eq!(
            treatement.sort_value("name"),
            Some(SortValue::Text("Massage".into()))
        );
        assert_eq!(treatement.sort_value("description"), None);
        assert_eq!(treatement.sort_value("price"), None);
    }
}
