//! The set of containers the application works with.

use crate::api::{build_http_client, ApiError, ResourceClient};
use crate::config::Config;
use crate::model::{Appointment, Entity, Items, Treatement};

use super::entity::EntityContainer;

/// One container per entity type, sharing a connection pool.
///
/// Built explicitly from configuration and handed to whatever view needs
/// it; there is no process-wide instance.
#[derive(Clone)]
pub struct EntityStores {
    pub items: EntityContainer<Items>,
    pub treatement: EntityContainer<Treatement>,
    pub appointment: EntityContainer<Appointment>,
}

impl EntityStores {
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = build_http_client(&config.api)?;
        let unsorted = config.list.unsorted_order;

        tracing::debug!(
            base_url = %config.api.base_url,
            unsorted_order = ?unsorted,
            "Building entity stores"
        );

        Ok(Self {
            items: EntityContainer::new(ResourceClient::with_client(client.clone(), &config.api), unsorted),
            treatement: EntityContainer::new(
                ResourceClient::with_client(client.clone(), &config.api),
                unsorted,
            ),
            appointment: EntityContainer::new(ResourceClient::with_client(client, &config.api), unsorted),
        })
    }

    /// Resource names served by the stores, in declaration order.
    pub fn resources() -> [&'static str; 3] {
        [Items::RESOURCE, Treatement::RESOURCE, Appointment::RESOURCE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resources_are_plural_paths() {
        assert_eq!(
            EntityStores::resources(),
            ["items", "treatements", "appointments"]
        );
    }

    #[test]
    fn stores_start_empty_and_independent() {
        let stores = EntityStores::from_config(&Config::default()).unwrap();
        stores.items.reset();
        assert!(stores.items.snapshot().entities.is_empty());
        assert!(!stores.treatement.snapshot().loading);
        assert_eq!(stores.appointment.snapshot().entity, Appointment::default());
    }
}
