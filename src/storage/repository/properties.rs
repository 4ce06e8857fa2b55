// SPDX-License-Identifier: AGPL-3.0-or-later

//! Property repository.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{CreatePropertyRequest, Property, PropertyStatus, UpdatePropertyRequest};

use super::super::{DocumentStore, StoreError, StoreResult};

/// Repository for property listings.
pub struct PropertyRepository<'a> {
    store: &'a DocumentStore,
}

impl<'a> PropertyRepository<'a> {
    /// Create a new PropertyRepository.
    pub fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// Get a property by ID.
    pub fn get(&self, property_id: &str) -> StoreResult<Property> {
        let path = self.store.paths().property(property_id)?;
        if !self.store.exists(&path) {
            return Err(StoreError::NotFound(format!("Property {property_id}")));
        }
        self.store.read_json(path)
    }

    /// Create a property listing. New listings start as `pending`.
    pub fn create(&self, request: CreatePropertyRequest) -> StoreResult<Property> {
        let property = Property {
            id: Uuid::new_v4().to_string(),
            title: request.title,
            location: request.location,
            price_min: request.price_min,
            price_max: request.price_max,
            description: request.description,
            image_url: request.image_url,
            agent_name: request.agent_name,
            agent_email: request.agent_email,
            status: PropertyStatus::Pending,
            advertised: false,
            created_at: Utc::now(),
        };

        self.store
            .write_json(self.store.paths().property(&property.id)?, &property)?;
        Ok(property)
    }

    /// Replace the mutable fields of a listing.
    pub fn update(
        &self,
        property_id: &str,
        request: UpdatePropertyRequest,
    ) -> StoreResult<Property> {
        let mut property = self.get(property_id)?;

        property.title = request.title;
        property.location = request.location;
        property.price_min = request.price_min;
        property.price_max = request.price_max;
        property.description = request.description;
        property.image_url = request.image_url;

        self.store
            .write_json(self.store.paths().property(property_id)?, &property)?;
        Ok(property)
    }

    /// Set the verification status of a listing.
    pub fn set_status(&self, property_id: &str, status: PropertyStatus) -> StoreResult<Property> {
        let mut property = self.get(property_id)?;
        property.status = status;
        self.store
            .write_json(self.store.paths().property(property_id)?, &property)?;
        Ok(property)
    }

    /// Set the advertised flag of a listing.
    pub fn set_advertised(&self, property_id: &str, advertised: bool) -> StoreResult<Property> {
        let mut property = self.get(property_id)?;
        property.advertised = advertised;
        self.store
            .write_json(self.store.paths().property(property_id)?, &property)?;
        Ok(property)
    }

    /// List all properties.
    pub fn list_all(&self) -> StoreResult<Vec<Property>> {
        let ids = self.store.list_ids(self.store.paths().properties_dir())?;

        let mut properties = Vec::new();
        for id in ids {
            if let Ok(property) = self.get(&id) {
                properties.push(property);
            }
        }
        Ok(properties)
    }

    /// Delete a property listing.
    pub fn delete(&self, property_id: &str) -> StoreResult<()> {
        let path = self.store.paths().property(property_id)?;
        if !self.store.exists(&path) {
            return Err(StoreError::NotFound(format!("Property {property_id}")));
        }
        self.store.delete(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorePaths;
    use tempfile::TempDir;

    fn test_store() -> (DocumentStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut store = DocumentStore::new(StorePaths::new(temp_dir.path()));
        store.initialize().expect("Failed to initialize");
        (store, temp_dir)
    }

    fn sample_request() -> CreatePropertyRequest {
        CreatePropertyRequest {
            title: "Lakeside Villa".into(),
            location: "Geneva".into(),
            price_min: 450_000.0,
            price_max: 520_000.0,
            description: Some("Three bedrooms, lake view".into()),
            image_url: None,
            agent_name: "Bob".into(),
            agent_email: "bob@agency.com".into(),
        }
    }

    #[test]
    fn create_then_get_round_trips() {
        let (store, _guard) = test_store();
        let repo = PropertyRepository::new(&store);

        let created = repo.create(sample_request()).unwrap();
        assert_eq!(created.status, PropertyStatus::Pending);
        assert!(!created.advertised);

        let loaded = repo.get(&created.id).unwrap();
        assert_eq!(loaded, created);
    }

    #[test]
    fn update_replaces_mutable_fields_only() {
        let (store, _guard) = test_store();
        let repo = PropertyRepository::new(&store);

        let created = repo.create(sample_request()).unwrap();
        repo.set_status(&created.id, PropertyStatus::Verified)
            .unwrap();

        let updated = repo
            .update(
                &created.id,
                UpdatePropertyRequest {
                    title: "Lakeside Villa (renovated)".into(),
                    location: "Geneva".into(),
                    price_min: 500_000.0,
                    price_max: 560_000.0,
                    description: None,
                    image_url: None,
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Lakeside Villa (renovated)");
        // Admin-controlled fields survive the replace.
        assert_eq!(updated.status, PropertyStatus::Verified);
        assert_eq!(updated.agent_email, "bob@agency.com");
    }

    #[test]
    fn status_transitions_persist() {
        let (store, _guard) = test_store();
        let repo = PropertyRepository::new(&store);

        let created = repo.create(sample_request()).unwrap();
        repo.set_status(&created.id, PropertyStatus::Rejected)
            .unwrap();
        assert_eq!(
            repo.get(&created.id).unwrap().status,
            PropertyStatus::Rejected
        );

        repo.set_advertised(&created.id, true).unwrap();
        assert!(repo.get(&created.id).unwrap().advertised);
    }

    #[test]
    fn missing_property_is_not_found() {
        let (store, _guard) = test_store();
        let repo = PropertyRepository::new(&store);

        assert!(matches!(repo.get("missing"), Err(StoreError::NotFound(_))));
        assert!(matches!(
            repo.delete("missing"),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            repo.set_status("missing", PropertyStatus::Verified),
            Err(StoreError::NotFound(_))
        ));
    }
}
