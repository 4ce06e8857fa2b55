// SPDX-License-Identifier: AGPL-3.0-or-later

//! Sell request repository.
//!
//! A sell request is a purchase offer made by a user against a listing; the
//! listing agent accepts or rejects it.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{CreateSellRequest, SellRequest, SellRequestStatus};

use super::super::{DocumentStore, StoreError, StoreResult};

/// Repository for sell requests.
pub struct SellRequestRepository<'a> {
    store: &'a DocumentStore,
}

impl<'a> SellRequestRepository<'a> {
    /// Create a new SellRequestRepository.
    pub fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// Get a sell request by ID.
    pub fn get(&self, request_id: &str) -> StoreResult<SellRequest> {
        let path = self.store.paths().sell_request(request_id)?;
        if !self.store.exists(&path) {
            return Err(StoreError::NotFound(format!("Sell request {request_id}")));
        }
        self.store.read_json(path)
    }

    /// Create a purchase offer. New offers start as `pending`.
    pub fn create(&self, request: CreateSellRequest) -> StoreResult<SellRequest> {
        let sell_request = SellRequest {
            id: Uuid::new_v4().to_string(),
            property_id: request.property_id,
            property_title: request.property_title,
            location: request.location,
            buyer_email: request.buyer_email,
            buyer_name: request.buyer_name,
            agent_email: request.agent_email,
            offer_amount: request.offer_amount,
            status: SellRequestStatus::Pending,
            requested_at: Utc::now(),
        };

        self.store.write_json(
            self.store.paths().sell_request(&sell_request.id)?,
            &sell_request,
        )?;
        Ok(sell_request)
    }

    /// List all sell requests.
    pub fn list_all(&self) -> StoreResult<Vec<SellRequest>> {
        let ids = self.store.list_ids(self.store.paths().sell_requests_dir())?;

        let mut requests = Vec::new();
        for id in ids {
            if let Ok(request) = self.get(&id) {
                requests.push(request);
            }
        }
        Ok(requests)
    }

    /// List the sell requests made by a buyer.
    pub fn list_by_buyer(&self, email: &str) -> StoreResult<Vec<SellRequest>> {
        let ids = self.store.list_ids(self.store.paths().sell_requests_dir())?;

        let mut requests = Vec::new();
        for id in ids {
            if let Ok(request) = self.get(&id) {
                if request.buyer_email == email {
                    requests.push(request);
                }
            }
        }
        Ok(requests)
    }

    /// Move an offer to a new state.
    pub fn set_status(
        &self,
        request_id: &str,
        status: SellRequestStatus,
    ) -> StoreResult<SellRequest> {
        let mut request = self.get(request_id)?;
        request.status = status;
        self.store
            .write_json(self.store.paths().sell_request(request_id)?, &request)?;
        Ok(request)
    }

    /// Delete a sell request.
    pub fn delete(&self, request_id: &str) -> StoreResult<()> {
        let path = self.store.paths().sell_request(request_id)?;
        if !self.store.exists(&path) {
            return Err(StoreError::NotFound(format!("Sell request {request_id}")));
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

    fn sample_offer(buyer: &str) -> CreateSellRequest {
        CreateSellRequest {
            property_id: "prop-1".into(),
            property_title: "Lakeside Villa".into(),
            location: "Geneva".into(),
            buyer_email: buyer.into(),
            buyer_name: "Alice".into(),
            agent_email: "bob@agency.com".into(),
            offer_amount: 480_000.0,
        }
    }

    #[test]
    fn create_starts_pending() {
        let (store, _guard) = test_store();
        let repo = SellRequestRepository::new(&store);

        let offer = repo.create(sample_offer("a@x.com")).unwrap();
        assert_eq!(offer.status, SellRequestStatus::Pending);
    }

    #[test]
    fn list_by_buyer_filters() {
        let (store, _guard) = test_store();
        let repo = SellRequestRepository::new(&store);

        repo.create(sample_offer("a@x.com")).unwrap();
        repo.create(sample_offer("a@x.com")).unwrap();
        repo.create(sample_offer("b@x.com")).unwrap();

        assert_eq!(repo.list_by_buyer("a@x.com").unwrap().len(), 2);
        assert_eq!(repo.list_all().unwrap().len(), 3);
    }

    #[test]
    fn set_status_persists() {
        let (store, _guard) = test_store();
        let repo = SellRequestRepository::new(&store);

        let offer = repo.create(sample_offer("a@x.com")).unwrap();
        repo.set_status(&offer.id, SellRequestStatus::Accepted)
            .unwrap();
        assert_eq!(
            repo.get(&offer.id).unwrap().status,
            SellRequestStatus::Accepted
        );
    }

    #[test]
    fn delete_missing_is_not_found() {
        let (store, _guard) = test_store();
        let repo = SellRequestRepository::new(&store);
        assert!(matches!(
            repo.delete("missing"),
            Err(StoreError::NotFound(_))
        ));
    }
}
