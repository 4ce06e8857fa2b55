// SPDX-License-Identifier: AGPL-3.0-or-later

//! Review repository.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{CreateReviewRequest, Review};

use super::super::{DocumentStore, StoreError, StoreResult};

/// Repository for property reviews.
pub struct ReviewRepository<'a> {
    store: &'a DocumentStore,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new ReviewRepository.
    pub fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// Get a review by ID.
    pub fn get(&self, review_id: &str) -> StoreResult<Review> {
        let path = self.store.paths().review(review_id)?;
        if !self.store.exists(&path) {
            return Err(StoreError::NotFound(format!("Review {review_id}")));
        }
        self.store.read_json(path)
    }

    /// Create a review.
    pub fn create(&self, request: CreateReviewRequest) -> StoreResult<Review> {
        let review = Review {
            id: Uuid::new_v4().to_string(),
            property_id: request.property_id,
            property_title: request.property_title,
            reviewer_email: request.reviewer_email,
            reviewer_name: request.reviewer_name,
            comment: request.comment,
            created_at: Utc::now(),
        };

        self.store
            .write_json(self.store.paths().review(&review.id)?, &review)?;
        Ok(review)
    }

    /// List all reviews.
    pub fn list_all(&self) -> StoreResult<Vec<Review>> {
        let ids = self.store.list_ids(self.store.paths().reviews_dir())?;

        let mut reviews = Vec::new();
        for id in ids {
            if let Ok(review) = self.get(&id) {
                reviews.push(review);
            }
        }
        Ok(reviews)
    }

    /// List reviews written by a given reviewer.
    pub fn list_by_reviewer(&self, email: &str) -> StoreResult<Vec<Review>> {
        let ids = self.store.list_ids(self.store.paths().reviews_dir())?;

        let mut reviews = Vec::new();
        for id in ids {
            if let Ok(review) = self.get(&id) {
                if review.reviewer_email == email {
                    reviews.push(review);
                }
            }
        }
        Ok(reviews)
    }

    /// Delete a review.
    pub fn delete(&self, review_id: &str) -> StoreResult<()> {
        let path = self.store.paths().review(review_id)?;
        if !self.store.exists(&path) {
            return Err(StoreError::NotFound(format!("Review {review_id}")));
        }
        self.store.delete(path)
    }
}
