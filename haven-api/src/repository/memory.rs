//! In-memory Job Offer Repository
//!
//! Keeps offers in a map guarded by an async mutex. Ids are issued from an
//! auto-increment counter, like the relational store's serial key.

use std::collections::BTreeMap;

use async_trait::async_trait;
use haven_core::domain::job_offer::{JobOffer, JobOfferDraft, OfferId};
use tokio::sync::Mutex;

use super::{JobOfferStore, StoreError};

#[derive(Default)]
struct MemoryState {
    last_id: u64,
    offers: BTreeMap<u64, JobOffer>,
}

#[derive(Default)]
pub struct MemoryJobOfferStore {
    state: Mutex<MemoryState>,
}

impl MemoryJobOfferStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn parse_id(id: &OfferId) -> Option<u64> {
    id.as_str().parse().ok()
}

#[async_trait]
impl JobOfferStore for MemoryJobOfferStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, draft: JobOfferDraft) -> Result<JobOffer, StoreError> {
        let mut state = self.state.lock().await;
        state.last_id += 1;
        let key = state.last_id;

        let offer = JobOffer::from_draft(OfferId::new(key.to_string()), draft);
        state.offers.insert(key, offer.clone());

        Ok(offer)
    }

    async fn find_by_id(&self, id: &OfferId) -> Result<Option<JobOffer>, StoreError> {
        let Some(key) = parse_id(id) else {
            return Ok(None);
        };
        Ok(self.state.lock().await.offers.get(&key).cloned())
    }

    async fn update(&self, offer: &JobOffer) -> Result<bool, StoreError> {
        let Some(key) = parse_id(&offer.id) else {
            return Ok(false);
        };
        let mut state = self.state.lock().await;
        match state.offers.get_mut(&key) {
            Some(existing) => {
                *existing = offer.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &OfferId) -> Result<bool, StoreError> {
        let Some(key) = parse_id(id) else {
            return Ok(false);
        };
        Ok(self.state.lock().await.offers.remove(&key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_sequential_and_not_reused() {
        let store = MemoryJobOfferStore::new();
        let first = store.create(JobOfferDraft::new("a", "A")).await.unwrap();
        let second = store.create(JobOfferDraft::new("b", "B")).await.unwrap();
        assert_eq!(first.id.as_str(), "1");
        assert_eq!(second.id.as_str(), "2");

        assert!(store.delete(&second.id).await.unwrap());
        let third = store.create(JobOfferDraft::new("c", "C")).await.unwrap();
        assert_eq!(third.id.as_str(), "3");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_rows() {
        let store = MemoryJobOfferStore::new();
        let ghost = JobOffer::from_draft("41".into(), JobOfferDraft::new("d", "p"));

        assert!(!store.update(&ghost).await.unwrap());
        assert!(!store.delete(&ghost.id).await.unwrap());
        assert!(store.find_by_id(&"not-a-number".into()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let store = MemoryJobOfferStore::new();
        let mut offer = store.create(JobOfferDraft::new("d", "p")).await.unwrap();
        offer.position = "Staff Engineer".to_string();

        assert!(store.update(&offer).await.unwrap());
        let found = store.find_by_id(&offer.id).await.unwrap().unwrap();
        assert_eq!(found.position, "Staff Engineer");
    }
}
