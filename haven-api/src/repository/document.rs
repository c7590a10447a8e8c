//! Document Job Offer Repository
//!
//! Stores job offers as documents in a MongoDB collection. Ids are the
//! hex form of the document's `ObjectId`.

use async_trait::async_trait;
use haven_core::domain::job_offer::{JobOffer, JobOfferDraft, OfferId};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use super::lazy::LazyConnection;
use super::{JobOfferStore, StoreError};

pub struct DocumentJobOfferStore {
    uri: String,
    database: String,
    collection: String,
    offers: LazyConnection<Collection<OfferDocument>>,
}

impl DocumentJobOfferStore {
    pub fn new(uri: String, database: String, collection: String) -> Self {
        Self {
            uri,
            database,
            collection,
            offers: LazyConnection::new("document"),
        }
    }

    async fn offers(&self) -> Result<&Collection<OfferDocument>, StoreError> {
        self.offers
            .get_or_connect(|| async {
                let client = Client::with_uri_str(&self.uri).await?;
                let database = client.database(&self.database);
                // The driver connects lazily too; ping so failures surface here
                database.run_command(doc! { "ping": 1 }).await?;
                Ok::<_, mongodb::error::Error>(database.collection(&self.collection))
            })
            .await
            .map_err(StoreError::from)
    }
}

fn parse_id(id: &OfferId) -> Option<ObjectId> {
    ObjectId::parse_str(id.as_str()).ok()
}

#[async_trait]
impl JobOfferStore for DocumentJobOfferStore {
    fn backend(&self) -> &'static str {
        "document"
    }

    async fn create(&self, draft: JobOfferDraft) -> Result<JobOffer, StoreError> {
        let offers = self.offers().await?;

        let result = offers.insert_one(OfferDocument::from_draft(None, &draft)).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::InvalidData(format!("unexpected inserted id {}", result.inserted_id))
        })?;

        Ok(JobOffer::from_draft(OfferId::new(id.to_hex()), draft))
    }

    async fn find_by_id(&self, id: &OfferId) -> Result<Option<JobOffer>, StoreError> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };
        let offers = self.offers().await?;

        let document = offers.find_one(doc! { "_id": oid }).await?;
        document.map(JobOffer::try_from).transpose()
    }

    async fn update(&self, offer: &JobOffer) -> Result<bool, StoreError> {
        let Some(oid) = parse_id(&offer.id) else {
            return Ok(false);
        };
        let offers = self.offers().await?;

        let replacement = OfferDocument::from_draft(Some(oid), &offer.draft());
        let result = offers.replace_one(doc! { "_id": oid }, replacement).await?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &OfferId) -> Result<bool, StoreError> {
        let Some(oid) = parse_id(id) else {
            return Ok(false);
        };
        let offers = self.offers().await?;

        let result = offers.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }
}

/// Stored shape of a job offer
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OfferDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    description: String,
    position: String,
}

impl OfferDocument {
    fn from_draft(id: Option<ObjectId>, draft: &JobOfferDraft) -> Self {
        Self {
            id,
            description: draft.description.clone(),
            position: draft.position.clone(),
        }
    }
}

impl TryFrom<OfferDocument> for JobOffer {
    type Error = StoreError;

    fn try_from(document: OfferDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .ok_or_else(|| StoreError::InvalidData("document without _id".to_string()))?;
        Ok(JobOffer {
            id: OfferId::new(id.to_hex()),
            description: document.description,
            position: document.position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let oid = ObjectId::new();
        assert_eq!(parse_id(&OfferId::new(oid.to_hex())), Some(oid));
        assert_eq!(parse_id(&"42".into()), None);
        assert_eq!(parse_id(&"zzzzzzzzzzzzzzzzzzzzzzzz".into()), None);
    }

    #[test]
    fn test_document_conversion() {
        let oid = ObjectId::new();
        let draft = JobOfferDraft::new("Ship features", "Engineer");
        let offer = JobOffer::try_from(OfferDocument::from_draft(Some(oid), &draft)).unwrap();
        assert_eq!(offer.id.as_str(), oid.to_hex());
        assert_eq!(offer.description, "Ship features");

        let orphan = OfferDocument::from_draft(None, &draft);
        assert!(matches!(
            JobOffer::try_from(orphan),
            Err(StoreError::InvalidData(_))
        ));
    }

    #[test]
    fn test_new_document_omits_id() {
        let document = OfferDocument::from_draft(None, &JobOfferDraft::new("d", "p"));
        let bson = mongodb::bson::to_document(&document).unwrap();
        assert!(!bson.contains_key("_id"));
        assert_eq!(bson.get_str("position").unwrap(), "p");
    }
}
