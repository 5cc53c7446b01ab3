//! The in-memory banner store.
//!
//! A single `RwLock` guards both the collection and the id counter: reads
//! take the shared lock, `save` and `remove_by_id` take the exclusive lock.
//! Every operation returns owned clones, so callers never alias live state.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use super::errors::{ServiceError, ServiceResult};

/// A promotional banner record.
///
/// Field names are capitalized on the wire (`{"ID": 1, "Title": ...}`),
/// matching the reference deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    /// Unique id, assigned by the store. `0` means "not yet created".
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "Button")]
    pub button: String,
    #[serde(rename = "Link")]
    pub link: String,
}

/// Collection plus counter, guarded together so an id can never be assigned
/// without its record landing in the same critical section.
#[derive(Debug, Default)]
struct StoreInner {
    next_id: i64,
    items: Vec<Banner>,
}

/// In-memory banner store.
///
/// The id counter is per-instance: two services never share ids, and a fresh
/// service always starts assigning at 1.
#[derive(Debug, Default)]
pub struct BannerService {
    inner: RwLock<StoreInner>,
}

impl BannerService {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All banners in insertion order, as an owned snapshot.
    ///
    /// Never fails; the snapshot is detached from live state, so later
    /// mutations cannot corrupt a caller mid-iteration.
    pub fn all(&self) -> Vec<Banner> {
        self.inner.read().unwrap().items.clone()
    }

    /// Look up a banner by id. Linear scan; fine at this scale.
    pub fn by_id(&self, id: i64) -> ServiceResult<Banner> {
        let inner = self.inner.read().unwrap();
        inner
            .items
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(ServiceError::NotFound)
    }

    /// Create or update a banner.
    ///
    /// With `id == 0` the store assigns the next id (first is 1) and appends.
    /// With a nonzero id the matching record's fields are replaced entirely,
    /// identity preserved. A nonzero id with no matching record is
    /// `NotFound` — the store deliberately does not upsert.
    pub fn save(&self, mut banner: Banner) -> ServiceResult<Banner> {
        let mut inner = self.inner.write().unwrap();

        if banner.id == 0 {
            inner.next_id += 1;
            banner.id = inner.next_id;
            inner.items.push(banner.clone());
            return Ok(banner);
        }

        match inner.items.iter_mut().find(|b| b.id == banner.id) {
            Some(slot) => {
                *slot = banner.clone();
                Ok(banner)
            }
            None => Err(ServiceError::NotFound),
        }
    }

    /// Remove a banner by id, returning the removed record.
    ///
    /// Order of the remaining records is preserved. `NotFound` leaves the
    /// collection unchanged.
    pub fn remove_by_id(&self, id: i64) -> ServiceResult<Banner> {
        let mut inner = self.inner.write().unwrap();
        match inner.items.iter().position(|b| b.id == id) {
            Some(index) => Ok(inner.items.remove(index)),
            None => Err(ServiceError::NotFound),
        }
    }

    /// Number of banners currently stored
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().items.len()
    }

    /// True if the store holds no banners
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
