//! In-memory content-addressed blob store.
//!
//! Stands in for the pinning service: `upload` derives a deterministic
//! content identifier from the bytes (same bytes, same CID) and `fetch`
//! resolves locators of the form `<cid>` or `<cid>/<suffix>`. Rendered
//! URLs follow the `https://<gateway-host>/ipfs/<cid>` convention.

use std::collections::HashMap;

use tokio::sync::RwLock;

/// Content-addressed store shared across handlers.
#[derive(Debug)]
pub struct ContentStore {
    gateway_host: String,
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl ContentStore {
    /// Creates an empty store rendering URLs against `gateway_host`.
    #[must_use]
    pub fn new(gateway_host: impl Into<String>) -> Self {
        Self {
            gateway_host: gateway_host.into(),
            blobs: RwLock::new(HashMap::new()),
        }
    }

    /// Stores `bytes` and returns their content identifier.
    ///
    /// The CID is derived from the bytes themselves, so uploading the same
    /// content twice yields the same identifier.
    pub async fn upload(&self, bytes: Vec<u8>) -> String {
        let digest = uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_OID, &bytes);
        let cid = format!("Qm{}", digest.simple());
        self.blobs.write().await.insert(cid.clone(), bytes);
        cid
    }

    /// Resolves a locator to its stored bytes.
    ///
    /// Locators may carry a path suffix (`<cid>/<n>.json`); only the CID
    /// segment addresses content. Returns `None` for unknown CIDs.
    pub async fn fetch(&self, locator: &str) -> Option<Vec<u8>> {
        let cid = locator.split('/').next().unwrap_or(locator);
        self.blobs.read().await.get(cid).cloned()
    }

    /// Renders the public gateway URL for a CID.
    #[must_use]
    pub fn url(&self, cid: &str) -> String {
        format!("https://{}/ipfs/{cid}", self.gateway_host)
    }
}
