// 📋 Bartender Registry - Every bartender ever hired, in hiring order
//
// Append-only: there is no way to remove a bartender once registered.
// The registry is owned by whoever creates it and handed to Bartender::new.

use std::sync::{Arc, PoisonError, RwLock};

use super::bartender::{Bartender, BartenderRecord};

// ============================================================================
// BARTENDER REGISTRY
// ============================================================================

/// Registry of all hired bartenders
///
/// Holds shared handles only. The write lock around each append keeps
/// `list_all()` in construction order even with concurrent hiring.
#[derive(Default)]
pub struct BartenderRegistry {
    /// All bartenders in hiring order (append-only, never delete)
    bartenders: Arc<RwLock<Vec<Arc<Bartender>>>>,
}

impl BartenderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        BartenderRegistry {
            bartenders: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append a bartender (only reachable through `Bartender::new`)
    pub(crate) fn register(&self, bartender: Arc<Bartender>) {
        let mut bartenders = self
            .bartenders
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        tracing::debug!(
            id = bartender.id(),
            position = bartenders.len(),
            "registered bartender"
        );
        bartenders.push(bartender);
    }

    /// Snapshot of every bartender, in hiring order
    pub fn list_all(&self) -> Vec<Arc<Bartender>> {
        self.bartenders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.bartenders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get bartender by stable ID
    pub fn get(&self, id: &str) -> Option<Arc<Bartender>> {
        self.bartenders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|b| b.id() == id)
            .cloned()
    }

    /// All bartenders currently called `name` (exact match, hiring order)
    pub fn find_by_name(&self, name: &str) -> Vec<Arc<Bartender>> {
        self.bartenders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|b| b.name() == name)
            .cloned()
            .collect()
    }

    /// Serializable snapshot of the whole registry
    pub fn records(&self) -> Vec<BartenderRecord> {
        self.list_all().iter().map(|b| b.to_record()).collect()
    }

    /// Registry as pretty-printed JSON
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.records())?)
    }
}

// ============================================================================
// TESTS
// ============================================================================
