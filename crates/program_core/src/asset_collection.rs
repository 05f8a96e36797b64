use shared::domain::{Asset, AssetCandidate, AssetId};
use tracing::{debug, warn};

use crate::error::AssetError;

/// Assets gathered during one create-program session. Identifiers are
/// unique within the collection (exact, case-sensitive match).
#[derive(Debug, Clone, Default)]
pub struct AssetCollection {
    assets: Vec<Asset>,
}

impl AssetCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `candidate` under a freshly generated id, unless its identifier
    /// is already taken, in which case nothing changes.
    pub fn add(&mut self, candidate: AssetCandidate) -> Result<&Asset, AssetError> {
        if self.contains_identifier(&candidate.identifier) {
            warn!(identifier = %candidate.identifier, "duplicate asset rejected");
            return Err(AssetError::Duplicate {
                identifier: candidate.identifier,
            });
        }

        let asset = candidate.into_asset(AssetId::generate());
        debug!(asset_id = %asset.id, identifier = %asset.identifier, "asset added");
        let index = self.assets.len();
        self.assets.push(asset);
        Ok(&self.assets[index])
    }

    pub fn remove(&mut self, asset_id: &AssetId) -> bool {
        let before = self.assets.len();
        self.assets.retain(|asset| &asset.id != asset_id);
        let removed = self.assets.len() != before;
        debug!(%asset_id, removed, "asset remove requested");
        removed
    }

    /// Empties the collection and returns how many assets were discarded.
    pub fn clear(&mut self) -> usize {
        let discarded = self.assets.len();
        self.assets.clear();
        discarded
    }

    pub fn view(&self) -> &[Asset] {
        &self.assets
    }

    pub fn first(&self) -> Option<&Asset> {
        self.assets.first()
    }

    pub fn contains_identifier(&self, identifier: &str) -> bool {
        self.assets.iter().any(|asset| asset.identifier == identifier)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/asset_collection_tests.rs"]
mod tests;
