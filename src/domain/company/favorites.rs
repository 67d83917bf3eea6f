//! Favorites — process-lifetime toggle set over company identifiers.

use crate::shared::CompanyId;
use std::collections::HashSet;

/// Outcome of a favorite toggle, for the app's notification surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

/// In-memory favorite set. The app owns the instance; persistence, if any,
/// is an external collaborator concern.
#[derive(Debug, Clone, Default)]
pub struct FavoriteSet {
    ids: HashSet<CompanyId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership: present → removed, absent → added.
    pub fn toggle(&mut self, id: CompanyId) -> FavoriteChange {
        if self.ids.remove(&id) {
            FavoriteChange::Removed
        } else {
            self.ids.insert(id);
            FavoriteChange::Added
        }
    }

    pub fn contains(&self, id: &CompanyId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
