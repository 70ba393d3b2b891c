//! District registry: the staging list plus the BST of active districts.
//!
//! A district is in exactly one place at a time. It starts in the staging
//! list, moves into the tree when it enters the games, and leaves the tree
//! for good when eliminated.

use serde::Serialize;

use super::node::TreeNode;
use super::tree::DistrictTree;
use crate::core::GamesError;
use crate::people::{District, DistrictId};

/// Staging list and active-district BST.
///
/// ## Example
///
/// ```
/// use district_games::people::{District, DistrictId};
/// use district_games::registry::DistrictRegistry;
///
/// let mut registry = DistrictRegistry::new();
/// registry.stage(District::new(DistrictId::new(4)));
///
/// assert_eq!(registry.add(DistrictId::new(4)), Ok(true));
/// assert!(registry.staged().is_empty());
/// assert!(registry.find(DistrictId::new(4)).is_ok());
/// ```
#[derive(Clone, Debug, Default, Serialize)]
pub struct DistrictRegistry {
    staging: Vec<District>,
    game: DistrictTree,
}

impl DistrictRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry whose staging list holds `districts` in order.
    #[must_use]
    pub fn with_staged(districts: Vec<District>) -> Self {
        Self {
            staging: districts,
            game: DistrictTree::new(),
        }
    }

    /// Append a district to the staging list.
    pub fn stage(&mut self, district: District) {
        self.staging.push(district);
    }

    /// Districts that have not entered the games, in staging order.
    #[must_use]
    pub fn staged(&self) -> &[District] {
        &self.staging
    }

    /// The active-district tree.
    #[must_use]
    pub fn tree(&self) -> &DistrictTree {
        &self.game
    }

    /// The root of the active-district tree.
    #[must_use]
    pub fn root(&self) -> Option<&TreeNode> {
        self.game.root().map(|id| self.game.node(id))
    }

    /// Number of active districts.
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.game.len()
    }

    /// Move a staged district into the games.
    ///
    /// Returns `Ok(false)` and changes nothing when a district with the same
    /// id is already active; the staged copy stays staged.
    pub fn add(&mut self, id: DistrictId) -> Result<bool, GamesError> {
        let index = self
            .staging
            .iter()
            .position(|d| d.id() == id)
            .ok_or(GamesError::NotStaged(id))?;

        if self.game.contains(id) {
            tracing::debug!(district = %id, "district already in the games");
            return Ok(false);
        }

        let district = self.staging.remove(index);
        match self.game.insert(district) {
            Ok(_) => {
                tracing::debug!(district = %id, "district entered the games");
                Ok(true)
            }
            Err(district) => {
                self.staging.insert(index, district);
                Ok(false)
            }
        }
    }

    /// Enter every staged district, in staging order.
    ///
    /// Returns how many entered. Duplicates stay in the staging list.
    pub fn add_all(&mut self) -> usize {
        let ids: Vec<DistrictId> = self.staging.iter().map(District::id).collect();
        ids.into_iter()
            .filter(|&id| matches!(self.add(id), Ok(true)))
            .count()
    }

    /// Look up an active district.
    pub fn find(&self, id: DistrictId) -> Result<&District, GamesError> {
        if self.game.is_empty() {
            tracing::debug!("the tree is empty");
        }
        self.game.get(id).ok_or_else(|| {
            tracing::debug!(district = %id, "district not found");
            GamesError::DistrictNotFound(id)
        })
    }

    /// Look up an active district mutably.
    pub fn find_mut(&mut self, id: DistrictId) -> Result<&mut District, GamesError> {
        self.game.get_mut(id).ok_or(GamesError::DistrictNotFound(id))
    }

    /// Remove a district from the games, returning it.
    pub fn eliminate(&mut self, id: DistrictId) -> Result<District, GamesError> {
        let district = self
            .game
            .remove(id)
            .ok_or(GamesError::DistrictNotFound(id))?;
        tracing::info!(district = %id, remaining = self.game.len(), "district eliminated");
        Ok(district)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged(ids: &[i32]) -> DistrictRegistry {
        DistrictRegistry::with_staged(
            ids.iter().map(|&id| District::new(DistrictId::new(id))).collect(),
        )
    }

    fn staged_ids(registry: &DistrictRegistry) -> Vec<i32> {
        registry.staged().iter().map(|d| d.id().raw()).collect()
    }

    #[test]
    fn test_add_moves_out_of_staging() {
        let mut registry = staged(&[3, 1, 2]);

        assert_eq!(registry.add(DistrictId::new(1)), Ok(true));
        assert_eq!(staged_ids(&registry), vec![3, 2]);
        assert_eq!(registry.active_len(), 1);
        assert_eq!(registry.root().unwrap().district().id(), DistrictId::new(1));
    }

    #[test]
    fn test_add_unstaged() {
        let mut registry = staged(&[1]);
        assert_eq!(
            registry.add(DistrictId::new(9)),
            Err(GamesError::NotStaged(DistrictId::new(9)))
        );
    }

    #[test]
    fn test_add_duplicate_leaves_everything() {
        let mut registry = staged(&[5, 5, 6]);

        assert_eq!(registry.add(DistrictId::new(5)), Ok(true));
        let before = registry.tree().pre_order_ids();

        assert_eq!(registry.add(DistrictId::new(5)), Ok(false));
        assert_eq!(registry.tree().pre_order_ids(), before);
        assert_eq!(staged_ids(&registry), vec![5, 6]);
    }

    #[test]
    fn test_add_all_in_staging_order() {
        let mut registry = staged(&[2, 1, 3, 1]);

        assert_eq!(registry.add_all(), 3);
        let active: Vec<i32> = registry.tree().pre_order_ids().iter().map(|d| d.raw()).collect();
        assert_eq!(active, vec![2, 1, 3]);
        assert_eq!(staged_ids(&registry), vec![1]);
    }

    #[test]
    fn test_find_and_eliminate() {
        let mut registry = staged(&[2, 1, 3]);
        registry.add_all();

        assert!(registry.find(DistrictId::new(3)).is_ok());
        assert_eq!(registry.eliminate(DistrictId::new(3)).unwrap().id(), DistrictId::new(3));
        assert_eq!(
            registry.find(DistrictId::new(3)),
            Err(GamesError::DistrictNotFound(DistrictId::new(3)))
        );
        assert_eq!(
            registry.eliminate(DistrictId::new(3)).unwrap_err(),
            GamesError::DistrictNotFound(DistrictId::new(3))
        );
        assert_eq!(registry.active_len(), 2);
    }

    #[test]
    fn test_find_on_empty() {
        let registry = DistrictRegistry::new();
        assert!(registry.find(DistrictId::new(1)).is_err());
        assert!(registry.root().is_none());
    }
}
