//! District registry integration tests.

use district_games::core::GamesError;
use district_games::people::{District, DistrictId};
use district_games::registry::DistrictRegistry;

fn registry_of(ids: &[i32]) -> DistrictRegistry {
    let mut registry = DistrictRegistry::with_staged(
        ids.iter().map(|&id| District::new(DistrictId::new(id))).collect(),
    );
    registry.add_all();
    registry
}

fn ids(raw: &[i32]) -> Vec<DistrictId> {
    raw.iter().copied().map(DistrictId::new).collect()
}

// =============================================================================
// Shape Tests
// =============================================================================

/// Ascending insertion gives a right-leaning chain; removing the middle
/// promotes its only child.
#[test]
fn test_chain_and_one_child_promotion() {
    let mut registry = registry_of(&[1, 2, 3]);
    let tree = registry.tree();

    let root = tree.node(tree.root().unwrap());
    assert_eq!(root.district().id(), DistrictId::new(1));
    let two = tree.node(root.right().unwrap());
    assert_eq!(two.district().id(), DistrictId::new(2));
    assert_eq!(tree.node(two.right().unwrap()).district().id(), DistrictId::new(3));

    registry.eliminate(DistrictId::new(2)).unwrap();

    let tree = registry.tree();
    let root = tree.node(tree.root().unwrap());
    assert_eq!(root.district().id(), DistrictId::new(1));
    let promoted = tree.node(root.right().unwrap());
    assert_eq!(promoted.district().id(), DistrictId::new(3));
    assert!(promoted.is_leaf());
}

/// Two-child deletion keeps the in-order sequence minus the removed id.
#[test]
fn test_two_child_deletion_in_order() {
    let mut registry = registry_of(&[8, 4, 12, 2, 6, 10, 14, 9, 11]);

    registry.eliminate(DistrictId::new(8)).unwrap();

    assert_eq!(registry.tree().in_order_ids(), ids(&[2, 4, 6, 9, 10, 11, 12, 14]));
    assert_eq!(registry.root().unwrap().district().id(), DistrictId::new(9));
    assert_eq!(registry.active_len(), 8);
}

/// Eliminating every district in arbitrary order empties the tree.
#[test]
fn test_eliminate_everything() {
    let mut registry = registry_of(&[5, 3, 8, 1, 4, 7, 9]);

    for id in [3, 9, 5, 1, 8, 4, 7] {
        registry.eliminate(DistrictId::new(id)).unwrap();
        assert!(registry.find(DistrictId::new(id)).is_err());
    }

    assert!(registry.tree().is_empty());
    assert!(registry.root().is_none());
}

// =============================================================================
// Staging Tests
// =============================================================================

/// A district is in exactly one of staging or tree.
#[test]
fn test_district_in_one_place() {
    let mut registry = DistrictRegistry::with_staged(
        [4, 2, 6].iter().map(|&id| District::new(DistrictId::new(id))).collect(),
    );

    registry.add(DistrictId::new(2)).unwrap();

    for id in [4, 2, 6] {
        let id = DistrictId::new(id);
        let staged = registry.staged().iter().any(|d| d.id() == id);
        let active = registry.find(id).is_ok();
        assert!(staged ^ active, "district {id} must be in exactly one place");
    }
}

/// Duplicate inserts change nothing and report `false`.
#[test]
fn test_duplicate_insert_is_silent() {
    let mut registry = DistrictRegistry::with_staged(vec![
        District::new(DistrictId::new(1)),
        District::new(DistrictId::new(1)),
    ]);

    assert_eq!(registry.add(DistrictId::new(1)), Ok(true));
    assert_eq!(registry.add(DistrictId::new(1)), Ok(false));
    assert_eq!(registry.staged().len(), 1);
    assert_eq!(registry.active_len(), 1);
}

/// Misses are reported, not panicked on.
#[test]
fn test_not_found_is_recoverable() {
    let mut registry = registry_of(&[1]);

    assert_eq!(
        registry.eliminate(DistrictId::new(2)).unwrap_err(),
        GamesError::DistrictNotFound(DistrictId::new(2))
    );
    assert_eq!(
        registry.add(DistrictId::new(2)),
        Err(GamesError::NotStaged(DistrictId::new(2)))
    );
    assert_eq!(registry.active_len(), 1);
}
