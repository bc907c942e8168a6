//! # Entity Table
//!
//! Entities are identities: a validity flag plus a component ownership mask,
//! addressed by a dense integer id issued by the slot recycler. Id 0 is a
//! permanent sentinel, created once at table construction and immediately
//! forced invalid; it never denotes a live entity.
//!
//! The table stores no component data. The mask is the single source of
//! truth for ownership: `mask != 0` means the store at every set bit holds
//! live data for this id, `mask == 0` means no store should be consulted.

use crate::domain::{MaskBits, SceneTag};
use crate::recycle::RecycleList;

/// Dense entity identifier. Directly usable as an index into entity records
/// and component store slots.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct EntityId(u32);

impl EntityId {
    /// The reserved invalid entity, id 0.
    pub const SENTINEL: Self = Self(0);

    /// The id as a store/record index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The raw id value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// An entity record: validity flag plus ownership mask.
pub struct Entity<D: SceneTag> {
    /// Whether this id currently denotes a live entity.
    pub valid: bool,
    /// Bit *i* is set iff the entity owns the component type at registry
    /// index *i*.
    pub mask: D::Mask,
}

impl<D: SceneTag> Clone for Entity<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: SceneTag> Copy for Entity<D> {}

impl<D: SceneTag> Default for Entity<D> {
    fn default() -> Self {
        Self {
            valid: false,
            mask: D::Mask::ZERO,
        }
    }
}

impl<D: SceneTag> std::fmt::Debug for Entity<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("valid", &self.valid)
            .field("mask", &self.mask)
            .finish()
    }
}

/// Owns entity records behind the slot recycler.
///
/// A thin wrapper: component bookkeeping lives in the stores, removal
/// routing lives in the scene. Not thread-safe.
pub struct EntityTable<D: SceneTag> {
    slots: RecycleList<Entity<D>>,
}

impl<D: SceneTag> EntityTable<D> {
    /// Creates the table and reserves the id-0 sentinel.
    ///
    /// The very first slot the recycler issues is claimed here and forced
    /// invalid; the recycler contract does not promise a clean initial
    /// state, so slot 0 is asserted rather than assumed.
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self {
            slots: RecycleList::new(),
        };

        let sentinel = table.create();
        assert_eq!(
            sentinel,
            EntityId::SENTINEL,
            "recycler issued a non-zero first slot"
        );
        table.slots.get_mut(0).valid = false;

        table
    }

    /// Creates an entity: fresh or recycled slot, `valid = true`, empty mask.
    pub fn create(&mut self) -> EntityId {
        let index = self.slots.add(Entity {
            valid: true,
            mask: D::Mask::ZERO,
        });
        EntityId(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Returns the slot for `id` to the recycler.
    ///
    /// Caller contract: `id` denotes a valid entity and every component it
    /// owned has already been removed (its mask is empty). The scene is the
    /// only intended caller; it routes component removal first.
    pub fn release(&mut self, id: EntityId) {
        let record = self.slots.get_mut(id.index());
        debug_assert!(record.valid, "released an invalid entity id");
        debug_assert!(
            record.mask.is_empty(),
            "released an entity that still owns components"
        );
        record.valid = false;
        self.slots.remove(id.index());
    }

    /// Ids of all currently valid entities, in ascending order.
    ///
    /// Recomputed fresh on each call; not a live view.
    #[must_use]
    pub fn ids(&self) -> Vec<EntityId> {
        self.slots
            .items()
            .iter()
            .enumerate()
            .filter(|(_, record)| record.valid)
            .map(|(index, _)| EntityId(u32::try_from(index).unwrap_or(u32::MAX)))
            .collect()
    }

    /// The dense id -> record mapping, reclaimed slots included.
    ///
    /// O(1) access; component stores use the mutable form to flip mask bits.
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[Entity<D>] {
        self.slots.items()
    }

    /// The dense id -> record mapping, mutable.
    #[inline]
    pub fn records_mut(&mut self) -> &mut [Entity<D>] {
        self.slots.items_mut()
    }
}

impl<D: SceneTag> Default for EntityTable<D> {
    fn default() -> Self {
        Self::new()
    }
}
