//! # Component Store
//!
//! One store per component type: a sparse, entity-id-indexed array of
//! values. A slot is meaningful only while the entity's mask bit for this
//! type is set; when unset the slot holds the reset/default value. Presence
//! is governed entirely by the mask, never by slot content.
//!
//! Capacity moves in fixed increments of [`GROWTH_CHUNK`] slots: grow once
//! an id would exceed the current length, shrink once slack exceeds the
//! chunk after a removal. The band bounds resize frequency.

use std::any::Any;
use std::marker::PhantomData;

use crate::domain::{MaskBits, SceneTag};
use crate::entity::{EntityId, EntityTable};
use crate::error::SceneResult;
use crate::registry::component_index;

/// Slot increment for store growth and shrink.
pub const GROWTH_CHUNK: usize = 25;

/// A component value. Blanket-implemented: any `Default + 'static` type
/// qualifies, the default value being what a reclaimed slot resets to.
pub trait Component: Default + 'static {}

impl<T: Default + 'static> Component for T {}

/// Type-erased capability over a component store.
///
/// The scene holds one handle per registry index and only ever needs
/// `remove` through it (entity teardown) plus downcasts back to the
/// concrete store.
pub trait AnyStore<D: SceneTag>: 'static {
    /// Removes the component at `id`, clearing its mask bit.
    fn remove(&mut self, entities: &mut EntityTable<D>, id: EntityId);

    /// The concrete store, for typed downcasts.
    fn as_any(&self) -> &dyn Any;

    /// The concrete store, mutable.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Sparse, id-indexed storage for component type `T` under scene tag `D`.
pub struct ComponentStore<D: SceneTag, T: Component> {
    /// Sparse backing; length is the capacity in slots.
    data: Vec<T>,
    /// Registry index of `T` under `D`, cached at construction.
    type_index: u32,
    _domain: PhantomData<D>,
}

impl<D: SceneTag, T: Component> ComponentStore<D, T> {
    /// Creates an empty store, registering `T` under `D`.
    ///
    /// Registration happens here, eagerly, so building stores during startup
    /// fixes component indices deterministically.
    ///
    /// # Errors
    ///
    /// [`crate::SceneError::ComponentLimitReached`] if `T` cannot be
    /// assigned an index.
    pub fn new() -> SceneResult<Self> {
        let type_index = component_index::<D, T>()?;
        Ok(Self {
            data: Vec::new(),
            type_index,
            _domain: PhantomData,
        })
    }

    /// The registry index of `T` under `D`.
    #[inline]
    #[must_use]
    pub fn type_index(&self) -> u32 {
        self.type_index
    }

    /// Current capacity in slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Stores `value` at `id` and sets the entity's mask bit for `T`.
    ///
    /// Grows the backing array in [`GROWTH_CHUNK`] increments when `id` is
    /// beyond capacity. Overwrites on repeat calls (last write wins); the
    /// mask bit is idempotent.
    ///
    /// The returned reference is invalidated by any later `create`/`remove`
    /// on this store that changes capacity; do not retain it across calls.
    pub fn create(&mut self, entities: &mut EntityTable<D>, id: EntityId, value: T) -> &mut T {
        if id.index() >= self.data.len() {
            self.data.resize_with(id.index() + GROWTH_CHUNK, T::default);
        }

        self.data[id.index()] = value;
        entities.records_mut()[id.index()].mask.set(self.type_index);

        &mut self.data[id.index()]
    }

    /// Resets the slot at `id` to `T::default()` and clears the entity's
    /// mask bit for `T`.
    ///
    /// Shrinks capacity by one chunk when slack (capacity minus entity
    /// record count) exceeds the chunk. Record count, not live count: the
    /// dense record length bounds every issued id, so the shrink can never
    /// cut a slot an entity might still address.
    pub fn remove(&mut self, entities: &mut EntityTable<D>, id: EntityId) {
        self.data[id.index()] = T::default();

        let slack = self.data.len().saturating_sub(entities.records().len());
        if slack > GROWTH_CHUNK {
            self.data.truncate(self.data.len() - GROWTH_CHUNK);
        }

        entities.records_mut()[id.index()].mask.clear(self.type_index);
    }

    /// The value at `id`. Unchecked: the caller must know the entity's mask
    /// bit for `T` is set; otherwise the slot content is stale or default.
    #[inline]
    #[must_use]
    pub fn get(&self, id: EntityId) -> &T {
        &self.data[id.index()]
    }

    /// The value at `id`, mutable. Unchecked, as [`Self::get`].
    #[inline]
    pub fn get_mut(&mut self, id: EntityId) -> &mut T {
        &mut self.data[id.index()]
    }

    /// Bounds-checked variant of [`Self::get`]. Still says nothing about the
    /// mask bit.
    #[inline]
    #[must_use]
    pub fn try_get(&self, id: EntityId) -> Option<&T> {
        self.data.get(id.index())
    }

    /// The raw sparse slice, for bulk linear scans by systems code.
    ///
    /// Length is at least highest-created id + 1. Slots whose mask bit is
    /// unset hold reset/default values.
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[T] {
        &self.data
    }

    /// The raw sparse slice, mutable.
    #[inline]
    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<D: SceneTag, T: Component> AnyStore<D> for ComponentStore<D, T> {
    fn remove(&mut self, entities: &mut EntityTable<D>, id: EntityId) {
        // Inherent method; resolves ahead of the trait method.
        self.remove(entities, id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
