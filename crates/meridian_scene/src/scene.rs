//! # Scene
//!
//! The composition root: one entity table plus a fixed-size array of
//! type-erased component store handles, one slot per registry index up to
//! the tag's maximum. The scene routes entity removal to the removal of
//! every component the entity currently owns, then reclaims the slot.
//!
//! Single-threaded, synchronous, non-reentrant: every operation runs to
//! completion with exclusive access. Callers on multiple threads must
//! serialize access themselves.

use std::any::type_name;
use std::sync::Arc;

use crate::domain::{mask_width_for, MaskBits, SceneTag};
use crate::entity::{Entity, EntityId, EntityTable};
use crate::error::{SceneError, SceneResult};
use crate::host::EventLoop;
use crate::mask::{mask_of, ComponentSet};
use crate::registry::component_index;
use crate::store::{AnyStore, Component, ComponentStore};

/// Entity and component storage for one scene instance of tag `D`.
pub struct Scene<D: SceneTag> {
    /// Host execution context this scene is associated with.
    event_loop: Arc<EventLoop>,
    /// Entity records behind the slot recycler.
    table: EntityTable<D>,
    /// Type-erased store handles, indexed by registry index.
    stores: Vec<Option<Box<dyn AnyStore<D>>>>,
}

impl<D: SceneTag> Scene<D> {
    /// Creates a scene bound to the host execution context.
    ///
    /// Reserves entity id 0 as the invalid sentinel.
    ///
    /// # Panics
    ///
    /// Panics if the tag's component budget exceeds 64 or its mask type is
    /// not the narrowest width the codec selects for that budget.
    #[must_use]
    pub fn new(event_loop: Arc<EventLoop>) -> Self {
        assert!(
            D::MAX_COMPONENT_TYPES <= 64,
            "scene tag exceeds the 64 component type ceiling"
        );
        assert_eq!(
            <D::Mask as MaskBits>::BITS,
            mask_width_for(D::MAX_COMPONENT_TYPES),
            "scene tag mask is not the narrowest width for its component budget"
        );

        let mut stores = Vec::with_capacity(D::MAX_COMPONENT_TYPES);
        stores.resize_with(D::MAX_COMPONENT_TYPES, || None);

        Self {
            event_loop,
            table: EntityTable::new(),
            stores,
        }
    }

    /// The host execution context this scene was constructed with.
    #[inline]
    #[must_use]
    pub fn event_loop(&self) -> &Arc<EventLoop> {
        &self.event_loop
    }

    /// Installs a store handle at its registry index.
    ///
    /// A second registration for the same component type is a no-op: the
    /// first registration wins. Returns the registry index.
    pub fn register_store<T: Component>(&mut self, store: ComponentStore<D, T>) -> u32 {
        let index = store.type_index();
        let slot = &mut self.stores[index as usize];

        if slot.is_none() {
            *slot = Some(Box::new(store));
        } else {
            tracing::debug!(
                component = type_name::<T>(),
                index,
                "duplicate component store registration ignored"
            );
        }

        index
    }

    /// The registered store for `T`, or `None` if none was installed.
    #[must_use]
    pub fn store<T: Component>(&self) -> Option<&ComponentStore<D, T>> {
        let index = component_index::<D, T>().ok()?;
        self.stores[index as usize]
            .as_ref()?
            .as_any()
            .downcast_ref()
    }

    /// The registered store for `T`, mutable.
    pub fn store_mut<T: Component>(&mut self) -> Option<&mut ComponentStore<D, T>> {
        let index = component_index::<D, T>().ok()?;
        self.stores[index as usize]
            .as_mut()?
            .as_any_mut()
            .downcast_mut()
    }

    /// The registered store for `T` together with the entity table.
    ///
    /// Split borrow so callers can drive `create`/`remove` on the store,
    /// which needs the table to flip mask bits.
    pub fn store_with_entities<T: Component>(
        &mut self,
    ) -> Option<(&mut ComponentStore<D, T>, &mut EntityTable<D>)> {
        let index = component_index::<D, T>().ok()?;
        let store = self.stores[index as usize]
            .as_mut()?
            .as_any_mut()
            .downcast_mut::<ComponentStore<D, T>>()?;
        Some((store, &mut self.table))
    }

    /// Creates an entity: `valid = true`, empty mask.
    pub fn create_entity(&mut self) -> EntityId {
        self.table.create()
    }

    /// Removes an entity: every component at a set mask bit is removed via
    /// the erased store handle, then the slot is reclaimed.
    ///
    /// Caller contract: `id` denotes a currently valid entity.
    pub fn remove_entity(&mut self, id: EntityId) {
        let mask = self.table.records()[id.index()].mask;

        if !mask.is_empty() {
            for index in 0..D::MAX_COMPONENT_TYPES {
                let bit = u32::try_from(index).unwrap_or(u32::MAX);
                if mask.test(bit) {
                    if let Some(store) = self.stores[index].as_deref_mut() {
                        store.remove(&mut self.table, id);
                    }
                }
            }
        }

        self.table.release(id);
    }

    /// Ids of all currently valid entities, ascending, recomputed per call.
    #[must_use]
    pub fn entity_ids(&self) -> Vec<EntityId> {
        self.table.ids()
    }

    /// The dense id -> record mapping, reclaimed slots included.
    #[inline]
    #[must_use]
    pub fn entities(&self) -> &[Entity<D>] {
        self.table.records()
    }

    /// The dense id -> record mapping, mutable.
    #[inline]
    pub fn entities_mut(&mut self) -> &mut [Entity<D>] {
        self.table.records_mut()
    }

    /// The ownership mask for the component types listed in `S`, fixed to
    /// this scene's tag.
    ///
    /// # Errors
    ///
    /// [`SceneError::ComponentLimitReached`] if a listed type cannot be
    /// assigned an index.
    pub fn mask_of<S: ComponentSet<D>>(&self) -> SceneResult<D::Mask> {
        mask_of::<D, S>()
    }

    /// Stores `value` at `id` in the registered store for `T`, setting the
    /// entity's mask bit.
    ///
    /// Convenience routing over [`Self::store_with_entities`].
    ///
    /// # Errors
    ///
    /// [`SceneError::StoreNotRegistered`] if no store was installed for `T`.
    pub fn create_component<T: Component>(
        &mut self,
        id: EntityId,
        value: T,
    ) -> SceneResult<&mut T> {
        let (store, table) = self
            .store_with_entities::<T>()
            .ok_or(SceneError::StoreNotRegistered {
                type_name: type_name::<T>(),
            })?;
        Ok(store.create(table, id, value))
    }

    /// Removes `T` from `id`: resets the slot, clears the mask bit.
    ///
    /// # Errors
    ///
    /// [`SceneError::StoreNotRegistered`] if no store was installed for `T`.
    pub fn remove_component<T: Component>(&mut self, id: EntityId) -> SceneResult<()> {
        let (store, table) = self
            .store_with_entities::<T>()
            .ok_or(SceneError::StoreNotRegistered {
                type_name: type_name::<T>(),
            })?;
        store.remove(table, id);
        Ok(())
    }

    /// The `T` value at `id`, bounds-checked against the store's capacity.
    ///
    /// Says nothing about the mask bit; consult the entity record first.
    #[must_use]
    pub fn component<T: Component>(&self, id: EntityId) -> Option<&T> {
        self.store::<T>()?.try_get(id)
    }

    /// The `T` value at `id`, mutable. Unchecked, as
    /// [`ComponentStore::get_mut`].
    pub fn component_mut<T: Component>(&mut self, id: EntityId) -> Option<&mut T> {
        Some(self.store_mut::<T>()?.get_mut(id))
    }
}
