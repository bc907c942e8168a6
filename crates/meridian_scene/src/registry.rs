//! # Component Type Registry
//!
//! Assigns each distinct component type, scoped to a scene tag, a unique
//! monotonically increasing index starting at 0. Indices are allocated in
//! first-touch order, are never reassigned or reclaimed, and are shared by
//! every scene instance of that tag for the life of the process.
//!
//! ## Design
//!
//! Registration is an explicit, synchronized call rather than a lazy
//! per-type static: the registry is a domain-keyed singleton table
//! (`TypeId` of the tag -> per-domain state) behind an `RwLock`, so the
//! scoping is an inspectable construct instead of implicit static init, and
//! first-touch order is whatever order the program actually makes the calls
//! in. The table is append-only and never reset.
//!
//! ## Concurrency
//!
//! Scenes are single-threaded, but the registry is process-wide state and
//! may be touched from several threads during startup, so it takes the one
//! lock in this crate.

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::domain::SceneTag;
use crate::error::{SceneError, SceneResult};

/// Per-domain registry state: the type -> index map is also the counter,
/// since indices are dense.
struct DomainRegistry {
    max_component_types: usize,
    by_type: HashMap<TypeId, u32>,
}

/// Domain-keyed singleton table. Append-only for the life of the process.
static REGISTRIES: Lazy<RwLock<HashMap<TypeId, DomainRegistry>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Returns the registry index of component type `T` under scene tag `D`,
/// allocating the next free index on first touch.
///
/// Subsequent calls for the same `(D, T)` pair return the same value.
///
/// # Errors
///
/// [`SceneError::ComponentLimitReached`] when the allocation would exceed
/// `D::MAX_COMPONENT_TYPES`. This is fatal for the process: indices cannot
/// be freed to make room.
pub fn component_index<D: SceneTag, T: 'static>() -> SceneResult<u32> {
    let domain = TypeId::of::<D>();
    let component = TypeId::of::<T>();

    // Fast path: already registered.
    {
        let table = REGISTRIES.read();
        if let Some(registry) = table.get(&domain) {
            if let Some(&index) = registry.by_type.get(&component) {
                return Ok(index);
            }
        }
    }

    let mut table = REGISTRIES.write();
    let registry = table.entry(domain).or_insert_with(|| DomainRegistry {
        max_component_types: D::MAX_COMPONENT_TYPES,
        by_type: HashMap::new(),
    });

    // Re-check under the write lock; another thread may have won the race.
    if let Some(&index) = registry.by_type.get(&component) {
        return Ok(index);
    }

    let next = registry.by_type.len();
    if next >= registry.max_component_types {
        return Err(SceneError::ComponentLimitReached {
            type_name: type_name::<T>(),
            max: registry.max_component_types,
        });
    }

    let index = u32::try_from(next).unwrap_or(u32::MAX);
    registry.by_type.insert(component, index);

    tracing::debug!(
        index,
        component = type_name::<T>(),
        domain = type_name::<D>(),
        "registered component type"
    );

    Ok(index)
}

/// Number of component types registered so far under scene tag `D`.
#[must_use]
pub fn registered_count<D: SceneTag>() -> usize {
    let table = REGISTRIES.read();
    table
        .get(&TypeId::of::<D>())
        .map_or(0, |registry| registry.by_type.len())
}
