//! # MERIDIAN Scene Core
//!
//! Entity and component storage/identity layer:
//! - stable numeric indices for component types, scoped per scene tag
//! - per-entity ownership bitmasks in the narrowest fitting width
//! - sparse, id-indexed component stores with amortized growth/shrink
//!
//! ## Architecture Rules
//!
//! 1. **Masks own the truth** - a component exists iff its mask bit is set;
//!    slot content is never consulted for presence
//! 2. **Unchecked hot path** - invalid ids and unset bits are caller
//!    contract violations, not reported errors; checked variants are opt-in
//! 3. **Single-threaded scenes** - the process-wide type registry is the
//!    only synchronized state
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use meridian_scene::{ComponentStore, EventLoop, Scene, SceneTag};
//!
//! struct GameTag;
//! impl SceneTag for GameTag {
//!     const MAX_COMPONENT_TYPES: usize = 8;
//!     type Mask = u8;
//! }
//!
//! #[derive(Default)]
//! struct Position { x: f32, y: f32 }
//!
//! let mut scene = Scene::<GameTag>::new(Arc::new(EventLoop::new()));
//! scene.register_store(ComponentStore::<GameTag, Position>::new()?);
//!
//! let e = scene.create_entity();
//! scene.create_component(e, Position { x: 1.0, y: 2.0 })?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod domain;
pub mod entity;
pub mod error;
pub mod host;
pub mod mask;
pub mod recycle;
pub mod registry;
pub mod scene;
pub mod store;

pub use domain::{mask_width_for, MaskBits, SceneTag};
pub use entity::{Entity, EntityId, EntityTable};
pub use error::{SceneError, SceneResult};
pub use host::EventLoop;
pub use mask::{mask_of, ComponentSet};
pub use recycle::RecycleList;
pub use registry::{component_index, registered_count};
pub use scene::Scene;
pub use store::{AnyStore, Component, ComponentStore, GROWTH_CHUNK};
