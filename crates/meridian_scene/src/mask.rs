//! # Mask Builder
//!
//! Builds ownership bitmasks from lists of component types. A mask is the
//! bitwise union of `1 << component_index` for each listed type, so the
//! operation is commutative and idempotent: argument order is irrelevant and
//! duplicate types contribute the same bit once.

use crate::domain::{MaskBits, SceneTag};
use crate::error::SceneResult;
use crate::registry::component_index;

/// A compile-time list of component types, expressed as a tuple.
///
/// Implemented for tuples of arity 1 through 8. Building a mask touches the
/// registry, so previously unseen types are assigned indices on the spot.
pub trait ComponentSet<D: SceneTag> {
    /// Returns the union of the listed types' mask bits.
    ///
    /// # Errors
    ///
    /// [`crate::SceneError::ComponentLimitReached`] if a listed type cannot
    /// be assigned an index.
    fn mask() -> SceneResult<D::Mask>;
}

macro_rules! impl_component_set {
    ($($ty:ident),+) => {
        impl<D: SceneTag, $($ty: 'static),+> ComponentSet<D> for ($($ty,)+) {
            fn mask() -> SceneResult<D::Mask> {
                let mut mask = D::Mask::ZERO;
                $(
                    mask.set(component_index::<D, $ty>()?);
                )+
                Ok(mask)
            }
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, E);
impl_component_set!(A, B, C, E, F);
impl_component_set!(A, B, C, E, F, G);
impl_component_set!(A, B, C, E, F, G, H);
impl_component_set!(A, B, C, E, F, G, H, I);

/// Builds the ownership mask for the component types listed in `S` under
/// scene tag `D`.
///
/// # Errors
///
/// [`crate::SceneError::ComponentLimitReached`] if a listed type cannot be
/// assigned an index.
///
/// # Example
///
/// ```rust,ignore
/// let mask = mask_of::<GameTag, (Position, Velocity)>()?;
/// ```
pub fn mask_of<D: SceneTag, S: ComponentSet<D>>() -> SceneResult<D::Mask> {
    S::mask()
}
