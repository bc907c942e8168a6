//! # Scene Tags and the Mask Codec
//!
//! A *scene tag* is a compile-time descriptor for a family of scenes that
//! share one component type index space. The tag fixes the maximum number of
//! distinct component types (at most 64) and the unsigned integer backing the
//! per-entity ownership bitmask.
//!
//! The codec rule is: the mask uses the narrowest of 8/16/32/64 bits that
//! fits the tag's component budget. Rust has no value-to-type branching on
//! stable, so the tag names its mask type explicitly and [`crate::Scene`]
//! asserts at construction that the choice matches [`mask_width_for`].

use std::fmt;

/// Compile-time descriptor for a family of scenes sharing one component type
/// index space.
///
/// All scenes instantiated with the same tag share component indices: the
/// registry counter is scoped per tag, process-wide, and append-only.
///
/// # Example
///
/// ```rust,ignore
/// struct GameTag;
///
/// impl SceneTag for GameTag {
///     const MAX_COMPONENT_TYPES: usize = 8;
///     type Mask = u8;
/// }
/// ```
pub trait SceneTag: 'static {
    /// Maximum number of distinct component types for this tag (1..=64).
    const MAX_COMPONENT_TYPES: usize;

    /// Unsigned integer backing entity masks; must be the width selected by
    /// [`mask_width_for`] for `MAX_COMPONENT_TYPES`.
    type Mask: MaskBits;
}

/// Bit-level operations required of a mask representation.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. Bit *i* of a mask is set iff
/// the entity owns the component type with registry index *i*.
pub trait MaskBits: Copy + Default + Eq + fmt::Debug + fmt::Binary + 'static {
    /// Width of this representation in bits.
    const BITS: u32;

    /// The empty mask.
    const ZERO: Self;

    /// Returns a mask with only bit `index` set.
    fn bit(index: u32) -> Self;

    /// Sets bit `index`.
    fn set(&mut self, index: u32);

    /// Clears bit `index`.
    fn clear(&mut self, index: u32);

    /// Returns `true` if bit `index` is set.
    fn test(self, index: u32) -> bool;

    /// Returns `true` if no bit is set.
    fn is_empty(self) -> bool;
}

macro_rules! impl_mask_bits {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl MaskBits for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;

                #[inline]
                fn bit(index: u32) -> Self {
                    (1 as $ty) << index
                }

                #[inline]
                fn set(&mut self, index: u32) {
                    *self |= (1 as $ty) << index;
                }

                #[inline]
                fn clear(&mut self, index: u32) {
                    *self &= !((1 as $ty) << index);
                }

                #[inline]
                fn test(self, index: u32) -> bool {
                    (self >> index) & 1 == 1
                }

                #[inline]
                fn is_empty(self) -> bool {
                    self == 0
                }
            }
        )+
    };
}

impl_mask_bits!(u8, u16, u32, u64);

/// Selects the narrowest mask width able to hold `max_component_types` bits.
///
/// Thresholds: up to 8 types use an 8-bit mask, up to 16 a 16-bit mask, up
/// to 32 a 32-bit mask, anything larger a 64-bit mask. Budgets above 64 are
/// rejected at scene construction, not here.
#[inline]
#[must_use]
pub const fn mask_width_for(max_component_types: usize) -> u32 {
    if max_component_types <= 8 {
        8
    } else if max_component_types <= 16 {
        16
    } else if max_component_types <= 32 {
        32
    } else {
        64
    }
}
