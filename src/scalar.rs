//! Scalar precision tiers backing [`Complex`](crate::Complex).
//!
//! The set of tiers is closed: [`f16`], [`f32`] and [`f64`]. Each tier carries a zero-sized
//! alignment marker so that a complex value is aligned to its own size, and the conversions
//! between tiers are split in two traits. [`CastFrom`] is implemented for every pair of tiers and
//! backs the explicit conversions, while [`WidenFrom`] only holds for conversions towards a higher
//! tier and backs the implicit ones.

use crate::seal::Seal;
use core::fmt::{Debug, Display};
use half::f16;
use num_traits::Float;

/// Precision tier of a scalar type, ordered from lowest to highest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    /// 16-bit IEEE 754 `binary16`.
    Half,
    /// 32-bit IEEE 754 `binary32`.
    Single,
    /// 64-bit IEEE 754 `binary64`.
    Double,
}

impl Precision {
    /// Size in bytes of a scalar of this tier.
    #[inline]
    pub const fn scalar_size(self) -> usize {
        match self {
            Precision::Half => 2,
            Precision::Single => 4,
            Precision::Double => 8,
        }
    }

    /// Returns `true` if a complex value of tier `self` converts to tier `target` without naming
    /// the conversion, i.e. through [`From`]/[`Into`].
    ///
    /// This holds for the same tier and for any higher tier.
    #[inline]
    pub const fn converts_implicitly_to(self, target: Precision) -> bool {
        self as u8 <= target as u8
    }

    /// Returns `true` if a complex value of tier `self` can be converted to tier `target` by
    /// naming the conversion. This holds for every pair of tiers.
    #[inline]
    pub const fn converts_explicitly_to(self, _target: Precision) -> bool {
        true
    }

    /// Returns `true` if converting from `self` to `target` may lose precision.
    #[inline]
    pub const fn is_narrowing_to(self, target: Precision) -> bool {
        self as u8 > target as u8
    }
}

#[doc(hidden)]
pub mod align {
    #[derive(Copy, Clone, Debug, Default)]
    #[repr(align(4))]
    pub struct Align4;

    #[derive(Copy, Clone, Debug, Default)]
    #[repr(align(8))]
    pub struct Align8;

    #[derive(Copy, Clone, Debug, Default)]
    #[repr(align(16))]
    pub struct Align16;
}

/// Scalar type usable as the real and imaginary parts of a [`Complex`](crate::Complex).
///
/// This trait is sealed and implemented for [`f16`], [`f32`] and [`f64`] only.
pub trait Scalar:
    Float + bytemuck::Pod + Default + Debug + Display + Send + Sync + Seal + 'static
{
    /// Zero-sized marker whose alignment is twice the size of `Self`.
    #[doc(hidden)]
    type Align: Copy + Debug + Default + Send + Sync + 'static;

    /// Precision tier of `Self`.
    const PRECISION: Precision;

    /// Additive identity, usable in `const` context.
    const ZERO: Self;
    /// Multiplicative identity, usable in `const` context.
    const ONE: Self;
}

/// Componentwise scalar conversion from `U`, defined for every pair of precision tiers.
///
/// Narrowing conversions follow the rounding rules of the target type: round to nearest, with
/// overflow going to infinity.
pub trait CastFrom<U>: Sized {
    /// Converts `value` to `Self`.
    fn cast_from(value: U) -> Self;
}

/// Marker for conversions from `U` that never lose precision.
///
/// Only implemented when `Self` is of the same or a higher tier than `U`.
pub trait WidenFrom<U>: CastFrom<U> {}

macro_rules! impl_scalar {
    ($ty: ty, $align: ident, $tier: ident, $zero: expr, $one: expr) => {
        impl Scalar for $ty {
            type Align = align::$align;

            const PRECISION: Precision = Precision::$tier;

            const ZERO: Self = $zero;
            const ONE: Self = $one;
        }
    };
}

impl_scalar!(f16, Align4, Half, f16::ZERO, f16::ONE);
impl_scalar!(f32, Align8, Single, 0.0, 1.0);
impl_scalar!(f64, Align16, Double, 0.0, 1.0);

macro_rules! impl_cast {
    ($($src: ty => $dst: ty = |$x: ident| $body: expr;)*) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline(always)]
                fn cast_from($x: $src) -> Self {
                    $body
                }
            }
        )*
    };
}

impl_cast! {
    f16 => f16 = |x| x;
    f32 => f16 = |x| f16::from_f32(x);
    f64 => f16 = |x| f16::from_f64(x);

    f16 => f32 = |x| x.to_f32();
    f32 => f32 = |x| x;
    f64 => f32 = |x| x as f32;

    f16 => f64 = |x| x.to_f64();
    f32 => f64 = |x| x as f64;
    f64 => f64 = |x| x;
}

impl WidenFrom<f16> for f16 {}
impl WidenFrom<f16> for f32 {}
impl WidenFrom<f16> for f64 {}
impl WidenFrom<f32> for f32 {}
impl WidenFrom<f32> for f64 {}
impl WidenFrom<f64> for f64 {}
