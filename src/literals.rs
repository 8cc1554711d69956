//! Purely imaginary complex numbers at each precision.
//!
//! Rust has no user-defined literal suffixes, so the suffixes `ih`, `if` and `id` are spelled as
//! `const fn`s taking the literal value as an `f64`, plus the [`ImagLiteral`] extension trait for
//! method syntax.
//!
//! ```
//! use faer_complex::literals::{id, ih, if_, ImagLiteral};
//! use faer_complex::{c32, c64};
//!
//! const Z: c64 = id(2.5);
//! assert_eq!(Z, c64::new(0.0, 2.5));
//! assert_eq!(if_(2.5), c32::new(0.0, 2.5));
//! assert_eq!(ih(2.5).imag().to_f32(), 2.5);
//! assert_eq!(2.5_f64.id(), Z);
//! ```

use crate::complex_native::{c16, c32, c64, Complex};
use half::f16;

/// Returns the half precision complex number `0 + imag i`.
#[inline(always)]
pub const fn ih(imag: f64) -> c16 {
    Complex::new(f16::ZERO, f16::from_f64_const(imag))
}

/// Returns the single precision complex number `0 + imag i`.
#[inline(always)]
pub const fn if_(imag: f64) -> c32 {
    Complex::new(0.0, imag as f32)
}

/// Returns the double precision complex number `0 + imag i`.
#[inline(always)]
pub const fn id(imag: f64) -> c64 {
    Complex::new(0.0, imag)
}

/// Method syntax for [`ih`], [`if_`] and [`id`].
pub trait ImagLiteral {
    /// See [`ih`].
    fn ih(self) -> c16;
    /// See [`if_`].
    fn if_(self) -> c32;
    /// See [`id`].
    fn id(self) -> c64;
}

impl ImagLiteral for f64 {
    #[inline(always)]
    fn ih(self) -> c16 {
        ih(self)
    }

    #[inline(always)]
    fn if_(self) -> c32 {
        if_(self)
    }

    #[inline(always)]
    fn id(self) -> c64 {
        id(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;

    const H: c16 = ih(1.5);
    const S: c32 = if_(1.5);
    const D: c64 = id(1.5);

    #[test]
    fn test_literals() {
        assert!(H.real() == f16::ZERO);
        assert!(H.imag() == f16::from_f64(1.5));
        assert!(S.real() == 0.0);
        assert!(S.imag() == 1.5);
        assert!(D.real() == 0.0);
        assert!(D.imag() == 1.5);
    }

    #[test]
    fn test_literals_round_like_scalar() {
        assert!(ih(0.1).imag() == f16::from_f64(0.1));
        assert!(if_(0.1).imag() == 0.1_f64 as f32);
        assert!(id(0.1).imag() == 0.1);
    }

    #[test]
    fn test_method_syntax() {
        assert!(2.0_f64.ih() == c16::new(f16::ZERO, f16::from_f32(2.0)));
        assert!(2.0_f64.if_() == c32::new(0.0, 2.0));
        assert!(2.0_f64.id() == c64::new(0.0, 2.0));
        assert!(1.0_f64.id() * 1.0_f64.id() == c64::new(-1.0, 0.0));
    }
}
