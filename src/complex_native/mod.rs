//! Native complex floating point type whose real and imaginary parts are stored contiguously.
//!
//! [`Complex<T>`] is generic over the three precision tiers [`f16`], [`f32`] and [`f64`], with
//! the aliases [`c16`], [`c32`] and [`c64`]. A value occupies exactly two scalars and is aligned
//! to its own size, so that buffers of complex values can be reinterpreted as buffers of scalar
//! pairs and vice versa.
//!
//! ```notcode
//! ┌──────────────────┬──────┬───────┐
//! │ type             │ size │ align │
//! ├──────────────────┼──────┼───────┤
//! │ Complex<f16>     │   4  │   4   │
//! │ Complex<f32>     │   8  │   8   │
//! │ Complex<f64>     │  16  │  16   │
//! └──────────────────┴──────┴───────┘
//!
//!   ┌──────┬──────┐
//!   │  re  │  im  │
//!   └──────┴──────┘
//! ```
//!
//! The layout matches [`num_complex::Complex`] at the same precision, except that the alignment
//! of [`Complex<T>`] is stricter.

mod assign;
mod convert;
mod ops;

#[cfg(feature = "accel")]
pub use convert::AcceleratorComplex;

use crate::scalar::Scalar;
use half::f16;
#[cfg(feature = "rand")]
use rand::distributions::{Distribution, Standard};
#[cfg(feature = "rand")]
use rand_distr::StandardNormal;

/// Complex floating point number with real and imaginary parts of type `T`.
/// See the module-level documentation for more details.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct Complex<T: Scalar> {
    /// Real part.
    pub re: T,
    /// Imaginary part.
    pub im: T,
    _align: [T::Align; 0],
}

/// 16-bit complex floating point type.
#[allow(non_camel_case_types)]
pub type c16 = Complex<f16>;
/// 32-bit complex floating point type.
#[allow(non_camel_case_types)]
pub type c32 = Complex<f32>;
/// 64-bit complex floating point type.
#[allow(non_camel_case_types)]
pub type c64 = Complex<f64>;

impl<T: Scalar> Complex<T> {
    /// The complex number `0 + 0i`.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);
    /// The complex number `1 + 0i`.
    pub const ONE: Self = Self::new(T::ONE, T::ZERO);
    /// The imaginary unit `0 + 1i`.
    pub const I: Self = Self::new(T::ZERO, T::ONE);

    /// Create a new complex number.
    #[inline(always)]
    pub const fn new(re: T, im: T) -> Self {
        Self {
            re,
            im,
            _align: [],
        }
    }

    /// Create a complex number with a zero imaginary part.
    #[inline(always)]
    pub const fn from_real(re: T) -> Self {
        Self::new(re, T::ZERO)
    }

    /// Returns the real part of the complex number.
    #[inline(always)]
    pub const fn real(&self) -> T {
        self.re
    }

    /// Returns the imaginary part of the complex number.
    #[inline(always)]
    pub const fn imag(&self) -> T {
        self.im
    }

    /// Sets the real part, leaving the imaginary part untouched.
    #[inline(always)]
    pub fn set_real(&mut self, re: T) {
        self.re = re;
    }

    /// Sets the imaginary part, leaving the real part untouched.
    #[inline(always)]
    pub fn set_imag(&mut self, im: T) {
        self.im = im;
    }

    /// Returns `self` unchanged. Counterpart of the unary negation.
    #[inline(always)]
    pub fn pos(self) -> Self {
        self
    }

    /// Calculate the complex conjugate of self.
    #[inline(always)]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Computes the squared `l2` norm of `self`.
    #[inline(always)]
    pub fn norm_sqr(&self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// Computes the inverse of `self`, as its conjugate divided by its squared norm.
    ///
    /// The inverse of zero is not special-cased and follows IEEE 754 division.
    #[inline(always)]
    pub fn inv(&self) -> Self {
        let norm_sqr = self.norm_sqr();
        Self::new(self.re / norm_sqr, -self.im / norm_sqr)
    }

    /// Views a slice of complex numbers as a slice of `[re, im]` pairs.
    #[inline]
    pub fn as_pairs(values: &[Self]) -> &[[T; 2]] {
        bytemuck::cast_slice(values)
    }

    /// Views a mutable slice of complex numbers as a mutable slice of `[re, im]` pairs.
    #[inline]
    pub fn as_pairs_mut(values: &mut [Self]) -> &mut [[T; 2]] {
        bytemuck::cast_slice_mut(values)
    }

    /// Views a slice of `[re, im]` pairs as a slice of complex numbers.
    ///
    /// # Errors
    /// Fails with [`bytemuck::PodCastError::TargetAlignmentGreaterAndInputNotAligned`] if `pairs`
    /// is not aligned to `2 * size_of::<T>()` bytes.
    #[inline]
    pub fn try_from_pairs(pairs: &[[T; 2]]) -> Result<&[Self], bytemuck::PodCastError> {
        bytemuck::try_cast_slice(pairs)
    }

    /// Views a slice of complex numbers as a slice of [`num_complex::Complex`] values.
    #[inline]
    pub fn as_num_complex(values: &[Self]) -> &[num_complex::Complex<T>] {
        bytemuck::cast_slice(values)
    }
}

impl<T: Scalar> Default for Complex<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Scalar> PartialEq for Complex<T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re && self.im == other.im
    }
}

impl<T: Scalar> num_traits::Zero for Complex<T> {
    #[inline(always)]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    #[inline(always)]
    fn set_zero(&mut self) {
        *self = Self::ZERO;
    }
}

impl<T: Scalar> num_traits::One for Complex<T> {
    #[inline(always)]
    fn one() -> Self {
        Self::ONE
    }

    #[inline(always)]
    fn is_one(&self) -> bool {
        self.re.is_one() && self.im.is_zero()
    }

    #[inline(always)]
    fn set_one(&mut self) {
        *self = Self::ONE;
    }
}

impl<T: Scalar> num_traits::Inv for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn inv(self) -> Self::Output {
        Complex::inv(&self)
    }
}

unsafe impl<T: Scalar> bytemuck::Zeroable for Complex<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for Complex<T> {}

impl<T: Scalar> core::fmt::Debug for Complex<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.re, f)?;
        let im_abs = self.im.abs();
        if self.im.is_sign_positive() {
            f.write_str(" + ")?;
        } else {
            f.write_str(" - ")?;
        }
        core::fmt::Debug::fmt(&im_abs, f)?;
        f.write_str(" * I")
    }
}

impl<T: Scalar> core::fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        <Self as core::fmt::Debug>::fmt(self, f)
    }
}

#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
impl<T: Scalar> Distribution<Complex<T>> for Standard
where
    Standard: Distribution<T>,
{
    #[inline]
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Complex<T> {
        Complex::new(self.sample(rng), self.sample(rng))
    }
}

#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
impl<T: Scalar> Distribution<Complex<T>> for StandardNormal
where
    StandardNormal: Distribution<T>,
{
    #[inline]
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Complex<T> {
        Complex::new(self.sample(rng), self.sample(rng))
    }
}
