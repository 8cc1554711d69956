use super::Complex;
use crate::scalar::{CastFrom, Scalar, WidenFrom};
use core::str::FromStr;
use half::f16;

/// Converts a single component, reporting the first finite value that overflows when the
/// `precision-warn` feature is enabled.
#[inline(always)]
pub(super) fn cast_component<T: Scalar + CastFrom<U>, U: Scalar>(value: U) -> T {
    let out = T::cast_from(value);
    #[cfg(feature = "precision-warn")]
    {
        if out.is_infinite() && value.is_finite() && crate::__precision_warn!(NARROWING_WARN) {
            log::warn!(
                target: "faer_complex",
                "narrowing from {:?} to {:?} precision overflowed a finite value to infinity",
                U::PRECISION,
                T::PRECISION,
            );
        }
    }
    out
}

/// Complex number type provided by an accelerator runtime, consumed as a conversion source.
#[cfg(feature = "accel")]
#[cfg_attr(docsrs, doc(cfg(feature = "accel")))]
pub trait AcceleratorComplex {
    /// Type of the real and imaginary parts.
    type Real: Scalar;

    /// Returns the real part.
    fn real(&self) -> Self::Real;
    /// Returns the imaginary part.
    fn imag(&self) -> Self::Real;
}

impl<T: Scalar> Complex<T> {
    /// Converts a complex number of any precision to `Self`, converting each component with the
    /// scalar conversion of `T`.
    ///
    /// This is the only way to narrow a complex number. Narrowing is never implicit:
    ///
    /// ```compile_fail
    /// use faer_complex::{c32, c64};
    ///
    /// let z: c32 = c64::new(1.0, 2.0).into();
    /// ```
    ///
    /// ```
    /// use faer_complex::{c16, c64};
    ///
    /// let z = c16::from_complex(c64::new(1.0, 2.0));
    /// assert_eq!(z.real().to_f32(), 1.0);
    /// assert_eq!(z.imag().to_f32(), 2.0);
    /// ```
    #[inline(always)]
    pub fn from_complex<U: Scalar>(other: Complex<U>) -> Self
    where
        T: CastFrom<U>,
    {
        Self::new(cast_component(other.re), cast_component(other.im))
    }

    /// Converts `self` to a complex number of precision `U`. See [`Complex::from_complex`].
    #[inline(always)]
    pub fn cast<U: Scalar + CastFrom<T>>(self) -> Complex<U> {
        Complex::from_complex(self)
    }

    /// Converts a complex number of the same or lower precision to `Self`.
    ///
    /// This is the conversion behind the [`From`] implementations between precisions.
    ///
    /// ```compile_fail
    /// use faer_complex::{c16, c32};
    ///
    /// let z = c16::widen(c32::new(1.0, 2.0));
    /// ```
    #[inline(always)]
    pub fn widen<U: Scalar>(other: Complex<U>) -> Self
    where
        T: WidenFrom<U>,
    {
        Self::new(T::cast_from(other.re), T::cast_from(other.im))
    }

    /// Create a complex number from a [`num_complex::Complex`] of the same precision.
    #[inline(always)]
    pub const fn from_num_complex(other: num_complex::Complex<T>) -> Self {
        Self::new(other.re, other.im)
    }

    /// Convert the number to a [`num_complex::Complex`].
    #[inline(always)]
    pub fn to_num_complex(self) -> num_complex::Complex<T> {
        num_complex::Complex::new(self.re, self.im)
    }

    /// Create a complex number from the complex type of an accelerator runtime, with the same
    /// precision.
    #[cfg(feature = "accel")]
    #[cfg_attr(docsrs, doc(cfg(feature = "accel")))]
    #[inline]
    pub fn from_accelerator<A: AcceleratorComplex<Real = T>>(other: &A) -> Self {
        Self::new(other.real(), other.imag())
    }

    /// Parses a complex number written in base `radix`, such as `"1+2i"`, `"-3"` or `"4i"`.
    ///
    /// # Errors
    /// Fails if `src` is not of the form `re`, `im i` or `re ± im i`.
    pub fn from_str_radix(
        src: &str,
        radix: u32,
    ) -> Result<Self, num_complex::ParseComplexError<<T as num_traits::Num>::FromStrRadixErr>> {
        <num_complex::Complex<T> as num_traits::Num>::from_str_radix(src, radix)
            .map(Self::from_num_complex)
    }
}

impl<T: Scalar> From<T> for Complex<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::from_real(value)
    }
}

impl<'a, T: Scalar> From<&'a T> for Complex<T> {
    #[inline(always)]
    fn from(value: &'a T) -> Self {
        Self::from_real(*value)
    }
}

impl<T: Scalar> From<Complex<T>> for num_complex::Complex<T> {
    #[inline(always)]
    fn from(value: Complex<T>) -> Self {
        value.to_num_complex()
    }
}

macro_rules! impl_widen {
    ($($src: ty => $dst: ty),* $(,)?) => {
        $(
            impl From<Complex<$src>> for Complex<$dst> {
                #[inline(always)]
                fn from(value: Complex<$src>) -> Self {
                    Self::widen(value)
                }
            }
        )*
    };
}

impl_widen!(f16 => f32, f16 => f64, f32 => f64);

impl<T: Scalar + FromStr> FromStr for Complex<T> {
    type Err = num_complex::ParseComplexError<<T as FromStr>::Err>;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        num_complex::Complex::<T>::from_str(s).map(Self::from_num_complex)
    }
}
