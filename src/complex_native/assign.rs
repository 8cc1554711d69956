use super::{convert::cast_component, Complex};
use crate::scalar::{CastFrom, Scalar};

impl<T: Scalar> Complex<T> {
    /// Sets `self` to the real number `re`, and returns `self` for chaining.
    #[inline(always)]
    pub fn assign_scalar(&mut self, re: T) -> &mut Self {
        self.re = re;
        self.im = T::ZERO;
        self
    }

    /// Sets `self` to `rhs` converted to the precision of `self`, and returns `self` for chaining.
    ///
    /// Unlike construction, assignment converts in both directions, so a value can be pushed
    /// along a chain of precisions in one expression.
    ///
    /// ```
    /// use faer_complex::{c16, c32, c64};
    /// use half::f16;
    ///
    /// let src = c16::new(f16::ONE, f16::ONE);
    /// let (mut h, mut s, mut d) = (c16::ZERO, c32::ZERO, c64::ZERO);
    ///
    /// d.assign(*s.assign(*h.assign(src)));
    /// assert_eq!(d, c64::new(1.0, 1.0));
    /// ```
    #[inline(always)]
    pub fn assign<U: Scalar>(&mut self, rhs: Complex<U>) -> &mut Self
    where
        T: CastFrom<U>,
    {
        self.re = cast_component(rhs.re);
        self.im = cast_component(rhs.im);
        self
    }

    /// Sets `self` to the [`num_complex::Complex`] value `rhs` converted to the precision of
    /// `self`, and returns `self` for chaining.
    #[inline(always)]
    pub fn assign_num_complex<U: Scalar>(&mut self, rhs: num_complex::Complex<U>) -> &mut Self
    where
        T: CastFrom<U>,
    {
        self.re = cast_component(rhs.re);
        self.im = cast_component(rhs.im);
        self
    }
}
