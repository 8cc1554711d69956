use super::{convert::cast_component, Complex};
use crate::scalar::{CastFrom, Scalar};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use half::f16;

impl<T: Scalar> Neg for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

impl<T: Scalar> Add for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Scalar> Add<T> for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: T) -> Self::Output {
        Self::new(self.re + rhs, self.im)
    }
}

impl<T: Scalar> Sub for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Scalar> Sub<T> for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: T) -> Self::Output {
        Self::new(self.re - rhs, self.im)
    }
}

impl<T: Scalar> Mul for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Scalar> Mul<T> for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

/// Multiplies by the conjugate of `rhs` and divides by its squared norm. A zero divisor is not
/// special-cased and yields infinities or NaNs.
impl<T: Scalar> Div for Complex<T> {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        let norm_sqr = rhs.norm_sqr();
        Self::new(
            (self.re * rhs.re + self.im * rhs.im) / norm_sqr,
            (self.im * rhs.re - self.re * rhs.im) / norm_sqr,
        )
    }
}

impl<T: Scalar> Div<T> for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: T) -> Self::Output {
        Self::new(self.re / rhs, self.im / rhs)
    }
}

macro_rules! impl_scalar_lhs {
    ($($ty: ty),*) => {
        $(
            impl Add<Complex<$ty>> for $ty {
                type Output = Complex<$ty>;

                #[inline(always)]
                fn add(self, rhs: Complex<$ty>) -> Self::Output {
                    Complex::new(self + rhs.re, rhs.im)
                }
            }

            impl Sub<Complex<$ty>> for $ty {
                type Output = Complex<$ty>;

                #[inline(always)]
                fn sub(self, rhs: Complex<$ty>) -> Self::Output {
                    Complex::new(self - rhs.re, -rhs.im)
                }
            }

            impl Mul<Complex<$ty>> for $ty {
                type Output = Complex<$ty>;

                #[inline(always)]
                fn mul(self, rhs: Complex<$ty>) -> Self::Output {
                    Complex::new(self * rhs.re, self * rhs.im)
                }
            }

            impl Div<Complex<$ty>> for $ty {
                type Output = Complex<$ty>;

                #[inline(always)]
                fn div(self, rhs: Complex<$ty>) -> Self::Output {
                    Complex::from_real(self) / rhs
                }
            }
        )*
    };
}

impl_scalar_lhs!(f16, f32, f64);

// the right-hand side of a compound assignment is converted to the precision of the receiver,
// in either direction
macro_rules! impl_op_assign {
    ($($trait: ident::$method: ident => $op: ident),* $(,)?) => {
        $(
            impl<T: Scalar + CastFrom<U>, U: Scalar> $trait<Complex<U>> for Complex<T> {
                #[inline(always)]
                fn $method(&mut self, rhs: Complex<U>) {
                    *self = (*self).$op(Complex::<T>::from_complex(rhs));
                }
            }

            impl_op_assign!(@scalar $trait::$method => $op, f16, f32, f64);
        )*
    };

    (@scalar $trait: ident::$method: ident => $op: ident, $($ty: ty),*) => {
        $(
            impl<T: Scalar + CastFrom<$ty>> $trait<$ty> for Complex<T> {
                #[inline(always)]
                fn $method(&mut self, rhs: $ty) {
                    *self = (*self).$op(cast_component::<T, $ty>(rhs));
                }
            }
        )*
    };
}

impl_op_assign!(
    AddAssign::add_assign => add,
    SubAssign::sub_assign => sub,
    MulAssign::mul_assign => mul,
    DivAssign::div_assign => div,
);

impl<T: Scalar> core::iter::Sum for Complex<T> {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, z| acc + z)
    }
}

impl<'a, T: Scalar> core::iter::Sum<&'a Complex<T>> for Complex<T> {
    #[inline]
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, z| acc + *z)
    }
}

impl<T: Scalar> core::iter::Product for Complex<T> {
    #[inline]
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, z| acc * z)
    }
}

impl<'a, T: Scalar> core::iter::Product<&'a Complex<T>> for Complex<T> {
    #[inline]
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, z| acc * *z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex_native::{c16, c32, c64};
    use equator::assert;

    fn c<T: Scalar + CastFrom<f64>>(re: f64, im: f64) -> Complex<T> {
        Complex::new(T::cast_from(re), T::cast_from(im))
    }

    fn s<T: Scalar + CastFrom<f64>>(x: f64) -> T {
        T::cast_from(x)
    }

    fn check_identities<T>()
    where
        T: Scalar
            + CastFrom<f64>
            + Add<Complex<T>, Output = Complex<T>>
            + Sub<Complex<T>, Output = Complex<T>>
            + Mul<Complex<T>, Output = Complex<T>>
            + Div<Complex<T>, Output = Complex<T>>,
    {
        assert!(c::<T>(1.0, 2.0) + c(3.0, 4.0) == c(4.0, 6.0));
        assert!(c::<T>(1.0, 2.0) - c(3.0, 4.0) == c(-2.0, -2.0));
        assert!(c::<T>(1.0, 2.0) * c(3.0, 4.0) == c(-5.0, 10.0));
        assert!(c::<T>(-5.0, 10.0) / c(3.0, 4.0) == c(1.0, 2.0));

        assert!(c::<T>(1.0, 2.0) + s::<T>(3.0) == c(4.0, 2.0));
        assert!(s::<T>(3.0) + c::<T>(1.0, 2.0) == c(4.0, 2.0));
        assert!(c::<T>(1.0, 2.0) - s::<T>(3.0) == c(-2.0, 2.0));
        assert!(s::<T>(3.0) - c::<T>(1.0, 2.0) == c(2.0, -2.0));
        assert!(c::<T>(1.0, 2.0) * s::<T>(3.0) == c(3.0, 6.0));
        assert!(s::<T>(3.0) * c::<T>(1.0, 2.0) == c(3.0, 6.0));
        assert!(c::<T>(3.0, 6.0) / s::<T>(3.0) == c(1.0, 2.0));
        assert!(s::<T>(25.0) / c::<T>(3.0, 4.0) == c(3.0, -4.0));

        assert!(c::<T>(1.0, 2.0).pos() == c(1.0, 2.0));
        assert!(-c::<T>(1.0, 2.0) == c(-1.0, -2.0));

        assert!(c::<T>(1.0, 2.0) == c(1.0, 2.0));
        assert!(c::<T>(1.0, 2.0) != c(3.0, 4.0));
        assert!(c::<T>(1.0, 2.0) != c(1.0, 3.0));
    }

    #[test]
    fn test_identities_f16() {
        check_identities::<f16>();
    }

    #[test]
    fn test_identities_f32() {
        check_identities::<f32>();
    }

    #[test]
    fn test_identities_f64() {
        check_identities::<f64>();
    }

    #[test]
    fn test_op_assign_same_precision() {
        let mut z = c64::new(1.0, 2.0);
        z += c64::new(3.0, 4.0);
        assert!(z == c64::new(4.0, 6.0));
        z -= c64::new(3.0, 4.0);
        assert!(z == c64::new(1.0, 2.0));
        z *= c64::new(3.0, 4.0);
        assert!(z == c64::new(-5.0, 10.0));
        z /= c64::new(3.0, 4.0);
        assert!(z == c64::new(1.0, 2.0));

        z += 3.0_f64;
        assert!(z == c64::new(4.0, 2.0));
        z -= 3.0_f64;
        assert!(z == c64::new(1.0, 2.0));
        z *= 3.0_f64;
        assert!(z == c64::new(3.0, 6.0));
        z /= 3.0_f64;
        assert!(z == c64::new(1.0, 2.0));
    }

    #[test]
    fn test_op_assign_cross_precision() {
        let i = c16::new(f16::ZERO, f16::ONE);

        let mut d = c64::new(2.0, 2.0);
        d += i;
        assert!(d == c64::new(2.0, 3.0));

        let mut s = c32::new(2.0, 2.0);
        s += i;
        assert!(s == c32::new(2.0, 3.0));

        let mut h = c16::new(f16::from_f32(2.0), f16::from_f32(2.0));
        h += i;
        assert!(h == c16::new(f16::from_f32(2.0), f16::from_f32(3.0)));

        // narrowing right-hand sides are accepted
        let mut h = c16::new(f16::from_f32(2.0), f16::from_f32(2.0));
        h *= c64::new(0.0, 1.0);
        assert!(h == c16::new(f16::from_f32(-2.0), f16::from_f32(2.0)));
        h -= 1.0_f64;
        assert!(h == c16::new(f16::from_f32(-3.0), f16::from_f32(2.0)));
        h /= 2.0_f32;
        assert!(h == c16::new(f16::from_f32(-1.5), f16::ONE));

        let mut s = c32::new(-5.0, 10.0);
        s /= c64::new(3.0, 4.0);
        assert!(s == c32::new(1.0, 2.0));
        s *= f16::from_f32(2.0);
        assert!(s == c32::new(2.0, 4.0));
    }

    #[test]
    fn test_division_by_zero_propagates() {
        let z = c64::new(1.0, 1.0) / c64::ZERO;
        assert!(z.re.is_nan());
        assert!(z.im.is_nan());

        let z = c64::new(1.0, -1.0) / 0.0_f64;
        assert!(z.re == f64::INFINITY);
        assert!(z.im == f64::NEG_INFINITY);

        let z = 1.0_f32 / c32::ZERO;
        assert!(z.re.is_nan());

        let z = c16::ONE / c16::ZERO;
        assert!(z.re.is_nan());

        let inv = c64::ZERO.inv();
        assert!(inv.re.is_nan());
    }

    #[test]
    fn test_sum_product() {
        let values = [c64::new(1.0, 2.0), c64::new(3.0, 4.0)];
        assert!(values.iter().sum::<c64>() == c64::new(4.0, 6.0));
        assert!(values.iter().copied().product::<c64>() == c64::new(-5.0, 10.0));
        assert!(core::iter::empty::<c32>().sum::<c32>() == c32::ZERO);
        assert!(core::iter::empty::<c32>().product::<c32>() == c32::ONE);
    }
}
