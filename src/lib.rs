//! Complex numbers over half, single and double precision floating point scalars, usable on host
//! and accelerator targets alike.
//!
//! [`Complex<T>`] stores its real part followed by its imaginary part, and is aligned to its own
//! size: 4, 8 and 16 bytes for [`c16`], [`c32`] and [`c64`] respectively. This makes buffers of
//! complex numbers interchangeable with buffers of scalar pairs and with [`num_complex::Complex`].
//!
//! # Conversions
//!
//! The three precisions form a ladder `f16 → f32 → f64`.
//! - Widening is implicit: `Complex<f16>` implements `Into<Complex<f32>>` and
//!   `Into<Complex<f64>>`, and `Complex<f32>` implements `Into<Complex<f64>>`.
//! - Narrowing is explicit: it goes through [`Complex::from_complex`] or [`Complex::cast`].
//! - Assignment ([`Complex::assign`]) and compound assignment (`+=`, `-=`, `*=`, `/=`) accept
//!   operands of any precision, converting them to the precision of the receiver.
//!
//! Each component is converted with the conversion of the scalar type itself.
//!
//! ```
//! use faer_complex::{c16, c32, c64};
//! use half::f16;
//!
//! let h = c16::new(f16::ONE, f16::ONE);
//! let d: c64 = h.into();
//! let s = c32::from_complex(d);
//!
//! let mut z = c64::new(2.0, 2.0);
//! z += c16::new(f16::ZERO, f16::ONE);
//! assert_eq!(z, c64::new(2.0, 3.0));
//! assert_eq!(s, c32::new(1.0, 1.0));
//! ```
//!
//! # Features
//! - `std` (default): links the standard library.
//! - `rand`: sampling from [`rand::distributions::Standard`] and [`rand_distr::StandardNormal`].
//! - `precision-warn`: logs a warning the first time a narrowing conversion overflows a finite
//!   value to infinity.
//! - `accel`: conversions from the complex type of an accelerator runtime.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod complex_native;
pub mod literals;
pub mod scalar;

mod seal;

pub use complex_native::{c16, c32, c64, Complex};
pub use half::f16;
pub use scalar::{CastFrom, Precision, Scalar, WidenFrom};

#[cfg(feature = "accel")]
pub use complex_native::AcceleratorComplex;

const _: () = {
    use core::mem::{align_of, size_of};

    const fn __assert_layout<T: Scalar>() {
        assert!(size_of::<Complex<T>>() == 2 * size_of::<T>());
        assert!(align_of::<Complex<T>>() == size_of::<Complex<T>>());
        assert!(size_of::<T>() == T::PRECISION.scalar_size());
    }

    __assert_layout::<f16>();
    __assert_layout::<f32>();
    __assert_layout::<f64>();

    assert!(size_of::<c16>() == 4 && align_of::<c16>() == 4);
    assert!(size_of::<c32>() == 8 && align_of::<c32>() == 8);
    assert!(size_of::<c64>() == 16 && align_of::<c64>() == 16);
};

#[cfg(feature = "precision-warn")]
#[macro_export]
#[doc(hidden)]
macro_rules! __precision_warn {
    ($name: ident) => {{
        #[inline(always)]
        #[allow(non_snake_case)]
        fn $name() -> &'static ::core::sync::atomic::AtomicBool {
            static $name: ::core::sync::atomic::AtomicBool =
                ::core::sync::atomic::AtomicBool::new(false);
            &$name
        }
        ::core::matches!(
            $name().compare_exchange(
                false,
                true,
                ::core::sync::atomic::Ordering::Relaxed,
                ::core::sync::atomic::Ordering::Relaxed,
            ),
            Ok(_)
        )
    }};
}
