use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is what the kernels in this crate require of their element type. It is implemented for
/// [`f32`], [`f64`], and all primitive integer types.
pub trait Number:
    Zero + One + ops::Add<Output = Self> + ops::Mul<Output = Self> + PartialEq + Copy
{
}
impl<T> Number for T where
    T: Zero + One + ops::Add<Output = Self> + ops::Mul<Output = Self> + PartialEq + Copy
{
}

macro_rules! zero_one {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0.0, 1.0: f32, f64);
zero_one!(0, 1: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
