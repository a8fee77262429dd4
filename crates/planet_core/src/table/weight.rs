use rand::distributions::uniform::SampleUniform;
use std::fmt;
use std::ops::AddAssign;

/// Numeric weight usable in a [`WeightedTable`](super::WeightedTable).
///
/// Covers the unsigned integers and both float widths. `Default` must be zero.
pub trait Weight:
    SampleUniform
    + PartialOrd
    + for<'a> AddAssign<&'a Self>
    + Copy
    + Default
    + fmt::Debug
    + fmt::Display
{
    fn to_f64(self) -> f64;

    /// `self + other`, or `None` if the sum overflows (integers) or is not finite (floats)
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_int_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }
            }
        )*
    };
}

impl_int_weight!(u8, u16, u32, u64, usize);
impl_float_weight!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_f64() {
        assert_eq!(4u32.to_f64(), 4.0);
        assert_eq!(0.25f32.to_f64(), 0.25);
        assert_eq!(u8::default().to_f64(), 0.0);
    }

    #[test]
    fn test_checked_sum() {
        assert_eq!(200u8.checked_sum(55), Some(255));
        assert_eq!(200u8.checked_sum(56), None);
        assert_eq!(u32::MAX.checked_sum(1), None);
        assert_eq!(1.5f64.checked_sum(2.5), Some(4.0));
        assert_eq!(f64::MAX.checked_sum(f64::MAX), None);
        assert_eq!(f32::MAX.checked_sum(f32::MAX), None);
    }
}
