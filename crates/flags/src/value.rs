use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign};

use crate::describe::BitPosition;
use crate::error::{InvalidFlagValue, Result};

/// A set of flags packed into the low 31 bits of a `u32`.
///
/// Bit 31 is reserved so every value also fits a signed 32-bit integer
/// without turning negative. Values built through [`FlagValue::new`],
/// [`to_flag_value`] or the operators below always satisfy
/// `0 <= v <= 0x7FFF_FFFF`; [`FlagValue::from_bits_retain`] is the one
/// escape hatch that skips the check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "u32")
)]
#[repr(transparent)]
pub struct FlagValue(u32);

impl FlagValue {
    pub const EMPTY: Self = Self(0);
    pub const MAX: Self = Self(0x7FFF_FFFF);
    /// Number of usable bit positions.
    pub const BITS: u32 = 31;

    /// Returns `None` when `bits` sets the reserved bit 31.
    #[inline]
    pub const fn new(bits: u32) -> Option<Self> {
        if bits <= Self::MAX.0 { Some(Self(bits)) } else { None }
    }

    /// The single flag at `position` (0 is least significant).
    #[inline]
    pub const fn bit(position: u32) -> Option<Self> {
        if position < Self::BITS {
            Some(Self(1 << position))
        } else {
            None
        }
    }

    /// Wraps `bits` as is, without range validation.
    #[inline]
    pub const fn from_bits_retain(bits: u32) -> Self {
        Self(bits)
    }

    /// Drops the reserved bit 31.
    #[inline]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::MAX.0)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Bitwise union of all `flags`, or [`FlagValue::EMPTY`] for an empty slice.
    #[inline]
    pub fn union(flags: &[Self]) -> Self {
        flags.iter().fold(Self::EMPTY, |acc, flag| acc | *flag)
    }

    pub fn bit_position(self) -> BitPosition {
        BitPosition::of(self.0)
    }
}

impl BitOr for FlagValue {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FlagValue {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for FlagValue {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for FlagValue {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitXor for FlagValue {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for FlagValue {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

/// Difference: the bits of `self` that are not in `rhs`.
impl Sub for FlagValue {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 & !rhs.0)
    }
}

impl SubAssign for FlagValue {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 &= !rhs.0;
    }
}

/// Complement within the 31 usable bits.
impl Not for FlagValue {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0 & Self::MAX.0)
    }
}

impl PartialEq<u32> for FlagValue {
    #[inline]
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl From<FlagValue> for u32 {
    #[inline]
    fn from(value: FlagValue) -> Self {
        value.0
    }
}

impl From<FlagValue> for i64 {
    #[inline]
    fn from(value: FlagValue) -> Self {
        value.0.into()
    }
}

impl From<FlagValue> for u64 {
    #[inline]
    fn from(value: FlagValue) -> Self {
        value.0.into()
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Binary for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A primitive number that may or may not be a valid [`FlagValue`].
///
/// Implemented for every primitive integer and float type, so NaN,
/// infinities and fractional numbers can be rejected like any other
/// out-of-range candidate.
pub trait FlagCandidate: sealed::Sealed + Copy {
    #[doc(hidden)]
    fn to_flag_bits(self) -> Option<u32>;

    /// Natural string form used in error messages.
    #[doc(hidden)]
    fn render(self) -> String;
}

macro_rules! impl_integer_candidate {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FlagCandidate for $ty {
                #[inline]
                fn to_flag_bits(self) -> Option<u32> {
                    u32::try_from(self).ok().filter(|bits| *bits <= FlagValue::MAX.0)
                }

                fn render(self) -> String {
                    self.to_string()
                }
            }

            impl TryFrom<$ty> for FlagValue {
                type Error = InvalidFlagValue;

                #[inline]
                fn try_from(candidate: $ty) -> Result<Self> {
                    to_flag_value(candidate)
                }
            }
        )*
    };
}

macro_rules! impl_float_candidate {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FlagCandidate for $ty {
                #[inline]
                fn to_flag_bits(self) -> Option<u32> {
                    let value = f64::from(self);
                    let integral = value.is_finite() && value.fract() == 0.0;
                    if integral && (0.0..=f64::from(FlagValue::MAX.0)).contains(&value) {
                        Some(value as u32)
                    } else {
                        None
                    }
                }

                fn render(self) -> String {
                    if self.is_nan() {
                        "NaN".to_owned()
                    } else if self.is_infinite() {
                        let sign = if self.is_sign_negative() { "-" } else { "" };
                        format!("{sign}Infinity")
                    } else {
                        self.to_string()
                    }
                }
            }

            impl TryFrom<$ty> for FlagValue {
                type Error = InvalidFlagValue;

                #[inline]
                fn try_from(candidate: $ty) -> Result<Self> {
                    to_flag_value(candidate)
                }
            }
        )*
    };
}

impl_integer_candidate!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_candidate!(f32, f64);

/// Strictly converts `candidate` into a [`FlagValue`].
///
/// # Errors
///
/// Returns [`InvalidFlagValue`] if the candidate is negative, above
/// `0x7FFFFFFF`, fractional, NaN or infinite.
///
/// # Example
///
/// ```rust
/// # use samara_flags::{to_flag_value, FlagValue};
/// assert_eq!(to_flag_value(5u8).unwrap(), FlagValue::new(5).unwrap());
/// assert!(to_flag_value(-1).is_err());
/// assert!(to_flag_value(0x8000_0000u32).is_err());
/// ```
#[inline]
pub fn to_flag_value<T: FlagCandidate>(candidate: T) -> Result<FlagValue> {
    candidate
        .to_flag_bits()
        .map(FlagValue)
        .ok_or_else(|| InvalidFlagValue::new(candidate.render()))
}

/// Reports whether `candidate` is an integer in `[0, 0x7FFFFFFF]`. Never fails.
#[inline]
pub fn is_valid_flag_value<T: FlagCandidate>(candidate: T) -> bool {
    candidate.to_flag_bits().is_some()
}
