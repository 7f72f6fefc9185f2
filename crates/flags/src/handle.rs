use std::fmt;

use crate::definitions::FlagDefinitions;
use crate::describe::Describe;
use crate::value::FlagValue;

/// A read-only view over one flag value.
///
/// Every query takes a list of flags and combines them with bitwise OR
/// first. Derivations return a new [`FlagValue`] and leave the handle
/// untouched; wrap the result again to keep going.
///
/// # Example
///
/// ```rust
/// # use samara_flags::{define_flag_set, flag_value};
/// let perms = define_flag_set([("READ", 1), ("WRITE", 2), ("EXECUTE", 4)]).unwrap();
/// let (read, write, execute) = (perms["READ"], perms["WRITE"], perms["EXECUTE"]);
///
/// let flags = flag_value(read | write);
/// assert!(flags.has(&[read]));
/// assert!(!flags.has(&[execute]));
/// assert_eq!(flags.value(), 3);
///
/// let all = flag_value(flags.add(&[execute]));
/// assert!(all.has(&[read, write, execute]));
/// assert_eq!(flags.value(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags(FlagValue);

impl Flags {
    #[inline]
    pub const fn new(value: FlagValue) -> Self {
        Self(value)
    }

    /// True if every bit of the combined `flags` is set. False for an empty list.
    #[inline]
    pub fn has(&self, flags: &[FlagValue]) -> bool {
        !flags.is_empty() && self.0.contains(FlagValue::union(flags))
    }

    /// True if any bit of the combined `flags` is set. False for an empty list.
    #[inline]
    pub fn has_any(&self, flags: &[FlagValue]) -> bool {
        self.0.intersects(FlagValue::union(flags))
    }

    /// True if the value equals the combined `flags`, so an empty list matches only zero.
    #[inline]
    pub fn has_exact(&self, flags: &[FlagValue]) -> bool {
        self.0 == FlagValue::union(flags)
    }

    #[inline]
    pub fn add(&self, flags: &[FlagValue]) -> FlagValue {
        self.0 | FlagValue::union(flags)
    }

    #[inline]
    pub fn remove(&self, flags: &[FlagValue]) -> FlagValue {
        self.0 - FlagValue::union(flags)
    }

    #[inline]
    pub fn toggle(&self, flags: &[FlagValue]) -> FlagValue {
        self.0 ^ FlagValue::union(flags)
    }

    #[inline]
    pub fn clear(&self) -> FlagValue {
        FlagValue::EMPTY
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.0.get()
    }

    /// Same as [`Flags::value`].
    #[inline]
    pub fn value_of(&self) -> u32 {
        self.0.get()
    }

    #[inline]
    pub fn flag_value(&self) -> FlagValue {
        self.0
    }

    /// Decomposes the value into `BIT_<n>` records, or one `NONE` record for zero.
    pub fn describe(&self) -> Describe<'static> {
        Describe::new(self.0, None)
    }

    /// Decomposes the value into the matching entries of `definitions`,
    /// followed by `UNKNOWN_BIT_<n>` records for bits none of them cover.
    ///
    /// ```rust
    /// # use samara_flags::{define_flag_set, flag_value};
    /// let perms = define_flag_set([("READ", 1), ("WRITE", 2)]).unwrap();
    /// let names: Vec<_> = flag_value(1u32 | 2 | 8)
    ///     .describe_with(&perms)
    ///     .map(|record| record.name)
    ///     .collect();
    /// assert_eq!(names, ["READ", "WRITE", "UNKNOWN_BIT_3"]);
    /// ```
    pub fn describe_with<'a>(&self, definitions: &'a FlagDefinitions) -> Describe<'a> {
        Describe::new(self.0, Some(definitions))
    }
}

impl From<FlagValue> for Flags {
    #[inline]
    fn from(value: FlagValue) -> Self {
        Self(value)
    }
}

/// Keeps the raw bit pattern without validation.
impl From<u32> for Flags {
    #[inline]
    fn from(bits: u32) -> Self {
        Self(FlagValue::from_bits_retain(bits))
    }
}

/// Reinterprets the two's complement bit pattern without validation.
impl From<i32> for Flags {
    #[inline]
    fn from(bits: i32) -> Self {
        Self(FlagValue::from_bits_retain(bits as u32))
    }
}

impl From<Flags> for u32 {
    #[inline]
    fn from(flags: Flags) -> Self {
        flags.value()
    }
}

impl From<Flags> for FlagValue {
    #[inline]
    fn from(flags: Flags) -> Self {
        flags.0
    }
}

impl PartialEq<u32> for Flags {
    #[inline]
    fn eq(&self, other: &u32) -> bool {
        self.value() == *other
    }
}

impl PartialEq<FlagValue> for Flags {
    #[inline]
    fn eq(&self, other: &FlagValue) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Wraps `value` for querying. Never fails: raw integers are taken as bit
/// patterns, not validated.
#[inline]
pub fn flag_value(value: impl Into<Flags>) -> Flags {
    value.into()
}
