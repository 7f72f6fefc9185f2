use std::fmt;
use std::iter::FusedIterator;

use tracing::trace;

use crate::definitions::{FlagDefinitions, Iter};
use crate::value::FlagValue;

const VISUAL_PREFIX: &str = "(0)";
const VISUAL_SET: &str = "[1]";
const VISUAL_UNSET: char = '0';

/// Where the highest set bit of a value sits within the 31 usable positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BitPosition {
    /// Index of the highest set bit (0..=30), or -1 for zero.
    pub exact: i32,
    /// Bit slots left above `exact`, out of 31.
    pub remaining: u32,
    /// `(0)` followed by one slot per bit from 30 down to 0: `[1]` if set, `0` if not.
    pub visual: String,
}

impl BitPosition {
    pub(crate) fn of(bits: u32) -> Self {
        let bits = bits & FlagValue::MAX.get();
        let exact = if bits == 0 {
            -1
        } else {
            (u32::BITS - 1 - bits.leading_zeros()) as i32
        };
        let remaining = if exact < 0 { FlagValue::BITS } else { FlagValue::BITS - exact as u32 };

        let mut visual = String::with_capacity(VISUAL_PREFIX.len() + 3 * FlagValue::BITS as usize);
        visual.push_str(VISUAL_PREFIX);
        for position in (0..FlagValue::BITS).rev() {
            if bits & (1 << position) != 0 {
                visual.push_str(VISUAL_SET);
            } else {
                visual.push(VISUAL_UNSET);
            }
        }

        Self {
            exact,
            remaining,
            visual,
        }
    }
}

/// One named flag, or one anonymous bit, found in a value by [`Describe`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlagDescription {
    pub name: String,
    /// The bits this record stands for, not the whole described value.
    pub value: FlagValue,
    pub decimal: String,
    /// `0x` followed by uppercase hex digits.
    pub hexadecimal: String,
    /// `0b` followed by binary digits.
    pub binary: String,
    /// Set when no definition matched these bits.
    pub unknown: bool,
    pub bit_position: BitPosition,
}

impl FlagDescription {
    fn new(name: String, value: FlagValue, unknown: bool) -> Self {
        Self {
            name,
            value,
            decimal: value.to_string(),
            hexadecimal: format!("0x{value:X}"),
            binary: format!("0b{value:b}"),
            unknown,
            bit_position: value.bit_position(),
        }
    }

    fn none() -> Self {
        Self::new("NONE".to_owned(), FlagValue::EMPTY, false)
    }
}

impl fmt::Display for FlagDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} ({}, {})",
            self.name, self.decimal, self.hexadecimal, self.binary
        )
    }
}

#[derive(Clone, Debug)]
enum State<'a> {
    Zero,
    Known { entries: Iter<'a>, unknown: u32 },
    Bits { bits: u32, position: u32, unknown: bool },
    Done,
}

/// Lazy decomposition of a value into [`FlagDescription`] records.
///
/// With definitions, every non-zero entry whose bits are all set is yielded
/// first, in definition order. Overlapping entries are each yielded. The bits
/// no entry covered follow as `UNKNOWN_BIT_<n>`, lowest first. Without
/// definitions every set bit is yielded as `BIT_<n>`. Zero yields a single
/// `NONE` record.
#[derive(Clone, Debug)]
pub struct Describe<'a> {
    value: FlagValue,
    state: State<'a>,
}

impl<'a> Describe<'a> {
    pub(crate) fn new(value: FlagValue, definitions: Option<&'a FlagDefinitions>) -> Self {
        trace!(
            value = value.get(),
            definitions = definitions.map_or(0, FlagDefinitions::len),
            "describing flag value"
        );

        let state = match definitions {
            _ if value.is_empty() => State::Zero,
            Some(definitions) if !definitions.is_empty() => State::Known {
                entries: definitions.iter(),
                unknown: value.get(),
            },
            _ => State::Bits {
                bits: value.get(),
                position: 0,
                unknown: false,
            },
        };
        Self { value, state }
    }
}

impl Iterator for Describe<'_> {
    type Item = FlagDescription;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.state {
                State::Zero => {
                    self.state = State::Done;
                    return Some(FlagDescription::none());
                }
                State::Known { entries, unknown } => {
                    for (name, flag) in entries.by_ref() {
                        if !flag.is_empty() && self.value.contains(flag) {
                            *unknown &= !flag.get();
                            return Some(FlagDescription::new(name.to_owned(), flag, false));
                        }
                    }
                    let bits = *unknown;
                    self.state = State::Bits {
                        bits,
                        position: 0,
                        unknown: true,
                    };
                }
                State::Bits {
                    bits,
                    position,
                    unknown,
                } => {
                    while *position < FlagValue::BITS {
                        let current = *position;
                        *position += 1;
                        if *bits & (1 << current) != 0 {
                            let name = if *unknown {
                                format!("UNKNOWN_BIT_{current}")
                            } else {
                                format!("BIT_{current}")
                            };
                            let flag = FlagValue::from_bits_retain(1 << current);
                            return Some(FlagDescription::new(name, flag, *unknown));
                        }
                    }
                    self.state = State::Done;
                }
                State::Done => return None,
            }
        }
    }
}

impl FusedIterator for Describe<'_> {}
