mod definitions;
mod describe;
mod error;
mod handle;
mod value;

pub use definitions::{FlagDefinitions, Iter, define_flag_set};
pub use describe::{BitPosition, Describe, FlagDescription};
pub use error::{InvalidFlagValue, Result};
pub use handle::{Flags, flag_value};
pub use value::{FlagCandidate, FlagValue, is_valid_flag_value, to_flag_value};
