use std::ops::Index;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::Result;
use crate::value::{FlagCandidate, FlagValue, to_flag_value};

/// An immutable, ordered table of named flags.
///
/// Built once by [`define_flag_set`]; there is no API to add, remove or
/// reassign an entry afterwards. Clones share the same entries.
///
/// Entries may overlap: a combined entry such as `READ_WRITE = READ | WRITE`
/// is allowed next to its parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagDefinitions {
    entries: Arc<[(String, FlagValue)]>,
}

impl FlagDefinitions {
    pub fn empty() -> Self {
        Self {
            entries: Arc::from(Vec::new()),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<FlagValue> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| *value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entries in definition order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.entries.iter())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(name, _)| name)
    }

    pub fn values(&self) -> impl Iterator<Item = FlagValue> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

impl Default for FlagDefinitions {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<&str> for FlagDefinitions {
    type Output = FlagValue;

    /// # Panics
    ///
    /// Panics if no flag is named `name`.
    fn index(&self, name: &str) -> &FlagValue {
        match self.entries.iter().find(|(entry, _)| entry == name) {
            Some((_, value)) => value,
            None => panic!("no flag named {name:?} in flag set"),
        }
    }
}

impl<'a> IntoIterator for &'a FlagDefinitions {
    type Item = (&'a str, FlagValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(name, value)` pairs of a [`FlagDefinitions`] table.
#[derive(Clone, Debug)]
pub struct Iter<'a>(std::slice::Iter<'a, (String, FlagValue)>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, FlagValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(name, value)| (name.as_str(), *value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(name, value)| (name.as_str(), *value))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Validates `entries` and seals them into a [`FlagDefinitions`] table.
///
/// Entries keep the iteration order of `entries`. A repeated name replaces
/// the earlier value but keeps the earlier position.
///
/// # Errors
///
/// Fails on the first entry whose value is not an integer in
/// `[0, 0x7FFFFFFF]`; no table is produced in that case.
///
/// # Example
///
/// ```rust
/// # use samara_flags::define_flag_set;
/// let perms = define_flag_set([("READ", 1), ("WRITE", 2), ("EXECUTE", 4)]).unwrap();
/// assert_eq!(perms["WRITE"].get(), 2);
///
/// let err = define_flag_set([("INVALID", 1.5)]).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Invalid bitflag value for \"INVALID\": 1.5. Must be a non-negative integer within 31-bit range."
/// );
/// ```
pub fn define_flag_set<I, K, V>(entries: I) -> Result<FlagDefinitions>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: FlagCandidate,
{
    let mut table: Vec<(String, FlagValue)> = Vec::new();
    for (name, candidate) in entries {
        let name = name.into();
        let value = match to_flag_value(candidate) {
            Ok(value) => value,
            Err(err) => {
                debug!(name = %name, value = err.value(), "rejected flag definition");
                return Err(err.named(name));
            }
        };
        match table.iter_mut().find(|(entry, _)| *entry == name) {
            Some(slot) => slot.1 = value,
            None => table.push((name, value)),
        }
    }

    trace!(count = table.len(), "defined flag set");
    Ok(FlagDefinitions {
        entries: Arc::from(table),
    })
}
