//! Unordered counter pairs.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Counters wrap around at this value.
pub const COUNTER_MODULUS: u8 = 10;

/// Which member of an unordered pair a move addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// The smaller counter (either one when both are equal).
    Smaller,
    /// The larger counter (either one when both are equal).
    Larger,
}

impl Slot {
    /// Both slots, smaller first.
    pub const ALL: [Slot; 2] = [Slot::Smaller, Slot::Larger];

    /// Parse the console selector: `0` is the smaller counter, `1` the larger.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Slot::Smaller),
            1 => Some(Slot::Larger),
            _ => None,
        }
    }

    /// Console selector for this slot.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Slot::Smaller => 0,
            Slot::Larger => 1,
        }
    }
}

/// An unordered pair of counters in `0..=9`.
///
/// Identity is by multiset value: `CounterPair::new(3, 7)` and
/// `CounterPair::new(7, 3)` are the same pair. Values are stored sorted, so
/// the derived ordering compares pairs as sorted 2-tuples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct CounterPair {
    lo: u8,
    hi: u8,
}

impl CounterPair {
    /// The winning pair.
    pub const ZERO: CounterPair = CounterPair { lo: 0, hi: 0 };

    /// Create a pair from two counter values in any order.
    ///
    /// Panics if either value is outside `0..=9`; use [`CounterPair::try_new`]
    /// for untrusted input.
    #[must_use]
    pub fn new(a: u8, b: u8) -> Self {
        assert!(
            a < COUNTER_MODULUS && b < COUNTER_MODULUS,
            "Counters must be in 0..=9"
        );
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    /// Create a pair, rejecting out-of-range values.
    pub fn try_new(a: u8, b: u8) -> Result<Self> {
        for value in [a, b] {
            if value >= COUNTER_MODULUS {
                return Err(Error::InvalidCounter { value });
            }
        }
        Ok(Self::new(a, b))
    }

    /// The smaller counter.
    #[inline]
    #[must_use]
    pub const fn smaller(self) -> u8 {
        self.lo
    }

    /// The larger counter.
    #[inline]
    #[must_use]
    pub const fn larger(self) -> u8 {
        self.hi
    }

    /// The counter addressed by `slot`.
    #[inline]
    #[must_use]
    pub const fn get(self, slot: Slot) -> u8 {
        match slot {
            Slot::Smaller => self.lo,
            Slot::Larger => self.hi,
        }
    }

    /// Replace the counter at `slot`, keeping the other one.
    #[must_use]
    pub fn with_replaced(self, slot: Slot, value: u8) -> Self {
        let other = match slot {
            Slot::Smaller => self.hi,
            Slot::Larger => self.lo,
        };
        Self::new(value, other)
    }

    /// Add `source` to the counter at `slot`, wrapping at the modulus.
    #[must_use]
    pub fn bumped(self, slot: Slot, source: u8) -> Self {
        self.with_replaced(slot, (self.get(slot) + source) % COUNTER_MODULUS)
    }

    /// Check if both counters are zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.lo == 0 && self.hi == 0
    }

    /// Counters as a sorted array.
    #[must_use]
    pub const fn to_array(self) -> [u8; 2] {
        [self.lo, self.hi]
    }
}

impl TryFrom<[u8; 2]> for CounterPair {
    type Error = Error;

    fn try_from(values: [u8; 2]) -> Result<Self> {
        Self::try_new(values[0], values[1])
    }
}

impl From<CounterPair> for [u8; 2] {
    fn from(pair: CounterPair) -> Self {
        pair.to_array()
    }
}

impl std::fmt::Display for CounterPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}
