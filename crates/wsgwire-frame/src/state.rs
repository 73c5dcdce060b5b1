//! Device state flags.
//!
//! The system state word is a 32-bit little-endian bitmask returned in the
//! parameters of state-query responses. Bits 0-20 are defined, 21-31 are
//! reserved. Bits 8, 10 and 11 are also reserved.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// A set of device state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StateFlags(u32);

impl StateFlags {
    /// Axis has been homed.
    pub const REFERENCED: Self = Self(1 << 0);
    pub const MOVING: Self = Self(1 << 1);
    /// Axis blocked while moving in negative direction.
    pub const BLOCKED_MINUS: Self = Self(1 << 2);
    /// Axis blocked while moving in positive direction.
    pub const BLOCKED_PLUS: Self = Self(1 << 3);
    pub const SOFT_LIMIT_MINUS: Self = Self(1 << 4);
    pub const SOFT_LIMIT_PLUS: Self = Self(1 << 5);
    pub const AXIS_STOPPED: Self = Self(1 << 6);
    pub const TARGET_POS_REACHED: Self = Self(1 << 7);
    pub const FORCECNTL_MODE: Self = Self(1 << 9);
    pub const FAST_STOP: Self = Self(1 << 12);
    pub const TEMP_WARNING: Self = Self(1 << 13);
    pub const TEMP_FAULT: Self = Self(1 << 14);
    pub const POWER_FAULT: Self = Self(1 << 15);
    pub const CURR_FAULT: Self = Self(1 << 16);
    pub const FINGER_FAULT: Self = Self(1 << 17);
    pub const CMD_FAILURE: Self = Self(1 << 18);
    pub const SCRIPT_RUNNING: Self = Self(1 << 19);
    pub const SCRIPT_FAILURE: Self = Self(1 << 20);

    /// Every defined flag, in ascending bit order, with its documented name.
    pub const NAMED: &'static [(&'static str, StateFlags)] = &[
        ("SF_REFERENCED", Self::REFERENCED),
        ("SF_MOVING", Self::MOVING),
        ("SF_BLOCKED_MINUS", Self::BLOCKED_MINUS),
        ("SF_BLOCKED_PLUS", Self::BLOCKED_PLUS),
        ("SF_SOFT_LIMIT_MINUS", Self::SOFT_LIMIT_MINUS),
        ("SF_SOFT_LIMIT_PLUS", Self::SOFT_LIMIT_PLUS),
        ("SF_AXIS_STOPPED", Self::AXIS_STOPPED),
        ("SF_TARGET_POS_REACHED", Self::TARGET_POS_REACHED),
        ("SF_FORCECNTL_MODE", Self::FORCECNTL_MODE),
        ("SF_FAST_STOP", Self::FAST_STOP),
        ("SF_TEMP_WARNING", Self::TEMP_WARNING),
        ("SF_TEMP_FAULT", Self::TEMP_FAULT),
        ("SF_POWER_FAULT", Self::POWER_FAULT),
        ("SF_CURR_FAULT", Self::CURR_FAULT),
        ("SF_FINGER_FAULT", Self::FINGER_FAULT),
        ("SF_CMD_FAILURE", Self::CMD_FAILURE),
        ("SF_SCRIPT_RUNNING", Self::SCRIPT_RUNNING),
        ("SF_SCRIPT_FAILURE", Self::SCRIPT_FAILURE),
    ];

    /// Mask of all defined bits.
    pub const KNOWN_MASK: u32 = 0x001F_F2FF;

    const FAULT_MASK: u32 = Self::FAST_STOP.0
        | Self::TEMP_FAULT.0
        | Self::POWER_FAULT.0
        | Self::CURR_FAULT.0
        | Self::FINGER_FAULT.0
        | Self::CMD_FAILURE.0
        | Self::SCRIPT_FAILURE.0;

    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wrap a raw state word, keeping reserved bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Wrap a raw state word, dropping reserved bits.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::KNOWN_MASK)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Bits set outside the defined flags.
    pub const fn reserved_bits(self) -> u32 {
        self.0 & !Self::KNOWN_MASK
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Any fault, failure or fast-stop condition is present.
    pub const fn has_fault(self) -> bool {
        self.0 & Self::FAULT_MASK != 0
    }

    /// Read the state word from the start of a response parameter block.
    ///
    /// Returns `None` if fewer than four bytes are available.
    pub fn from_params(params: &[u8]) -> Option<Self> {
        let word: [u8; 4] = params.get(..4)?.try_into().ok()?;
        Some(Self(u32::from_le_bytes(word)))
    }

    /// Names of the defined flags that are set, lowest bit first.
    pub fn iter_names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .iter()
            .filter(move |(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
    }
}

impl BitOr for StateFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for StateFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for StateFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl From<u32> for StateFlags {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl fmt::Display for StateFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for name in self.iter_names() {
            if !first {
                f.write_str(" | ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        let reserved = self.reserved_bits();
        if reserved != 0 {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{reserved:#010x}")?;
            first = false;
        }
        if first {
            f.write_str("(empty)")?;
        }
        Ok(())
    }
}
