// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value formats for axis labels.

/// How axis values are rendered as label text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AxisFormat {
    /// Localized date and time.
    DateTime,
    /// ISO 8601 timestamps.
    Iso8601,
    /// Localized decimal numbers.
    Number,
    /// Percentages (`0.5` renders as `50%`).
    Percent,
    /// Currency amounts.
    Currency {
        /// ISO 4217 currency code, e.g. `usd`.
        code: String,
    },
    /// Byte counts (`1024` renders as `1 KB`).
    ByteCount(ByteCountFormat),
}

/// Options for [`AxisFormat::ByteCount`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteCountFormat {
    /// Unit base and labelling.
    pub style: ByteCountStyle,
    /// Units the formatter may choose from.
    pub allowed_units: ByteCountUnits,
    /// Render zero as "Zero KB" rather than "0 KB".
    pub spells_out_zero: bool,
    /// Append the exact byte count in parentheses.
    pub includes_actual_byte_count: bool,
}

/// Byte-count unit conventions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteCountStyle {
    /// File sizes (platform convention, decimal).
    File,
    /// Memory sizes (platform convention, binary).
    Memory,
    /// Powers of 1000.
    Decimal,
    /// Powers of 1024.
    #[default]
    Binary,
}

/// A set of byte-count units.
///
/// The empty set is [`ByteCountUnits::DEFAULT`], which lets the formatter choose.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByteCountUnits(u16);

impl ByteCountUnits {
    /// Let the formatter choose.
    pub const DEFAULT: Self = Self(0);
    /// Bytes.
    pub const BYTES: Self = Self(1 << 0);
    /// Kilobytes.
    pub const KB: Self = Self(1 << 1);
    /// Megabytes.
    pub const MB: Self = Self(1 << 2);
    /// Gigabytes.
    pub const GB: Self = Self(1 << 3);
    /// Terabytes.
    pub const TB: Self = Self(1 << 4);
    /// Petabytes.
    pub const PB: Self = Self(1 << 5);
    /// Exabytes.
    pub const EB: Self = Self(1 << 6);
    /// Zettabytes.
    pub const ZB: Self = Self(1 << 7);
    /// Yottabytes and anything larger.
    pub const YB_OR_HIGHER: Self = Self(1 << 8);
    /// Every unit.
    pub const ALL: Self = Self((1 << 9) - 1);

    const NAMES: [(Self, &'static str); 9] = [
        (Self::BYTES, "bytes"),
        (Self::KB, "kb"),
        (Self::MB, "mb"),
        (Self::GB, "gb"),
        (Self::TB, "tb"),
        (Self::PB, "pb"),
        (Self::EB, "eb"),
        (Self::ZB, "zb"),
        (Self::YB_OR_HIGHER, "yb_or_higher"),
    ];

    /// Returns the union of two sets.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Adds `other` to the set.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Returns `true` if every unit of `other` is in the set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` for [`ByteCountUnits::DEFAULT`].
    pub const fn is_default(self) -> bool {
        self.0 == 0
    }
}

impl core::fmt::Debug for ByteCountUnits {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_default() {
            return f.write_str("ByteCountUnits(default)");
        }
        let names = Self::NAMES
            .iter()
            .filter(|(unit, _)| self.contains(*unit))
            .map(|(_, name)| *name);
        f.debug_set().entries(names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_count_defaults_to_binary_with_default_units() {
        let format = ByteCountFormat::default();
        assert_eq!(format.style, ByteCountStyle::Binary);
        assert!(format.allowed_units.is_default());
        assert!(!format.spells_out_zero);
        assert!(!format.includes_actual_byte_count);
    }

    #[test]
    fn byte_count_units_union_and_all() {
        let mut units = ByteCountUnits::KB;
        units.insert(ByteCountUnits::MB);
        assert!(units.contains(ByteCountUnits::KB.union(ByteCountUnits::MB)));
        assert!(!units.contains(ByteCountUnits::GB));
        assert!(ByteCountUnits::ALL.contains(ByteCountUnits::YB_OR_HIGHER));
        assert!(!ByteCountUnits::ALL.is_default());
    }
}
