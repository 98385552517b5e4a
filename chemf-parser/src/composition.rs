//! The empirical composition of a formula: how many atoms of each element it contains.

use crate::parser::{ast::Formula, error::Error, Parser};
use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::Serialize;

/// The order in which elements are written when formatting a [`Composition`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    /// Every symbol in ascending lexicographic order, such as `Br4C15H12O2`.
    #[default]
    Alphabetical,

    /// The Hill system: carbon first, then hydrogen, then every other symbol in ascending
    /// lexicographic order, such as `C15H12Br4O2`. Formulas without carbon are written in
    /// alphabetical order, hydrogen included.
    Hill,
}

/// A mapping from atomic symbol to the number of atoms of that element.
///
/// Elements with no atoms are never stored. The [`Display`] implementation writes the
/// composition as an empirical formula in [`Order::Alphabetical`] order; use
/// [`Composition::display`] to pick another order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Composition {
    counts: BTreeMap<&'static str, u32>,
}

impl Composition {
    /// Creates an empty composition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a composition of `count` atoms of a single element.
    pub fn single(symbol: &'static str, count: u32) -> Self {
        [(symbol, count)].into_iter().collect()
    }

    /// Returns the number of atoms of the given element.
    pub fn get(&self, symbol: &str) -> u32 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Returns an iterator over each element and its number of atoms, in ascending order of
    /// symbol.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.counts.iter().map(|(symbol, count)| (*symbol, *count))
    }

    /// Returns an iterator over each element and its number of atoms, in the given order.
    pub fn iter_in(&self, order: Order) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        let hill = order == Order::Hill && self.counts.contains_key("C");
        let front = ["C", "H"]
            .into_iter()
            .filter(move |_| hill)
            .filter_map(move |symbol| self.counts.get_key_value(symbol))
            .map(|(symbol, count)| (*symbol, *count));
        let rest = self.iter().filter(move |(symbol, _)| !hill || !matches!(*symbol, "C" | "H"));
        front.chain(rest)
    }

    /// Returns the number of distinct elements.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if there are no atoms at all.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the total number of atoms.
    pub fn total_atoms(&self) -> u64 {
        self.counts.values().map(|count| u64::from(*count)).sum()
    }

    /// Adds the atoms of `other` to this composition. Returns [`None`] if a count overflows.
    pub fn checked_merge(mut self, other: &Composition) -> Option<Self> {
        for (symbol, count) in other.iter() {
            let entry = self.counts.entry(symbol).or_insert(0);
            *entry = entry.checked_add(count)?;
        }
        Some(self)
    }

    /// Multiplies every count by `factor`. Returns [`None`] if a count overflows.
    pub fn checked_scale(mut self, factor: u32) -> Option<Self> {
        if factor == 0 {
            return Some(Self::new());
        }

        for count in self.counts.values_mut() {
            *count = count.checked_mul(factor)?;
        }
        Some(self)
    }

    /// Wraps the composition in a [`Formatted`], which writes it in the given order.
    pub fn display(&self, order: Order) -> Formatted<'_> {
        Formatted { composition: self, order }
    }

    /// Wraps the composition in a [`Formatted`], which writes it in [`Order::Hill`].
    pub fn hill(&self) -> Formatted<'_> {
        self.display(Order::Hill)
    }
}

/// Collects `(symbol, count)` pairs. Entries with a count of zero are dropped, and a later entry
/// for the same symbol replaces an earlier one.
impl FromIterator<(&'static str, u32)> for Composition {
    fn from_iter<I: IntoIterator<Item = (&'static str, u32)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (symbol, count) in iter {
            if count == 0 {
                counts.remove(symbol);
            } else {
                counts.insert(symbol, count);
            }
        }
        Self { counts }
    }
}

/// Counts the atoms of a flat formula: element symbols and counts only.
///
/// Groups are rejected, as is anything else that is not an element or a count. To read a
/// formula with groups, parse a [`Formula`] and use [`Formula::composition`].
impl FromStr for Composition {
    type Err = Vec<Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(s)
            .flat()
            .try_parse_full::<Formula>()?
            .composition()
            .map_err(|err| vec![err])
    }
}

impl Display for Composition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.display(Order::Alphabetical).fmt(f)
    }
}

/// A wrapper type that writes a [`Composition`] in a chosen [`Order`].
#[derive(Debug, Clone, Copy)]
pub struct Formatted<'a> {
    composition: &'a Composition,
    order: Order,
}

impl Display for Formatted<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (symbol, count) in self.composition.iter_in(self.order) {
            write!(f, "{}", symbol)?;
            if count != 1 {
                write!(f, "{}", count)?;
            }
        }
        Ok(())
    }
}
