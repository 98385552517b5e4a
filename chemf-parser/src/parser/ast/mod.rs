//! The syntax tree of a linear formula.
//!
//! A [`Formula`] is a sequence of [`Item`]s, each of which is an [`Atom`] with an optional
//! count, or a [`Group`] of items in brackets with an optional multiplier. Every node records
//! the region of the source it was parsed from, so diagnostics can point back into the input.

pub mod atom;
pub mod count;
pub mod formula;
pub mod group;
pub mod item;

pub use atom::Atom;
pub use formula::Formula;
pub use group::{Bracket, Group};
pub use item::Item;
