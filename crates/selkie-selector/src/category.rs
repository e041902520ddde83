//! Selector fragment categories and their fixed ordering.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! constrains where the type selector may appear: "A compound selector is a
//! sequence of simple selectors that are not separated by a combinator ...
//! If it contains a type selector or universal selector, that selector must
//! come first in the sequence."
//!
//! The builder extends that constraint to a single canonical order covering
//! every category, so that a given set of fragments always renders the same
//! way.

use serde::Serialize;
use strum_macros::Display;

/// The category of a simple-selector fragment within a compound selector.
///
/// The derived [`Ord`] follows declaration order, which is the canonical
/// append order: `Category::Element < Category::Id` and so on down the list.
/// Setters compare the category they would append against the highest
/// category already populated and refuse to move backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Type selector per [§ 5.1 Type (tag name) selector](https://www.w3.org/TR/selectors-4/#type-selectors).
    ///
    /// Example: `div`
    Element,
    /// ID selector per [§ 6.7 ID selectors](https://www.w3.org/TR/selectors-4/#id-selectors).
    ///
    /// Example: `#main`
    Id,
    /// Class selector per [§ 6.6 Class selectors](https://www.w3.org/TR/selectors-4/#class-html).
    ///
    /// Example: `.menu-item`
    Class,
    /// Attribute selector per [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors).
    ///
    /// Example: `[href$=".png"]`
    Attribute,
    /// Pseudo-class per [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes).
    ///
    /// Example: `:hover`
    PseudoClass,
    /// Pseudo-element per [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements).
    ///
    /// Example: `::before`
    PseudoElement,
}
