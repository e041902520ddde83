//! Complex selector trees.
//!
//! [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex):
//! "A complex selector is a sequence of one or more compound selectors
//! separated by combinators."

use std::fmt;

use serde::Serialize;

use crate::combinator::Combinator;
use crate::compound::CompoundSelector;

/// Either side of a combination: a leaf compound selector or a previously
/// combined tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selector {
    /// A leaf compound selector.
    Compound(CompoundSelector),
    /// A combined tree, itself combinable further.
    Complex(ComplexSelector),
}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl From<ComplexSelector> for Selector {
    fn from(complex: ComplexSelector) -> Self {
        Self::Complex(complex)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => write!(f, "{compound}"),
            Self::Complex(complex) => write!(f, "{complex}"),
        }
    }
}

/// Two selectors joined by a combinator.
///
/// The tree is immutable once built; [`combine`] is the only constructor
/// and the accessors expose the parts read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexSelector {
    combinator: Combinator,
    left: Box<Selector>,
    right: Box<Selector>,
}

impl ComplexSelector {
    /// The combinator joining the two sides.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// The left operand.
    #[must_use]
    pub fn left(&self) -> &Selector {
        &self.left
    }

    /// The right operand.
    #[must_use]
    pub fn right(&self) -> &Selector {
        &self.right
    }
}

impl fmt::Display for ComplexSelector {
    /// Renders `left`, the combinator token, and `right` separated by single
    /// spaces. The descendant token is itself a space, so descendant
    /// combinations render with three spaces between the operands.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}

/// Joins two selectors into a complex selector tree per
/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex).
///
/// Both operands move into the tree; either may be a compound selector or a
/// previously combined tree, so combinations nest to any depth.
///
/// ```
/// use selkie_selector::{Combinator, combine, element};
///
/// # fn main() -> Result<(), selkie_selector::BuildError> {
/// let heading = combine(element("div").id("main")?, Combinator::Child, element("span"));
/// assert_eq!(heading.to_string(), "div#main > span");
///
/// let nested = combine(heading, Combinator::NextSibling, element("p"));
/// assert_eq!(nested.to_string(), "div#main > span + p");
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn combine(
    left: impl Into<Selector>,
    combinator: Combinator,
    right: impl Into<Selector>,
) -> ComplexSelector {
    ComplexSelector {
        combinator,
        left: Box::new(left.into()),
        right: Box::new(right.into()),
    }
}
