//! Ordering and uniqueness violations raised while building a selector.

use thiserror::Error;

use crate::category::Category;

/// A rejected setter call on a [`CompoundSelector`](crate::CompoundSelector).
///
/// Setters consume the builder, so a rejected call also discards the state
/// accumulated so far. Callers that want to survive a rejection clone the
/// builder before the fallible call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A single-occurrence category was set a second time.
    ///
    /// Element, id, and pseudo-element fragments may each appear at most
    /// once in a compound selector. Classes, attributes, and pseudo-classes
    /// may repeat.
    #[error("{0} is already set and may appear at most once")]
    DuplicateCategory(Category),

    /// A fragment arrived after a higher-ranked category was populated.
    ///
    /// Appending is monotonic in [`Category`] rank: element, id, class,
    /// attribute, pseudo-class, pseudo-element. Once any category is
    /// populated, fragments of lower-ranked categories are refused.
    #[error("{attempted} cannot be added once {populated} is populated")]
    OutOfOrder {
        /// Category of the rejected fragment.
        attempted: Category,
        /// Highest-ranked category already populated on the builder.
        populated: Category,
    },
}
