//! Fluent construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selector accumulation** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - One fragment category per setter: element, id, class, attribute,
//!     pseudo-class, pseudo-element
//!   - Category rank checked on every setter call
//!   - Single-occurrence categories rejected on repeat
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling, and subsequent-sibling tokens
//!   - Token text round trips through `Display`/`FromStr`
//!
//! - **Complex selector trees** ([§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex))
//!   - [`combine`] joins any two renderable selectors into an immutable tree
//!   - Rendering walks the tree on demand
//!
//! Tokens are taken verbatim: the builder orders and prefixes fragments but
//! does not parse selector strings or validate tokens against the CSS
//! grammar.
//!
//! # Example
//!
//! ```
//! use selkie_selector::{Combinator, combine, element};
//!
//! # fn main() -> Result<(), selkie_selector::BuildError> {
//! let item = element("li").class("menu-item")?;
//! let menu = element("ul").id("menu")?;
//! let selector = combine(menu, Combinator::Child, item);
//! assert_eq!(selector.to_string(), "ul#menu > li.menu-item");
//! # Ok(())
//! # }
//! ```

/// Fragment categories and their fixed rank order.
pub mod category;
/// Combinator tokens per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Complex selector trees per [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex).
pub mod complex;
/// Compound selector accumulation per [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound).
pub mod compound;
/// Ordering and uniqueness violations raised by the builder.
pub mod error;

// Re-exports for convenience
pub use category::Category;
pub use combinator::Combinator;
pub use complex::{ComplexSelector, Selector, combine};
pub use compound::{CompoundSelector, attr, class, element, id, pseudo_class, pseudo_element};
pub use error::BuildError;
