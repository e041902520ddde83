//! Combinator tokens between selectors.
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators):
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Punctuation joining the two sides of a complex selector.
///
/// [`Display`](std::fmt::Display) renders the CSS token and
/// [`FromStr`](std::str::FromStr) parses it back, so
/// `" ".parse::<Combinator>()` yields [`Combinator::Descendant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// Descendant combinator per
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators):
    /// "A descendant combinator is whitespace that separates two compound
    /// selectors."
    ///
    /// Example: `ul li`
    #[strum(serialize = " ")]
    Descendant,
    /// Child combinator per
    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators):
    /// "A child combinator describes a childhood relationship between two
    /// elements."
    ///
    /// Example: `ul > li`
    #[strum(serialize = ">")]
    Child,
    /// Next-sibling combinator per
    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators):
    /// "The elements represented by the two compound selectors share the
    /// same parent in the document tree and the element represented by the
    /// first compound selector immediately precedes the element represented
    /// by the second one."
    ///
    /// Example: `h1 + p`
    #[strum(serialize = "+")]
    NextSibling,
    /// Subsequent-sibling combinator per
    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators):
    /// "The subsequent-sibling combinator is made of the 'tilde' (U+007E, ~)
    /// character that separates two compound selectors."
    ///
    /// Example: `h1 ~ p`
    #[strum(serialize = "~")]
    SubsequentSibling,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_render_as_css_punctuation() {
        assert_eq!(Combinator::Descendant.to_string(), " ");
        assert_eq!(Combinator::Child.to_string(), ">");
        assert_eq!(Combinator::NextSibling.to_string(), "+");
        assert_eq!(Combinator::SubsequentSibling.to_string(), "~");
    }

    #[test]
    fn test_tokens_parse_back() {
        assert_eq!(" ".parse::<Combinator>().unwrap(), Combinator::Descendant);
        assert_eq!(">".parse::<Combinator>().unwrap(), Combinator::Child);
        assert_eq!("+".parse::<Combinator>().unwrap(), Combinator::NextSibling);
        assert_eq!(
            "~".parse::<Combinator>().unwrap(),
            Combinator::SubsequentSibling
        );
    }
}
