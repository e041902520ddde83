//! Integration tests for selector combination and tree rendering.

use selkie_selector::{Combinator, Selector, combine, element};

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_child_combination_renders_with_token() {
    let selector = combine(
        element("div").id("main").unwrap(),
        Combinator::Child,
        element("span"),
    );
    assert_eq!(selector.to_string(), "div#main > span");
}

#[test]
fn test_next_sibling_combination_renders_with_token() {
    let selector = combine(element("h1"), Combinator::NextSibling, element("p"));
    assert_eq!(selector.to_string(), "h1 + p");
}

#[test]
fn test_subsequent_sibling_combination_renders_with_token() {
    let selector = combine(element("h1"), Combinator::SubsequentSibling, element("p"));
    assert_eq!(selector.to_string(), "h1 ~ p");
}

#[test]
fn test_descendant_token_is_itself_a_space() {
    let selector = combine(element("ul"), Combinator::Descendant, element("li"));
    // left + " " + token + " " + right with a space token: three spaces.
    assert_eq!(selector.to_string(), "ul   li");
}

#[test]
fn test_combined_trees_nest_on_either_side() {
    let left = combine(element("div"), Combinator::Child, element("ul"));
    let right = combine(element("li"), Combinator::Child, element("a"));
    let selector = combine(left, Combinator::SubsequentSibling, right);
    assert_eq!(selector.to_string(), "div > ul ~ li > a");
}

// =============================================================================
// Tree structure
// =============================================================================

#[test]
fn test_accessors_expose_the_tree_read_only() {
    let selector = combine(element("ul"), Combinator::Child, element("li"));
    assert_eq!(selector.combinator(), Combinator::Child);
    assert!(matches!(selector.left(), Selector::Compound(compound) if compound.to_string() == "ul"));
    assert!(matches!(selector.right(), Selector::Compound(compound) if compound.to_string() == "li"));
}

#[test]
fn test_nested_tree_accessors() {
    let inner = combine(element("ul"), Combinator::Child, element("li"));
    let outer = combine(inner.clone(), Combinator::NextSibling, element("p"));
    assert!(matches!(outer.left(), Selector::Complex(complex) if *complex == inner));
    assert!(matches!(outer.right(), Selector::Compound(_)));
}

#[test]
fn test_selector_wraps_both_leaf_and_tree() {
    let leaf = Selector::from(element("div"));
    assert_eq!(leaf.to_string(), "div");

    let tree = Selector::from(combine(element("ul"), Combinator::Child, element("li")));
    assert_eq!(tree.to_string(), "ul > li");
}

// =============================================================================
// Combinator tokens
// =============================================================================

#[test]
fn test_combinator_tokens_display() {
    assert_eq!(Combinator::Descendant.to_string(), " ");
    assert_eq!(Combinator::Child.to_string(), ">");
    assert_eq!(Combinator::NextSibling.to_string(), "+");
    assert_eq!(Combinator::SubsequentSibling.to_string(), "~");
}

#[test]
fn test_combinator_tokens_parse_back() {
    assert_eq!(" ".parse::<Combinator>().unwrap(), Combinator::Descendant);
    assert_eq!(">".parse::<Combinator>().unwrap(), Combinator::Child);
    assert_eq!("+".parse::<Combinator>().unwrap(), Combinator::NextSibling);
    assert_eq!(
        "~".parse::<Combinator>().unwrap(),
        Combinator::SubsequentSibling
    );
}

#[test]
fn test_unknown_combinator_token_fails_to_parse() {
    assert!(">>".parse::<Combinator>().is_err());
    assert!("".parse::<Combinator>().is_err());
}
