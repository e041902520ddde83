//! Compound selector accumulation.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound):
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator ... If it contains a type selector or universal
//! selector, that selector must come first in the sequence."

use std::fmt;

use serde::Serialize;

use crate::category::Category;
use crate::error::BuildError;

/// An ordered accumulation of simple-selector fragments.
///
/// Fragments are appended one category at a time through the consuming
/// setters, which enforce the canonical order (element, id, class,
/// attribute, pseudo-class, pseudo-element) and reject repeats of the
/// single-occurrence categories. Tokens are stored verbatim; no CSS grammar
/// validation happens here.
///
/// The [`Default`] builder holds no fragments and renders as the empty
/// string.
///
/// ```
/// use selkie_selector::element;
///
/// # fn main() -> Result<(), selkie_selector::BuildError> {
/// let selector = element("div").id("main")?.class("a")?.class("b")?;
/// assert_eq!(selector.to_string(), "div#main.a.b");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CompoundSelector {
    /// Type selector token, rendered bare. Example: `div`.
    element: Option<String>,
    /// ID token, rendered with a `#` prefix. Example: `#main`.
    id: Option<String>,
    /// Class tokens, each rendered with a `.` prefix. Example: `.menu-item`.
    classes: Vec<String>,
    /// Attribute clauses, each rendered in square brackets.
    /// Example: `[href$=".png"]`.
    attributes: Vec<String>,
    /// Pseudo-class tokens, each rendered with a `:` prefix.
    /// Example: `:hover`.
    pseudo_classes: Vec<String>,
    /// Pseudo-element token, rendered with a `::` prefix.
    /// Example: `::before`.
    pseudo_element: Option<String>,
}

/// Starts a selector from a type selector token.
///
/// Example: `element("div")` renders as `div`.
#[must_use]
pub fn element(token: &str) -> CompoundSelector {
    CompoundSelector {
        element: Some(token.to_string()),
        ..CompoundSelector::default()
    }
}

/// Starts a selector from an ID token.
///
/// Example: `id("main")` renders as `#main`.
#[must_use]
pub fn id(token: &str) -> CompoundSelector {
    CompoundSelector {
        id: Some(token.to_string()),
        ..CompoundSelector::default()
    }
}

/// Starts a selector from a class token.
///
/// Example: `class("menu-item")` renders as `.menu-item`.
#[must_use]
pub fn class(token: &str) -> CompoundSelector {
    CompoundSelector {
        classes: vec![token.to_string()],
        ..CompoundSelector::default()
    }
}

/// Starts a selector from an attribute clause.
///
/// Example: `attr("disabled")` renders as `[disabled]`.
#[must_use]
pub fn attr(clause: &str) -> CompoundSelector {
    CompoundSelector {
        attributes: vec![clause.to_string()],
        ..CompoundSelector::default()
    }
}

/// Starts a selector from a pseudo-class token.
///
/// Example: `pseudo_class("hover")` renders as `:hover`.
#[must_use]
pub fn pseudo_class(token: &str) -> CompoundSelector {
    CompoundSelector {
        pseudo_classes: vec![token.to_string()],
        ..CompoundSelector::default()
    }
}

/// Starts a selector from a pseudo-element token.
///
/// Example: `pseudo_element("before")` renders as `::before`.
#[must_use]
pub fn pseudo_element(token: &str) -> CompoundSelector {
    CompoundSelector {
        pseudo_element: Some(token.to_string()),
        ..CompoundSelector::default()
    }
}

impl CompoundSelector {
    /// The highest-ranked category currently populated, derived from the
    /// field states on every call rather than stored.
    fn highest_populated(&self) -> Option<Category> {
        if self.pseudo_element.is_some() {
            Some(Category::PseudoElement)
        } else if !self.pseudo_classes.is_empty() {
            Some(Category::PseudoClass)
        } else if !self.attributes.is_empty() {
            Some(Category::Attribute)
        } else if !self.classes.is_empty() {
            Some(Category::Class)
        } else if self.id.is_some() {
            Some(Category::Id)
        } else if self.element.is_some() {
            Some(Category::Element)
        } else {
            None
        }
    }

    /// Checks that appending a fragment of `attempted` would not move
    /// backwards through the canonical order.
    fn admit(&self, attempted: Category) -> Result<(), BuildError> {
        match self.highest_populated() {
            Some(populated) if attempted < populated => Err(BuildError::OutOfOrder {
                attempted,
                populated,
            }),
            _ => Ok(()),
        }
    }

    /// Sets the type selector token per
    /// [§ 5.1 Type (tag name) selector](https://www.w3.org/TR/selectors-4/#type-selectors).
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DuplicateCategory`] if a type selector is
    /// already set, or [`BuildError::OutOfOrder`] if any other category is
    /// already populated.
    pub fn element(mut self, token: &str) -> Result<Self, BuildError> {
        if self.element.is_some() {
            return Err(BuildError::DuplicateCategory(Category::Element));
        }
        self.admit(Category::Element)?;
        self.element = Some(token.to_string());
        Ok(self)
    }

    /// Sets the ID token per
    /// [§ 6.7 ID selectors](https://www.w3.org/TR/selectors-4/#id-selectors).
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DuplicateCategory`] if an ID is already set, or
    /// [`BuildError::OutOfOrder`] if a category ranked above id is already
    /// populated.
    pub fn id(mut self, token: &str) -> Result<Self, BuildError> {
        if self.id.is_some() {
            return Err(BuildError::DuplicateCategory(Category::Id));
        }
        self.admit(Category::Id)?;
        self.id = Some(token.to_string());
        Ok(self)
    }

    /// Appends a class token per
    /// [§ 6.6 Class selectors](https://www.w3.org/TR/selectors-4/#class-html).
    ///
    /// Classes may repeat; tokens render in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::OutOfOrder`] if a category ranked above class
    /// is already populated.
    pub fn class(mut self, token: &str) -> Result<Self, BuildError> {
        self.admit(Category::Class)?;
        self.classes.push(token.to_string());
        Ok(self)
    }

    /// Appends an attribute clause per
    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors).
    ///
    /// The clause is bracketed verbatim, so `attr(r#"href$=".png""#)`
    /// renders as `[href$=".png"]`. Attributes may repeat; clauses render in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::OutOfOrder`] if a pseudo-class or
    /// pseudo-element is already populated.
    pub fn attr(mut self, clause: &str) -> Result<Self, BuildError> {
        self.admit(Category::Attribute)?;
        self.attributes.push(clause.to_string());
        Ok(self)
    }

    /// Appends a pseudo-class token per
    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes).
    ///
    /// Pseudo-classes may repeat; tokens render in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::OutOfOrder`] if a pseudo-element is already
    /// populated.
    pub fn pseudo_class(mut self, token: &str) -> Result<Self, BuildError> {
        self.admit(Category::PseudoClass)?;
        self.pseudo_classes.push(token.to_string());
        Ok(self)
    }

    /// Sets the pseudo-element token per
    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements).
    ///
    /// Pseudo-element is the highest-ranked category, so ordering can never
    /// reject it.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DuplicateCategory`] if a pseudo-element is
    /// already set.
    pub fn pseudo_element(mut self, token: &str) -> Result<Self, BuildError> {
        if self.pseudo_element.is_some() {
            return Err(BuildError::DuplicateCategory(Category::PseudoElement));
        }
        self.pseudo_element = Some(token.to_string());
        Ok(self)
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            write!(f, "{element}")?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attribute in &self.attributes {
            write!(f, "[{attribute}]")?;
        }
        for pseudo_class in &self.pseudo_classes {
            write!(f, ":{pseudo_class}")?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            write!(f, "::{pseudo_element}")?;
        }
        Ok(())
    }
}
