//! Typed selector fragments.
//!
//! A compound selector is a run of simple selectors written without
//! separators:
//!
//! ```text
//! element#id.class[attr]:pseudo-class::pseudo-element
//!           \----/\----/\-----------/
//!           may repeat
//! ```
//!
//! Each piece is stored as a [`Fragment`]: its [`FragmentKind`] plus the exact
//! text it serializes to. Ordering and uniqueness are looked up from the kind,
//! never sniffed from the text.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a selector fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FragmentKind {
    /// Type selector: `div`, `a`, `tr`.
    Element,
    /// `#main`
    Id,
    /// `.container`
    Class,
    /// `[href$=".png"]`
    Attribute,
    /// `:focus`
    PseudoClass,
    /// `::before`
    PseudoElement,
    /// Pre-combined text: a combinator followed by a serialized selector.
    Literal,
}

impl FragmentKind {
    /// Position of this kind in a compound selector.
    ///
    /// Fragments must be appended in non-decreasing rank. `Literal` has no
    /// rank and is never checked.
    pub fn rank(self) -> Option<u8> {
        match self {
            FragmentKind::Element => Some(0),
            FragmentKind::Id => Some(1),
            FragmentKind::Class => Some(2),
            FragmentKind::Attribute => Some(3),
            FragmentKind::PseudoClass => Some(4),
            FragmentKind::PseudoElement => Some(5),
            FragmentKind::Literal => None,
        }
    }

    /// Whether at most one fragment of this kind may appear in a selector.
    pub fn is_unique(self) -> bool {
        matches!(
            self,
            FragmentKind::Element | FragmentKind::Id | FragmentKind::PseudoElement
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FragmentKind::Element => "element",
            FragmentKind::Id => "id",
            FragmentKind::Class => "class",
            FragmentKind::Attribute => "attribute",
            FragmentKind::PseudoClass => "pseudo-class",
            FragmentKind::PseudoElement => "pseudo-element",
            FragmentKind::Literal => "literal",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One atomic piece of a selector, already in its serialized form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fragment {
    kind: FragmentKind,
    text: String,
}

impl Fragment {
    pub fn element(name: &str) -> Self {
        Self::new(FragmentKind::Element, name.to_string())
    }

    pub fn id(name: &str) -> Self {
        Self::new(FragmentKind::Id, format!("#{name}"))
    }

    pub fn class(name: &str) -> Self {
        Self::new(FragmentKind::Class, format!(".{name}"))
    }

    /// The condition is written verbatim: `href$=".png"` becomes `[href$=".png"]`.
    pub fn attribute(condition: &str) -> Self {
        Self::new(FragmentKind::Attribute, format!("[{condition}]"))
    }

    pub fn pseudo_class(name: &str) -> Self {
        Self::new(FragmentKind::PseudoClass, format!(":{name}"))
    }

    pub fn pseudo_element(name: &str) -> Self {
        Self::new(FragmentKind::PseudoElement, format!("::{name}"))
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(FragmentKind::Literal, text.into())
    }

    fn new(kind: FragmentKind, text: String) -> Self {
        Self { kind, text }
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_match_kind() {
        assert_eq!(Fragment::element("div").text(), "div");
        assert_eq!(Fragment::id("main").text(), "#main");
        assert_eq!(Fragment::class("container").text(), ".container");
        assert_eq!(Fragment::attribute("href$=\".png\"").text(), "[href$=\".png\"]");
        assert_eq!(Fragment::pseudo_class("focus").text(), ":focus");
        assert_eq!(Fragment::pseudo_element("before").text(), "::before");
    }

    #[test]
    fn ranks_are_strictly_increasing_in_css_order() {
        let order = [
            FragmentKind::Element,
            FragmentKind::Id,
            FragmentKind::Class,
            FragmentKind::Attribute,
            FragmentKind::PseudoClass,
            FragmentKind::PseudoElement,
        ];
        for pair in order.windows(2) {
            assert!(pair[0].rank() < pair[1].rank(), "{} vs {}", pair[0], pair[1]);
        }
        assert_eq!(FragmentKind::Literal.rank(), None);
    }

    #[test]
    fn kind_is_not_inferred_from_text() {
        // Kind is carried explicitly, so odd names don't get misclassified.
        let fragment = Fragment::element("h1");
        assert_eq!(fragment.kind(), FragmentKind::Element);
        let fragment = Fragment::pseudo_class(":weird");
        assert_eq!(fragment.kind(), FragmentKind::PseudoClass);
    }

    #[test]
    fn only_element_id_and_pseudo_element_are_unique() {
        assert!(FragmentKind::Element.is_unique());
        assert!(FragmentKind::Id.is_unique());
        assert!(FragmentKind::PseudoElement.is_unique());
        assert!(!FragmentKind::Class.is_unique());
        assert!(!FragmentKind::Attribute.is_unique());
        assert!(!FragmentKind::PseudoClass.is_unique());
        assert!(!FragmentKind::Literal.is_unique());
    }
}
