//! Combinators joining two selectors.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SelectorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Combinator {
    Descendant,      // ' '
    Child,           // >
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

impl Combinator {
    /// The token as written between two selectors (before padding).
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }

    /// The token padded with one space on each side.
    ///
    /// Descendant is padded too, so it renders as three spaces.
    pub fn padded(self) -> String {
        format!(" {} ", self.as_str())
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            ">" => Ok(Combinator::Child),
            "+" => Ok(Combinator::AdjacentSibling),
            "~" => Ok(Combinator::GeneralSibling),
            "" if !token.is_empty() => Ok(Combinator::Descendant),
            _ => Err(SelectorError::InvalidCombinator(token.to_string())),
        }
    }
}

impl TryFrom<char> for Combinator {
    type Error = SelectorError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            ' ' => Ok(Combinator::Descendant),
            '>' => Ok(Combinator::Child),
            '+' => Ok(Combinator::AdjacentSibling),
            '~' => Ok(Combinator::GeneralSibling),
            other => Err(SelectorError::InvalidCombinator(other.to_string())),
        }
    }
}
