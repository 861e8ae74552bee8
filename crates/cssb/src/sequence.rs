//! Append-only fragment sequences.
//!
//! [`FragmentSequence`] owns the ordering and uniqueness rules. Appending never
//! touches the receiver: a fresh sequence is returned, so any sequence can be
//! shared as a prefix by several continuations.

use std::fmt;

use bitflags::bitflags;

use crate::error::SelectorError;
use crate::fragment::{Fragment, FragmentKind};

bitflags! {
    /// Single-use kinds already present in a sequence.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    struct UniqueKinds: u8 {
        const ELEMENT = 1 << 0;
        const ID = 1 << 1;
        const PSEUDO_ELEMENT = 1 << 2;
    }
}

impl UniqueKinds {
    fn of(kind: FragmentKind) -> Self {
        match kind {
            FragmentKind::Element => UniqueKinds::ELEMENT,
            FragmentKind::Id => UniqueKinds::ID,
            FragmentKind::PseudoElement => UniqueKinds::PSEUDO_ELEMENT,
            _ => UniqueKinds::empty(),
        }
    }
}

/// An ordered list of fragments; insertion order is output order.
///
/// Only non-literal fragments take part in validation. A literal may be
/// appended anywhere, and later checked fragments are compared against the
/// last checked fragment before it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FragmentSequence {
    fragments: Vec<Fragment>,
    unique: UniqueKinds,
    /// Last checked (non-literal) kind.
    last: Option<FragmentKind>,
}

impl FragmentSequence {
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
            unique: UniqueKinds::empty(),
            last: None,
        }
    }

    /// Returns a copy of this sequence with `fragment` appended.
    ///
    /// Fails with [`SelectorError::DuplicateKind`] when an element, id or
    /// pseudo-element is added twice, and with [`SelectorError::OrderViolation`]
    /// when the fragment ranks below the last checked fragment.
    pub fn append(&self, fragment: Fragment) -> Result<FragmentSequence, SelectorError> {
        let kind = fragment.kind();
        let mut next = self.clone();

        if let Some(rank) = kind.rank() {
            self.validate(kind, rank)?;
            next.unique |= UniqueKinds::of(kind);
            next.last = Some(kind);
        }

        next.fragments.push(fragment);
        Ok(next)
    }

    /// Appends a literal. Literals are never validated, so this cannot fail.
    pub(crate) fn append_literal(&self, text: String) -> FragmentSequence {
        let mut next = self.clone();
        next.fragments.push(Fragment::literal(text));
        next
    }

    fn validate(&self, kind: FragmentKind, rank: u8) -> Result<(), SelectorError> {
        if kind.is_unique() && self.unique.contains(UniqueKinds::of(kind)) {
            log::debug!("rejecting duplicate {kind} in `{self}`");
            return Err(SelectorError::DuplicateKind { kind });
        }

        if let Some(after) = self.last {
            if after.rank().is_some_and(|last_rank| last_rank > rank) {
                log::debug!("rejecting {kind} after {after} in `{self}`");
                return Err(SelectorError::OrderViolation { kind, after });
            }
        }

        Ok(())
    }

    /// Concatenates fragment texts in order, without separators.
    pub fn serialize(&self) -> String {
        self.fragments.iter().map(Fragment::text).collect()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl fmt::Display for FragmentSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment.text())?;
        }
        Ok(())
    }
}
