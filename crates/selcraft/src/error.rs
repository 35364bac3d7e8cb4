//! Builder errors.
//!
//! Every error names the offending fragment category, so callers can
//! report which call in a chain violated the selector grammar. None of
//! the errors are recoverable by retrying: the call sequence itself is
//! wrong.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The six fragment categories of a compound selector, in grammar order.
///
/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
/// fixes the order in which the categories may appear: element, id,
/// class, attribute, pseudo-class, pseudo-element. The derived `Ord`
/// reflects that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SelectorPart {
    /// Type selector, e.g. `div` ([§ 5.1](https://www.w3.org/TR/selectors-4/#type-selectors))
    Element,
    /// ID selector, e.g. `#main` ([§ 6.7](https://www.w3.org/TR/selectors-4/#id-selectors))
    Id,
    /// Class selector, e.g. `.container` ([§ 6.6](https://www.w3.org/TR/selectors-4/#class-html))
    Class,
    /// Attribute selector, e.g. `[href]` ([§ 6.4](https://www.w3.org/TR/selectors-4/#attribute-selectors))
    Attribute,
    /// Pseudo-class, e.g. `:focus` ([§ 4](https://www.w3.org/TR/selectors-4/#pseudo-classes))
    PseudoClass,
    /// Pseudo-element, e.g. `::before` ([§ 11](https://www.w3.org/TR/selectors-4/#pseudo-elements))
    PseudoElement,
}

impl SelectorPart {
    /// The CSS-author-facing name of this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An invalid builder call sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A singleton category (element, id, or pseudo-element) received a
    /// second value.
    #[error("{0} should not occur more than one time inside the selector")]
    DuplicatePart(SelectorPart),

    /// A category was appended after a later-ordered category had
    /// already been populated.
    #[error(
        "{part} added after {after}: selector parts should be arranged in the following order: \
         element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder {
        /// The category the caller tried to add.
        part: SelectorPart,
        /// The already-populated category that forbids it.
        after: SelectorPart,
    },

    /// A fragment operation was called on the result of a combine.
    /// Combined selectors render their stored text verbatim, so further
    /// fragments would be silently lost; the call is rejected instead.
    #[error("cannot add {0} to a combined selector")]
    AlreadyCombined(SelectorPart),
}
