//! Fluent, persistent builder for CSS selector strings.
//!
//! # Scope
//!
//! This crate implements selector construction per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/):
//! - **Simple selector fragments**
//!   - Type, ID, class, attribute, pseudo-class, and pseudo-element
//!     fragments ([§ 5](https://www.w3.org/TR/selectors-4/#elemental-selectors),
//!     [§ 6](https://www.w3.org/TR/selectors-4/#attribute-selectors))
//!   - Grammar-order enforcement: element, id, class, attribute,
//!     pseudo-class, pseudo-element
//!   - Arity enforcement: at most one type, ID, or pseudo-element per
//!     compound selector
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Joining two built selectors with a verbatim combinator token
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!   - The (A, B, C) triple for every built selector, including combined
//!     selectors
//!
//! Every builder operation returns a *new* [`Selector`] and leaves its
//! receiver untouched, so any intermediate state can be reused as the
//! shared prefix of several independent selectors.
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), selcraft::SelectorError> {
//! use selcraft::Selector;
//!
//! let link = Selector::new()
//!     .element("a")?
//!     .attr("href$=\".png\"")?
//!     .pseudo_class("focus")?;
//! assert_eq!(link.stringify(), "a[href$=\".png\"]:focus");
//!
//! let row = Selector::new().element("tr")?;
//! let cell = Selector::new().element("td")?;
//! let pair = Selector::combine(&row, ">", &cell);
//! assert_eq!(pair.stringify(), "tr > td");
//! # Ok(())
//! # }
//! ```
//!
//! # Not in scope
//!
//! - Selector *parsing* (text to structure)
//! - Matching selectors against a document tree
//! - Validation of fragment contents (names and attribute expressions are
//!   copied verbatim)

/// Selector construction per [Selectors Level 4 § 4 Selector syntax](https://www.w3.org/TR/selectors-4/#syntax).
pub mod builder;
/// Builder errors for grammar-order and arity violations.
pub mod error;
/// Specificity calculation per [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules).
pub mod specificity;

// Re-exports for convenience
pub use builder::Selector;
pub use error::{SelectorError, SelectorPart};
pub use specificity::Specificity;
