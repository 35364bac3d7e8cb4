//! Fluent selector construction.
//!
//! This module implements building (not parsing) of selector text per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! A [`Selector`] is a persistent snapshot: every fragment operation
//! validates the grammar, then returns a new value derived from its
//! receiver. The receiver is never mutated, so one partially built
//! selector can branch into several independent ones.

use std::fmt;

use crate::error::{SelectorError, SelectorPart};
use crate::specificity::Specificity;

/// The rendered result of a [`Selector::combine`] call.
///
/// Once combined, the text is final; the operands' structure is not
/// retained. Their summed specificity is captured here because it can no
/// longer be recomputed from the text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Combined {
    text: String,
    specificity: Specificity,
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// A selector under construction: either a compound selector being
/// assembled fragment by fragment, or the frozen result of a combine.
///
/// Fragment categories must be added in grammar order (element, id,
/// class, attribute, pseudo-class, pseudo-element), and the singleton
/// categories (element, id, pseudo-element) at most once. Violations are
/// reported at the offending call, not deferred to [`Selector::stringify`].
///
/// ```
/// # fn main() -> Result<(), selcraft::SelectorError> {
/// use selcraft::Selector;
///
/// let sel = Selector::new().id("main")?.class("container")?.class("editable")?;
/// assert_eq!(sel.stringify(), "#main.container.editable");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    combined: Option<Combined>,
}

impl Selector {
    /// The empty selector, the root of every builder chain.
    ///
    /// Stringifies to the empty string until a fragment is added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Sets the type fragment, rendered as `name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if a type fragment is already
    /// set; [`SelectorError::OutOfOrder`] if any later category is
    /// already populated (the type must come first);
    /// [`SelectorError::AlreadyCombined`] on a combined selector.
    pub fn element(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_simple(SelectorPart::Element)?;
        if self.tag.is_some() {
            return Err(SelectorError::DuplicatePart(SelectorPart::Element));
        }
        self.check_order(SelectorPart::Element)?;
        let mut next = self.clone();
        next.tag = Some(name.into());
        Ok(next)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value."
    ///
    /// Sets the ID fragment, rendered as `#name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if an ID is already set;
    /// [`SelectorError::OutOfOrder`] if class, attribute, pseudo-class,
    /// or pseudo-element is already populated;
    /// [`SelectorError::AlreadyCombined`] on a combined selector.
    pub fn id(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_simple(SelectorPart::Id)?;
        if self.id.is_some() {
            return Err(SelectorError::DuplicatePart(SelectorPart::Id));
        }
        self.check_order(SelectorPart::Id)?;
        let mut next = self.clone();
        next.id = Some(name.into());
        Ok(next)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Appends a class fragment, rendered as `.name`. Repeated classes
    /// are legal in CSS (though redundant), so no duplicate check.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if attribute, pseudo-class, or
    /// pseudo-element is already populated;
    /// [`SelectorError::AlreadyCombined`] on a combined selector.
    pub fn class(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_simple(SelectorPart::Class)?;
        self.check_order(SelectorPart::Class)?;
        let mut next = self.clone();
        next.classes.push(name.into());
        Ok(next)
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Appends an attribute fragment, rendered as `[expr]`. The
    /// expression is copied verbatim; `href`, `type=text`, and
    /// `href$=".png"` are all valid inputs.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if pseudo-class or pseudo-element
    /// is already populated; [`SelectorError::AlreadyCombined`] on a
    /// combined selector.
    pub fn attr(&self, expr: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_simple(SelectorPart::Attribute)?;
        self.check_order(SelectorPart::Attribute)?;
        let mut next = self.clone();
        next.attributes.push(expr.into());
        Ok(next)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Appends a pseudo-class fragment, rendered as `:name`. Functional
    /// notation is passed through, e.g. `nth-of-type(even)`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-element is already set;
    /// [`SelectorError::AlreadyCombined`] on a combined selector.
    pub fn pseudo_class(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_simple(SelectorPart::PseudoClass)?;
        self.check_order(SelectorPart::PseudoClass)?;
        let mut next = self.clone();
        next.pseudo_classes.push(name.into());
        Ok(next)
    }

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Sets the pseudo-element fragment, rendered as `::name`. No
    /// later-ordered category exists, so only arity is checked.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if a pseudo-element is already
    /// set; [`SelectorError::AlreadyCombined`] on a combined selector.
    pub fn pseudo_element(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_simple(SelectorPart::PseudoElement)?;
        if self.pseudo_element.is_some() {
            return Err(SelectorError::DuplicatePart(SelectorPart::PseudoElement));
        }
        let mut next = self.clone();
        next.pseudo_element = Some(name.into());
        Ok(next)
    }

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    /// "A combinator is punctuation that represents a particular kind of
    /// relationship between the selectors on either side."
    ///
    /// Join two built selectors into `"{left} {combinator} {right}"`,
    /// with exactly one space on each side of the token. The token is
    /// inserted verbatim and not validated against the standard set
    /// (`' '`, `+`, `~`, `>`); a descendant-space combinator therefore
    /// produces a three-space run between the operand texts.
    ///
    /// The operands may themselves be combined selectors; left/right
    /// order is preserved in the output.
    ///
    /// ```
    /// # fn main() -> Result<(), selcraft::SelectorError> {
    /// use selcraft::Selector;
    ///
    /// let list = Selector::new().element("ul")?;
    /// let item = Selector::new().element("li")?;
    /// assert_eq!(Selector::combine(&list, ">", &item).stringify(), "ul > li");
    /// assert_eq!(Selector::combine(&list, " ", &item).stringify(), "ul   li");
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn combine(left: &Self, combinator: &str, right: &Self) -> Self {
        let text = format!("{left} {combinator} {right}");
        let specificity = left.specificity() + right.specificity();
        Self {
            combined: Some(Combined { text, specificity }),
            ..Self::default()
        }
    }

    /// Render the selector text.
    ///
    /// A combined selector returns its stored text verbatim. Otherwise
    /// the populated categories are concatenated in grammar order with
    /// no extra separators. Never fails; the empty selector renders as
    /// the empty string.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// The (A, B, C) specificity of this selector: ID fragments count
    /// toward A; class, attribute, and pseudo-class fragments toward B;
    /// type and pseudo-element fragments toward C. A combined selector
    /// reports the sum of its operands' specificities, captured when it
    /// was combined.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        if let Some(combined) = &self.combined {
            return combined.specificity;
        }
        let breadth = self.classes.len() + self.attributes.len() + self.pseudo_classes.len();
        Specificity(
            u32::from(self.id.is_some()),
            u32::try_from(breadth).unwrap_or(u32::MAX),
            u32::from(self.tag.is_some()) + u32::from(self.pseudo_element.is_some()),
        )
    }

    /// Whether this selector is the frozen result of a combine.
    #[must_use]
    pub const fn is_combined(&self) -> bool {
        self.combined.is_some()
    }

    /// The latest-ordered category with a value, if any.
    fn last_populated(&self) -> Option<SelectorPart> {
        if self.pseudo_element.is_some() {
            Some(SelectorPart::PseudoElement)
        } else if !self.pseudo_classes.is_empty() {
            Some(SelectorPart::PseudoClass)
        } else if !self.attributes.is_empty() {
            Some(SelectorPart::Attribute)
        } else if !self.classes.is_empty() {
            Some(SelectorPart::Class)
        } else if self.id.is_some() {
            Some(SelectorPart::Id)
        } else if self.tag.is_some() {
            Some(SelectorPart::Element)
        } else {
            None
        }
    }

    /// Reject fragment operations on a combined selector.
    fn check_simple(&self, part: SelectorPart) -> Result<(), SelectorError> {
        if self.combined.is_some() {
            return Err(SelectorError::AlreadyCombined(part));
        }
        Ok(())
    }

    /// Reject `part` if a later-ordered category is already populated.
    fn check_order(&self, part: SelectorPart) -> Result<(), SelectorError> {
        match self.last_populated() {
            Some(after) if after > part => Err(SelectorError::OutOfOrder { part, after }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(combined) = &self.combined {
            return f.write_str(&combined.text);
        }
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
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
