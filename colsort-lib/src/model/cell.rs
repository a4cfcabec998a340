//! Cell access for comparators.

use std::borrow::Cow;

/// A single table cell as seen by the comparators.
///
/// Hosts implement this for whatever backs their cells (a DOM node, a
/// terminal widget, a parsed CSV field). Only `text` is required.
pub trait Cell {
    /// Raw text content of the cell.
    fn text(&self) -> Cow<'_, str>;

    /// Whether the cell's text runs right-to-left.
    fn is_rtl(&self) -> bool {
        false
    }

    /// Look up a named attribute (e.g. `data-val`).
    fn attribute(&self, _name: &str) -> Option<Cow<'_, str>> {
        None
    }
}

impl Cell for str {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Cell for &str {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Cell for String {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

/// Owned cell with text, direction and attributes.
///
/// # Example
///
/// ```
/// use colsort_lib::model::{Cell, TextCell};
///
/// let cell = TextCell::new("42").with_attribute("data-val", "42.5");
/// assert_eq!(cell.text(), "42");
/// assert_eq!(cell.attribute("data-val").as_deref(), Some("42.5"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextCell {
    text: String,
    rtl: bool,
    attributes: Vec<(String, String)>,
}

impl TextCell {
    /// Create a left-to-right cell with no attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rtl: false,
            attributes: Vec::new(),
        }
    }

    /// Mark the cell as right-to-left.
    pub fn rtl(mut self) -> Self {
        self.rtl = true;
        self
    }

    /// Set the text direction.
    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Add (or replace) an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Raw text without the `Cow` wrapper.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Cell for TextCell {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn attribute(&self, name: &str) -> Option<Cow<'_, str>> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| Cow::Borrowed(v.as_str()))
    }
}

impl From<&str> for TextCell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextCell {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
