//! Target handles
//!
//! The animation engine never owns the nodes it mutates. Hosts hand it
//! references to anything implementing these traits, and every operation
//! borrows the handle only for the duration of one call.

/// A renderable node with string-valued attributes
pub trait AttributeTarget {
    /// Read an attribute, `None` when it is absent
    fn attribute(&self, name: &str) -> Option<String>;

    /// Write an attribute
    fn set_attribute(&self, name: &str, value: &str);

    /// Write a numeric attribute
    ///
    /// The default rendering is the shortest round-trip form, so whole
    /// numbers render without a fractional part (`200`, not `200.0`).
    fn set_number(&self, name: &str, value: f64) {
        self.set_attribute(name, &format_number(value));
    }
}

/// One line of multi-line text
pub trait TextLine: AttributeTarget {
    /// Raw text content, including any whitespace the markup carries
    fn text_content(&self) -> String;

    /// Number of characters in the raw text content
    fn char_count(&self) -> usize {
        self.text_content().chars().count()
    }
}

/// A text element composed of ordered line sub-elements
pub trait TextBlock: AttributeTarget {
    type Line: TextLine;

    /// Line sub-elements in document order
    fn lines(&self) -> Vec<Self::Line>;
}

/// Render a number the way it is written into an attribute
pub fn format_number(value: f64) -> String {
    value.to_string()
}
