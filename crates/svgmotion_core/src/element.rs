//! In-memory SVG elements
//!
//! A minimal element tree that hosts can drive headlessly. Handles are
//! shared (`Rc<RefCell<..>>`) because the engine runs on a single thread and
//! several animations may hold the same node at once.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::target::{AttributeTarget, TextBlock, TextLine};

/// A single attribute write observed on an element
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeWrite {
    pub name: String,
    pub value: String,
}

struct Node {
    tag: String,
    attributes: IndexMap<String, String>,
    text: Option<String>,
    children: Vec<SvgElement>,
    writes: Option<Vec<AttributeWrite>>,
}

/// Shared handle to an SVG element
#[derive(Clone)]
pub struct SvgElement {
    node: Rc<RefCell<Node>>,
}

impl SvgElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            node: Rc::new(RefCell::new(Node {
                tag: tag.into(),
                attributes: IndexMap::new(),
                text: None,
                children: Vec::new(),
                writes: None,
            })),
        }
    }

    /// Builder: set an attribute
    pub fn with_attr(self, name: &str, value: impl ToString) -> Self {
        self.node
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Builder: set the element's own text
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.node.borrow_mut().text = Some(text.into());
        self
    }

    /// Builder: append a child
    pub fn with_child(self, child: SvgElement) -> Self {
        self.append_child(child);
        self
    }

    pub fn append_child(&self, child: SvgElement) {
        self.node.borrow_mut().children.push(child);
    }

    pub fn tag(&self) -> String {
        self.node.borrow().tag.clone()
    }

    pub fn children(&self) -> Vec<SvgElement> {
        self.node.borrow().children.clone()
    }

    /// All descendants with the given tag, in document order
    pub fn descendants_by_tag(&self, tag: &str) -> Vec<SvgElement> {
        let mut found = Vec::new();
        self.collect_by_tag(tag, &mut found);
        found
    }

    fn collect_by_tag(&self, tag: &str, found: &mut Vec<SvgElement>) {
        for child in self.node.borrow().children.iter() {
            if child.tag() == tag {
                found.push(child.clone());
            }
            child.collect_by_tag(tag, found);
        }
    }

    /// Start (or restart) recording every attribute write on this element
    pub fn record_writes(&self) {
        self.node.borrow_mut().writes = Some(Vec::new());
    }

    /// Writes recorded since `record_writes`, empty when not recording
    pub fn writes(&self) -> Vec<AttributeWrite> {
        self.node.borrow().writes.clone().unwrap_or_default()
    }

    /// Recorded values written to one attribute, in order
    pub fn writes_to(&self, name: &str) -> Vec<String> {
        self.node
            .borrow()
            .writes
            .iter()
            .flatten()
            .filter(|w| w.name == name)
            .map(|w| w.value.clone())
            .collect()
    }

    /// Returns true if both handles refer to the same node
    pub fn ptr_eq(&self, other: &SvgElement) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// Serialize this subtree as SVG markup
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        let node = self.node.borrow();
        let _ = write!(out, "<{}", node.tag);
        for (name, value) in &node.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if node.text.is_none() && node.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(text) = &node.text {
            out.push_str(&escape(text));
        }
        for child in &node.children {
            child.write_markup(out);
        }
        let _ = write!(out, "</{}>", node.tag);
    }
}

impl std::fmt::Debug for SvgElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let node = self.node.borrow();
        f.debug_struct("SvgElement")
            .field("tag", &node.tag)
            .field("attributes", &node.attributes)
            .field("children", &node.children.len())
            .finish()
    }
}

impl AttributeTarget for SvgElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.node.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let mut node = self.node.borrow_mut();
        tracing::trace!(tag = %node.tag, name, value, "set attribute");
        node.attributes.insert(name.to_string(), value.to_string());
        if let Some(writes) = node.writes.as_mut() {
            writes.push(AttributeWrite {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    }
}

impl TextLine for SvgElement {
    fn text_content(&self) -> String {
        let node = self.node.borrow();
        let mut text = node.text.clone().unwrap_or_default();
        for child in &node.children {
            text.push_str(&child.text_content());
        }
        text
    }
}

impl TextBlock for SvgElement {
    type Line = SvgElement;

    fn lines(&self) -> Vec<SvgElement> {
        self.descendants_by_tag("tspan")
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
