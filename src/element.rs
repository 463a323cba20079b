//! Attributed elements of a tree-structured markup document.
//!
//! Scene state is exchanged as trees of named elements carrying key/value
//! string attributes. This module only defines the node shape and attribute
//! access; building whole documents and writing them to disk is the caller's
//! business.

use log::{Level, log};
use std::borrow::Cow;
use std::fmt;

/// A named node in a tree-structured markup document.
///
/// Attributes keep their insertion order when rendered, but lookup is by
/// name, so a reader accepts them in any order.
///
/// # Examples
///
/// ```
/// use trivec::Element;
/// let mut element = Element::new("pos");
/// element.set_attribute("x", "1.5");
/// assert_eq!(Some("1.5"), element.attribute("x"));
/// assert_eq!("<pos x=\"1.5\" />", element.to_string());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Creates a new element with the given tag name and no attributes.
    ///
    /// # Examples
    ///
    /// ```
    /// use trivec::Element;
    /// let element = Element::new("camera");
    /// assert_eq!("camera", element.name());
    /// ```
    pub fn new(name: impl Into<String>) -> Element {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns this element's tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets an attribute, replacing any previous value of the same name.
    ///
    /// A new attribute is appended after the existing ones, so freshly built
    /// elements render their attributes in the order they were set.
    ///
    /// # Examples
    ///
    /// ```
    /// use trivec::Element;
    /// let mut element = Element::new("pos");
    /// element.set_attribute("x", "1");
    /// element.set_attribute("x", "2");
    /// assert_eq!(Some("2"), element.attribute("x"));
    /// ```
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attribute) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            attribute.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Returns an attribute's value by name, or `None` if it is absent.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns an attribute's value as an f64, or `default` if the attribute
    /// is absent or not a number.
    ///
    /// An absent attribute is a silent default. A present but unparsable one
    /// logs a warning before defaulting, since it usually means the document
    /// was damaged rather than sparse.
    ///
    /// # Examples
    ///
    /// ```
    /// use trivec::Element;
    /// let mut element = Element::new("pos");
    /// element.set_attribute("x", "1.5");
    /// element.set_attribute("y", "fish");
    /// assert_eq!(1.5, element.f64_attribute("x", 0.));
    /// assert_eq!(0., element.f64_attribute("y", 0.));
    /// assert_eq!(0., element.f64_attribute("z", 0.));
    /// ```
    pub fn f64_attribute(&self, name: &str, default: f64) -> f64 {
        match self.attribute(name) {
            Some(value) => value.parse().unwrap_or_else(|_| {
                log!(
                    Level::Warn,
                    "attribute '{}' of <{}> is not a number: '{}'",
                    name,
                    self.name,
                    value
                );
                default
            }),
            None => default,
        }
    }

    /// Appends a child element.
    ///
    /// # Examples
    ///
    /// ```
    /// use trivec::Element;
    /// let mut camera = Element::new("camera");
    /// camera.append_child(Element::new("pos"));
    /// assert_eq!(1, camera.children().len());
    /// ```
    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Returns this element's children.
    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape(value))?;
        }
        if self.children.is_empty() {
            write!(f, " />")
        } else {
            write!(f, ">")?;
            for child in &self.children {
                write!(f, "{child}")?;
            }
            write!(f, "</{}>", self.name)
        }
    }
}

fn escape(value: &str) -> Cow<'_, str> {
    if value.contains(['&', '<', '"']) {
        Cow::Owned(
            value
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('"', "&quot;"),
        )
    } else {
        Cow::Borrowed(value)
    }
}
