// SPDX-License-Identifier: MPL-2.0
//! Declarative element descriptors.

use super::{NodeId, RenderTarget};

const DEFAULT_ELEMENT: &str = "div";

/// Descriptor for a single element.
///
/// Every field is optional. `text` is applied before `html`, so when both
/// are given the markup wins; callers are expected to supply only one.
///
/// ```
/// use toastdeck::dom::{Document, ElementSpec};
///
/// let mut doc = Document::new();
/// let link = ElementSpec::new()
///     .element("a")
///     .text("Undo")
///     .classes(["btn", "btn-link"])
///     .attribute("href", "/undo")
///     .build(&mut doc);
///
/// assert_eq!(
///     doc.to_html(link),
///     "<a class=\"btn btn-link\" href=\"/undo\">Undo</a>"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSpec<'a> {
    element: Option<&'a str>,
    text: Option<&'a str>,
    html: Option<&'a str>,
    classes: Vec<&'a str>,
    attributes: Vec<(&'a str, &'a str)>,
}

impl<'a> ElementSpec<'a> {
    /// Creates an empty descriptor (a plain `div`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a `div` carrying the given classes.
    #[must_use]
    pub fn with_classes<I>(classes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::new().classes(classes)
    }

    #[must_use]
    pub fn element(mut self, tag: &'a str) -> Self {
        self.element = Some(tag);
        self
    }

    #[must_use]
    pub fn text(mut self, text: &'a str) -> Self {
        self.text = Some(text);
        self
    }

    #[must_use]
    pub fn html(mut self, html: &'a str) -> Self {
        self.html = Some(html);
        self
    }

    /// Appends classes, keeping their order.
    #[must_use]
    pub fn classes<I>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.classes.extend(classes);
        self
    }

    #[must_use]
    pub fn attribute(mut self, name: &'a str, value: &'a str) -> Self {
        self.attributes.push((name, value));
        self
    }

    /// Creates the described node on `target`. The node is not attached.
    pub fn build<R>(&self, target: &mut R) -> NodeId
    where
        R: RenderTarget + ?Sized,
    {
        let node = target.create_element(self.element.unwrap_or(DEFAULT_ELEMENT));
        if let Some(text) = self.text {
            target.set_text(node, text);
        }
        if let Some(html) = self.html {
            target.set_markup(node, html);
        }
        for class in &self.classes {
            target.add_class(node, class);
        }
        for (name, value) in &self.attributes {
            target.set_attribute(node, name, value);
        }
        node
    }
}
