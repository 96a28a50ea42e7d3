use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Content
    pub content: Content,

    // Markup
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    /// Inline style declarations (`cursor`, `user-select`, ...).
    pub style: BTreeMap<String, String>,

    // Layout box, measured by the host.
    /// Left edge relative to the parent's content origin.
    pub offset_left: f32,
    pub width: f32,

    // State
    /// Whether this element is disabled. Disabled buttons don't receive clicks.
    pub disabled: bool,
    /// Whether this element currently holds focus.
    pub focused: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            content: Content::None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            style: BTreeMap::new(),
            offset_left: 0.0,
            width: 0.0,
            disabled: false,
            focused: false,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    /// Create a link element pointing at `href`.
    pub fn link(href: impl Into<String>) -> Self {
        Self::new("a").attr("href", href)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    // Layout
    pub fn bounds(mut self, offset_left: f32, width: f32) -> Self {
        self.offset_left = offset_left;
        self.width = width;
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Text content, if this element holds text directly.
    pub fn label(&self) -> &str {
        match &self.content {
            Content::Text(text) => text,
            _ => "",
        }
    }

    /// Right edge relative to the parent's content origin.
    pub fn right(&self) -> f32 {
        self.offset_left + self.width
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.style.insert(property.into(), value.into());
    }

    pub fn remove_style(&mut self, property: &str) {
        self.style.remove(property);
    }

    // -------------------------------------------------------------------------
    // Queries (document order, depth first, self excluded)
    // -------------------------------------------------------------------------

    /// First descendant carrying `class`.
    pub fn query_class(&self, class: &str) -> Option<&Element> {
        self.query(&|el: &Element| el.has_class(class))
    }

    /// All descendants carrying `class`.
    pub fn query_class_all(&self, class: &str) -> Vec<&Element> {
        let mut result = Vec::new();
        collect_matching(self, &|el: &Element| el.has_class(class), &mut result);
        result
    }

    /// First descendant whose attribute `name` equals `value`.
    pub fn query_attr(&self, name: &str, value: &str) -> Option<&Element> {
        self.query(&|el: &Element| el.attribute(name) == Some(value))
    }

    fn query(&self, matches: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        for child in self.content.children() {
            if matches(child) {
                return Some(child);
            }
            if let Some(found) = child.query(matches) {
                return Some(found);
            }
        }
        None
    }
}

fn collect_matching<'a>(
    element: &'a Element,
    matches: &dyn Fn(&Element) -> bool,
    result: &mut Vec<&'a Element>,
) {
    for child in element.content.children() {
        if matches(child) {
            result.push(child);
        }
        collect_matching(child, matches, result);
    }
}
