//! Minimal presentation tree and its HTML serialization.

use std::fmt::{self, Write};

use shared::error::RenderError;

const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Text(String),
    /// Written verbatim; only used for inline scripts.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    content: Option<Content>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            content: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.content = Some(Content::Raw(raw.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Some(Content::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Flips `class` and reports whether it is now present.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if let Some(position) = self.classes.iter().position(|existing| existing == class) {
            self.classes.remove(position);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Replaces the whole class list; empty names are skipped.
    pub fn set_classes<'a>(&mut self, classes: impl IntoIterator<Item = &'a str>) {
        self.classes.clear();
        for class in classes {
            self.add_class(class);
        }
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Some(Content::Text(text.into()));
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Depth-first search for the first element carrying `class`, self included.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_by_class(class))
    }

    pub fn find_by_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_class_mut(class))
    }

    /// Like [`Element::find_by_class_mut`], but a missing slot is an error.
    pub fn slot_mut(&mut self, class: &str) -> Result<&mut Element, RenderError> {
        self.find_by_class_mut(class)
            .ok_or_else(|| RenderError::MissingNode(format!(".{class}")))
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_html(&mut out, 0);
        out
    }

    pub fn write_html<W: Write>(&self, out: &mut W, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        write!(out, "{indent}<{}", self.tag)?;
        if let Some(id) = &self.id {
            write!(out, " id=\"{}\"", escape(id))?;
        }
        if !self.classes.is_empty() {
            write!(out, " class=\"{}\"", escape(&self.classes.join(" ")))?;
        }
        for (name, value) in &self.attrs {
            write!(out, " {name}=\"{}\"", escape(value))?;
        }
        out.write_char('>')?;

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return out.write_char('\n');
        }

        match &self.content {
            Some(Content::Text(text)) => out.write_str(&escape(text))?,
            Some(Content::Raw(raw)) => write!(out, "\n{raw}\n{indent}")?,
            None => {}
        }

        if !self.children.is_empty() {
            out.write_char('\n')?;
            for child in &self.children {
                child.write_html(out, depth + 1)?;
            }
            out.write_str(&indent)?;
        }
        writeln!(out, "</{}>", self.tag)
    }
}

pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
