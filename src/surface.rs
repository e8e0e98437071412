//! Retained display tree.
//!
//! A [`Surface`] holds a fixed set of named containers. Assemblers select a
//! container, append an `<svg>` element to it and build the chart below that
//! element. The tree serializes to SVG markup per container.

use serde::Serialize;

use crate::error::{ChartError, Result};
use crate::ir::ChartKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    /// Sets an attribute, replacing an earlier value with the same name.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn num(self, name: &str, value: f64) -> Self {
        self.attr(name, fmt_num(value))
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(k, _)| k == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name.to_string(), value));
        }
    }

    /// Appends `child` and returns it for further building.
    pub fn append(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get_attr(name)?.parse().ok()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Depth-first, pre-order, excluding `self`.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        for child in &self.children {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }

    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|el| el.tag == tag)
            .collect()
    }

    pub fn write_svg(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, escape_xml(value)));
        }
        if self.text.is_none() && self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape_xml(text));
        }
        for child in &self.children {
            child.write_svg(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        self.write_svg(&mut out);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    pub id: String,
    pub children: Vec<Element>,
}

impl Container {
    pub fn append(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// The first `<svg>` attached to this container.
    pub fn svg(&self) -> Option<&Element> {
        self.children.iter().find(|el| el.tag == "svg")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Surface {
    pub containers: Vec<Container>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_containers<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut surface = Self::new();
        for id in ids {
            surface.add_container(id);
        }
        surface
    }

    /// One container per chart.
    pub fn dashboard() -> Self {
        Self::with_containers(ChartKind::ALL.iter().map(|kind| kind.container()))
    }

    pub fn add_container(&mut self, id: &str) {
        if self.container(id).is_none() {
            self.containers.push(Container {
                id: id.to_string(),
                children: Vec::new(),
            });
        }
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub fn select(&mut self, id: &str) -> Result<&mut Container> {
        self.containers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ChartError::MissingContainer(id.to_string()))
    }

    /// Markup of every `<svg>` in the container, concatenated.
    pub fn container_svg(&self, id: &str) -> Option<String> {
        let container = self.container(id)?;
        let mut out = String::new();
        for child in &container.children {
            child.write_svg(&mut out);
        }
        Some(out)
    }
}

/// Short decimal form for coordinates: at most three decimals, no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

pub fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", fmt_num(x), fmt_num(y))
}

pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
