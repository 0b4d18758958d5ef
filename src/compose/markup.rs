use std::fmt::{self, Display, Write as _};

use crate::foundation::core::Point;

/// One self-closing SVG element, written with attributes in insertion order.
pub(crate) struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
}

impl Element {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
        }
    }

    pub(crate) fn attr(mut self, key: &'static str, value: impl Display) -> Self {
        self.attrs.push((key, value.to_string()));
        self
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (key, value) in &self.attrs {
            write!(f, " {key}=\"")?;
            write_escaped(f, value)?;
            f.write_char('"')?;
        }
        f.write_str("/>")
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

/// `points` attribute value: `x,y` pairs separated by spaces.
pub(crate) fn points(pts: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in pts.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", p.x, p.y);
    }
    out
}

/// Newline-joined markup of a fragment's elements.
pub(crate) fn join_lines<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{item}");
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/markup.rs"]
mod tests;
