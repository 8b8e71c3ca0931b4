//! SVG Document Builder
//!
//! Accumulates elements line by line. Text content and attribute values
//! are XML-escaped on the way in.

/// Escape text content (`&`, `<`, `>`).
///
/// Control characters XML 1.0 cannot carry (everything below U+0020 except
/// tab, LF and CR) become U+FFFD.
pub fn escape_text(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if c < ' ' => out.push(char::REPLACEMENT_CHARACTER),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value (text escapes plus `"`)
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Line-oriented SVG writer
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    lines: Vec<String>,
}

impl SvgBuilder {
    /// Start a document with the given canvas size; the viewBox matches it
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            lines: vec![format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
            )],
        }
    }

    /// Document `<title>` element
    pub fn title(&mut self, text: &str) {
        self.lines.push(format!("  <title>{}</title>", escape_text(text)));
    }

    /// Embedded stylesheet, one rule per line
    pub fn stylesheet<I, S>(&mut self, rules: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lines.push("  <defs><style>".to_string());
        for rule in rules {
            self.lines.push(format!("    {}", escape_text(rule.as_ref())));
        }
        self.lines.push("  </style></defs>".to_string());
    }

    /// Full-canvas rectangle styled by `class`
    pub fn backdrop(&mut self, class: &str, width: usize, height: usize) {
        self.lines.push(format!(
            r#"  <rect class="{}" width="{width}" height="{height}"/>"#,
            escape_attr(class)
        ));
    }

    /// Square pixel, nested one level inside the current group
    pub fn pixel(&mut self, x: usize, y: usize, size: usize) {
        self.lines.push(format!(
            r#"    <rect x="{x}" y="{y}" width="{size}" height="{size}"/>"#
        ));
    }

    /// Text element styled by `class`
    pub fn text(&mut self, class: &str, x: usize, y: usize, content: &str) {
        self.lines.push(format!(
            r#"  <text class="{}" x="{x}" y="{y}">{}</text>"#,
            escape_attr(class),
            escape_text(content)
        ));
    }

    pub fn open_group(&mut self, class: &str) {
        self.lines
            .push(format!(r#"  <g class="{}">"#, escape_attr(class)));
    }

    pub fn close_group(&mut self) {
        self.lines.push("  </g>".to_string());
    }

    /// Close the document and join it into a single string
    pub fn finish(mut self) -> String {
        self.lines.push("</svg>".to_string());
        self.lines.join("\n")
    }
}
