//! DOT format utilities for graph rendering.

use std::fmt::Write;

/// Transparency appended to `#RRGGBB` colors on edges.
pub const EDGE_ALPHA: &str = "80";

/// Escape special characters for quoted DOT strings.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Quote a string as a DOT identifier.
pub fn quote_id(input: &str) -> String {
    format!("\"{}\"", escape_label(input))
}

/// Append the edge transparency to an opaque `#RRGGBB` color.
///
/// Named colors and colors that already carry alpha are returned unchanged.
pub fn with_alpha(color: &str) -> String {
    let is_rgb = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if is_rgb {
        format!("{color}{EDGE_ALPHA}")
    } else {
        color.to_string()
    }
}

/// Edge color running from the destination color into the source color.
///
/// Graphviz splits the stroke into two halves, so the direction of a link
/// is visible even where arrowheads overlap.
pub fn blend_edge_color(src: &str, dst: &str) -> String {
    format!("{};0.5:{}", with_alpha(dst), with_alpha(src))
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

fn write_attrs(output: &mut String, attrs: &[(&str, &str)]) {
    output.push('[');
    for (i, (key, value)) in attrs.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        let _ = write!(output, "{}=\"{}\"", key, escape_label(value));
    }
    output.push(']');
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new DOT digraph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {name} {{");
        Self { output, indent: 1 }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}=\"{}\";", key, escape_label(value));
        self
    }

    /// Add a node style default.
    pub fn node_style(&mut self, attrs: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "node [{attrs}];");
        self
    }

    /// Add an edge style default.
    pub fn edge_style(&mut self, attrs: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "edge [{attrs}];");
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a node with attributes. The id is quoted.
    pub fn node(&mut self, id: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str(&quote_id(id));
        write_attrs(&mut self.output, attrs);
        self.output.push_str(";\n");
        self
    }

    /// Add an edge with attributes. Both ids are quoted.
    pub fn edge(&mut self, from: &str, to: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{} -> {}", quote_id(from), quote_id(to));
        if !attrs.is_empty() {
            self.output.push(' ');
            write_attrs(&mut self.output, attrs);
        }
        self.output.push_str(";\n");
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label(r#"say "hi"\n"#), r#"say \"hi\"\\n"#);
        assert_eq!(escape_label("a\nb"), "a\\nb");
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#CACA00"), "#CACA0080");
        assert_eq!(with_alpha("gray"), "gray");
        assert_eq!(with_alpha("#12345678"), "#12345678");
        assert_eq!(with_alpha("#zzzzzz"), "#zzzzzz");
    }

    #[test]
    fn test_blend_is_directional() {
        let forward = blend_edge_color("#111111", "#222222");
        let backward = blend_edge_color("#222222", "#111111");
        assert_eq!(forward, "#22222280;0.5:#11111180");
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_builder_output() {
        let mut dot = DotBuilder::new("links");
        dot.attr("label", "All links")
            .node_style("style=filled")
            .blank()
            .node("/a/", &[("label", "A \"1\"")])
            .edge("/a/", "/b/", &[])
            .edge("/b/", "/a/", &[("tooltip", "B → A")]);
        let expected = concat!(
            "digraph links {\n",
            "  label=\"All links\";\n",
            "  node [style=filled];\n",
            "\n",
            "  \"/a/\"[label=\"A \\\"1\\\"\"];\n",
            "  \"/a/\" -> \"/b/\";\n",
            "  \"/b/\" -> \"/a/\" [tooltip=\"B → A\"];\n",
            "}\n",
        );
        assert_eq!(dot.build(), expected);
    }
}
