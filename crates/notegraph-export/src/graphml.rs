//! GraphML serialization of an [`AttributedGraph`].

use crate::document::AttributedGraph;
use notegraph_core::{Error, Result, ResultExt};
use std::fmt::Write as _;
use std::path::Path;

pub const GRAPHML_NAMESPACE: &str = "http://graphml.graphdrawing.org/xmlns";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const GRAPHML_SCHEMA_LOCATION: &str =
    "http://graphml.graphdrawing.org/xmlns http://www.yworks.com/xml/schema/graphml/1.1/ygraphml.xsd";

/// Writes GraphML documents
pub struct GraphMlWriter;

impl GraphMlWriter {
    /// Render the document as indented GraphML
    pub fn to_string(document: &AttributedGraph) -> String {
        let mut xml = String::new();
        // Writing into a String cannot fail
        let _ = Self::render(document, &mut xml);
        xml
    }

    /// Write the document to any writer
    pub fn write<W: std::io::Write>(document: &AttributedGraph, mut writer: W) -> Result<()> {
        writer.write_all(Self::to_string(document).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Create (or truncate) `path` and write the document to it
    pub fn write_to_path(document: &AttributedGraph, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, Self::to_string(document))
            .map_err(Error::from)
            .with_context(|| format!("Failed to write GraphML file [{}]", path.display()))?;
        log::info!(
            "Wrote [{}] nodes and [{}] edges to [{}]",
            document.nodes.len(),
            document.edges.len(),
            path.display()
        );
        Ok(())
    }

    fn render(document: &AttributedGraph, xml: &mut String) -> std::fmt::Result {
        writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            xml,
            r#"<graphml xmlns="{}" xmlns:xsi="{}" xsi:schemaLocation="{}">"#,
            GRAPHML_NAMESPACE, XSI_NAMESPACE, GRAPHML_SCHEMA_LOCATION
        )?;

        for key in &document.keys {
            writeln!(
                xml,
                r#"  <key id="{}" for="{}" attr.name="{}" attr.type="{}"></key>"#,
                escape(&key.id),
                key.domain.as_str(),
                escape(&key.name),
                escape(&key.attr_type)
            )?;
        }

        let edge_default = if document.directed {
            "directed"
        } else {
            "undirected"
        };
        writeln!(
            xml,
            r#"  <graph id="{}" edgedefault="{}">"#,
            escape(&document.id),
            edge_default
        )?;

        for node in &document.nodes {
            writeln!(xml, r#"    <node id="{}">"#, escape(&node.id))?;
            for (key, value) in node.data() {
                writeln!(xml, r#"      <data key="{}">{}</data>"#, key, escape(value))?;
            }
            writeln!(xml, "    </node>")?;
        }

        for edge in &document.edges {
            writeln!(
                xml,
                r#"    <edge id="{}" source="{}" target="{}">"#,
                escape(&edge.id),
                escape(&edge.source),
                escape(&edge.target)
            )?;
            for (key, value) in edge.data() {
                writeln!(xml, r#"      <data key="{}">{}</data>"#, key, escape(value))?;
            }
            writeln!(xml, "    </edge>")?;
        }

        writeln!(xml, "  </graph>")?;
        writeln!(xml, "</graphml>")
    }
}

/// Escape text for use in XML content and attribute values
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\n' => escaped.push_str("&#xA;"),
            '\r' => escaped.push_str("&#xD;"),
            '\t' => escaped.push_str("&#x9;"),
            c => escaped.push(c),
        }
    }
    escaped
}
