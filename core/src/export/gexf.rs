use crate::error::Result;
use crate::graph::ArtistGraph;
use std::io::Write;

const GEXF_NS: &str = "http://www.gexf.net/1.2draft";
const VIZ_NS: &str = "http://www.gexf.net/1.2draft/viz";

/// Writes the graph as GEXF 1.2 with the viz extension carrying node size
/// and color. Duplicate edges are kept, each with its own id.
pub fn write_gexf<W: Write>(graph: &ArtistGraph, mut writer: W) -> Result<()> {
    writeln!(writer, r#"<?xml version="1.0" encoding="utf-8"?>"#)?;
    writeln!(
        writer,
        r#"<gexf xmlns="{GEXF_NS}" xmlns:viz="{VIZ_NS}" version="1.2">"#
    )?;
    writeln!(writer, "  <meta>")?;
    writeln!(writer, "    <creator>musigraph</creator>")?;
    writeln!(writer, "  </meta>")?;
    writeln!(writer, r#"  <graph defaultedgetype="directed" mode="static">"#)?;

    writeln!(writer, "    <nodes>")?;
    for node in graph.nodes() {
        let name = escape(node.name());
        let viz = node.viz();
        writeln!(writer, r#"      <node id="{name}" label="{name}">"#)?;
        writeln!(writer, r#"        <viz:size value="{}"/>"#, viz.size)?;
        writeln!(
            writer,
            r#"        <viz:color r="{}" g="{}" b="{}" a="{:.1}"/>"#,
            viz.color.r, viz.color.g, viz.color.b, viz.color.a
        )?;
        writeln!(writer, "      </node>")?;
    }
    writeln!(writer, "    </nodes>")?;

    writeln!(writer, "    <edges>")?;
    for (id, edge) in graph.edges().iter().enumerate() {
        writeln!(
            writer,
            r#"      <edge id="{id}" source="{}" target="{}"/>"#,
            escape(&edge.source),
            escape(&edge.target)
        )?;
    }
    writeln!(writer, "    </edges>")?;

    writeln!(writer, "  </graph>")?;
    writeln!(writer, "</gexf>")?;
    writer.flush()?;
    Ok(())
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
