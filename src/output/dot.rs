//! GraphViz DOT rendering of the router graph.

use crate::topology::Topology;

/// Escape `name` for use inside a double-quoted DOT identifier
fn escape_id(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Generate a DOT digraph with one node per router and endpoint, and one
/// edge per link
pub fn generate_dot(topology: &Topology) -> String {
    let mut dot = String::new();
    dot.push_str("digraph Topology {\n");
    dot.push_str("    node [shape=circle];\n");
    dot.push_str(&format!(
        "    label=\"{} {:?}\";\n",
        topology.kind,
        topology.dims.sides()
    ));
    dot.push_str("    labelloc=t;\n\n");

    for router in &topology.routers {
        dot.push_str(&format!(
            "    \"r{}\" [label=\"{}\", fillcolor=lightblue, style=filled];\n",
            router.id, router.id
        ));
    }

    if !topology.external_links.is_empty() {
        dot.push('\n');
    }
    for link in &topology.external_links {
        let name = escape_id(&link.endpoint_name);
        dot.push_str(&format!(
            "    \"{}\" [shape=box];\n    \"{}\" -> \"r{}\" [style=dashed];\n",
            name, name, link.router
        ));
    }

    dot.push('\n');
    for link in &topology.internal_links {
        dot.push_str(&format!(
            "    \"r{}\" -> \"r{}\" [label=\"{}\"];\n",
            link.src_router, link.dst_router, link.src_outport
        ));
    }

    dot.push_str("}\n");
    dot
}
