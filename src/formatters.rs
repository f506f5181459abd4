use serde_json::json;

use crate::graph_builder::CallGraph;
use crate::types::NODE_FILL_COLOR;

/// Serialize the graph as GraphViz DOT, one subgraph cluster per cluster
/// key. Node identifiers are petgraph indices; display text goes in labels.
pub fn format_graph_as_dot(graph: &CallGraph) -> String {
    let mut output = String::from("digraph {\n");

    // Global styling
    output.push_str("    graph [fontname=\"Arial\", rankdir=TB, splines=true];\n");
    output.push_str("    node [fontname=\"Arial\"];\n");
    output.push_str("    edge [fontname=\"Arial\"];\n\n");

    for (i, (cluster, members)) in graph.clusters().iter().enumerate() {
        output.push_str(&format!("    subgraph cluster_{} {{\n", i));
        output.push_str(&format!("        label=\"{}\";\n", escape_label(cluster)));

        for &node_idx in members {
            let node = &graph.graph()[node_idx];
            let style = if node.filled { "filled" } else { "" };
            output.push_str(&format!(
                "        {} [label=\"{}\", style=\"{}\", color=\"{}\"];\n",
                node_idx.index(),
                escape_label(&node.label),
                style,
                NODE_FILL_COLOR
            ));
        }

        output.push_str("    }\n");
    }

    output.push('\n');

    for edge_idx in graph.graph().edge_indices() {
        if let Some((source, target)) = graph.graph().edge_endpoints(edge_idx) {
            output.push_str(&format!("    {} -> {};\n", source.index(), target.index()));
        }
    }

    output.push_str("}\n");
    output
}

/// Serialize the graph as JSON: node list with cluster grouping plus a flat
/// edge list.
pub fn format_graph_as_json(graph: &CallGraph) -> String {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for node_idx in graph.graph().node_indices() {
        let node = &graph.graph()[node_idx];
        nodes.push(json!({
            "id": format!("n{}", node_idx.index()),
            "name": node.name,
            "label": node.label,
            "group": node.cluster,
            "builtin": node.is_builtin,
        }));
    }

    for edge_idx in graph.graph().edge_indices() {
        if let Some((source, target)) = graph.graph().edge_endpoints(edge_idx) {
            edges.push(json!({
                "from": format!("n{}", source.index()),
                "to": format!("n{}", target.index()),
            }));
        }
    }

    let result = json!({
        "nodes": nodes,
        "edges": edges
    });

    serde_json::to_string_pretty(&result).unwrap_or_default()
}

fn escape_label(label: &str) -> String {
    label
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
