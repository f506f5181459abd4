// End-to-end: replay a recorded analyzer trace and check the resulting
// graph and its serialized forms.

use phpcg::{CallGraphBuilder, parse_trace};

const TRACE: &str = r#"
{"event":"start","line":12,"file":"src/Cart.php","name":"Cart::checkout($order)"}
{"event":"call","line":15,"file":"src/Cart.php","name":"Cart::total()"}
{"event":"call","line":16,"file":"src/Cart.php","name":"count($items)"}
{"event":"call","line":18,"file":"src/Cart.php","name":"::log($msg)"}
{"event":"start","line":30,"file":"src/Cart.php","name":"Cart::total()"}
{"event":"call","line":32,"file":"src/Cart.php","name":"array_map($fn, $items)"}
{"event":"end"}
{"event":"end"}
{"event":"start","line":3,"file":"src/run.php","name":"run()"}
{"event":"call","line":4,"file":"src/run.php","name":"Cart::checkout($order)"}
{"event":"call","line":5,"file":"src/run.php","name":"Cart::checkout($order)"}
"#;

fn replay() -> CallGraphBuilder {
    let mut builder = CallGraphBuilder::new();
    for event in parse_trace(TRACE).unwrap() {
        builder.apply(&event);
    }
    builder
}

#[test]
fn trace_builds_expected_graph() {
    let builder = replay();
    let graph = builder.graph();

    // Six distinct symbols regardless of how often they appear.
    assert_eq!(graph.node_count(), 6);

    // Clusters: Cart, class-unknown (::log), internal (count/array_map),
    // default (run).
    let clusters = graph.clusters();
    assert_eq!(clusters.len(), 4);
    assert_eq!(clusters["Cart"].len(), 2);
    assert_eq!(clusters["class is unknown"].len(), 1);
    assert_eq!(clusters["internal PHP functions"].len(), 2);
    assert_eq!(clusters["default"].len(), 1);

    // The duplicate run -> checkout call is preserved as two edges.
    let pairs = graph.edge_pairs();
    assert_eq!(pairs.len(), 6);
    assert_eq!(
        pairs
            .iter()
            .filter(|(from, to)| *from == "run()" && *to == "Cart::checkout($order)")
            .count(),
        2
    );

    // Builtin classification overrides nothing here but labels do strip
    // signatures.
    let idx = graph.find_node("array_map($fn, $items)").unwrap();
    let node = graph.node(idx).unwrap();
    assert_eq!(node.label, "array_map");
    assert!(node.is_builtin);
}

#[test]
fn dot_and_json_agree_with_the_model() {
    let builder = replay();

    let dot = builder.to_dot();
    assert!(dot.contains("subgraph cluster_"));
    assert!(dot.contains("label=\"checkout\""));
    assert!(dot.contains("label=\"internal PHP functions\""));

    let parsed: serde_json::Value = serde_json::from_str(&builder.to_json()).unwrap();
    assert_eq!(parsed["nodes"].as_array().unwrap().len(), 6);
    assert_eq!(parsed["edges"].as_array().unwrap().len(), 6);
}

#[test]
fn reset_mid_trace_starts_a_fresh_graph() {
    let mut builder = CallGraphBuilder::new();
    builder.set_output_format("svg");
    for event in parse_trace(TRACE).unwrap() {
        builder.apply(&event);
    }

    builder.reset();
    assert_eq!(builder.graph().node_count(), 0);
    assert_eq!(builder.graph().config().output_format, "svg");

    builder.start_function(1, "b.php", "fresh()");
    assert_eq!(builder.graph().node_count(), 1);
}
