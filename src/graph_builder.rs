use std::collections::{BTreeMap, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};

use crate::classify::Classifier;
use crate::types::{Edge, GraphConfig, Node};

/// The accumulated call graph: deduplicated nodes, lazily created clusters
/// and a multiset of caller -> callee edges, plus the rendering config.
///
/// Nodes are keyed by fully-qualified name; repeated insertion of the same
/// name is a no-op. Edges are never deduplicated, so call counts survive.
pub struct CallGraph {
    graph: DiGraph<Node, Edge>,
    node_map: HashMap<String, NodeIndex>,
    clusters: BTreeMap<String, Vec<NodeIndex>>,
    config: GraphConfig,
    classifier: Classifier,
}

impl CallGraph {
    pub fn new() -> Self {
        Self::with_classifier(Classifier::new())
    }

    pub fn with_classifier(classifier: Classifier) -> Self {
        CallGraph {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
            clusters: BTreeMap::new(),
            config: GraphConfig::default(),
            classifier,
        }
    }

    /// Insert a node for `full_name` if not already present, registering
    /// its cluster on first membership. Returns the node's index either way.
    pub fn add_node(&mut self, full_name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(full_name) {
            return idx;
        }

        let class = self.classifier.classify(full_name);
        let node_idx = self.graph.add_node(Node {
            name: full_name.to_string(),
            label: class.label,
            cluster: class.cluster.clone(),
            is_builtin: class.is_builtin,
            // Style is captured now; flipping use_color later only affects
            // nodes inserted after the change.
            filled: self.config.use_color,
        });

        self.node_map.insert(full_name.to_string(), node_idx);
        self.clusters.entry(class.cluster).or_default().push(node_idx);

        node_idx
    }

    /// Record a directed caller -> callee edge. Both endpoints are expected
    /// to have been inserted already; a missing one is skipped with a
    /// warning rather than corrupting the graph.
    pub fn add_edge(&mut self, caller: &str, callee: &str) {
        match (self.node_map.get(caller), self.node_map.get(callee)) {
            (Some(&from), Some(&to)) => {
                self.graph.add_edge(from, to, Edge);
            }
            _ => {
                log::warn!("skipping edge with unknown endpoint: {caller:?} -> {callee:?}");
            }
        }
    }

    /// Discard all nodes, clusters and edges. The rendering config
    /// (dot command, output format, color mode) is untouched.
    pub fn reset(&mut self) {
        self.graph = DiGraph::new();
        self.node_map.clear();
        self.clusters.clear();
    }

    pub fn set_use_color(&mut self, use_color: bool) {
        self.config.use_color = use_color;
    }

    pub fn set_output_format(&mut self, format: &str) {
        self.config.output_format = format.to_string();
    }

    pub fn set_dot_command(&mut self, command: &str) {
        self.config.dot_command = command.to_string();
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// The underlying petgraph structure, for serializers and traversal.
    pub fn graph(&self) -> &DiGraph<Node, Edge> {
        &self.graph
    }

    /// Cluster key -> member nodes, in deterministic key order.
    pub fn clusters(&self) -> &BTreeMap<String, Vec<NodeIndex>> {
        &self.clusters
    }

    pub fn find_node(&self, full_name: &str) -> Option<NodeIndex> {
        self.node_map.get(full_name).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> Option<&Node> {
        self.graph.node_weight(idx)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All edges as (caller name, callee name) pairs, in insertion order.
    pub fn edge_pairs(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(from, to)| {
                (
                    self.graph[from].name.as_str(),
                    self.graph[to].name.as_str(),
                )
            })
            .collect()
    }
}

impl Default for CallGraph {
    fn default() -> Self {
        Self::new()
    }
}
