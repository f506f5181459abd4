// Core graph types for the PHP call-graph model.

/// Cluster key for free functions with no class qualifier.
pub const CLUSTER_DEFAULT: &str = "default";
/// Cluster key for method names whose class part is empty ("::foo").
pub const CLUSTER_UNKNOWN_CLASS: &str = "class is unknown";
/// Cluster key for functions provided by the PHP runtime itself.
pub const CLUSTER_INTERNAL: &str = "internal PHP functions";

/// Fill color applied to nodes when color output is enabled.
pub const NODE_FILL_COLOR: &str = "lightblue2";

// A function or method in the call graph. Identity is the fully-qualified
// name; everything else is derived from it at insertion time.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Fully-qualified symbol name, e.g. "Foo::bar($x)". Unique in the graph.
    pub name: String,
    /// Display label: class prefix and call signature stripped.
    pub label: String,
    /// Cluster key this node belongs to.
    pub cluster: String,
    /// True if the symbol is a PHP-internal routine.
    pub is_builtin: bool,
    /// Whether the node was inserted while color output was enabled.
    /// Captured once; later config changes do not restyle it.
    pub filled: bool,
}

// A directed caller -> callee edge. Edges are not deduplicated: the same
// pair may appear once per reported call.
#[derive(Debug, Clone, Default)]
pub struct Edge;

/// Rendering configuration carried by the graph. Survives `reset()`.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Output format handed to dot via -T (e.g. "png", "svg").
    pub output_format: String,
    /// Path or name of the GraphViz dot executable.
    pub dot_command: String,
    /// Whether newly inserted nodes get a filled style.
    pub use_color: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            output_format: "png".to_string(),
            dot_command: "dot".to_string(),
            use_color: true,
        }
    }
}
