//! In-memory call-graph model for PHP analyzers.
//!
//! An external analyzer emits invocation events (function started, call
//! observed, function ended) into [`CallGraphBuilder`]; the builder
//! deduplicates nodes, groups them into clusters by owning class (with
//! special buckets for unknown classes and PHP-internal functions) and
//! accumulates directed caller -> callee edges. The finished graph can be
//! serialized to DOT or JSON, or rendered through an external GraphViz
//! `dot` executable.

pub mod builder;
pub mod classify;
pub mod error;
pub mod formatters;
pub mod graph_builder;
pub mod render;
pub mod types;

pub use builder::{CallGraphBuilder, TraceEvent, parse_trace};
pub use classify::{Classification, Classifier};
pub use error::{GraphError, Result};
pub use formatters::{format_graph_as_dot, format_graph_as_json};
pub use graph_builder::CallGraph;
pub use render::render_dot;
pub use types::{Edge, GraphConfig, Node};
