use serde::{Deserialize, Serialize};

use crate::classify::Classifier;
use crate::error::{GraphError, Result};
use crate::formatters::{format_graph_as_dot, format_graph_as_json};
use crate::graph_builder::CallGraph;
use crate::render::render_dot;

/// One invocation event as emitted by the analyzer. `line` and `file` are
/// part of the analyzer's wire format but unused by the graph model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum TraceEvent {
    Start { line: u32, file: String, name: String },
    Call { line: u32, file: String, name: String },
    End,
    Reset,
}

/// Parse a recorded analyzer trace: one JSON event per line, blank lines
/// ignored.
pub fn parse_trace(input: &str) -> Result<Vec<TraceEvent>> {
    let mut events = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event = serde_json::from_str(line)
            .map_err(|e| GraphError::TraceParse { line: i + 1, source: e })?;
        events.push(event);
    }
    Ok(events)
}

/// Event-driven facade over [`CallGraph`]. The analyzer drives it with
/// start/call/end events; the accumulated graph can be serialized or
/// rendered at any point.
///
/// The caller context is a single slot, not a stack: every start overwrites
/// it and end does not restore the enclosing function. This reproduces the
/// original protocol's attribution behavior (calls made after a nested
/// function returns are credited to the last-started function).
pub struct CallGraphBuilder {
    graph: CallGraph,
    current_caller: Option<String>,
}

impl CallGraphBuilder {
    pub fn new() -> Self {
        CallGraphBuilder {
            graph: CallGraph::new(),
            current_caller: None,
        }
    }

    pub fn with_classifier(classifier: Classifier) -> Self {
        CallGraphBuilder {
            graph: CallGraph::with_classifier(classifier),
            current_caller: None,
        }
    }

    /// A function body has been entered; it becomes the caller for
    /// subsequent call events.
    pub fn start_function(&mut self, _line: u32, _file: &str, name: &str) {
        self.graph.add_node(name);
        self.current_caller = Some(name.to_string());
    }

    /// A call site has been observed inside the current function.
    pub fn add_call(&mut self, _line: u32, _file: &str, name: &str) {
        self.graph.add_node(name);
        match &self.current_caller {
            Some(caller) => {
                let caller = caller.clone();
                self.graph.add_edge(&caller, name);
            }
            None => {
                log::warn!("call to {name:?} with no active caller; edge skipped");
            }
        }
    }

    /// Symmetry hook for the analyzer; deliberately not a stack pop.
    pub fn end_function(&mut self) {}

    /// Drop all accumulated graph data and return to the idle state.
    /// Rendering configuration is preserved.
    pub fn reset(&mut self) {
        self.graph.reset();
        self.current_caller = None;
    }

    pub fn apply(&mut self, event: &TraceEvent) {
        match event {
            TraceEvent::Start { line, file, name } => self.start_function(*line, file, name),
            TraceEvent::Call { line, file, name } => self.add_call(*line, file, name),
            TraceEvent::End => self.end_function(),
            TraceEvent::Reset => self.reset(),
        }
    }

    pub fn set_use_color(&mut self, use_color: bool) {
        self.graph.set_use_color(use_color);
    }

    pub fn set_output_format(&mut self, format: &str) {
        self.graph.set_output_format(format);
    }

    pub fn set_dot_command(&mut self, command: &str) {
        self.graph.set_dot_command(command);
    }

    /// Read access to the accumulated graph, for custom serializers.
    pub fn graph(&self) -> &CallGraph {
        &self.graph
    }

    pub fn to_dot(&self) -> String {
        format_graph_as_dot(&self.graph)
    }

    pub fn to_json(&self) -> String {
        format_graph_as_json(&self.graph)
    }

    /// Render the graph through the configured dot command in the
    /// configured output format. The in-memory graph stays valid when
    /// rendering fails, so the caller can reconfigure and retry.
    pub fn render(&self) -> Result<Vec<u8>> {
        let config = self.graph.config();
        render_dot(&self.to_dot(), &config.dot_command, &config.output_format)
    }
}

impl Default for CallGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
