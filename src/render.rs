// External GraphViz invocation. The layout work itself is delegated to the
// configured dot executable; this module only feeds it DOT text and
// collects the rendered bytes.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{GraphError, Result};

/// Run `<dot_command> -T<output_format>` with `dot_source` on stdin and
/// return the rendered artifact. A failure here leaves the in-memory graph
/// untouched; the caller may reconfigure and retry.
pub fn render_dot(dot_source: &str, dot_command: &str, output_format: &str) -> Result<Vec<u8>> {
    let mut child = Command::new(dot_command)
        .arg(format!("-T{output_format}"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| GraphError::RendererSpawn {
            command: dot_command.to_string(),
            source: e,
        })?;

    // stdin is piped above, so the handle is always present.
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(dot_source.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(GraphError::RendererFailed {
            command: dot_command.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output.stdout)
}
