use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use structopt::StructOpt;

use phpcg::CallGraphBuilder;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "phpcg",
    about = "Build a call graph from a PHP analyzer event trace"
)]
struct Opt {
    /// Input trace file, one JSON event per line
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Output file (stdout for text formats if omitted)
    #[structopt(parse(from_os_str), short, long)]
    output: Option<PathBuf>,

    /// Output format (dot, json or image)
    #[structopt(short, long, default_value = "dot")]
    format: String,

    /// Image format passed to dot via -T when --format is image
    #[structopt(long, default_value = "png")]
    image_format: String,

    /// Path to the GraphViz dot executable
    #[structopt(long, default_value = "dot")]
    dot_command: String,

    /// Disable filled node styling
    #[structopt(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let content = fs::read_to_string(&opt.input)
        .with_context(|| format!("Failed to read trace file: {:?}", opt.input))?;
    let events = phpcg::parse_trace(&content).context("Failed to parse analyzer trace")?;

    let mut builder = CallGraphBuilder::new();
    builder.set_use_color(!opt.no_color);
    builder.set_output_format(&opt.image_format);
    builder.set_dot_command(&opt.dot_command);

    for event in &events {
        builder.apply(event);
    }

    log::info!(
        "built call graph: {} nodes, {} edges, {} clusters",
        builder.graph().node_count(),
        builder.graph().edge_count(),
        builder.graph().clusters().len()
    );

    match opt.format.as_str() {
        "image" => {
            let bytes = builder.render().context("Rendering with dot failed")?;
            let output_path = opt
                .output
                .as_ref()
                .context("--output is required with --format image")?;
            fs::write(output_path, bytes)
                .with_context(|| format!("Failed to write to file: {:?}", output_path))?;
            println!("Graph written to {:?}", output_path);
        }
        "dot" | "json" => {
            let text = if opt.format == "json" {
                builder.to_json()
            } else {
                builder.to_dot()
            };
            if let Some(output_path) = opt.output {
                fs::write(&output_path, text)
                    .with_context(|| format!("Failed to write to file: {:?}", output_path))?;
                println!("Graph written to {:?}", output_path);
            } else {
                println!("{}", text);
            }
        }
        other => bail!("Unknown output format: {other:?} (expected dot, json or image)"),
    }

    Ok(())
}
