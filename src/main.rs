//! circle-graph CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use circle_graph::{OutputFormat, RenderConfig, render_dsl};

/// Circular graph layout to SVG.
#[derive(Parser, Debug)]
#[command(
    name = "circle-graph",
    version = env!("CIRCLE_GRAPH_VERSION"),
    about = "Lay out a graph on a circle and render it as SVG"
)]
struct Cli {
    /// Input file in edge-list format (reads from stdin if not provided)
    input: Option<String>,

    /// Output units per layout unit; 1.0 fills a 2x2 box. Stroke widths are
    /// fixed output units (edges are 2.5 wide), so SVG output needs a scale
    /// well above 1 to stay legible
    #[arg(short = 's', long = "scale", default_value = "100")]
    scale: f64,

    /// Decimal places kept in SVG coordinates
    #[arg(short = 'p', long = "precision", default_value = "2")]
    precision: usize,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Log pipeline details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let config = RenderConfig {
        scale: cli.scale,
        precision: cli.precision,
        format: cli.format,
    };
    let rendered = match render_dsl(&text, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
