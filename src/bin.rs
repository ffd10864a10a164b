use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser};
use edgechain::{Edge, OrderEdgesExt};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        std::process::exit(1);
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "edgechain",
    about = "Order an unordered set of path or cycle edges into a connected chain."
)]
struct Cli {
    /// Edges written as `a-b` or `a,b` (use `--` before edges starting with `-`).
    /// Without any, the built-in demonstrations run.
    edges: Vec<String>,
    /// Vertex the chain should start from.
    #[arg(long, short, value_name = "VERTEX")]
    start: Option<String>,
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.edges.is_empty() {
        return demonstrations();
    }

    let edges = cli
        .edges
        .iter()
        .map(|s| parse_edge(s))
        .collect::<Result<Vec<_>>>()?;

    let chain = edges
        .order_edges(cli.start.clone())
        .with_context(|| format!("failed to order {} edges", edges.len()))?;
    println!("{chain}");
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn parse_edge(s: &str) -> Result<Edge<String>> {
    let (a, b) = s
        .split_once(',')
        .or_else(|| s.split_once('-'))
        .ok_or_else(|| anyhow!("edge {s:?} is not of the form a-b"))?;
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return Err(anyhow!("edge {s:?} is missing an endpoint"));
    }
    Ok(Edge::new(a.to_string(), b.to_string()))
}

fn demonstrations() -> Result<()> {
    let sequence = [(1, 2), (5, 2), (1, 0), (5, 4)];
    let cyclical = [(1, 2), (5, 2), (1, 0), (5, 0)];
    let illegal = [(1, 2), (5, 2), (1, 0), (5, 1)];

    println!("Sorted sequence: {}", sequence.order_edges(None)?);
    println!(
        "Sorted sequence with starting vertex 4: {}",
        sequence.order_edges(Some(4))?
    );
    println!("Sorted cycle: {}", cyclical.order_edges(None)?);
    println!(
        "Sorted cycle with starting vertex 5: {}",
        cyclical.order_edges(Some(5))?
    );
    match illegal.order_edges(None) {
        Ok(chain) => println!("Unexpectedly sorted forked edges: {chain}"),
        Err(err) => println!("Forked edges rejected: {err}"),
    }
    Ok(())
}
