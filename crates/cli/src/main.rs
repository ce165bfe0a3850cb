use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hulltree::{upper_hull, Point};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Upper-hull runner over point files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read `x,y` lines, build the upper hull, write it as JSON
    Hull {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Optional point routed to the insert/delete extension
        #[arg(long)]
        toggle: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, out, toggle } => hull(input, out, toggle),
        Action::Report => report(),
    }
}

fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("expected `x,y`, got {s:?}"))?;
    Ok(Point::new(
        x.trim().parse::<f64>().context("x coordinate")?,
        y.trim().parse::<f64>().context("y coordinate")?,
    ))
}

fn hull(input: String, out: String, toggle: Option<String>) -> Result<()> {
    tracing::info!(input, out, "hull");
    let text = std::fs::read_to_string(&input).with_context(|| format!("reading {input}"))?;
    let points: Vec<Point> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(parse_point)
        .collect::<Result<_>>()?;
    tracing::info!(points = points.len(), "parsed input");

    let toggle = toggle.as_deref().map(parse_point).transpose()?;
    let hull = upper_hull(&points, toggle).context("building the upper hull")?;
    tracing::info!(vertices = hull.len(), "hull built");

    let doc = serde_json::json!({
        "count": points.len(),
        "hull": hull.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
    });
    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {out}"))?;
    Ok(())
}

fn report() -> Result<()> {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let obj = serde_json::json!({
        "code_rev": rev,
        "crate": "hulltree",
        "version": hulltree::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
