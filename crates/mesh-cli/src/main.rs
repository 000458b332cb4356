use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use mesh_node::{clock, doctor, NodeColors, NodeRecord, NodeViewConfig};

#[derive(Debug, Parser)]
#[command(name = "meshnode", version, about = "Inspect mesh node snapshots")]
struct Cli {
    /// View config (TOML). Defaults apply when omitted.
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate the view config.
    Doctor,
    /// Print one summary line per node from a JSON array of node records.
    Show { nodes: String },
    /// Print the badge colors for a node number (decimal, 0x hex or !hex).
    Color { num: String },
}

fn load_config(path: Option<&str>) -> Result<NodeViewConfig> {
    let Some(path) = path else {
        return Ok(NodeViewConfig::default());
    };
    let s = std::fs::read_to_string(path).with_context(|| format!("read config {}", path))?;
    NodeViewConfig::from_toml_str(&s).context("parse config toml")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;

    match cli.cmd {
        Command::Doctor => {
            info!("doctor: starting");
            doctor::check_view_config(&cfg)?;
            info!("doctor: OK");
        }
        Command::Show { nodes } => show(&cfg, &nodes)?,
        Command::Color { num } => {
            let num = parse_node_num(&num)?;
            let c = NodeColors::for_node(num);
            println!("{} fg={} bg={}", fmt_num(num), c.foreground, c.background);
        }
    }
    Ok(())
}

fn show(cfg: &NodeViewConfig, path: &str) -> Result<()> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read nodes {}", path))?;
    let nodes: Vec<NodeRecord> = serde_json::from_str(&s).context("parse nodes json")?;
    if nodes.is_empty() {
        warn!("show: {} contains no nodes", path);
    }

    let now = clock::now_unix();
    for node in &nodes {
        println!("{}", summary_line(cfg, node, now));
    }
    info!("show: {} nodes", nodes.len());
    Ok(())
}

fn summary_line(cfg: &NodeViewConfig, node: &NodeRecord, now: i64) -> String {
    let (short, long, hw) = match node.identity() {
        Some(i) => (
            i.short_name.as_str(),
            i.long_name.as_str(),
            i.hw_model_string().unwrap_or_else(|| "-".into()),
        ),
        None => ("?", "?", "-".into()),
    };
    let online = if node.is_online_within(now, cfg.presence.online_window_s) { "online" } else { "offline" };
    let pos = node
        .valid_position()
        .map(|p| format!("{:.5},{:.5} {}m", p.latitude, p.longitude, p.altitude))
        .unwrap_or_else(|| "-".into());
    let colors = node.colors();

    format!(
        "{} {} ({}) hw={} batt={} env=[{}] {} pos={} bg={}",
        fmt_num(node.num()),
        short,
        long,
        hw,
        node.battery_str(),
        node.env_metric_str(cfg.display.fahrenheit),
        online,
        pos,
        colors.background,
    )
}

fn fmt_num(num: u32) -> String {
    format!("!{:08x}", num)
}

fn parse_node_num(s: &str) -> Result<u32> {
    let hex = s.strip_prefix("0x").or_else(|| s.strip_prefix('!'));
    match hex {
        Some(h) => u32::from_str_radix(h, 16).with_context(|| format!("bad hex node number {}", s)),
        None => s.parse().with_context(|| format!("bad node number {}", s)),
    }
}
