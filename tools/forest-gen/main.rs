use clap::Parser;
use kodama::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// serde_json refuses documents nested deeper than 128 levels, and every tree level
/// costs two (the node object and its `children` array).
const MAX_LOADABLE_DEPTH: usize = 60;

const TITLES: [&str; 8] = [
    "Season Progression",
    "Daily Login Streak",
    "Challenge Completion",
    "Currency Sink",
    "Store Rotation",
    "Reward Distribution",
    "Fail-Safe Check",
    "Battle Pass Tier",
];

const LAST_TRIGGERED: [&str; 5] = [
    "just now",
    "2 minutes ago",
    "5 minutes ago",
    "1 hour ago",
    "yesterday",
];

/// A CLI tool to generate random logic forests for the Kodama renderer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_forest.json")]
    output: String,

    /// Number of root trees
    #[arg(long, default_value_t = 3)]
    roots: usize,

    /// Maximum depth below each root
    #[arg(long, default_value_t = 4)]
    max_depth: usize,

    /// Maximum number of children per node
    #[arg(long, default_value_t = 3)]
    max_children: usize,
}

struct Generator {
    rng: ThreadRng,
    next_id: usize,
    max_depth: usize,
    max_children: usize,
}

impl Generator {
    fn tree(&mut self, depth: usize) -> LogicNode {
        self.next_id += 1;
        let node_type = if depth == 0 {
            NodeType::Trigger
        } else {
            NodeType::ALL[self.rng.random_range(1..NodeType::ALL.len())]
        };
        let status = match self.rng.random_range(0..10) {
            0 => NodeStatus::Error,
            1 | 2 => NodeStatus::Inactive,
            _ => NodeStatus::Active,
        };
        let title = TITLES[self.rng.random_range(0..TITLES.len())];

        let mut node = LogicNode::new(
            format!("node-{}", self.next_id),
            node_type,
            status,
            format!("{} {}", title, self.next_id),
        )
        .with_description(format!("Generated {} node", node_type));

        if let Some(metadata) = self.metadata(depth) {
            node = node.with_metadata(metadata);
        }

        if depth < self.max_depth {
            let count = self.rng.random_range(0..=self.max_children);
            node.children = (0..count).map(|_| self.tree(depth + 1)).collect();
        }
        node
    }

    fn metadata(&mut self, depth: usize) -> Option<NodeMetadata> {
        if depth > 1 && self.rng.random_bool(0.5) {
            return None;
        }
        let metadata = NodeMetadata {
            trigger_count: (depth == 0).then(|| self.rng.random_range(0..50_000)),
            success_rate: self
                .rng
                .random_bool(0.8)
                .then(|| (self.rng.random_range(600..=1000) as f64) / 10.0),
            last_triggered: (depth == 0)
                .then(|| LAST_TRIGGERED[self.rng.random_range(0..LAST_TRIGGERED.len())].to_string()),
        };
        (!metadata.is_empty()).then_some(metadata)
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let max_depth = if cli.max_depth > MAX_LOADABLE_DEPTH {
        warn!(
            requested = cli.max_depth,
            clamped = MAX_LOADABLE_DEPTH,
            "max depth exceeds what the JSON loader accepts"
        );
        MAX_LOADABLE_DEPTH
    } else {
        cli.max_depth
    };

    println!(
        "Generating {} tree(s) (max depth {}, max children {})...",
        cli.roots, max_depth, cli.max_children
    );

    let mut generator = Generator {
        rng: rand::rng(),
        next_id: 0,
        max_depth,
        max_children: cli.max_children,
    };
    let roots = (0..cli.roots).map(|_| generator.tree(0)).collect();
    let forest = Forest::new(roots)?;

    fs::write(&cli.output, forest.to_json()?)?;

    let stats = ForestStats::compute(forest.roots());
    println!(
        "Successfully generated {} node(s), depth {}, and saved them to '{}'",
        forest.node_count(),
        forest.depth(),
        cli.output
    );
    print!("{}", TextFormatter::format_stats(&stats));

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
