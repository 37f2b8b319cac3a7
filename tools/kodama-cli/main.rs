use clap::{Args, Parser, Subcommand};
use kodama::prelude::*;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Render and inspect live-operations logic trees
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    source: SourceArgs,

    /// Run in interactive mode: pick nodes to inspect from a prompt
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the counters and the full tree listing
    Render,
    /// Print only the root-level counters
    Stats,
    /// Print the detail panel of a single node
    Inspect {
        /// Id of the node to inspect
        id: String,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Path to a logic forest JSON file. Defaults to the built-in fixture
    #[arg(short, long, global = true)]
    file: Option<String>,

    /// Draw icons with plain ASCII characters
    #[arg(long, global = true)]
    ascii: bool,

    /// Columns of indentation per tree level
    #[arg(long, global = true, default_value_t = 2)]
    indent: usize,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let forest = load_forest(&cli.source);
    let options = RenderOptions::default()
        .with_indent_unit(cli.source.indent)
        .with_glyphs(if cli.source.ascii {
            GlyphSet::Ascii
        } else {
            GlyphSet::Unicode
        });
    let view = LogicTreeView::with_options(forest, options);

    if cli.human {
        run_interactive(view);
        return;
    }

    match cli.command.unwrap_or(Command::Render) {
        Command::Render => print!("{}", view.to_text()),
        Command::Stats => print!("{}", TextFormatter::format_stats(view.stats())),
        Command::Inspect { id } => run_inspect(view, &id),
    }
}

fn load_forest(source: &SourceArgs) -> Forest {
    let result = match &source.file {
        Some(path) => JsonFileProvider::new(path).logic_forest(),
        None => StaticForestProvider.logic_forest(),
    };
    result.unwrap_or_else(|e| exit_with_error(&format!("Failed to load logic forest: {}", e)))
}

fn run_inspect(mut view: LogicTreeView, id: &str) {
    if !view.click(id) {
        exit_with_error(&format!("No node with id '{}' in the forest", id));
    }
    match view.detail() {
        Some(panel) => print!("{}", TextFormatter::format_detail(&panel)),
        None => exit_with_error(&format!("Node '{}' could not be projected", id)),
    }
}

/// Renders the screen, then lets the user select nodes by id until they quit.
fn run_interactive(mut view: LogicTreeView) {
    println!("--- Kodama Interactive Mode ---\n");
    print!("{}", view.to_text());

    loop {
        let input = prompt_for_input("\nEnter a node id to inspect (empty or 'q' to quit)", None);
        match input.as_str() {
            "" | "q" | "quit" => {
                view.dismiss();
                break;
            }
            id => {
                if !view.click(id) {
                    println!("No node with id '{}'.", id);
                    continue;
                }
                if let Some(panel) = view.detail() {
                    println!();
                    print!("{}", TextFormatter::format_detail(&panel));
                }
            }
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }

    match io::stdin().read_line(&mut line) {
        // End of input behaves like an empty answer.
        Ok(0) => String::new(),
        Ok(_) => {
            let trimmed = line.trim().to_string();
            if trimmed.is_empty() {
                default.unwrap_or("").to_string()
            } else {
                trimmed
            }
        }
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
