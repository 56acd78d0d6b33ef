use clap::{Parser, Subcommand};
use kdl_format::FormatOptions;
use kdl_parser::{Document, ParseOptions};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kdl")]
#[command(about = "Check, format and inspect KDL documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Maximum nesting depth of children blocks
    #[arg(long, global = true, default_value_t = kdl_parser::options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log parser activity to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Check a .kdl file for syntax errors
    Check {
        /// Input .kdl file
        path: String,
    },

    /// Print a .kdl file in canonical form
    Fmt {
        /// Input .kdl file
        path: String,

        /// Overwrite the file instead of printing to stdout
        #[arg(long)]
        write: bool,

        /// Spaces per nesting level
        #[arg(long, default_value_t = 4)]
        indent: usize,
    },

    /// Print the parsed document tree
    Dump {
        /// Input .kdl file
        path: String,

        /// Print as JSON instead of the debug representation
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = ParseOptions::new().with_max_depth(cli.max_depth);

    match cli.command {
        Command::Check { path } => cmd_check(&path, options),
        Command::Fmt {
            path,
            write,
            indent,
        } => cmd_fmt(&path, options, FormatOptions { indent }, write),
        Command::Dump { path, json } => cmd_dump(&path, options, json),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(path: &Path) -> String {
    tracing::debug!(path = %path.display(), "reading source");
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("{}: {e}", path.display());
        std::process::exit(1);
    })
}

fn parse_or_exit(path: &str, options: ParseOptions) -> Document {
    let source = read_source(Path::new(path));
    match kdl_parser::Parser::parse_with_options(&source, options) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_check(path: &str, options: ParseOptions) {
    let doc = parse_or_exit(path, options);
    eprintln!("OK: {path} ({} top-level nodes)", doc.nodes.len());
}

fn cmd_fmt(path: &str, options: ParseOptions, format_options: FormatOptions, write: bool) {
    let doc = parse_or_exit(path, options);

    let output = match kdl_format::format(&doc, &format_options) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    };

    if write {
        if let Err(e) = std::fs::write(path, &output) {
            eprintln!("Error writing {path}: {e}");
            std::process::exit(1);
        }
        eprintln!("Formatted: {path}");
    } else {
        print!("{output}");
    }
}

fn cmd_dump(path: &str, options: ParseOptions, json: bool) {
    let doc = parse_or_exit(path, options);

    if !json {
        println!("{doc:#?}");
        return;
    }

    match serde_json::to_string_pretty(&doc) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error serializing {path}: {e}");
            std::process::exit(1);
        }
    }
}
