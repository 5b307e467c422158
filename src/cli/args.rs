//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Height-balanced (AVL) ordered index with rebalancing diagnostics
#[derive(Parser, Debug)]
#[command(name = "avltree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, env = "AVLTREE_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Insert keys in order and show the resulting tree
    Insert {
        /// Keys to insert
        #[arg(required = true, allow_negative_numbers = true)]
        keys: Vec<i64>,
        /// Print the sideways tree shape
        #[arg(long)]
        shape: bool,
        /// Print a box-drawing tree
        #[arg(long)]
        boxed: bool,
    },

    /// Insert a small random sample and print its shape
    Demo {
        /// Number of keys (default from config)
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// RNG seed for a reproducible sample
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Insert a large random sample and verify balance
    Stress {
        /// Number of keys (default from config)
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// RNG seed for a reproducible sample
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
