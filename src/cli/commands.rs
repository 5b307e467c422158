//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::services::TreeService;
use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::{AvlTree, TreeShape};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see --help".to_string(),
        ));
    };
    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    let service = TreeService::new(settings);

    match command {
        Commands::Insert { keys, shape, boxed } => _insert(&service, keys, *shape, *boxed),
        Commands::Demo { count, seed } => _demo(&service, *count, *seed),
        Commands::Stress { count, seed } => _stress(&service, *count, *seed),
        Commands::Config => _config(service.settings()),
        Commands::Completion { .. } => Ok(()),
    }
}

fn print_summary(tree: &AvlTree<i64>) {
    output::action("in-order", &tree.iter().join(", "));
    output::action("height", &tree.get_height());
    output::action("nodes", &tree.len());
    if let Some(root) = tree.root_key() {
        output::action("root", root);
    }
}

#[instrument(skip(service))]
fn _insert(service: &TreeService, keys: &[i64], shape: bool, boxed: bool) -> CliResult<()> {
    let mut tree = service.build(keys)?;
    print_summary(&tree);
    if shape {
        output::header("shape");
        output::info(&tree.to_shape_string());
    }
    if boxed {
        output::header("tree");
        output::info(&tree.to_tree_string());
    }
    if tree.check_balanced() {
        output::success("balanced");
        Ok(())
    } else {
        output::failure("not balanced");
        Err(CliError::CheckFailed("tree is not balanced".to_string()))
    }
}

#[instrument(skip(service))]
fn _demo(service: &TreeService, count: Option<usize>, seed: Option<u64>) -> CliResult<()> {
    let demo = service.demo(count, seed)?;
    output::action("input", &demo.input.iter().join(", "));
    print_summary(&demo.tree);
    output::header("shape");
    output::info(&demo.tree.to_shape_string());
    Ok(())
}

#[instrument(skip(service))]
fn _stress(service: &TreeService, count: Option<usize>, seed: Option<u64>) -> CliResult<()> {
    let report = service.stress(count, seed)?;
    output::action("keys", &report.requested);
    output::action("nodes", &report.nodes);
    output::action("height", &report.height);
    output::action("elapsed", &format!("{:.3?}", report.elapsed));
    if report.balanced {
        output::success(&format!("tree with {} nodes is balanced", report.nodes));
        Ok(())
    } else {
        output::failure("tree is not balanced");
        Err(CliError::CheckFailed(format!(
            "{} nodes, height {}",
            report.nodes, report.height
        )))
    }
}

fn _config(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}
