//! Tessera - semantic organization of text snippets
//!
//! Clusters, orders and searches snippets using embedding similarity.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use tessera::cli::{Cli, Command};
use tessera::{commands, config, ui};

fn main() {
	if let Err(e) = run() {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);
	if let Some(dim) = cli.dim {
		config::set_embedding_dim(dim);
	}

	match cli.command {
		Command::Organize { input, demo, export } => {
			commands::organize::run(input.as_deref(), demo, export.as_deref())
		}
		Command::Search {
			query,
			input,
			demo,
			limit,
		} => commands::search::run(&query, input.as_deref(), demo, limit),
		Command::Repl { input, demo, limit } => {
			commands::repl::run(input.as_deref(), demo, limit)
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help()?;
				} else {
					ui::warn(&format!("Unknown subcommand: {}", sub));
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
			Ok(())
		}
	}
}
