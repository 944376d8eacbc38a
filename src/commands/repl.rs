//! REPL mode - interactive add / remove / search session

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::Path;

use super::{load_explorer, read_snippets, CliExplorer};
use crate::core::ItemId;
use crate::ui;

#[derive(Debug, PartialEq, Eq)]
enum ReplCommand<'a> {
	Add(&'a str),
	Remove(&'a str),
	Find(&'a str),
	List,
	Clusters,
	Grid,
	Help,
	Exit,
	Unknown(&'a str),
	Empty,
}

impl<'a> ReplCommand<'a> {
	fn parse(line: &'a str) -> Self {
		let line = line.trim();
		if line.is_empty() {
			return ReplCommand::Empty;
		}

		let (head, rest) = match line.split_once(char::is_whitespace) {
			Some((head, rest)) => (head, rest.trim()),
			None => (line, ""),
		};

		match head {
			"add" | "+" => ReplCommand::Add(rest),
			"rm" | "remove" | "-" => ReplCommand::Remove(rest),
			"find" | "?" => ReplCommand::Find(rest),
			"list" | "ls" => ReplCommand::List,
			"clusters" => ReplCommand::Clusters,
			"grid" => ReplCommand::Grid,
			"help" => ReplCommand::Help,
			"exit" | "quit" | "q" => ReplCommand::Exit,
			_ => ReplCommand::Unknown(head),
		}
	}
}

pub fn run(input: Option<&Path>, demo: bool, limit: usize) -> Result<()> {
	let snippets = match input {
		Some(path) => read_snippets(Some(path))?,
		None => Vec::new(),
	};
	let mut explorer = load_explorer(&snippets, demo, limit)?;

	ui::info("Starting interactive session");
	ui::info("Type 'help' for commands, or 'exit' to quit");
	ui::success(&format!("{} snippets loaded", explorer.store().len()));
	println!();

	let stdin = io::stdin();
	let mut lines = stdin.lock().lines();

	loop {
		print!("{} ", "tessera>".bright_blue().bold());
		io::stdout().flush()?;

		let Some(line) = lines.next() else {
			break;
		};
		let line = line?;

		match ReplCommand::parse(&line) {
			ReplCommand::Empty => continue,
			ReplCommand::Exit => {
				ui::info("Goodbye!");
				break;
			}
			ReplCommand::Help => show_help(),
			ReplCommand::Add(text) => match explorer.add_text(text) {
				Ok(id) => ui::success(&format!("Added [{}] ({} snippets)", id, explorer.store().len())),
				Err(e) => ui::error(&format!("Not added: {}", e)),
			},
			ReplCommand::Remove(id) => {
				if explorer.remove(&ItemId::from(id)) {
					ui::success(&format!("Removed [{}]", id));
				} else {
					ui::warn(&format!("No snippet with id [{}]", id));
				}
			}
			ReplCommand::Find(query) => match explorer.set_query(query).map(|hits| hits.is_empty()) {
				Ok(true) => ui::info("Search cleared"),
				Ok(false) => show_hits(&explorer),
				Err(e) => ui::error(&format!("Search failed: {}", e)),
			},
			ReplCommand::List => show_tiles(&explorer),
			ReplCommand::Clusters => show_clusters(&explorer),
			ReplCommand::Grid => println!("{}", explorer.grid()),
			ReplCommand::Unknown(cmd) => ui::warn(&format!("Unknown command '{}'", cmd)),
		}

		println!();
	}

	Ok(())
}

fn show_hits(explorer: &CliExplorer) {
	for (i, hit) in explorer.hits().iter().enumerate() {
		if let Some(item) = explorer.store().get(&hit.item_id) {
			println!(
				"{}. {} {} {}",
				format!("{:2}", i + 1).bright_blue().bold(),
				item.text.bright_white(),
				format!("[{}]", item.id).dimmed(),
				ui::score(hit.score)
			);
		}
	}
}

fn show_tiles(explorer: &CliExplorer) {
	if explorer.store().is_empty() {
		ui::info("No snippets yet. Use 'add <text>'");
		return;
	}

	for tile in explorer.tiles() {
		let text = if tile.dimmed {
			tile.text.dimmed().to_string()
		} else {
			tile.text.bright_white().to_string()
		};
		let score = tile.score.map(ui::score).unwrap_or_default();

		println!(
			"{} {:<6} {} {} {}",
			ui::swatch(tile.color_index),
			tile.shape.name().dimmed(),
			text,
			format!("[{}]", tile.id).dimmed(),
			score
		);
	}
}

fn show_clusters(explorer: &CliExplorer) {
	if explorer.clusters().is_empty() {
		ui::info("Need at least two snippets to form clusters");
		return;
	}

	for cluster in explorer.clusters() {
		println!(
			"{} {} ({} snippets, {:.1}% cohesion)",
			ui::swatch(Some(cluster.color_index())),
			cluster.label.bright_cyan(),
			cluster.len(),
			cluster.cohesion * 100.0
		);
	}
}

fn show_help() {
	println!("{}", "REPL Commands:".bright_blue().bold());
	println!("  {}  Add a snippet", "add <text>".dimmed());
	println!("  {}     Remove a snippet by id", "rm <id>".dimmed());
	println!("  {} Rank snippets (empty query clears)", "find <query>".dimmed());
	println!("  {}        Show tiles in display order", "list".dimmed());
	println!("  {}    Show clusters", "clusters".dimmed());
	println!("  {}        Show grid shape", "grid".dimmed());
	println!("  {}        Exit REPL mode", "exit".dimmed());
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_commands_and_aliases() {
		assert_eq!(ReplCommand::parse("add  red apple "), ReplCommand::Add("red apple"));
		assert_eq!(ReplCommand::parse("+ pear"), ReplCommand::Add("pear"));
		assert_eq!(ReplCommand::parse("rm abc123xyz"), ReplCommand::Remove("abc123xyz"));
		assert_eq!(ReplCommand::parse("? fruit"), ReplCommand::Find("fruit"));
		assert_eq!(ReplCommand::parse("find"), ReplCommand::Find(""));
		assert_eq!(ReplCommand::parse("ls"), ReplCommand::List);
		assert_eq!(ReplCommand::parse("q"), ReplCommand::Exit);
		assert_eq!(ReplCommand::parse("   "), ReplCommand::Empty);
		assert_eq!(ReplCommand::parse("dance now"), ReplCommand::Unknown("dance"));
	}
}
