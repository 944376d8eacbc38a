//! # Command Implementations
//!
//! Each submodule handles one CLI command (organize, search, repl).

pub mod organize;
pub mod repl;
pub mod search;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::explorer::Explorer;
use crate::models::{CachedEmbedder, HashEmbedder};
use crate::ui;

/// Session type used by every command
pub type CliExplorer = Explorer<CachedEmbedder<HashEmbedder>>;

/// Read snippets, one per line. Blank lines and `#` comments are skipped.
pub fn read_snippets(input: Option<&Path>) -> Result<Vec<String>> {
	let content = match input {
		Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read {}", path.display()))?,
		_ => {
			let mut buf = String::new();
			std::io::stdin()
				.read_to_string(&mut buf)
				.context("Failed to read snippets from stdin")?;
			buf
		}
	};

	Ok(parse_snippets(&content))
}

fn parse_snippets(content: &str) -> Vec<String> {
	content
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty() && !line.starts_with('#'))
		.map(str::to_string)
		.collect()
}

/// Build a session from the demo set and/or snippet input
pub fn load_explorer(snippets: &[String], demo: bool, limit: usize) -> Result<CliExplorer> {
	let embedder = CachedEmbedder::new(HashEmbedder::from_config()?);
	let mut explorer = Explorer::new(embedder).with_top_k(limit);

	if demo {
		explorer.seed_defaults().context("Failed to load demo snippets")?;
	}

	let mut errors = 0;
	for snippet in snippets {
		if let Err(e) = explorer.add_text(snippet) {
			ui::warn(&format!("Skipped \"{}\": {}", snippet, e));
			errors += 1;
		}
	}

	ui::debug(&format!(
		"Loaded {} snippets ({} skipped, {} embedded, {} cache hits)",
		explorer.store().len(),
		errors,
		explorer.embedder().misses(),
		explorer.embedder().hits()
	));

	Ok(explorer)
}

/// Snippets for a one-shot command: stdin/file unless only the demo set was asked for
pub fn gather(input: Option<&Path>, demo: bool) -> Result<Vec<String>> {
	if demo && input.is_none() {
		return Ok(Vec::new());
	}
	read_snippets(input)
}
