//! Search command - rank snippets against a query

use anyhow::Result;
use colored::*;
use std::path::Path;
use std::time::Instant;

use super::{gather, load_explorer};
use crate::ui;

pub fn run(query: &str, input: Option<&Path>, demo: bool, limit: usize) -> Result<()> {
	let snippets = gather(input, demo)?;
	let mut explorer = load_explorer(&snippets, demo, limit)?;

	if explorer.store().is_empty() {
		ui::warn("No snippets to search. Pass a file or --demo");
		return Ok(());
	}

	ui::info(&format!("Searching for: \"{}\"", query));
	let search_start = Instant::now();
	let hits = explorer.set_query(query)?.to_vec();

	if hits.is_empty() {
		ui::warn("No matches found");
		return Ok(());
	}

	ui::header("Results");

	for (i, hit) in hits.iter().enumerate() {
		let Some(item) = explorer.store().get(&hit.item_id) else {
			continue;
		};
		let color = explorer.store().cluster_of(&hit.item_id).map(|c| c.color_index());

		println!(
			"{}. {} {} {}",
			format!("{:2}", i + 1).bright_blue().bold(),
			ui::swatch(color),
			item.text.bright_white(),
			ui::score(hit.score)
		);
	}

	println!();
	ui::success(&format!(
		"Ranked {} snippets in {}ms",
		explorer.store().len(),
		search_start.elapsed().as_millis()
	));

	Ok(())
}
