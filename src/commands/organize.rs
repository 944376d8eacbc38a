//! Organize command - cluster snippets and lay them out

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

use super::{gather, load_explorer, CliExplorer};
use crate::config::DEFAULT_TOP_K;
use crate::core::Cluster;
use crate::explorer::Tile;
use crate::processing::GridShape;
use crate::ui;

#[derive(Debug, Serialize)]
struct OrganizeExport {
	timestamp: String,
	total_items: usize,
	grid: GridShape,
	clusters: Vec<ClusterInfo>,
	tiles: Vec<Tile>,
}

#[derive(Debug, Serialize)]
struct ClusterInfo {
	id: usize,
	color_index: usize,
	label: String,
	size: usize,
	cohesion: f32,
	members: Vec<String>,
}

pub fn run(input: Option<&Path>, demo: bool, export: Option<&Path>) -> Result<()> {
	let start = Instant::now();

	let snippets = gather(input, demo)?;
	let explorer = load_explorer(&snippets, demo, DEFAULT_TOP_K)?;

	if explorer.store().is_empty() {
		ui::warn("No snippets to organize. Pass a file or --demo");
		return Ok(());
	}

	if let Some(export_path) = export {
		return export_view(&explorer, export_path);
	}

	print_clusters(&explorer);
	print_layout(&explorer);

	eprintln!(
		"\n{}",
		format!("Completed in {}ms", start.elapsed().as_millis()).dimmed()
	);
	Ok(())
}

fn member_texts(explorer: &CliExplorer, cluster: &Cluster) -> Vec<String> {
	cluster
		.member_ids
		.iter()
		.filter_map(|id| explorer.store().get(id).map(|item| item.text.clone()))
		.collect()
}

fn print_clusters(explorer: &CliExplorer) {
	let clusters = explorer.clusters();

	if clusters.is_empty() {
		ui::info("Need at least two snippets to form clusters");
		return;
	}

	ui::success(&format!(
		"{} clusters, {} snippets",
		clusters.len(),
		explorer.store().len()
	));

	for cluster in clusters {
		println!(
			"\n{} {} {} ({} snippets, {:.1}% cohesion)",
			ui::swatch(Some(cluster.color_index())),
			"Cluster".bright_white(),
			format!("\"{}\"", cluster.label).bright_cyan(),
			cluster.len(),
			cluster.cohesion * 100.0
		);

		for text in member_texts(explorer, cluster) {
			println!("  {} {}", "·".dimmed(), text);
		}
	}
}

fn print_layout(explorer: &CliExplorer) {
	ui::header(&format!("Layout ({} grid)", explorer.grid()));

	for (i, tile) in explorer.tiles().iter().enumerate() {
		println!(
			"{} {} {:<6} {} {}",
			format!("{:2}.", i + 1).bright_blue().bold(),
			ui::swatch(tile.color_index),
			tile.shape.name().dimmed(),
			tile.text.bright_white(),
			format!("[{}]", tile.id).dimmed()
		);
	}
}

fn export_view(explorer: &CliExplorer, export_path: &Path) -> Result<()> {
	let clusters = explorer
		.clusters()
		.iter()
		.map(|cluster| ClusterInfo {
			id: cluster.id,
			color_index: cluster.color_index(),
			label: cluster.label.clone(),
			size: cluster.len(),
			cohesion: cluster.cohesion,
			members: member_texts(explorer, cluster),
		})
		.collect();

	let export_data = OrganizeExport {
		timestamp: chrono::Utc::now().to_rfc3339(),
		total_items: explorer.store().len(),
		grid: explorer.grid(),
		clusters,
		tiles: explorer.tiles(),
	};

	let json = serde_json::to_string_pretty(&export_data).context("Failed to serialize view")?;

	if export_path.to_str() == Some("-") || export_path.as_os_str().is_empty() {
		println!("{}", json);
	} else {
		std::fs::write(export_path, json)
			.with_context(|| format!("Failed to write {}", export_path.display()))?;
		ui::success(&format!("Exported to {}", export_path.display()));
	}

	Ok(())
}
