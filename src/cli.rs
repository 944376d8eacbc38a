use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::DEFAULT_TOP_K;

fn parse_dim(s: &str) -> Result<usize, String> {
	let val: usize = s.parse().map_err(|_| format!("'{}' is not a valid dimension", s))?;
	if val == 0 {
		Err("dimension must be at least 1".to_string())
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	let blue = Some(Color::Ansi(AnsiColor::Blue));
	Styles::styled()
		.header(Style::new().bold().fg_color(blue))
		.usage(Style::new().bold().fg_color(blue))
		.literal(Style::new().fg_color(blue))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(blue))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "tessera",
	author,
	version,
	about = "Cluster, order and search text snippets by meaning",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {tessera} {organize}  {organize_args}        {organize_desc}
  {tessera} {organize}  {export_args}  {export_desc}
  {tessera} {search}    {search_args}        {search_desc}
  {tessera} {repl}      {repl_args}                  {repl_desc}",
		title = "Examples:".bright_blue().bold(),
		tessera = "tessera".bright_blue(),
		organize = "organize".yellow(),
		organize_args = "notes.txt",
		organize_desc = "Cluster and order snippets".dimmed(),
		export_args = "--demo --export -",
		export_desc = "Built-in snippets as JSON".dimmed(),
		search = "search".yellow(),
		search_args = "\"fruit\" --demo",
		search_desc = "Rank snippets by a query".dimmed(),
		repl = "repl".yellow(),
		repl_args = "--demo",
		repl_desc = "Interactive session".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Hash embedder dimension (default: 256, or TESSERA_EMBED_DIM)
	#[arg(long = "dim", global = true, value_parser = parse_dim)]
	pub dim: Option<usize>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Cluster snippets and print the tile layout
	Organize {
		/// Snippet file, one per line ("-" or omitted = stdin)
		#[arg(value_name = "FILE")]
		input: Option<PathBuf>,

		/// Use the built-in starter snippets
		#[arg(long = "demo")]
		demo: bool,

		/// Write the organized view as JSON ("-" for stdout)
		#[arg(short = 'e', long = "export", value_name = "PATH")]
		export: Option<PathBuf>,
	},

	/// Rank snippets against a text query
	Search {
		/// Search query
		#[arg(value_name = "QUERY")]
		query: String,

		/// Snippet file, one per line ("-" or omitted = stdin)
		#[arg(value_name = "FILE")]
		input: Option<PathBuf>,

		/// Use the built-in starter snippets
		#[arg(long = "demo")]
		demo: bool,

		/// Number of results
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_TOP_K)]
		limit: usize,
	},

	/// Interactive add / remove / search session
	Repl {
		/// Snippet file to preload, one per line
		#[arg(value_name = "FILE")]
		input: Option<PathBuf>,

		/// Preload the built-in starter snippets
		#[arg(long = "demo")]
		demo: bool,

		/// Number of search results
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_TOP_K)]
		limit: usize,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
