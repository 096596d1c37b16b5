use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lessonmark_engine::{
    CopyFeedback, NodeContent, RenderNode, RenderOptions, Renderer, Theme,
};

#[derive(Parser)]
#[command(name = "lessonmark")]
#[command(about = "Render lesson markdown to a display node tree")]
struct Cli {
    /// Input lesson markdown file
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Color theme baked into node classes
    #[arg(short, long, value_enum, default_value_t = ThemeArg::Light)]
    theme: ThemeArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Indented tag tree with text content
    Text,
    /// Full node tree as JSON
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let renderer = Renderer::new(RenderOptions {
        theme: cli.theme.into(),
    });
    let nodes = renderer.render(Some(&source), &CopyFeedback::default(), Instant::now());

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&nodes)?),
        Format::Text => {
            for node in &nodes {
                print_node(node, 0);
            }
        }
    }

    Ok(())
}

fn print_node(node: &RenderNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let class = node
        .attrs
        .get("class")
        .map(|c| format!(" .{}", c.replace(' ', " .")))
        .unwrap_or_default();

    match &node.content {
        NodeContent::Empty => println!("{indent}<{}{class}>", node.tag),
        NodeContent::Text(text) => println!("{indent}<{}{class}> {text:?}", node.tag),
        NodeContent::Children(children) => {
            println!("{indent}<{}{class}>", node.tag);
            for child in children {
                print_node(child, depth + 1);
            }
        }
    }
}
