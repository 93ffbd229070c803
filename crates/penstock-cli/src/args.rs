//! Command-line argument definitions for the Penstock CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, style overrides,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Penstock diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input pipeline YAML file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(help = "Path to the output file")]
    pub output: String,

    /// Font size of the box text, in pixels
    #[arg(long)]
    pub fontsize: Option<f32>,

    /// Fill color of the boxes (any CSS color)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Fill opacity of the boxes, between 0 and 1
    #[arg(short, long)]
    pub opacity: Option<f32>,

    /// Width of the canvas
    #[arg(long)]
    pub width: Option<f32>,

    /// Height of the canvas
    #[arg(long)]
    pub height: Option<f32>,

    /// Unit of the canvas size (px, mm)
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Fraction of the canvas width spent on gaps between stages,
    /// between 0 and 1
    #[arg(long)]
    pub horizontal_space: Option<f32>,

    /// Shorten the storage path to this many characters
    #[arg(long)]
    pub storage_path_max_length: Option<usize>,

    /// Vertical padding between marker boxes
    #[arg(long)]
    pub marker_padding: Option<f32>,

    /// Text color of the keys (any CSS color)
    #[arg(long)]
    pub key_color: Option<String>,

    /// Text color of the values (any CSS color)
    #[arg(long)]
    pub value_color: Option<String>,

    /// Canvas sizing policy (fixed, auto)
    #[arg(long)]
    pub canvas: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
