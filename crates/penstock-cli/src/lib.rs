//! CLI logic for the Penstock diagram tool.
//!
//! This module contains the core CLI logic for the Penstock diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use penstock::{DiagramBuilder, PenstockError};

/// Run the Penstock CLI application
///
/// This function processes the input pipeline document through the
/// Penstock pipeline and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `PenstockError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document parsing errors
/// - Layout errors
pub fn run(args: &Args) -> Result<(), PenstockError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing pipeline"
    );

    // Load configuration and apply command-line overrides
    let app_config = config::load_config(args.config.as_ref())?;
    let mut style_config = app_config.resolve()?;
    config::apply_overrides(&mut style_config, args)?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process the document using the DiagramBuilder API
    let builder = DiagramBuilder::new(style_config);
    let spec = builder.parse(&source)?;
    let svg = builder.render_svg(&spec)?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
