// rangecut/src/main.rs
//! rangecut entry point.
//!
//! Parses the command line, initializes logging and the theme, resolves the
//! marker configuration and dispatches to the selected command.

use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use rangecut::cli::{Cli, CleanCommand, Commands, ScanCommand};
use rangecut::commands::clean::{run_clean_opts, CleanOptions};
use rangecut::commands::scan::{run_scan_opts, ScanOptions};
use rangecut::commands::{error_msg, read_input, resolve_config};
use rangecut::logger;
use rangecut::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use rangecut_core::{derive_cleaned_path, RangeEngine, RemovalEngine};

fn main() {
    let cli = Cli::parse();

    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug, cli.disable_debug));
    info!("rangecut started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme_map = match build_theme_map(cli.theme.as_ref()) {
        Ok(theme_map) => theme_map,
        Err(e) => {
            error_msg(format!("{:#}", e), &ThemeStyle::default_theme_map());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, &theme_map) {
        error_msg(format!("{:#}", e), &theme_map);
        std::process::exit(1);
    }
}

fn run(cli: Cli, theme_map: &ThemeMap) -> Result<()> {
    match cli.command {
        Commands::Clean(cmd) => run_clean(cmd, cli.quiet, theme_map),
        Commands::Scan(cmd) => run_scan(cmd, cli.quiet, theme_map),
    }
}

fn run_clean(cmd: CleanCommand, quiet: bool, theme_map: &ThemeMap) -> Result<()> {
    let mut overrides = cmd.markers.overrides();
    cmd.collation.apply(&mut overrides);
    let config = resolve_config(cmd.markers.config.as_deref(), &overrides)?;
    debug!("Effective configuration: {:?}", config);

    let engine: Box<dyn RemovalEngine> = Box::new(RangeEngine::new(config)?);
    let (source_id, lines) = read_input(cmd.input_file.as_deref())?;

    let output_path = if cmd.stdout {
        None
    } else {
        cmd.output
            .or_else(|| cmd.input_file.as_deref().map(derive_cleaned_path))
    };

    let opts = CleanOptions {
        source_id,
        lines,
        output_path,
        diff: cmd.diff,
        no_summary: cmd.no_summary,
        report_json: cmd.report_json,
        quiet,
    };
    run_clean_opts(engine.as_ref(), opts, theme_map)
}

fn run_scan(cmd: ScanCommand, quiet: bool, theme_map: &ThemeMap) -> Result<()> {
    let overrides = cmd.markers.overrides();
    let config = resolve_config(cmd.markers.config.as_deref(), &overrides)?;
    debug!("Effective configuration: {:?}", config);

    let engine: Box<dyn RemovalEngine> = Box::new(RangeEngine::new(config)?);
    let (source_id, lines) = read_input(cmd.input_file.as_deref())?;

    let opts = ScanOptions {
        source_id,
        lines,
        show_ranges: cmd.show_ranges,
        fail_over_threshold: cmd.fail_over_threshold,
        json_file: cmd.json_file,
        json_stdout: cmd.json_stdout,
        quiet,
    };
    run_scan_opts(engine.as_ref(), opts, theme_map)
}
