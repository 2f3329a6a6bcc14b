use clap::{Arg, Command};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use liboedometer_export::config::Config;
use liboedometer_export::parser::parse_file;
use liboedometer_export::process::export;
use liboedometer_export::status::ExportPhase;
use liboedometer_export::summary::StageSummary;

const PROGRESS_LENGTH: u64 = 100;

fn make_template_config(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let yaml_str = serde_yaml::to_string(&config)?;
    let mut file = File::create(path)?;
    file.write_all(yaml_str.as_bytes())?;
    Ok(())
}

/// Log the diagnostics of every configured stage
fn summarize(config: &Config) {
    for (path, name) in config.input_paths.iter().zip(config.get_stage_names()) {
        match parse_file(path) {
            Ok(result) => match StageSummary::new(&result) {
                Some(summary) => {
                    log::info!("{name}:");
                    for line in summary.report_lines() {
                        log::info!("   {line}");
                    }
                }
                None => log::warn!("{name}: no readings"),
            },
            Err(e) => log::error!("{name}: {e}"),
        }
    }
}

fn main() {
    // Create a cli
    let matches = Command::new("oedometer_export_cli")
        .about("Export oedometer logger readings as a KeyLAB schedule")
        .arg_required_else_help(true)
        .subcommand(Command::new("new").about("Make a template configuration yaml file"))
        .subcommand(Command::new("summary").about("Print the diagnostics of each stage"))
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .required(true)
                .help("Path to the configuration file"),
        )
        .get_matches();

    // Initialize feedback
    let logger = simplelog::TermLogger::new(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );

    let pb_manager = MultiProgress::new();

    if let Err(e) = LogWrapper::new(pb_manager.clone(), logger).try_init() {
        eprintln!("Could not create logging/progress: {e}");
        return;
    }
    log::set_max_level(log::LevelFilter::Info);

    // Parse the cli
    let config_path = match matches.get_one::<String>("path") {
        Some(p) => PathBuf::from(p),
        None => {
            log::error!("A configuration path is required");
            return;
        }
    };

    if let Some(("new", _)) = matches.subcommand() {
        log::info!(
            "Making a template config at {}...",
            config_path.to_string_lossy()
        );
        match make_template_config(&config_path) {
            Ok(()) => log::info!("Done."),
            Err(e) => log::error!("Could not write template config: {e}"),
        }
        return;
    }

    // Load our config
    log::info!("Loading config from {}...", config_path.to_string_lossy());
    let config = match Config::read_config_file(&config_path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    log::info!("Config successfully loaded.");
    log::info!("Successfully loaded {} stages:", config.input_paths.len());
    for name in config.get_stage_names() {
        log::info!("   {name}");
    }

    if let Some(("summary", _)) = matches.subcommand() {
        summarize(&config);
        log::info!("Done.");
        return;
    }

    match &config.output_path {
        Some(p) => log::info!("Output Path: {}", p.to_string_lossy()),
        None => log::info!("Output Path: None"),
    }

    // Setup the progress bar
    let pb = pb_manager.add(ProgressBar::new(PROGRESS_LENGTH));
    if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos:>3}% {msg}") {
        pb.set_style(style);
    }

    let result = export(&config, |status| {
        pb.set_position((status.progress * PROGRESS_LENGTH as f32) as u64);
        match status.phase {
            ExportPhase::Parsing => pb.set_message(format!("parsing stage {}", status.stage)),
            ExportPhase::Writing => pb.set_message("writing schedule"),
            ExportPhase::Done => pb.set_message("done"),
        }
    });

    pb.finish();

    match result {
        Ok(()) => log::info!("XML successfully created."),
        Err(e) => log::error!("Cannot save current data to file: {e}"),
    }

    log::info!("Done.");
}
