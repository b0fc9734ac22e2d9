//! The binary entry point for the Kepler areas visualizer.

use clap::Parser;
use kepler_app::platform::PlatformDirs;
use kepler_app::{App, AppError, command};
use kepler_config::{CliArgs, Config};

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(&args) {
        eprintln!("kepler-areas: {e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let dirs = match &args.config {
        Some(dir) => PlatformDirs::with_config_dir(dir),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_dirs()?;

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    kepler_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    let mut app = App::new(
        config,
        Some(dirs.config_dir),
        args.time.unwrap_or(0.0),
        args.json,
    )?
    .with_cli_overrides(args.clone());

    if args.snapshot {
        app.snapshot()?;
        return Ok(());
    }

    let (sender, receiver) = crossbeam_channel::unbounded();
    command::spawn_stdin_reader(sender)?;
    app.run(&receiver)
}
