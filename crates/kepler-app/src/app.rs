//! The driver: applies commands, ticks the clock, renders frames, and
//! prints the area table.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};
use kepler_config::{CliArgs, Config, snap_eccentricity, validate_interval};
use kepler_render::{Scene, Viewport};
use tracing::{debug, info, warn};

use crate::command::{Command, CommandError, USAGE};
use crate::error::AppError;
use crate::frame::FrameWriter;
use crate::game_loop::GameLoop;
use crate::state::AnimationState;
use crate::table::{area_rows, format_table, to_json};

/// Whether the driver loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What one redraw produced.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSummary {
    pub time: f64,
    pub sector_count: usize,
    /// PNG written for this frame, if frame output is enabled.
    pub path: Option<PathBuf>,
}

pub struct App {
    state: AnimationState,
    config: Config,
    config_dir: Option<PathBuf>,
    overrides: CliArgs,
    viewport: Viewport,
    frames: Option<FrameWriter>,
    json: bool,
    shown_sectors: Option<usize>,
    dirty: bool,
}

impl App {
    /// Build the driver from a validated config, with the clock at `initial_time`.
    pub fn new(
        config: Config,
        config_dir: Option<PathBuf>,
        initial_time: f64,
        json: bool,
    ) -> Result<Self, AppError> {
        config.validate()?;
        let mut state = AnimationState::new(
            config.orbit.orbit()?,
            config.orbit.interval_days,
            config.animation.time_step,
        );
        state.set_time(initial_time)?;
        if config.animation.autostart {
            state.start();
        }

        let mut app = Self {
            state,
            viewport: Viewport::orbit_plot(config.render.width, config.render.height),
            frames: None,
            config,
            config_dir,
            overrides: CliArgs::default(),
            json,
            shown_sectors: None,
            dirty: true,
        };
        app.configure_output();
        Ok(app)
    }

    /// Keep `args` so `reload` lays them over the re-read file again.
    pub fn with_cli_overrides(mut self, args: CliArgs) -> Self {
        self.overrides = args;
        self
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and apply one input line.
    ///
    /// Unknown commands and out-of-range parameters are reported and
    /// ignored; only failures of the app itself are returned as errors.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow, AppError> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => return Ok(Flow::Continue),
            Err(e) => {
                warn!("{e}; {USAGE}");
                return Ok(Flow::Continue);
            }
        };
        match self.apply(command) {
            Err(AppError::Config(e)) => {
                warn!("rejected: {e}");
                Ok(Flow::Continue)
            }
            Err(AppError::Orbit(e)) => {
                warn!("rejected: {e}");
                Ok(Flow::Continue)
            }
            other => other,
        }
    }

    pub fn apply(&mut self, command: Command) -> Result<Flow, AppError> {
        debug!(?command, "applying command");
        match command {
            Command::Start => {
                self.state.start();
                info!(t = self.state.time(), "animation started");
            }
            Command::Pause => {
                self.state.pause();
                info!(t = self.state.time(), "animation paused");
            }
            Command::Reset => {
                self.state.reset();
                info!("animation reset");
                self.dirty = true;
            }
            Command::SetEccentricity(value) => {
                let ecc = snap_eccentricity(value)?;
                self.state.set_eccentricity(ecc);
                self.config.orbit.eccentricity = ecc.value();
                info!(e = ecc.value(), "eccentricity set");
                self.invalidate_table();
            }
            Command::SetInterval(days) => {
                let days = validate_interval(days)?;
                self.state.set_interval(days);
                self.config.orbit.interval_days = days;
                info!(days, "interval set");
                self.invalidate_table();
            }
            Command::Table => self.print_table()?,
            Command::Reload => self.reload_config()?,
            Command::Help => eprintln!("{USAGE}"),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// One clock tick. Returns `true` if the frame needs redrawing.
    pub fn update(&mut self) -> bool {
        let moved = self.state.advance();
        self.dirty |= moved;
        moved
    }

    /// Recompute sectors and write a PNG if frame output is enabled.
    pub fn render(&mut self) -> Result<FrameSummary, AppError> {
        let sectors = self.state.sectors()?;
        let path = match self.frames.as_mut() {
            Some(writer) => {
                let scene = Scene::build(
                    self.state.orbit(),
                    self.state.time(),
                    &sectors,
                    self.config.render.orbit_samples,
                );
                Some(writer.write(&scene.render(&self.viewport))?)
            }
            None => None,
        };
        self.dirty = false;
        Ok(FrameSummary {
            time: self.state.time(),
            sector_count: sectors.len(),
            path,
        })
    }

    /// The area table for the current clock, as text or JSON.
    pub fn table(&self) -> Result<String, AppError> {
        let sectors = self.state.sectors()?;
        let rows = area_rows(self.state.orbit(), &sectors, self.config.table.area_readout);
        if self.json {
            return Ok(to_json(&rows)?);
        }
        Ok(format!(
            "t = {:.1} d, e = {:.2}, interval = {} d\n{}",
            self.state.time(),
            self.state.orbit().eccentricity.value(),
            self.state.interval_days(),
            format_table(&rows)
        ))
    }

    /// Render one frame, print the table, and report where the frame went.
    pub fn snapshot(&mut self) -> Result<FrameSummary, AppError> {
        let frame = self.render()?;
        self.print_table()?;
        if let Some(path) = &frame.path {
            info!(path = %path.display(), "snapshot written");
        }
        Ok(frame)
    }

    /// Run until `quit`, or until stdin closes while paused or recording.
    ///
    /// Each iteration waits up to one tick for a command, then advances the
    /// clock by however many ticks have elapsed. Commands therefore take
    /// effect at iteration boundaries.
    pub fn run(&mut self, commands: &Receiver<String>) -> Result<(), AppError> {
        let mut game_loop = GameLoop::new(self.tick());
        let mut stdin_open = true;
        eprintln!("{USAGE}");

        'run: loop {
            if self.dirty {
                let frame = self.render()?;
                self.report(&frame)?;
            }

            let tick = self.tick();
            if stdin_open {
                match commands.recv_timeout(tick) {
                    Ok(line) => {
                        for line in std::iter::once(line).chain(commands.try_iter()) {
                            if self.handle_line(&line)? == Flow::Quit {
                                break 'run;
                            }
                        }
                    }
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => {
                        debug!("command channel closed");
                        stdin_open = false;
                        if self.state.is_running() && self.recording() {
                            warn!("input closed while recording frames; stopping");
                            break;
                        }
                    }
                }
            } else if self.state.is_running() {
                thread::sleep(tick);
            } else {
                break;
            }

            game_loop.set_tick(self.tick());
            game_loop.tick(|_| {
                self.update();
            });
        }

        info!(
            frames = game_loop.frame_count(),
            ticks = game_loop.update_count(),
            "stopped"
        );
        Ok(())
    }

    fn tick(&self) -> Duration {
        Duration::from_millis(self.config.animation.tick_ms)
    }

    fn recording(&self) -> bool {
        self.frames.is_some() && self.config.render.record
    }

    fn report(&mut self, frame: &FrameSummary) -> Result<(), AppError> {
        debug!(t = frame.time, sectors = frame.sector_count, path = ?frame.path, "frame");
        if self.shown_sectors != Some(frame.sector_count) {
            self.shown_sectors = Some(frame.sector_count);
            self.print_table()?;
        }
        Ok(())
    }

    fn print_table(&self) -> Result<(), AppError> {
        println!("{}", self.table()?);
        Ok(())
    }

    fn invalidate_table(&mut self) {
        self.shown_sectors = None;
        self.dirty = true;
    }

    fn configure_output(&mut self) {
        self.viewport = Viewport::orbit_plot(self.config.render.width, self.config.render.height);
        self.frames = self
            .config
            .render
            .output_dir
            .as_deref()
            .map(|dir| FrameWriter::new(dir, self.config.render.record));
    }

    fn reload_config(&mut self) -> Result<(), AppError> {
        let Some(dir) = self.config_dir.as_deref() else {
            warn!("no config directory to reload from");
            return Ok(());
        };
        let Some(new_config) = self.config.reload(dir, &self.overrides)? else {
            info!("config unchanged");
            return Ok(());
        };
        new_config.validate()?;

        self.state.set_eccentricity(new_config.orbit.orbit()?.eccentricity);
        self.state.set_interval(new_config.orbit.interval_days);
        self.state.set_time_step(new_config.animation.time_step);
        self.config = new_config;
        self.configure_output();
        self.invalidate_table();
        info!("config applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kepler_config::AreaReadout;

    fn app() -> App {
        App::new(Config::default(), None, 0.0, false).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = Config::default();
        config.orbit.interval_days = 5;
        assert!(App::new(config, None, 0.0, false).is_err());
        assert!(App::new(Config::default(), None, f64::NAN, false).is_err());
    }

    #[test]
    fn test_autostart() {
        let mut config = Config::default();
        config.animation.autostart = true;
        let app = App::new(config, None, 0.0, false).unwrap();
        assert!(app.state().is_running());
    }

    #[test]
    fn test_start_pause_reset_cycle() {
        let mut app = app();
        assert_eq!(app.handle_line("start").unwrap(), Flow::Continue);
        for _ in 0..10 {
            app.update();
        }
        assert_eq!(app.state().time(), 20.0);
        app.handle_line("pause").unwrap();
        app.update();
        assert_eq!(app.state().time(), 20.0);
        app.handle_line("reset").unwrap();
        assert_eq!(app.state().time(), 0.0);
        assert!(!app.state().is_running());
    }

    #[test]
    fn test_quit() {
        assert_eq!(app().handle_line("quit").unwrap(), Flow::Quit);
    }

    #[test]
    fn test_parameter_commands_validate() {
        let mut app = app();
        app.handle_line("e 0.72").unwrap();
        assert_eq!(app.state().orbit().eccentricity.value(), 0.7);
        assert_eq!(app.config().orbit.eccentricity, 0.7);

        // Rejected values leave the state untouched.
        assert_eq!(app.handle_line("e 0.99").unwrap(), Flow::Continue);
        assert_eq!(app.state().orbit().eccentricity.value(), 0.7);

        app.handle_line("dt 15").unwrap();
        assert_eq!(app.state().interval_days(), 15);
        app.handle_line("dt 200").unwrap();
        assert_eq!(app.state().interval_days(), 15);

        assert_eq!(app.handle_line("bogus").unwrap(), Flow::Continue);
        assert_eq!(app.handle_line("").unwrap(), Flow::Continue);
    }

    #[test]
    fn test_render_without_output() {
        let mut app = App::new(Config::default(), None, 95.0, false).unwrap();
        let frame = app.render().unwrap();
        assert_eq!(frame.sector_count, 3);
        assert!(frame.path.is_none());
        assert_eq!(frame.time, 95.0);
    }

    #[test]
    fn test_render_writes_frames() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.render.output_dir = Some(dir.path().to_path_buf());
        config.render.record = true;
        config.render.width = 140;
        config.render.height = 120;
        let mut app = App::new(config, None, 40.0, false).unwrap();

        let first = app.snapshot().unwrap();
        assert_eq!(first.path, Some(dir.path().join("frame_00000.png")));
        let second = app.render().unwrap();
        assert_eq!(second.path, Some(dir.path().join("frame_00001.png")));
        assert!(dir.path().join("frame_00001.png").exists());
    }

    #[test]
    fn test_table_text_and_json() {
        let app = App::new(Config::default(), None, 65.0, false).unwrap();
        let text = app.table().unwrap();
        assert!(text.starts_with("t = 65.0 d, e = 0.50, interval = 30 d"));
        assert!(text.contains("Sector 2"));

        let json_app = App::new(Config::default(), None, 65.0, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json_app.table().unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_reload_applies_file_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        let mut app = App::new(config.clone(), Some(dir.path().to_path_buf()), 0.0, false).unwrap();

        let mut edited = config;
        edited.orbit.eccentricity = 0.25;
        edited.orbit.interval_days = 20;
        edited.table.area_readout = AreaReadout::Computed;
        edited.save(dir.path()).unwrap();

        app.handle_line("reload").unwrap();
        assert_eq!(app.state().orbit().eccentricity.value(), 0.25);
        assert_eq!(app.state().interval_days(), 20);
        assert_eq!(app.config().table.area_readout, AreaReadout::Computed);
    }

    #[test]
    fn test_reload_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        let mut app = App::new(config.clone(), Some(dir.path().to_path_buf()), 0.0, false).unwrap();

        let mut edited = config;
        edited.orbit.interval_days = 500;
        edited.save(dir.path()).unwrap();

        assert_eq!(app.handle_line("reload").unwrap(), Flow::Continue);
        assert_eq!(app.state().interval_days(), 30);
        assert_eq!(app.config().orbit.interval_days, 30);
    }

    #[test]
    fn test_reload_keeps_cli_overrides() {
        let config_dir = tempfile::tempdir().unwrap();
        let frame_dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.render.width = 70;
        config.render.height = 60;
        config.save(config_dir.path()).unwrap();

        let args = CliArgs {
            output: Some(frame_dir.path().to_path_buf()),
            computed_areas: true,
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        let mut app = App::new(config, Some(config_dir.path().to_path_buf()), 0.0, false)
            .unwrap()
            .with_cli_overrides(args);

        app.handle_line("reload").unwrap();
        assert_eq!(app.config().table.area_readout, AreaReadout::Computed);
        assert_eq!(
            app.render().unwrap().path,
            Some(frame_dir.path().join("frame.png"))
        );
    }

    #[test]
    fn test_reload_applies_tick_change() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        let mut app = App::new(config.clone(), Some(dir.path().to_path_buf()), 0.0, false).unwrap();

        let mut edited = config;
        edited.animation.tick_ms = 25;
        edited.save(dir.path()).unwrap();

        app.handle_line("reload").unwrap();
        assert_eq!(app.tick(), Duration::from_millis(25));
    }

    #[test]
    fn test_run_exits_when_input_closes_while_paused() {
        let (tx, rx) = crossbeam_channel::unbounded();
        tx.send("e 0.3".to_string()).unwrap();
        drop(tx);
        let mut app = app();
        app.run(&rx).unwrap();
        assert_eq!(app.state().orbit().eccentricity.value(), 0.3);
    }

    #[test]
    fn test_run_stops_recording_when_input_closes() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, rx) = crossbeam_channel::unbounded::<String>();
        drop(tx);
        let mut config = Config::default();
        config.animation.autostart = true;
        config.render.output_dir = Some(dir.path().to_path_buf());
        config.render.record = true;
        config.render.width = 70;
        config.render.height = 60;
        let mut app = App::new(config, None, 0.0, false).unwrap();

        app.run(&rx).unwrap();
        assert!(app.state().is_running());
        assert!(dir.path().join("frame_00000.png").exists());
    }

    #[test]
    fn test_run_handles_quit_in_a_batch() {
        let (tx, rx) = crossbeam_channel::unbounded();
        for line in ["e 0.2", "quit", "e 0.4"] {
            tx.send(line.to_string()).unwrap();
        }
        let mut app = app();
        app.run(&rx).unwrap();
        assert_eq!(app.state().orbit().eccentricity.value(), 0.2);
    }

    #[test]
    fn test_run_animates_until_quit() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut config = Config::default();
        config.animation.tick_ms = 1;
        let mut app = App::new(config, None, 0.0, false).unwrap();
        tx.send("start".to_string()).unwrap();
        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            tx.send("quit".to_string()).unwrap();
        });
        app.run(&rx).unwrap();
        handle.join().unwrap();
        assert!(app.state().time() > 0.0);
    }
}
