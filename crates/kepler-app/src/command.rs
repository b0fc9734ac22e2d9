//! Interactive commands read line by line from stdin.

use std::io::BufRead;
use std::str::FromStr;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use tracing::debug;

/// One-line usage summary printed at startup and on `help`.
pub const USAGE: &str =
    "commands: start | pause | reset | e <0.0-0.9> | dt <10-60> | table | reload | help | quit";

/// A user action. Parameter values are range-checked when applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Start,
    Pause,
    Reset,
    SetEccentricity(f64),
    SetInterval(u32),
    Table,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{command}` needs a value")]
    MissingArgument { command: &'static str },
    #[error("`{value}` is not a valid value for `{command}`")]
    BadValue {
        command: &'static str,
        value: String,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let arg = words.next();

        match head.to_ascii_lowercase().as_str() {
            "start" | "play" | "run" => Ok(Self::Start),
            "pause" | "stop" => Ok(Self::Pause),
            "reset" => Ok(Self::Reset),
            "table" => Ok(Self::Table),
            "reload" => Ok(Self::Reload),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            "e" | "ecc" | "eccentricity" => {
                parse_arg("e", arg).map(Self::SetEccentricity)
            }
            "dt" | "interval" => parse_arg("dt", arg).map(Self::SetInterval),
            _ => Err(CommandError::Unknown(head.to_string())),
        }
    }
}

fn parse_arg<T: FromStr>(command: &'static str, arg: Option<&str>) -> Result<T, CommandError> {
    let value = arg.ok_or(CommandError::MissingArgument { command })?;
    value.parse().map_err(|_| CommandError::BadValue {
        command,
        value: value.to_string(),
    })
}

/// Forward stdin lines to `sender` from a background thread.
///
/// The thread exits at end of input or once the receiver is dropped; the
/// channel disconnecting is how the driver learns stdin closed.
pub fn spawn_stdin_reader(sender: Sender<String>) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin-commands".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if sender.send(line).is_err() {
                    break;
                }
            }
            debug!("stdin closed");
        })
}
