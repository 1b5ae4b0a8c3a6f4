mod app;
mod command;
mod config;
mod consts;
mod game;
mod menu;
mod options;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::parse_cli() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e}");
            return ExitCode::from(2);
        }
    };
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("gridsnake: {e:#}");
            return ExitCode::from(2);
        }
    };
    let terminal = ratatui::init();
    let r = App::new(config.options).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::load(&Config::default_path()?, true),
    }
    .context("failed to load configuration")
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Args {
    config: Option<PathBuf>,
}

impl Args {
    fn parse_cli() -> Result<Option<Args>, lexopt::Error> {
        let mut args = Args::default();
        let mut parser = Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => {
                    println!("Usage: gridsnake [-c|--config <path>]");
                    println!();
                    println!("Play snake in the terminal");
                    println!();
                    println!("Options:");
                    println!("  -c, --config <path>  Read configuration from <path>");
                    println!("  -h, --help           Display this help message and exit");
                    println!("  -V, --version        Show the program version and exit");
                    return Ok(None);
                }
                Arg::Short('V') | Arg::Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(args))
    }
}
