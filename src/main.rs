mod cli;
mod client;
mod config;
mod control;
mod error;
mod player;

use clap::Parser;
use cli::{normalize_args, select_operation, Cli};
use client::RemoteClient;
use config::{process_env, Config};
use error::RemoteError;
use log::{debug, LevelFilter};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn dispatch<E>(cli: &Cli, config: &Config, env: E) -> Result<Option<String>, RemoteError>
where
    E: Fn(&str) -> Option<String>,
{
    let addr = config.resolve_addr(cli.addr.as_deref(), &env)?;
    let op = select_operation(cli, config, &env)?;
    debug!("{:?} against {}", op, addr);

    let client = RemoteClient::new(&addr)?;
    control::execute(&client, &op)
}

/// Runs one invocation, returning what to print on stdout and the exit code.
fn run<E>(cli: &Cli, config: &Config, env: E) -> (Option<String>, i32)
where
    E: Fn(&str) -> Option<String>,
{
    match dispatch(cli, config, env) {
        Ok(output) => (output, 0),
        Err(e) => (Some(e.to_string()), 1),
    }
}

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args()));
    init_logging(cli.verbose);

    // Errors are reported on stdout, not stderr.
    let (output, code) = run(&cli, &Config::load(), process_env);
    if let Some(output) = output {
        println!("{}", output);
    }
    std::process::exit(code);
}
