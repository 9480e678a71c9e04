use clap::{ArgAction, Parser};

use crate::config::Config;
use crate::error::RemoteError;
use crate::player::{parse_bool, split_player_keys, ActionValue};

#[derive(Parser, Debug)]
#[command(name = "tchremote")]
#[command(about = "Remote control for the player REST API", long_about = None)]
pub struct Cli {
    /// schema://host(:port) address of the REST API (or set TCH_ADDR)
    #[arg(long, value_name = "address", allow_hyphen_values = true)]
    pub addr: Option<String>,

    /// Key which identifies the player to send actions to (or set TCH_PLAYER_KEY)
    #[arg(long, value_name = "key", allow_hyphen_values = true)]
    pub key: Option<String>,

    /// List all the keys on the host
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_flag_bool
    )]
    pub keys: bool,

    /// Action to send to the player (requires -key, some require -value)
    #[arg(long, value_name = "action", default_value = "", allow_hyphen_values = true)]
    pub action: String,

    /// Value to send to the player
    #[arg(long, value_name = "value", default_value = "", allow_hyphen_values = true)]
    pub value: String,

    /// Create a multi-player from a comma-separated list for the given -key
    #[arg(long, value_name = "list", default_value = "", allow_hyphen_values = true)]
    pub create: String,

    /// Delete the player for -key
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_flag_bool
    )]
    pub delete: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_flag_bool(raw: &str) -> Result<bool, String> {
    parse_bool(raw).ok_or_else(|| format!("invalid boolean value {:?}", raw))
}

const LONG_FLAGS: &[&str] = &[
    "addr", "key", "keys", "action", "value", "create", "delete", "help",
];

/// Long flags whose value may arrive as the next argument.
const VALUE_FLAGS: &[&str] = &["addr", "key", "action", "value", "create"];

/// Rewrites single-dash long flags (`-addr x`, `-key=y`) to their double-dash form.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut expect_value = false;
    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        let name = arg
            .strip_prefix("--")
            .or_else(|| arg.strip_prefix('-'))
            .filter(|rest| !rest.starts_with('-'))
            .map(|rest| rest.split_once('=').map_or((rest, true), |(n, _)| (n, false)));
        match name {
            Some((name, bare)) if LONG_FLAGS.contains(&name) => {
                expect_value = bare && VALUE_FLAGS.contains(&name);
                if arg.starts_with("--") {
                    out.push(arg);
                } else {
                    out.push(format!("-{}", arg));
                }
            }
            _ => out.push(arg),
        }
    }
    out
}

#[derive(Debug, PartialEq)]
pub enum Operation {
    ListKeys,
    GetPlayer {
        key: String,
    },
    CreatePlayer {
        key: String,
        player_keys: Vec<String>,
    },
    DeletePlayer {
        key: String,
    },
    SendAction {
        key: String,
        action: String,
        value: Option<ActionValue>,
    },
}

/// Picks the single operation to run: keys, then create, action, delete, and finally get.
pub fn select_operation<E>(cli: &Cli, config: &Config, env: E) -> Result<Operation, RemoteError>
where
    E: Fn(&str) -> Option<String>,
{
    if cli.keys {
        return Ok(Operation::ListKeys);
    }

    let key = config.resolve_key(cli.key.as_deref(), env)?;

    if !cli.create.is_empty() {
        return Ok(Operation::CreatePlayer {
            key,
            player_keys: split_player_keys(&cli.create),
        });
    }
    if !cli.action.is_empty() {
        let value = ActionValue::parse(&cli.action, &cli.value)
            .map_err(|e| e.context("error handling action"))?;
        return Ok(Operation::SendAction {
            key,
            action: cli.action.clone(),
            value,
        });
    }
    if cli.delete {
        return Ok(Operation::DeletePlayer { key });
    }
    Ok(Operation::GetPlayer { key })
}
