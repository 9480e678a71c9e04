use log::info;
use serde::Serialize;

use crate::cli::Operation;
use crate::client::RemoteClient;
use crate::error::RemoteError;
use crate::player::ActionRequest;

/// Runs one operation against the API, returning the text to print, if any.
pub fn execute(client: &RemoteClient, op: &Operation) -> Result<Option<String>, RemoteError> {
    match op {
        Operation::ListKeys => {
            let keys = client.player_keys()?;
            info!(
                "host reports {} player keys",
                keys.keys.as_ref().map_or(0, Vec::len)
            );
            pretty(&keys, "keys").map(Some)
        }
        Operation::GetPlayer { key } => {
            let player = client
                .player(key)
                .map_err(|e| e.context("error fetching key"))?;
            pretty(&player, "player").map(Some)
        }
        Operation::CreatePlayer { key, player_keys } => client
            .create_player(key, player_keys)
            .map(|_| None)
            .map_err(|e| e.context("error creating player key")),
        Operation::DeletePlayer { key } => client
            .delete_player(key)
            .map(|_| None)
            .map_err(|e| e.context("error deleting key")),
        Operation::SendAction { key, action, value } => {
            let request = ActionRequest {
                action,
                value: *value,
            };
            client
                .send_action(key, &request)
                .map(|_| None)
                .map_err(|e| e.context("error handling action"))
        }
    }
}

fn pretty<T: Serialize>(value: &T, what: &'static str) -> Result<String, RemoteError> {
    serde_json::to_string_pretty(value).map_err(|source| RemoteError::Encode { what, source })
}
