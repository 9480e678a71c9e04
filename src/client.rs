use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;

use crate::error::RemoteError;
use crate::player::{ActionRequest, NewPlayer, Player, PlayerKeys};

/// Thin blocking client for the `/api/players` endpoints.
pub struct RemoteClient {
    http: Client,
    base: String,
}

impl RemoteClient {
    pub fn new(addr: &str) -> Result<Self, RemoteError> {
        let http = Client::builder()
            .user_agent(concat!("tchremote/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base: addr.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/api/players/", self.base)
    }

    fn player_url(&self, key: &str) -> String {
        format!("{}/api/players/{}", self.base, key)
    }

    pub fn player_keys(&self) -> Result<PlayerKeys, RemoteError> {
        let url = self.collection_url();
        debug!("GET {}", url);
        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        let body = resp.text().map_err(RemoteError::ReadBody)?;
        if status != StatusCode::OK {
            return Err(RemoteError::Status(body));
        }
        serde_json::from_str(&body).map_err(RemoteError::Decode)
    }

    /// The status code is not checked; whatever comes back is decoded as a player.
    pub fn player(&self, key: &str) -> Result<Player, RemoteError> {
        let url = self.player_url(key);
        debug!("GET {}", url);
        let resp = self.http.get(&url).send()?;
        debug!("GET {} -> {}", url, resp.status());
        let body = resp.text().map_err(RemoteError::ReadBody)?;
        serde_json::from_str(&body).map_err(RemoteError::Decode)
    }

    pub fn create_player(&self, key: &str, player_keys: &[String]) -> Result<(), RemoteError> {
        let url = self.collection_url();
        debug!("POST {} ({} player keys)", url, player_keys.len());
        let resp = self
            .http
            .post(&url)
            .json(&NewPlayer { key, player_keys })
            .send()?;
        match resp.status() {
            StatusCode::CREATED => Ok(()),
            status => Err(RemoteError::CreateRejected(status.as_u16())),
        }
    }

    pub fn delete_player(&self, key: &str) -> Result<(), RemoteError> {
        let url = self.player_url(key);
        debug!("DELETE {}", url);
        let resp = self.http.delete(&url).send()?;
        expect_status(resp, StatusCode::NO_CONTENT)
    }

    pub fn send_action(&self, key: &str, request: &ActionRequest<'_>) -> Result<(), RemoteError> {
        let url = self.player_url(key);
        debug!("PUT {} action={}", url, request.action);
        let body = serde_json::to_vec(request).map_err(|source| RemoteError::Encode {
            what: "JSON request body",
            source,
        })?;
        let resp = self.http.put(&url).body(body).send()?;
        expect_status(resp, StatusCode::OK)
    }
}

fn expect_status(resp: Response, expected: StatusCode) -> Result<(), RemoteError> {
    if resp.status() == expected {
        return Ok(());
    }
    debug!("unexpected status {}", resp.status());
    let body = resp.text().map_err(RemoteError::ReadBody)?;
    Err(RemoteError::Status(body.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_on_address_is_dropped() {
        let client = RemoteClient::new("http://localhost:8080/").unwrap();
        assert_eq!(
            client.collection_url(),
            "http://localhost:8080/api/players/"
        );
        assert_eq!(
            client.player_url("kitchen"),
            "http://localhost:8080/api/players/kitchen"
        );
    }

    #[test]
    fn unreachable_host_is_a_request_error() {
        let client = RemoteClient::new("http://127.0.0.1:1").unwrap();
        let err = client.delete_player("kitchen").unwrap_err();
        assert!(matches!(err, RemoteError::Request(_)));
        assert!(err.to_string().starts_with("error performing request"));
    }
}
