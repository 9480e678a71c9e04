use serde::{Deserialize, Serialize};

use crate::error::RemoteError;

/// Response body of `GET /api/players/`.
///
/// A missing or null `keys` field is kept as `None` and printed back as null.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct PlayerKeys {
    #[serde(default)]
    pub keys: Option<Vec<String>>,
}

/// A player as reported by `GET /api/players/{key}`.
///
/// `player_keys` is only present for multi-players.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct Player {
    #[serde(default)]
    pub key: String,
    #[serde(rename = "playerKeys", default)]
    pub player_keys: Option<Vec<String>>,
}

/// Request body of `POST /api/players/`.
#[derive(Debug, Serialize)]
pub struct NewPlayer<'a> {
    pub key: &'a str,
    #[serde(rename = "playerKeys")]
    pub player_keys: &'a [String],
}

/// Request body of `PUT /api/players/{key}`.
#[derive(Debug, Serialize)]
pub struct ActionRequest<'a> {
    pub action: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ActionValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActionValue {
    Number(f64),
    Bool(bool),
}

impl ActionValue {
    /// Interprets `raw` according to what `action` expects.
    ///
    /// Returns `Ok(None)` when the value is empty or the action takes no typed value.
    pub fn parse(action: &str, raw: &str) -> Result<Option<ActionValue>, RemoteError> {
        if raw.is_empty() {
            return Ok(None);
        }
        let invalid = |reason: String| RemoteError::InvalidValue {
            action: action.to_string(),
            value: raw.to_string(),
            reason,
        };

        match action {
            "setTime" | "setVolume" => {
                let n: f64 = raw.parse().map_err(|e| invalid(format!("{}", e)))?;
                if !n.is_finite() {
                    return Err(invalid("value is not a finite number".into()));
                }
                Ok(Some(ActionValue::Number(n)))
            }
            "setVolumeMute" => parse_bool(raw)
                .map(|b| Some(ActionValue::Bool(b)))
                .ok_or_else(|| invalid("expected a boolean (true/false, t/f, 1/0)".into())),
            _ => Ok(None),
        }
    }
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Splits a `-create` list on commas, keeping empty segments.
pub fn split_player_keys(list: &str) -> Vec<String> {
    list.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_list_is_split_literally() {
        assert_eq!(split_player_keys("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_player_keys("a,,b"), vec!["a", "", "b"]);
        assert_eq!(split_player_keys(" a ,b"), vec![" a ", "b"]);
    }

    #[test]
    fn numeric_actions_parse_floats() {
        assert_eq!(
            ActionValue::parse("setTime", "12.5").unwrap(),
            Some(ActionValue::Number(12.5))
        );
        assert_eq!(
            ActionValue::parse("setVolume", "0").unwrap(),
            Some(ActionValue::Number(0.0))
        );
        assert!(ActionValue::parse("setTime", "abc").is_err());
        assert!(ActionValue::parse("setVolume", "NaN").is_err());
    }

    #[test]
    fn mute_accepts_only_boolean_literals() {
        assert_eq!(
            ActionValue::parse("setVolumeMute", "true").unwrap(),
            Some(ActionValue::Bool(true))
        );
        assert_eq!(
            ActionValue::parse("setVolumeMute", "F").unwrap(),
            Some(ActionValue::Bool(false))
        );
        let err = ActionValue::parse("setVolumeMute", "yes").unwrap_err();
        assert!(matches!(err, RemoteError::InvalidValue { .. }));
    }

    #[test]
    fn other_actions_and_empty_values_carry_nothing() {
        assert_eq!(ActionValue::parse("play", "12").unwrap(), None);
        assert_eq!(ActionValue::parse("setTime", "").unwrap(), None);
    }

    #[test]
    fn absent_value_is_omitted_not_null() {
        let body = serde_json::to_value(ActionRequest {
            action: "play",
            value: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "action": "play" }));

        let body = serde_json::to_value(ActionRequest {
            action: "setVolumeMute",
            value: Some(ActionValue::Bool(false)),
        })
        .unwrap();
        assert_eq!(body, json!({ "action": "setVolumeMute", "value": false }));
    }

    #[test]
    fn key_listing_tolerates_missing_keys() {
        let empty: PlayerKeys = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.keys, None);
        let null: PlayerKeys = serde_json::from_str(r#"{"keys":null}"#).unwrap();
        assert_eq!(null.keys, None);
        assert_eq!(serde_json::to_value(&null).unwrap(), json!({ "keys": null }));
    }

    #[test]
    fn leaf_player_decodes_without_child_keys() {
        let player: Player = serde_json::from_str(r#"{"key":"kitchen"}"#).unwrap();
        assert_eq!(player.key, "kitchen");
        assert_eq!(player.player_keys, None);

        let multi: Player =
            serde_json::from_str(r#"{"key":"house","playerKeys":["kitchen","den"]}"#).unwrap();
        assert_eq!(
            multi.player_keys,
            Some(vec!["kitchen".to_string(), "den".to_string()])
        );
    }
}
