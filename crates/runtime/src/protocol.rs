//! Wire contract between connections and sessions.
//!
//! Inbound: `{"action": "<name>", "payload": {...}}`; the acting player is
//! supplied by the transport, never by the payload. Outbound: either the
//! caller's [`HandlerResult`] or a per-observer [`GameSnapshot`].
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use game_core::{
    Action, ActionOutcome, AttackAction, DropItemAction, GameSnapshot, ItemId, Location,
    PickUpAction, PlayerId, PotionTarget, TameAction, UsePotionAction,
};

use crate::api::RuntimeError;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("invalid payload for {action}: {reason}")]
    InvalidPayload { action: &'static str, reason: String },

    #[error("invalid target: unknown location '{0}'")]
    UnknownLocation(String),
}

/// Inbound message as read off the wire.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientMessage {
    pub action: String,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Deserialize)]
struct JoinPayload {
    name: String,
}

#[derive(Deserialize)]
struct MovePayload {
    target: String,
}

#[derive(Deserialize)]
struct ItemPayload {
    item_id: u32,
}

#[derive(Deserialize)]
struct AttackPayload {
    target_id: String,
    #[serde(default)]
    weapon_id: Option<u32>,
}

#[derive(Deserialize)]
struct PotionPayload {
    potion_id: u32,
    #[serde(default)]
    target_id: Option<String>,
    #[serde(default)]
    is_group: bool,
}

fn payload<T: DeserializeOwned>(action: &'static str, raw: &Value) -> Result<T, ProtocolError> {
    let raw = if raw.is_null() {
        Value::Object(Default::default())
    } else {
        raw.clone()
    };
    serde_json::from_value(raw).map_err(|e| ProtocolError::InvalidPayload {
        action,
        reason: e.to_string(),
    })
}

impl ClientMessage {
    pub fn new(action: impl Into<String>, payload: Value) -> Self {
        Self {
            action: action.into(),
            payload,
        }
    }

    /// Builds the engine action for `actor`.
    pub fn decode(&self, actor: &PlayerId) -> Result<Action, ProtocolError> {
        let actor = actor.clone();
        let action = match self.action.as_str() {
            "join" => {
                let JoinPayload { name } = payload("join", &self.payload)?;
                Action::join(actor, name)
            }
            "start_game" => Action::start_game(actor),
            "roll" => Action::roll(actor),
            "move" => {
                let MovePayload { target } = payload("move", &self.payload)?;
                let location = target
                    .parse::<Location>()
                    .map_err(|_| ProtocolError::UnknownLocation(target.clone()))?;
                Action::move_to(actor, location)
            }
            "pick_up" => {
                let ItemPayload { item_id } = payload("pick_up", &self.payload)?;
                Action::PickUp(PickUpAction::new(actor, ItemId(item_id)))
            }
            "drop_item" => {
                let ItemPayload { item_id } = payload("drop_item", &self.payload)?;
                Action::DropItem(DropItemAction::new(actor, ItemId(item_id)))
            }
            "attack" => {
                let AttackPayload {
                    target_id,
                    weapon_id,
                } = payload("attack", &self.payload)?;
                Action::Attack(AttackAction::new(
                    actor,
                    target_id.into(),
                    weapon_id.map(ItemId),
                ))
            }
            "use_potion" => {
                let PotionPayload {
                    potion_id,
                    target_id,
                    is_group,
                } = payload("use_potion", &self.payload)?;
                let target = match (is_group, target_id) {
                    (true, _) => PotionTarget::Location,
                    (false, Some(target)) => PotionTarget::Player(target.into()),
                    (false, None) => PotionTarget::Player(actor.clone()),
                };
                Action::UsePotion(UsePotionAction::new(actor, ItemId(potion_id), target))
            }
            "tame" => Action::Tame(TameAction::new(actor)),
            other => return Err(ProtocolError::UnknownAction(other.to_owned())),
        };
        Ok(action)
    }
}

/// The `(success, message)` pair returned to the caller of every action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResult {
    pub success: bool,
    pub message: String,
}

impl HandlerResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<Result<ActionOutcome, RuntimeError>> for HandlerResult {
    fn from(result: Result<ActionOutcome, RuntimeError>) -> Self {
        match result {
            Ok(outcome) => HandlerResult::ok(outcome.message),
            Err(error) => HandlerResult::failed(error.to_string()),
        }
    }
}

/// Outbound message.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    State(GameSnapshot),
    Response(HandlerResult),
}
