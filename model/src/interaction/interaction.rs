use crate::channel::message::Message;
use crate::guild::Member;
use crate::interaction::ApplicationCommandInteractionData;
use crate::user::User;
use crate::{PermissionBitSet, Snowflake};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;

/// An inbound interaction callback, dispatched on its numeric `type`
/// discriminant. Payloads are only decoded after signature verification,
/// so field presence is treated leniently: a missing field becomes `None`
/// rather than a decode failure.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum Interaction {
    Ping(Box<PingInteraction>),
    ApplicationCommand(Box<ApplicationCommandInteraction>),
    MessageComponent(Box<MessageComponentInteraction>),
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InteractionType {
    Ping = 1,
    ApplicationCommand = 2,
    MessageComponent = 3,
}

impl TryFrom<u64> for InteractionType {
    type Error = Box<str>;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            3 => Self::MessageComponent,
            _ => return Err(format!("invalid interaction type \"{}\"", value).into_boxed_str()),
        })
    }
}

// ============================================================================
// Ping Interaction
// ============================================================================

#[derive(Serialize, Deserialize, Debug)]
pub struct PingInteraction {
    pub id: Option<Snowflake>,
    pub application_id: Option<Snowflake>,
    pub r#type: InteractionType,
}

// ============================================================================
// Application Command Interaction
// ============================================================================

#[derive(Serialize, Deserialize, Debug)]
pub struct ApplicationCommandInteraction {
    pub id: Option<Snowflake>,
    pub application_id: Option<Snowflake>,
    pub r#type: InteractionType,
    #[serde(default)]
    pub data: ApplicationCommandInteractionData,
    pub guild_id: Option<Snowflake>,
    pub channel_id: Option<Snowflake>,
    pub member: Option<Member>,
    pub user: Option<User>,
    pub token: Option<Box<str>>,
    pub version: Option<u8>,
    pub app_permissions: Option<PermissionBitSet>,
}

// ============================================================================
// Message Component Interaction
// ============================================================================

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageComponentInteraction {
    pub id: Option<Snowflake>,
    pub application_id: Option<Snowflake>,
    pub r#type: InteractionType,
    pub message: Option<Message>,
    #[serde(default)]
    pub data: MessageComponentInteractionData,
    pub guild_id: Option<Snowflake>,
    pub channel_id: Option<Snowflake>,
    pub member: Option<Member>,
    pub user: Option<User>,
    pub token: Option<Box<str>>,
    pub version: Option<u8>,
}

/// `component_type` is kept as the raw wire integer; the gateway maps it
/// symbolically so that codes it does not know about drop out of dispatch
/// instead of failing the decode.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MessageComponentInteractionData {
    #[serde(default)]
    pub custom_id: Box<str>,
    pub component_type: Option<u8>,
}

impl<'de> Deserialize<'de> for Interaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let interaction_type = value
            .get("type")
            .and_then(Value::as_u64)
            .ok_or_else(|| Box::from("interaction type was not an integer"))
            .and_then(InteractionType::try_from)
            .map_err(D::Error::custom)?;

        let interaction = match interaction_type {
            InteractionType::Ping => serde_json::from_value(value).map(Interaction::Ping),
            InteractionType::ApplicationCommand => {
                serde_json::from_value(value).map(Interaction::ApplicationCommand)
            }
            InteractionType::MessageComponent => {
                serde_json::from_value(value).map(Interaction::MessageComponent)
            }
        }
        .map_err(D::Error::custom)?;

        Ok(interaction)
    }
}
