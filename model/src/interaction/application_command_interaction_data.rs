use serde::{Deserialize, Serialize};

use crate::interaction::{
    ApplicationCommandInteractionDataOption, ApplicationCommandInteractionDataResolved,
};
use crate::Snowflake;

/// `type` is the raw command-data discriminant (chat input / user / message
/// context menu); the gateway maps it symbolically at dispatch time.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ApplicationCommandInteractionData {
    pub id: Option<Snowflake>,
    pub name: Option<Box<str>>,
    pub r#type: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ApplicationCommandInteractionDataOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<ApplicationCommandInteractionDataResolved>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<Snowflake>,
}
