use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One node of the raw argument tree. Leaf options carry `value`;
/// sub-commands and sub-command-groups carry nested `options`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplicationCommandInteractionDataOption {
    pub name: Box<str>,
    pub r#type: u8,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ApplicationCommandInteractionDataOption>>,
}
