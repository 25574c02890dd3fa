use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Responses the gateway itself produces on the interaction callback:
/// the liveness-check acknowledgement and the deferred reply. Full message
/// replies travel over the follow-up webhook instead.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum InteractionResponse {
    Pong(SimpleInteractionResponse),
    DeferredChannelMessageWithSource(DeferredInteractionResponse),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SimpleInteractionResponse {
    r#type: InteractionResponseType,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DeferredInteractionResponse {
    r#type: InteractionResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<DeferredInteractionResponseData>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DeferredInteractionResponseData {
    pub flags: usize,
}

const EPHEMERAL_FLAG: usize = 64;

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[non_exhaustive]
pub enum InteractionResponseType {
    Pong = 1,
    ChannelMessageWithSource = 4,
    DeferredChannelMessageWithSource = 5,
}

impl InteractionResponse {
    pub fn new_pong() -> InteractionResponse {
        InteractionResponse::Pong(SimpleInteractionResponse {
            r#type: InteractionResponseType::Pong,
        })
    }

    pub fn new_deferred_channel_message_with_source(ephemeral: bool) -> InteractionResponse {
        let data = if ephemeral {
            Some(DeferredInteractionResponseData {
                flags: EPHEMERAL_FLAG,
            })
        } else {
            None
        };

        InteractionResponse::DeferredChannelMessageWithSource(DeferredInteractionResponse {
            r#type: InteractionResponseType::DeferredChannelMessageWithSource,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pong_shape() {
        let json = serde_json::to_string(&InteractionResponse::new_pong()).unwrap();
        assert_eq!(json, r#"{"type":1}"#);
    }

    #[test]
    fn test_deferred_shape() {
        let response = InteractionResponse::new_deferred_channel_message_with_source(false);
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"type":5}"#);
    }

    #[test]
    fn test_deferred_ephemeral_shape() {
        let response = InteractionResponse::new_deferred_channel_message_with_source(true);
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"type":5,"data":{"flags":64}}"#
        );
    }
}
