use super::reply_gate::{AckSender, ReplyGate};
use crate::webhook::{ExecuteWebhookPayload, WebhookClient};
use crate::Error;
use model::channel::message::Message;
use model::guild::Member;
use model::interaction::{ComponentType, InteractionType, MessageComponentInteraction};
use model::user::User;
use model::Snowflake;
use std::convert::TryFrom;

/// A button click on a previously-sent message. Unlike command-like
/// interactions, a follow-up may be sent without deferring first.
#[derive(Debug)]
pub struct ButtonInteraction {
    pub id: Option<Snowflake>,
    pub application_id: Option<Snowflake>,
    pub r#type: InteractionType,
    pub guild_id: Option<Snowflake>,
    pub channel_id: Option<Snowflake>,
    pub member: Option<Member>,
    pub user: Option<User>,
    pub token: Option<Box<str>>,
    pub version: Option<u8>,
    pub custom_id: Box<str>,
    pub component_type: ComponentType,
    pub message: Option<Message>,
    gate: ReplyGate,
}

impl ButtonInteraction {
    pub(crate) fn new(
        payload: MessageComponentInteraction,
        ack: AckSender,
        http_client: &reqwest::Client,
    ) -> ButtonInteraction {
        let webhook = WebhookClient::new(
            http_client.clone(),
            payload.application_id.unwrap_or(Snowflake(0)),
            payload.token.as_deref().unwrap_or(""),
        );

        let user = payload
            .member
            .as_ref()
            .and_then(|member| member.user.clone())
            .or(payload.user);

        // The classifier routed on this discriminant already
        let component_type = payload
            .data
            .component_type
            .and_then(|raw| ComponentType::try_from(raw).ok())
            .unwrap_or(ComponentType::Button);

        ButtonInteraction {
            id: payload.id,
            application_id: payload.application_id,
            r#type: payload.r#type,
            guild_id: payload.guild_id,
            channel_id: payload.channel_id,
            member: payload.member,
            user,
            token: payload.token,
            version: payload.version,
            custom_id: payload.data.custom_id,
            component_type,
            message: payload.message,
            gate: ReplyGate::for_component(ack, webhook),
        }
    }

    pub fn is_in_guild(&self) -> bool {
        self.guild_id.is_some() && self.member.is_some()
    }

    pub fn defer(&mut self, ephemeral: bool) -> Result<(), Error> {
        self.gate.defer(ephemeral)
    }

    pub async fn followup(&mut self, payload: &ExecuteWebhookPayload) -> Result<Message, Error> {
        self.gate.followup(payload).await
    }

    pub fn deferred(&self) -> bool {
        self.gate.deferred()
    }

    pub fn ephemeral(&self) -> bool {
        self.gate.ephemeral()
    }

    pub fn replied(&self) -> bool {
        self.gate.replied()
    }

    pub fn webhook(&self) -> &WebhookClient {
        self.gate.webhook()
    }
}
