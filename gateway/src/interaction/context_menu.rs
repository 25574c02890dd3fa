use super::option_resolver::OptionResolver;
use super::reply_gate::{AckSender, ReplyGate};
use crate::webhook::{ExecuteWebhookPayload, WebhookClient};
use crate::Error;
use model::channel::message::Message;
use model::guild::Member;
use model::interaction::{
    ApplicationCommandInteraction, ApplicationCommandType, InteractionType,
};
use model::user::User;
use model::Snowflake;
use std::convert::TryFrom;

/// A user (or, eventually, message) context-menu invocation. The target is
/// normalised into the option resolver as a synthesised USER option.
#[derive(Debug)]
pub struct ContextMenuInteraction {
    pub id: Option<Snowflake>,
    pub application_id: Option<Snowflake>,
    pub r#type: InteractionType,
    pub guild_id: Option<Snowflake>,
    pub channel_id: Option<Snowflake>,
    pub member: Option<Member>,
    pub user: Option<User>,
    pub token: Option<Box<str>>,
    pub version: Option<u8>,
    pub command_id: Option<Snowflake>,
    pub command_name: Option<Box<str>>,
    pub target_id: Option<Snowflake>,
    pub target_type: Option<ApplicationCommandType>,
    pub options: OptionResolver,
    gate: ReplyGate,
}

impl ContextMenuInteraction {
    pub(crate) fn new(
        payload: ApplicationCommandInteraction,
        ack: AckSender,
        http_client: &reqwest::Client,
    ) -> ContextMenuInteraction {
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

        let target_type = payload
            .data
            .r#type
            .and_then(|raw| ApplicationCommandType::try_from(raw).ok());

        let options = OptionResolver::for_context_menu(
            payload.data.target_id,
            payload.data.resolved.as_ref(),
        );

        ContextMenuInteraction {
            id: payload.id,
            application_id: payload.application_id,
            r#type: payload.r#type,
            guild_id: payload.guild_id,
            channel_id: payload.channel_id,
            member: payload.member,
            user,
            token: payload.token,
            version: payload.version,
            command_id: payload.data.id,
            command_name: payload.data.name,
            target_id: payload.data.target_id,
            target_type,
            options,
            gate: ReplyGate::new(ack, webhook),
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
