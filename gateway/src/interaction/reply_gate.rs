use crate::webhook::{ExecuteWebhookPayload, WebhookClient};
use crate::Error;
use model::channel::message::Message;
use model::interaction::InteractionResponse;
use tokio::sync::oneshot;

pub(crate) type AckSender = oneshot::Sender<InteractionResponse>;

/// Guards the reply sequence of a single interaction. The platform accepts
/// exactly one acknowledgement on the callback itself, and follow-up
/// messages only over the webhook channel afterwards; both a second
/// acknowledgement and a premature follow-up are refused here rather than
/// round-tripping to be rejected remotely.
#[derive(Debug)]
pub struct ReplyGate {
    ack: Option<AckSender>,
    webhook: WebhookClient,
    ack_before_followup: bool,
    deferred: bool,
    ephemeral: bool,
    replied: bool,
}

impl ReplyGate {
    pub(crate) fn new(ack: AckSender, webhook: WebhookClient) -> ReplyGate {
        ReplyGate {
            ack: Some(ack),
            webhook,
            ack_before_followup: true,
            deferred: false,
            ephemeral: false,
            replied: false,
        }
    }

    /// Component interactions may follow up without an explicit defer
    /// step first.
    pub(crate) fn for_component(ack: AckSender, webhook: WebhookClient) -> ReplyGate {
        ReplyGate {
            ack: Some(ack),
            webhook,
            ack_before_followup: false,
            deferred: false,
            ephemeral: false,
            replied: false,
        }
    }

    /// Sends the deferred acknowledgement, releasing the callback response
    /// so slower work can continue over the webhook channel.
    pub fn defer(&mut self, ephemeral: bool) -> Result<(), Error> {
        let ack = self.ack.take().ok_or(Error::ReplyAlreadySent)?;

        let response = InteractionResponse::new_deferred_channel_message_with_source(ephemeral);
        ack.send(response)
            .map_err(|_| Error::AcknowledgementDropped)?;

        self.deferred = true;
        self.ephemeral = ephemeral;

        Ok(())
    }

    /// Sends a follow-up message over the webhook channel.
    pub async fn followup(&mut self, payload: &ExecuteWebhookPayload) -> Result<Message, Error> {
        if self.ack_before_followup && !self.acknowledged() {
            return Err(Error::ReplyNotSent);
        }

        let message = self.webhook.execute(payload).await?;
        self.replied = true;

        Ok(message)
    }

    pub fn acknowledged(&self) -> bool {
        self.ack.is_none()
    }

    pub fn deferred(&self) -> bool {
        self.deferred
    }

    pub fn ephemeral(&self) -> bool {
        self.ephemeral
    }

    pub fn replied(&self) -> bool {
        self.replied
    }

    pub fn webhook(&self) -> &WebhookClient {
        &self.webhook
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Snowflake;

    fn gate() -> (ReplyGate, oneshot::Receiver<InteractionResponse>) {
        let (ack_tx, ack_rx) = oneshot::channel();
        let webhook = WebhookClient::new(reqwest::Client::new(), Snowflake(1), "token");

        (ReplyGate::new(ack_tx, webhook), ack_rx)
    }

    #[tokio::test]
    async fn test_defer_sends_acknowledgement() {
        let (mut gate, mut ack_rx) = gate();

        assert!(!gate.deferred());
        gate.defer(false).unwrap();

        assert!(gate.deferred());
        assert!(!gate.ephemeral());
        assert!(gate.acknowledged());

        let response = ack_rx.try_recv().unwrap();
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"type":5}"#);
    }

    #[tokio::test]
    async fn test_defer_twice_fails() {
        let (mut gate, _ack_rx) = gate();

        gate.defer(true).unwrap();
        assert!(gate.ephemeral());

        match gate.defer(true) {
            Err(Error::ReplyAlreadySent) => {}
            other => panic!("expected ReplyAlreadySent, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_followup_before_acknowledgement_fails() {
        let (mut gate, _ack_rx) = gate();

        let payload = ExecuteWebhookPayload::default();
        match gate.followup(&payload).await {
            Err(Error::ReplyNotSent) => {}
            other => panic!("expected ReplyNotSent, got {:?}", other),
        }

        assert!(!gate.replied());
    }
}
