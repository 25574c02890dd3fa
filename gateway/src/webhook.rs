use crate::Error;
use model::channel::message::{Embed, Message};
use model::Snowflake;
use serde::Serialize;
use tracing::error;

const API_BASE: &str = "https://discord.com/api";

/// Client for one interaction's follow-up webhook channel.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http_client: reqwest::Client,
    url: String,
}

impl WebhookClient {
    pub fn new(
        http_client: reqwest::Client,
        application_id: Snowflake,
        token: &str,
    ) -> WebhookClient {
        WebhookClient {
            http_client,
            url: format!("{}/webhooks/{}/{}", API_BASE, application_id, token),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POSTs the payload and returns the created message. Sent as JSON, or
    /// as multipart form data with a `payload_json` part when files are
    /// attached.
    pub async fn execute(&self, payload: &ExecuteWebhookPayload) -> Result<Message, Error> {
        let request = if payload.files.is_empty() {
            self.http_client.post(&self.url).json(payload)
        } else {
            let mut form = reqwest::multipart::Form::new()
                .text("payload_json", serde_json::to_string(payload)?);

            for file in &payload.files {
                let part = reqwest::multipart::Part::bytes(file.data.clone())
                    .file_name(file.name.clone());
                form = form.part(file.name.clone(), part);
            }

            self.http_client.post(&self.url).multipart(form)
        };

        let message = request
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| {
                error!(error = %e, "Webhook execution failed");
                Error::WebhookExecute(e)
            })?
            .json()
            .await
            .map_err(|e| {
                error!(error = %e, "Webhook execution failed");
                Error::WebhookExecute(e)
            })?;

        Ok(message)
    }
}

#[derive(Serialize, Debug, Default)]
pub struct ExecuteWebhookPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<usize>,
    #[serde(skip)]
    pub files: Vec<WebhookFile>,
}

#[derive(Debug, Clone)]
pub struct WebhookFile {
    pub name: String,
    pub data: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        let client = WebhookClient::new(reqwest::Client::new(), Snowflake(42), "tok-en");
        assert_eq!(client.url(), "https://discord.com/api/webhooks/42/tok-en");
    }

    #[test]
    fn test_payload_shape() {
        let payload = ExecuteWebhookPayload {
            content: Some(Box::from("hello")),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"content":"hello"}"#
        );
    }
}
