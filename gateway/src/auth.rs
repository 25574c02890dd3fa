use crate::Error;
use model::Snowflake;
use serde::Deserialize;
use std::sync::RwLock;
use tracing::error;

const TOKEN_URI: &str = "https://discord.com/api/oauth2/token";
const SCOPE: &str = "applications.commands.update";

/// Exchanges the application's client credentials for a bearer token used
/// on outbound platform API calls. The stored header is process-wide,
/// replaced wholesale on refresh, and absent until the first successful
/// exchange.
pub struct CredentialProvider {
    client_id: Snowflake,
    client_secret: Box<str>,
    http_client: reqwest::Client,
    authorization: RwLock<Option<Box<str>>>,
}

#[derive(Deserialize, Debug)]
struct AccessTokenResponse {
    token_type: String,
    access_token: String,
}

impl CredentialProvider {
    pub fn new(
        client_id: Snowflake,
        client_secret: Box<str>,
        http_client: reqwest::Client,
    ) -> CredentialProvider {
        CredentialProvider {
            client_id,
            client_secret,
            http_client,
            authorization: RwLock::new(None),
        }
    }

    /// Performs the client-credentials grant and stores the resulting
    /// `Authorization` header value. Failures are not retried here; the
    /// caller decides whether startup can proceed without a token.
    pub async fn start(&self) -> Result<(), Error> {
        let header = match self.exchange().await {
            Ok(header) => header,
            Err(e) => {
                error!(error = %e, "Client credential exchange failed");
                return Err(e);
            }
        };

        *self.authorization.write().unwrap() = Some(header);

        Ok(())
    }

    async fn exchange(&self) -> Result<Box<str>, Error> {
        let form = [
            ("client_id", self.client_id.to_string()),
            ("client_secret", self.client_secret.to_string()),
            ("grant_type", "client_credentials".to_owned()),
            ("scope", SCOPE.to_owned()),
        ];

        let token: AccessTokenResponse = self
            .http_client
            .post(TOKEN_URI)
            .form(&form)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(Error::CredentialExchange)?
            .json()
            .await
            .map_err(Error::CredentialExchange)?;

        Ok(format!("{} {}", token.token_type, token.access_token).into_boxed_str())
    }

    /// Snapshot of the current `Authorization` header value, if the first
    /// exchange has completed.
    pub fn authorization(&self) -> Option<Box<str>> {
        self.authorization.read().unwrap().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.authorization.read().unwrap().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ready_before_exchange() {
        let provider = CredentialProvider::new(
            Snowflake(1),
            Box::from("secret"),
            reqwest::Client::new(),
        );

        assert!(!provider.is_ready());
        assert!(provider.authorization().is_none());
    }
}
