use serde::Serializer;
use warp::reject::Reject;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid request signature")]
    InvalidSignature,

    #[error("invalid ed25519 signature: {0}")]
    InvalidSignatureFormat(#[from] hex::FromHexError),

    #[error("error while decoding json payload: {0}")]
    JsonError(#[from] serde_json::Error),

    // The platform accepts exactly one acknowledgement per interaction
    #[error("reply already sent")]
    ReplyAlreadySent,

    #[error("reply not sent")]
    ReplyNotSent,

    #[error("interaction dropped before acknowledgement")]
    AcknowledgementDropped,

    #[error("error while exchanging client credentials: {0}")]
    CredentialExchange(reqwest::Error),

    #[error("error while executing webhook: {0}")]
    WebhookExecute(reqwest::Error),
}

impl Reject for Error {}

impl serde::Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{}", self)[..])
    }
}
