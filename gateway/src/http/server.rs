use crate::auth::CredentialProvider;
use crate::event::Event;
use crate::http::response::ErrorResponse;
use crate::{Config, Error};
use ed25519_dalek::Signature;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use warp::http::StatusCode;
use warp::reply::Json;
use warp::{Filter, Rejection, Reply};

const SIGNATURE_FAILURE_BODY: &str = "invalid request signature";

pub struct Server {
    pub config: Config,
    pub http_client: reqwest::Client,
    pub credentials: Arc<CredentialProvider>,
    events: mpsc::UnboundedSender<Event>,
}

impl Server {
    /// Builds the server and hands back the receiving half of the event
    /// channel for the application to consume.
    pub fn new(config: Config) -> (Server, mpsc::UnboundedReceiver<Event>) {
        let http_client = Server::build_http_client();

        let credentials = Arc::new(CredentialProvider::new(
            config.client_id,
            config.client_secret.clone(),
            http_client.clone(),
        ));

        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let server = Server {
            config,
            http_client,
            credentials,
            events: events_tx,
        };

        (server, events_rx)
    }

    pub async fn start(self) -> Result<(), Error> {
        let address: SocketAddr = self
            .config
            .server_addr()
            .parse()
            .expect("HOST/PORT did not form a valid socket address");

        let filter = Arc::new(self).filter_handle();

        warp::serve(filter).run(address).await;

        Ok(())
    }

    pub(crate) fn events(&self) -> &mpsc::UnboundedSender<Event> {
        &self.events
    }

    fn filter_handle(
        self: Arc<Self>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = Rejection> + Clone {
        warp::post()
            .and(warp::path::tail())
            .and(warp::any().map(move || self.clone()))
            .and(Server::parse_signature())
            .and(warp::header("x-signature-timestamp"))
            .and(warp::body::bytes())
            .and_then(
                |_tail: warp::path::Tail,
                 server: Arc<Server>,
                 signature: Signature,
                 timestamp: String,
                 body: warp::hyper::body::Bytes| {
                    super::handle(server, signature, timestamp, body)
                },
            )
            .with(warp::log("interactions_gateway"))
            .recover(handle_rejection)
    }

    fn parse_signature() -> impl Filter<Extract = (Signature,), Error = Rejection> + Clone {
        warp::header("x-signature-ed25519").and_then(|signature: String| async move {
            let mut bytes = [0u8; 64];
            if let Err(e) = hex::decode_to_slice(signature, &mut bytes) {
                return Err(warp::reject::custom(Error::InvalidSignatureFormat(e)));
            }

            Ok(Signature::new(bytes))
        })
    }

    fn build_http_client() -> reqwest::Client {
        reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(3))
            .build()
            .expect("build_http_client")
    }
}

async fn handle_rejection(error: Rejection) -> Result<warp::reply::Response, Rejection> {
    if let Some(err) = error.find::<Error>() {
        let response = match err {
            // The platform probes with deliberately bad signatures; it
            // expects this exact body
            Error::InvalidSignature | Error::InvalidSignatureFormat(..) => {
                warp::reply::with_status(SIGNATURE_FAILURE_BODY, StatusCode::UNAUTHORIZED)
                    .into_response()
            }
            Error::JsonError(..) => {
                let json: Json = ErrorResponse::from(err).into();
                warp::reply::with_status(json, StatusCode::BAD_REQUEST).into_response()
            }
            _ => {
                let json: Json = ErrorResponse::from(err).into();
                warp::reply::with_status(json, StatusCode::INTERNAL_SERVER_ERROR).into_response()
            }
        };

        return Ok(response);
    }

    // A request without the signature headers is unverified, not malformed
    if error.find::<warp::reject::MissingHeader>().is_some() {
        return Ok(
            warp::reply::with_status(SIGNATURE_FAILURE_BODY, StatusCode::UNAUTHORIZED)
                .into_response(),
        );
    }

    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Keypair, Signer};
    use model::Snowflake;
    use rand::rngs::OsRng;

    fn test_server() -> (Arc<Server>, mpsc::UnboundedReceiver<Event>, Keypair) {
        let mut csprng = OsRng {};
        let keypair = Keypair::generate(&mut csprng);

        let config = Config {
            host: Box::from("127.0.0.1"),
            port: 0,
            client_id: Snowflake(1),
            client_secret: Box::from("secret"),
            public_key: keypair.public,
        };

        let (server, events) = Server::new(config);

        (Arc::new(server), events, keypair)
    }

    fn signed_request(
        keypair: &Keypair,
        timestamp: &str,
        body: &'static str,
    ) -> warp::test::RequestBuilder {
        let message: Vec<u8> = timestamp.bytes().chain(body.bytes()).collect();
        let signature = keypair.sign(&message);

        warp::test::request()
            .method("POST")
            .path("/")
            .header("x-signature-ed25519", hex::encode(signature.to_bytes()))
            .header("x-signature-timestamp", timestamp)
            .body(body)
    }

    #[tokio::test]
    async fn test_ping_yields_pong_and_no_event() {
        let (server, mut events, keypair) = test_server();
        let filter = server.filter_handle();

        let response = signed_request(&keypair, "12345", r#"{"type": 1, "extra": true}"#)
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body().as_ref(), &br#"{"type":1}"#[..]);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_invalid_signature_is_rejected() {
        let (server, mut events, keypair) = test_server();
        let filter = server.filter_handle();

        // Signed over a different body than the one sent
        let signature = keypair.sign(b"12345{}");

        let response = warp::test::request()
            .method("POST")
            .path("/")
            .header("x-signature-ed25519", hex::encode(signature.to_bytes()))
            .header("x-signature-timestamp", "12345")
            .body(r#"{"type": 1}"#)
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.body().as_ref(), &b"invalid request signature"[..]);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_missing_signature_header_is_rejected() {
        let (server, _events, _keypair) = test_server();
        let filter = server.filter_handle();

        let response = warp::test::request()
            .method("POST")
            .path("/")
            .header("x-signature-timestamp", "12345")
            .body(r#"{"type": 1}"#)
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.body().as_ref(), &b"invalid request signature"[..]);
    }

    #[tokio::test]
    async fn test_malformed_signature_hex_is_rejected() {
        let (server, _events, _keypair) = test_server();
        let filter = server.filter_handle();

        let response = warp::test::request()
            .method("POST")
            .path("/")
            .header("x-signature-ed25519", "not hex at all")
            .header("x-signature-timestamp", "12345")
            .body(r#"{"type": 1}"#)
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.body().as_ref(), &b"invalid request signature"[..]);
    }

    #[tokio::test]
    async fn test_deferred_command_reply() {
        let (server, mut events, keypair) = test_server();
        let filter = server.filter_handle();

        tokio::spawn(async move {
            if let Some(Event::Command(mut command)) = events.recv().await {
                command.defer(false).unwrap();
            }
        });

        let body = r#"{"type": 2, "token": "tok", "application_id": "42", "data": {"id": "7", "name": "slow", "type": 1}}"#;
        let response = signed_request(&keypair, "999", body).reply(&filter).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body().as_ref(), &br#"{"type":5}"#[..]);
    }

    #[tokio::test]
    async fn test_select_menu_is_dropped_silently() {
        let (server, mut events, keypair) = test_server();
        let filter = server.filter_handle();

        let body = r#"{"type": 3, "token": "tok", "data": {"custom_id": "pick", "component_type": 3}}"#;
        let response = signed_request(&keypair, "999", body).reply(&filter).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_unacknowledged_interaction_is_an_error() {
        let (server, mut events, keypair) = test_server();
        let filter = server.filter_handle();

        // Handler consumes the event without ever acknowledging it
        tokio::spawn(async move {
            let _ = events.recv().await;
        });

        let body = r#"{"type": 2, "token": "tok", "data": {"name": "lost", "type": 1}}"#;
        let response = signed_request(&keypair, "999", body).reply(&filter).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
