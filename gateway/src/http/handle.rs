use crate::event;
use crate::http::signature;
use crate::http::Server;
use crate::Error;
use ed25519_dalek::Signature;
use model::interaction::{Interaction, InteractionResponse};
use std::sync::Arc;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::{reply::Response, Rejection, Reply};

pub async fn handle(
    server: Arc<Server>,
    signature: Signature,
    timestamp: String,
    body: Bytes,
) -> Result<Response, Rejection> {
    if !signature::verify(&server.config.public_key, &signature, &timestamp, &body[..]) {
        return Err(Error::InvalidSignature.into());
    }

    let interaction: Interaction = serde_json::from_slice(&body[..])
        .map_err(Error::JsonError)
        .map_err(warp::reject::custom)?;

    // Liveness checks are answered inline; nothing is published for them
    if let Interaction::Ping(_) = interaction {
        return Ok(warp::reply::json(&InteractionResponse::new_pong()).into_response());
    }

    let (ack_tx, ack_rx) = oneshot::channel();

    let event = match event::classify(interaction, ack_tx, &server.http_client) {
        Some(event) => event,
        // Recognised payload with no routed variant: dropped silently
        None => return Ok(StatusCode::NO_CONTENT.into_response()),
    };

    if server.events().send(event).is_err() {
        return Err(Error::AcknowledgementDropped.into());
    }

    // The application handler drives the acknowledgement (defer et al);
    // serve whatever it sends back on the interaction's channel
    match ack_rx.await {
        Ok(response) => Ok(warp::reply::json(&response).into_response()),
        Err(_) => Err(Error::AcknowledgementDropped.into()),
    }
}
