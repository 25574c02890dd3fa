use interactions_gateway::event::Event;
use interactions_gateway::http;
use interactions_gateway::{Config, Error};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_envvar();
    let (server, mut events) = http::Server::new(config);

    server.credentials.start().await?;
    info!("Credential exchange complete");

    // Acknowledge everything we receive so the platform gets its reply
    // within the callback window; real reply content is the embedder's job
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                Event::Command(mut command) => {
                    info!(name = ?command.command_name, "Received command interaction");
                    if let Err(e) = command.defer(false) {
                        warn!(error = %e, "Failed to acknowledge command");
                    }
                }
                Event::ContextMenu(mut menu) => {
                    info!(target = ?menu.target_id, "Received context menu interaction");
                    if let Err(e) = menu.defer(false) {
                        warn!(error = %e, "Failed to acknowledge context menu");
                    }
                }
                Event::Button(mut button) => {
                    info!(custom_id = %button.custom_id, "Received button interaction");
                    if let Err(e) = button.defer(false) {
                        warn!(error = %e, "Failed to acknowledge button");
                    }
                }
            }
        }
    });

    server.start().await
}
