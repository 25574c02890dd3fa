use serde::{Deserialize, Serialize};

use crate::{Discriminator, Snowflake};

const CDN_BASE: &str = "https://cdn.discordapp.com";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub discriminator: Discriminator,
    pub avatar: Option<Box<str>>,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub system: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_flags: Option<u64>,
}

impl User {
    /// The `username#discriminator` form shown in clients.
    pub fn tag(&self) -> String {
        format!("{}#{}", self.username, self.discriminator)
    }

    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }

    /// CDN URL for the user's avatar, falling back to one of the five
    /// default avatars when no hash is set.
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(hash) => format!("{}/avatars/{}/{}", CDN_BASE, self.id, hash),
            None => format!("{}/embed/avatars/{}.png", CDN_BASE, self.discriminator.0 % 5),
        }
    }
}
