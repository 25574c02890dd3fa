use serde::{Deserialize, Serialize};

use crate::user::User;
use crate::{PermissionBitSet, Snowflake};
use chrono::{DateTime, Utc};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Member {
    pub user: Option<User>,
    pub nick: Option<Box<str>>,
    pub avatar: Option<Box<str>>,
    #[serde(default)]
    pub roles: Vec<Snowflake>,
    pub joined_at: Option<DateTime<Utc>>,
    pub premium_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deaf: bool,
    #[serde(default)]
    pub mute: bool,
    #[serde(default)]
    pub pending: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionBitSet>,
}

impl Member {
    /// The member's nickname, or their username where no nickname is set.
    pub fn display_name(&self) -> Option<&str> {
        match &self.nick {
            Some(nick) => Some(nick),
            None => self.user.as_ref().map(|u| u.username.as_str()),
        }
    }

    pub fn mention(&self) -> Option<String> {
        let user = self.user.as_ref()?;

        Some(if self.nick.is_some() {
            format!("<@!{}>", user.id)
        } else {
            format!("<@{}>", user.id)
        })
    }

    /// Resolved member records omit the `user` sub-object; it arrives
    /// separately in the resolved user table and is attached here.
    pub fn with_user(mut self, user: Option<User>) -> Member {
        self.user = user;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Discriminator;

    fn member(nick: Option<&str>) -> Member {
        Member {
            user: Some(User {
                id: Snowflake(1),
                username: "Nelly".to_owned(),
                discriminator: Discriminator(1337),
                avatar: None,
                bot: false,
                system: false,
                public_flags: None,
            }),
            nick: nick.map(Box::from),
            avatar: None,
            roles: Vec::new(),
            joined_at: None,
            premium_since: None,
            deaf: false,
            mute: false,
            pending: false,
            permissions: None,
        }
    }

    #[test]
    fn test_display_name_prefers_nick() {
        assert_eq!(member(Some("nels")).display_name(), Some("nels"));
        assert_eq!(member(None).display_name(), Some("Nelly"));
    }

    #[test]
    fn test_mention_marks_nicknamed_members() {
        assert_eq!(member(Some("nels")).mention().unwrap(), "<@!1>");
        assert_eq!(member(None).mention().unwrap(), "<@1>");
    }
}
