use crate::guild::Member;
use crate::user::User;
use crate::Snowflake;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The payload's id → entity side-tables. A table that was absent on the
/// wire stays `None`, which downstream projections preserve.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ApplicationCommandInteractionDataResolved {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<HashMap<Snowflake, User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<HashMap<Snowflake, Member>>,
}
