use serde::{Deserialize, Serialize};

use crate::user::User;
use crate::Snowflake;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Member {
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<Box<str>>,
    #[serde(default)]
    pub roles: Vec<Snowflake>,
}

impl Member {
    pub fn user_id(&self) -> Snowflake {
        self.user.id
    }
}
