use serde::{Deserialize, Serialize};

use crate::Snowflake;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Guild {
    pub id: Snowflake,
    pub name: Box<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Box<str>>,
    pub owner_id: Snowflake,
}
