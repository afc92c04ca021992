use serde::{Deserialize, Serialize};

use crate::channel::Permission;
use crate::{PermissionBitSet, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Role {
    pub id: Snowflake,
    #[serde(default)]
    pub name: Box<str>,
    #[serde(default)]
    pub color: u32,
    #[serde(default)]
    pub hoist: bool,
    #[serde(default)]
    pub position: i16,
    pub permissions: PermissionBitSet,
    #[serde(default)]
    pub managed: bool,
    #[serde(default)]
    pub mentionable: bool,
}

impl Role {
    pub fn is_administrator(&self) -> bool {
        self.permissions.has_permission(Permission::Administrator)
    }
}
