use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::{PermissionBitSet, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PermissionOverwrite {
    pub id: Snowflake,

    #[serde(rename = "type")]
    pub overwrite_type: PermissionOverwriteType,

    pub allow: PermissionBitSet,

    pub deny: PermissionBitSet,
}

impl PermissionOverwrite {
    pub fn role(id: Snowflake, allow: PermissionBitSet, deny: PermissionBitSet) -> Self {
        PermissionOverwrite {
            id,
            overwrite_type: PermissionOverwriteType::Role,
            allow,
            deny,
        }
    }

    pub fn member(id: Snowflake, allow: PermissionBitSet, deny: PermissionBitSet) -> Self {
        PermissionOverwrite {
            id,
            overwrite_type: PermissionOverwriteType::Member,
            allow,
            deny,
        }
    }

    pub fn targets(&self, overwrite_type: PermissionOverwriteType, id: Snowflake) -> bool {
        self.overwrite_type == overwrite_type && self.id == id
    }
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum PermissionOverwriteType {
    Role = 0,
    Member = 1,
}
