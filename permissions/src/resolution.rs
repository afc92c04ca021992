use model::PermissionBitSet;
use serde::Serialize;

/// Outcome of a single resolution, with the intermediate values that produced it.
///
/// On the administrator paths no overwrites are evaluated, so the four
/// overwrite fields are empty.
#[derive(Serialize, Debug, Clone, Copy, Eq, PartialEq)]
pub struct PermissionResolution {
    pub allowed: bool,
    pub base_permissions: PermissionBitSet,
    pub role_allow: PermissionBitSet,
    pub role_deny: PermissionBitSet,
    pub member_allow: PermissionBitSet,
    pub member_deny: PermissionBitSet,
    pub final_permissions: PermissionBitSet,
    pub has_administrator: bool,
}

impl PermissionResolution {
    pub(crate) fn administrator(
        base_permissions: PermissionBitSet,
        final_permissions: PermissionBitSet,
    ) -> Self {
        PermissionResolution {
            allowed: true,
            base_permissions,
            role_allow: PermissionBitSet::empty(),
            role_deny: PermissionBitSet::empty(),
            member_allow: PermissionBitSet::empty(),
            member_deny: PermissionBitSet::empty(),
            final_permissions,
            has_administrator: true,
        }
    }
}
