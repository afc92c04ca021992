use crate::channel::Permission;
use crate::util;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::fmt::Formatter;
use std::num::ParseIntError;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};
use std::str::FromStr;

/// Permission bitfield. The platform sends these as decimal strings and
/// uses more than 32 bits, so the full value is held in a `u128`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct PermissionBitSet(pub u128);

impl PermissionBitSet {
    pub const fn empty() -> Self {
        PermissionBitSet(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        let perm = permission.bits();
        self.0 & perm == perm
    }

    pub fn contains(&self, other: PermissionBitSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// `(self | allow) & !deny`: a bit named by both allow and deny ends up cleared.
    pub fn apply_overwrite(self, allow: PermissionBitSet, deny: PermissionBitSet) -> Self {
        (self | allow) & !deny
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        Permission::ALL
            .iter()
            .copied()
            .filter(move |perm| self.has_permission(*perm))
    }

    /// Names of the known permissions set in this bitfield. Unknown bits are skipped.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|perm| perm.name()).collect()
    }
}

impl From<Permission> for PermissionBitSet {
    fn from(permission: Permission) -> Self {
        PermissionBitSet(permission.bits())
    }
}

impl BitOr for PermissionBitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        PermissionBitSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for PermissionBitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PermissionBitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        PermissionBitSet(self.0 & rhs.0)
    }
}

impl Not for PermissionBitSet {
    type Output = Self;

    fn not(self) -> Self {
        PermissionBitSet(!self.0)
    }
}

impl FromStr for PermissionBitSet {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PermissionBitSet(s.parse()?))
    }
}

impl Serialize for PermissionBitSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for PermissionBitSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Value = Deserialize::deserialize(deserializer)?;

        if let Some(s) = value.as_str() {
            return s.parse().map_err(Error::custom);
        }

        if let Some(i) = value.as_u64() {
            return Ok(PermissionBitSet(i as u128));
        }

        Err(Error::invalid_type(
            util::to_unexpected(&value),
            &"a decimal string or u64",
        ))
    }
}

impl fmt::Display for PermissionBitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overwrite() {
        let base = PermissionBitSet(0b1100);
        let result = base.apply_overwrite(PermissionBitSet(0b0011), PermissionBitSet(0b0110));
        assert_eq!(result, PermissionBitSet(0b1001));
    }

    #[test]
    fn test_apply_overwrite_same_bit_in_allow_and_deny() {
        let view = PermissionBitSet::from(Permission::ViewChannel);
        let result = PermissionBitSet::empty().apply_overwrite(view, view);
        assert!(!result.has_permission(Permission::ViewChannel));

        let result = view.apply_overwrite(PermissionBitSet::empty(), view);
        assert!(!result.has_permission(Permission::ViewChannel));
    }

    #[test]
    fn test_bits_above_u64_survive() {
        let high = PermissionBitSet(1 << 100 | 1024);
        let parsed: PermissionBitSet =
            serde_json::from_str(&serde_json::to_string(&high).unwrap()).unwrap();

        assert_eq!(parsed, high);
        assert!(parsed.has_permission(Permission::ViewChannel));
    }

    #[test]
    fn test_deserialize_forms() {
        let s: PermissionBitSet = serde_json::from_str(r#""1024""#).unwrap();
        let i: PermissionBitSet = serde_json::from_str("1024").unwrap();
        assert_eq!(s, i);

        assert!(serde_json::from_str::<PermissionBitSet>(r#""-1""#).is_err());
        assert!(serde_json::from_str::<PermissionBitSet>("null").is_err());
    }

    #[test]
    fn test_names() {
        let perms = PermissionBitSet(1024 | 8 | 1 << 120);
        assert_eq!(perms.names(), vec!["ADMINISTRATOR", "VIEW_CHANNEL"]);
        assert!(PermissionBitSet::empty().names().is_empty());
        assert_eq!(PermissionBitSet(1 << 48).names(), vec!["SET_VOICE_CHANNEL_STATUS"]);
    }

    #[test]
    fn test_contains() {
        let perms = PermissionBitSet(0b0111);
        assert!(perms.contains(PermissionBitSet(0b0101)));
        assert!(!perms.contains(PermissionBitSet(0b1001)));
    }
}
