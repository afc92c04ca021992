//! Channel permission resolution.
//!
//! Computes a member's effective permissions in a channel from the guild's
//! roles and the channel's (or its category's) permission overwrites, in the
//! same order the platform evaluates them server side:
//!
//! 1. `@everyone` role permissions
//! 2. administrator bypass
//! 3. `@everyone` overwrite
//! 4. combined role overwrites
//! 5. member overwrite

mod error;
pub use error::{PermissionError, Result};

mod overwrites;
pub use overwrites::{
    combined_role_overwrites, effective_overwrites, everyone_overwrite, member_overwrite,
};

mod resolution;
pub use resolution::PermissionResolution;

mod resolver;
pub use resolver::{can_view_channel, everyone_role, resolve_channel_permissions, visible_channels};
