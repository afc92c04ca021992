mod snowflake;
pub use snowflake::Snowflake;

mod permission_bit_set;
pub use permission_bit_set::PermissionBitSet;

pub mod channel;
pub mod guild;
pub mod user;

mod util;
