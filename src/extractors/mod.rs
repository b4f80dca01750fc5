pub mod account;
pub mod account_id;

pub use account::{check_content_type, JsonAccount, JSON_MEDIA_TYPE};
pub use account_id::AccountId;
