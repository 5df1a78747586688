mod cart;
mod recipe;
mod user;

pub use cart::*;
pub use recipe::*;
pub use user::*;

use time::OffsetDateTime;

pub(crate) fn now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
