//! Display models for table/JSON output
//!
//! One row type per resource, converted from the wire model.

mod bank;
mod course;
mod favorite;
mod media;
mod order;
mod refdata;
mod user;

pub use bank::BankDisplay;
pub use course::{ChapterDisplay, CourseDisplay, SectionDisplay};
pub use favorite::FavoriteDisplay;
pub use media::MediaDisplay;
pub use order::OrderDisplay;
pub use refdata::{CategoryDisplay, TagDisplay};
pub use user::{PermissionDisplay, RoleDisplay, UserDisplay, flatten_permissions};
