//! Wire models for the CourseHub API
//!
//! All payloads arrive inside the `{code, message, data}` envelope with
//! camelCase member names.

mod admin;
mod auth;
mod catalog;

pub use admin::{MediaAsset, Order, Permission, Role, StorageQuota, UserAccount};
pub use auth::{Captcha, LoginRequest, Session, TokenSet, User};
pub use catalog::{Category, Chapter, Course, Favorite, QuestionBank, Section, Tag};
