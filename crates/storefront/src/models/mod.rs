//! Domain models for the storefront session.

pub mod notice;
pub mod user;

pub use notice::{Notice, NoticeKind};
pub use user::{DashboardStats, UserProfile};
