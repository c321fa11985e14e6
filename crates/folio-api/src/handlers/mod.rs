//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod auth;
pub mod contact;
pub mod experiences;
pub mod health;
pub mod images;
pub mod posts;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod tags;
