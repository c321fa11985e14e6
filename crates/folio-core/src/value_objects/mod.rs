//! Value objects - immutable types that represent domain concepts

mod image_owner;
mod pagination;
mod slug;

pub use image_owner::ImageOwner;
pub use pagination::{Page, PageRequest};
pub use slug::Slug;
