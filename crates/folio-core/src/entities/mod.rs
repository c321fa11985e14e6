//! Domain entities - core business objects

mod contact;
mod experience;
mod image;
mod post;
mod profile;
mod project;
mod skill;
mod user;

pub use contact::{ContactMessage, MessageStatus};
pub use experience::{parse_date, Experience};
pub use image::Image;
pub use post::{Post, PublishState, Tag};
pub use profile::{Profile, SocialLink};
pub use project::Project;
pub use skill::Skill;
pub use user::User;
