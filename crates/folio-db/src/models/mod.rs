//! Database models with SQLx `FromRow` derives

mod contact;
mod experience;
mod image;
mod post;
mod profile;
mod project;
mod skill;
mod user;

pub use contact::ContactMessageModel;
pub use experience::ExperienceModel;
pub use image::ImageModel;
pub use post::{PostModel, TagModel};
pub use profile::{ProfileModel, SocialLinkModel};
pub use project::ProjectModel;
pub use skill::SkillModel;
pub use user::UserModel;
