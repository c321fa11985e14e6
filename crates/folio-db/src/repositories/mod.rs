//! PostgreSQL repository implementations

mod contact;
mod error;
mod experience;
mod image;
mod post;
mod profile;
mod project;
mod skill;
mod tag;
mod user;

pub use contact::PgContactRepository;
pub use error::{map_db_error, map_foreign_key_violation, map_unique_violation};
pub use experience::PgExperienceRepository;
pub use image::PgImageRepository;
pub use post::PgPostRepository;
pub use profile::PgProfileRepository;
pub use project::PgProjectRepository;
pub use skill::PgSkillRepository;
pub use tag::PgTagRepository;
pub use user::PgUserRepository;
