//! Entity <-> Model mappers

mod contact;
mod experience;
mod image;
mod post;
mod profile;
mod project;
mod skill;
mod user;

pub use image::images_from_models;
