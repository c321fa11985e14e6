//! Profile and social link mappers

use folio_core::entities::{Profile, SocialLink};

use crate::models::{ProfileModel, SocialLinkModel};

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: model.id,
            user_id: model.user_id,
            full_name: model.full_name,
            bio: model.bio,
            avatar_url: model.avatar_url,
            resume_url: model.resume_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<SocialLinkModel> for SocialLink {
    fn from(model: SocialLinkModel) -> Self {
        SocialLink {
            id: model.id,
            profile_id: model.profile_id,
            platform: model.platform,
            url: model.url,
            order_index: model.order_index,
        }
    }
}
