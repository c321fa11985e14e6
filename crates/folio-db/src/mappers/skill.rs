//! Skill entity <-> model mapper

use folio_core::entities::Skill;

use crate::models::SkillModel;

impl From<SkillModel> for Skill {
    fn from(model: SkillModel) -> Self {
        Skill {
            id: model.id,
            name: model.name,
            category: model.category,
            icon_url: model.icon_url,
        }
    }
}
