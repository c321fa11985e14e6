//! Experience entity <-> model mapper

use folio_core::entities::Experience;

use crate::models::ExperienceModel;

impl From<ExperienceModel> for Experience {
    fn from(model: ExperienceModel) -> Self {
        Experience {
            id: model.id,
            profile_id: model.profile_id,
            company: model.company,
            position: model.position,
            description: model.description,
            start_date: model.start_date,
            end_date: model.end_date,
            is_current: model.is_current,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
