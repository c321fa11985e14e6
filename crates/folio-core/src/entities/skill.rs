//! Skill entity

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub icon_url: String,
}

impl Skill {
    pub fn new(name: String, category: String, icon_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            category,
            icon_url,
        }
    }
}
