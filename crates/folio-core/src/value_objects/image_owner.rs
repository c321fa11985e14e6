//! Image owner - the record an image is attached to

use std::fmt;

use uuid::Uuid;

use crate::error::DomainError;

/// Polymorphic owner of an image: an entity kind plus its id
///
/// The database stores this as an `(entity_type, entity_id)` pair without a
/// foreign key, so services must only build owners for records they have
/// just created or loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageOwner {
    Post(Uuid),
    Project(Uuid),
}

impl ImageOwner {
    pub const POST: &'static str = "post";
    pub const PROJECT: &'static str = "project";

    /// Rebuild an owner from its stored representation
    pub fn from_parts(kind: &str, id: Uuid) -> Result<Self, DomainError> {
        match kind {
            Self::POST => Ok(Self::Post(id)),
            Self::PROJECT => Ok(Self::Project(id)),
            other => Err(DomainError::InternalError(format!(
                "unknown image owner kind: {other}"
            ))),
        }
    }

    /// Stored entity type
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Post(_) => Self::POST,
            Self::Project(_) => Self::PROJECT,
        }
    }

    /// Stored entity id
    pub fn id(&self) -> Uuid {
        match self {
            Self::Post(id) | Self::Project(id) => *id,
        }
    }
}

impl fmt::Display for ImageOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.id())
    }
}
