//! User entity - the site administrator account

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Admin user account
///
/// Users are provisioned outside the API. The password hash lives only in
/// storage and is fetched separately for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Change the login email
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }
}
