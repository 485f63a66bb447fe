use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::dto::{AdminPayload, AdminResponse};

/// Admin profile model (database entity)
///
/// Linked to its account through `user_id`; the email column is kept
/// alongside it because the listing filter matches on it directly.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Admin {
    /// Create a new admin profile for an existing user
    pub fn new(user_id: String, payload: AdminPayload) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            name: payload.name,
            email: payload.email,
            contact_number: payload.contact_number,
            address: payload.address,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_response(&self) -> AdminResponse {
        AdminResponse {
            id: self.id.clone(),
            user_id: self.user_id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            contact_number: self.contact_number.clone(),
            address: self.address.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
