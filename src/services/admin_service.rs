use sqlx::PgPool;

use crate::dto::{CreateAdminRequest, CreateAdminResponse};
use crate::interceptors::{AppError, AppResult};
use crate::models::{Admin, User};
use crate::services::AdminFilter;
use crate::utils::{hash_password, validate_request};

#[derive(Clone)]
pub struct AdminService {
    pool: PgPool,
}

impl AdminService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an admin: one user account plus one profile row,
    /// committed together or not at all.
    pub async fn create_admin(
        &self,
        request: CreateAdminRequest,
    ) -> AppResult<CreateAdminResponse> {
        // Validate request
        validate_request(&request)?;

        // Hash password
        let password_hash = hash_password(&request.password)?;

        let user = User::new_admin(request.admin.email.clone(), password_hash);
        let admin = Admin::new(user.id.clone(), request.admin);

        let mut tx = self.pool.begin().await.map_err(AppError::from_db)?;

        let created_user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, password_hash, role, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::from_db)?;

        let created_admin = sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (id, user_id, name, email, contact_number, address, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(&admin.id)
        .bind(&admin.user_id)
        .bind(&admin.name)
        .bind(&admin.email)
        .bind(&admin.contact_number)
        .bind(&admin.address)
        .bind(admin.created_at)
        .bind(admin.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::from_db)?;

        tx.commit().await.map_err(AppError::from_db)?;

        tracing::info!(
            "Created admin profile {} for user {}",
            created_admin.id,
            created_user.id
        );

        Ok(CreateAdminResponse {
            created_user_data: created_user.to_response(),
            created_admin_data: created_admin.to_response(),
        })
    }

    /// List admin profiles matching the given filter
    pub async fn list_admins(&self, filter: &AdminFilter) -> AppResult<Vec<Admin>> {
        let (sql, binds) = filter.to_select_sql();

        let mut query = sqlx::query_as::<_, Admin>(&sql);
        for bind in &binds {
            query = query.bind(bind);
        }

        query.fetch_all(&self.pool).await.map_err(AppError::from_db)
    }
}
