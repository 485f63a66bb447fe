use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use sqlx::PgPool;

use crate::dto::{AdminResponse, CreateAdminRequest, CreateAdminResponse};
use crate::interceptors::{ApiSuccess, AppError};
use crate::models::Admin;
use crate::services::{AdminFilter, AdminService};

/// Create a new admin (user account + admin profile)
pub async fn create_admin(
    State(pool): State<PgPool>,
    Json(request): Json<CreateAdminRequest>,
) -> Result<ApiSuccess<CreateAdminResponse>, AppError> {
    let admin_service = AdminService::new(pool);
    let response = admin_service.create_admin(request).await?;

    Ok(ApiSuccess::new("Admin created successfully", response))
}

/// List admins matching the request's query parameters
pub async fn list_admins(
    State(pool): State<PgPool>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<ApiSuccess<Vec<AdminResponse>>, AppError> {
    let filter = AdminFilter::from_query(params)?;

    let admin_service = AdminService::new(pool);
    let admins = admin_service.list_admins(&filter).await?;

    let data: Vec<AdminResponse> = admins.iter().map(Admin::to_response).collect();

    Ok(ApiSuccess::new("Admins retrieved successfully", data))
}
