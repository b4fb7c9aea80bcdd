// src/handlers/attractions.rs
// DOCUMENTATION: HTTP handlers for town attractions
// PURPOSE: Town-scoped CRUD; routes are wired by the /towns scope config

use crate::auth::StaffAuth;
use crate::errors::TownsError;
use crate::models::{CreateAttractionRequest, UpdateAttractionRequest};
use crate::services::AttractionService;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /towns/{town_id}/attractions
/// List a town's attractions (unknown town yields an empty list)
pub async fn list_attractions(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, TownsError> {
    let attractions = AttractionService::list(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(attractions))
}

/// POST /towns/{town_id}/attractions
/// Create an attraction under a town (staff only)
pub async fn create_attraction(
    pool: web::Data<PgPool>,
    auth: web::Data<StaffAuth>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<CreateAttractionRequest>,
) -> Result<impl Responder, TownsError> {
    if !auth.can_modify_content(&req) {
        return Err(TownsError::PermissionDenied);
    }

    if let Err(e) = body.validate() {
        return Err(TownsError::Validation(e.to_string()));
    }

    let attraction =
        AttractionService::create(pool.get_ref(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(attraction))
}

/// GET /towns/{town_id}/attractions/{id}
/// Retrieve an attraction with its ordered images
/// DOCUMENTATION: An existing attraction id under the wrong town is a 404
pub async fn get_attraction(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<impl Responder, TownsError> {
    let (town_id, id) = path.into_inner();
    let attraction = AttractionService::get_detail(pool.get_ref(), town_id, id).await?;
    Ok(HttpResponse::Ok().json(attraction))
}

/// PUT /towns/{town_id}/attractions/{id}
/// Update an attraction - only provided fields are modified (staff only)
pub async fn update_attraction(
    pool: web::Data<PgPool>,
    auth: web::Data<StaffAuth>,
    req: HttpRequest,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<UpdateAttractionRequest>,
) -> Result<impl Responder, TownsError> {
    if !auth.can_modify_content(&req) {
        return Err(TownsError::PermissionDenied);
    }

    if let Err(e) = body.validate() {
        return Err(TownsError::Validation(e.to_string()));
    }

    let (town_id, id) = path.into_inner();
    let attraction =
        AttractionService::update(pool.get_ref(), town_id, id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(attraction))
}

/// DELETE /towns/{town_id}/attractions/{id}
/// Delete an attraction; cascades to its images (staff only)
pub async fn delete_attraction(
    pool: web::Data<PgPool>,
    auth: web::Data<StaffAuth>,
    req: HttpRequest,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<impl Responder, TownsError> {
    if !auth.can_modify_content(&req) {
        return Err(TownsError::PermissionDenied);
    }

    let (town_id, id) = path.into_inner();
    AttractionService::delete(pool.get_ref(), town_id, id).await?;
    Ok(HttpResponse::NoContent().finish())
}
