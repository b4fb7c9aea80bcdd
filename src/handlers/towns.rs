// src/handlers/towns.rs
// DOCUMENTATION: HTTP handlers for town operations
// PURPOSE: Parse requests, enforce the staff gate, call services

use crate::auth::StaffAuth;
use crate::errors::TownsError;
use crate::handlers::{attractions, images};
use crate::models::{CreateTownRequest, UpdateTownRequest};
use crate::services::TownService;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /towns
/// List all towns (flat rows; images and attractions live on the detail view)
pub async fn list_towns(pool: web::Data<PgPool>) -> Result<impl Responder, TownsError> {
    let towns = TownService::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(towns))
}

/// POST /towns
/// Create a new town (staff only)
pub async fn create_town(
    pool: web::Data<PgPool>,
    auth: web::Data<StaffAuth>,
    req: HttpRequest,
    body: web::Json<CreateTownRequest>,
) -> Result<impl Responder, TownsError> {
    if !auth.can_modify_content(&req) {
        return Err(TownsError::PermissionDenied);
    }

    if let Err(e) = body.validate() {
        return Err(TownsError::Validation(e.to_string()));
    }

    let town = TownService::create(pool.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(town))
}

/// GET /towns/{id}
/// Retrieve a town with its ordered images and attractions
pub async fn get_town(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, TownsError> {
    let town = TownService::get_detail(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(town))
}

/// PUT /towns/{id}
/// Update a town - only provided fields are modified (staff only)
pub async fn update_town(
    pool: web::Data<PgPool>,
    auth: web::Data<StaffAuth>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTownRequest>,
) -> Result<impl Responder, TownsError> {
    if !auth.can_modify_content(&req) {
        return Err(TownsError::PermissionDenied);
    }

    if let Err(e) = body.validate() {
        return Err(TownsError::Validation(e.to_string()));
    }

    let town = TownService::update(pool.get_ref(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(town))
}

/// DELETE /towns/{id}
/// Delete a town; cascades to its images and attractions (staff only)
pub async fn delete_town(
    pool: web::Data<PgPool>,
    auth: web::Data<StaffAuth>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, TownsError> {
    if !auth.can_modify_content(&req) {
        return Err(TownsError::PermissionDenied);
    }

    TownService::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for all town-prefixed routes
/// DOCUMENTATION: Everything under /towns lives in one scope so matching
/// stays unambiguous; the static /images/order segment is registered before
/// the /{id} routes so "images" is never read as a town id
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/towns")
            .route("", web::get().to(list_towns))
            .route("", web::post().to(create_town))
            .route("/images/order", web::post().to(images::reorder_town_images))
            .route("/{id}", web::get().to(get_town))
            .route("/{id}", web::put().to(update_town))
            .route("/{id}", web::delete().to(delete_town))
            .route(
                "/{town_id}/attractions",
                web::get().to(attractions::list_attractions),
            )
            .route(
                "/{town_id}/attractions",
                web::post().to(attractions::create_attraction),
            )
            .route(
                "/{town_id}/attractions/{id}",
                web::get().to(attractions::get_attraction),
            )
            .route(
                "/{town_id}/attractions/{id}",
                web::put().to(attractions::update_attraction),
            )
            .route(
                "/{town_id}/attractions/{id}",
                web::delete().to(attractions::delete_attraction),
            )
            .route("/{id}/images", web::get().to(images::list_town_images))
            .route("/{id}/images", web::post().to(images::add_town_image))
            .route(
                "/{id}/images/{image_id}",
                web::delete().to(images::delete_town_image),
            ),
    );
}
