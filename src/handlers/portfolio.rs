use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::error::ServiceError;
use crate::models::portfolio::{
    CreatePortfolio, EditAvatar, EditBiography, EditCvUrl, EditMainColor, EditNames, EditRating,
    EditTheme, EditVisibility,
};
use crate::models::portfolio_link::CreateShareLink;
use crate::models::social_media_link::CreateSocialMediaLink;
use crate::registry::Registry;

/// Fail with 403 unless the caller owns the portfolio (404 if it doesn't
/// exist at all).
async fn require_owner(
    registry: &Registry,
    id: Uuid,
    person_id: &str,
) -> Result<(), ServiceError> {
    let target = registry.portfolio_service.get_portfolio(id).await?;
    if target.person_id != person_id {
        return Err(ServiceError::Forbidden(
            "you can only modify your own portfolio".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/portfolio — create the caller's portfolio.
pub async fn create_portfolio(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    body: web::Json<CreatePortfolio>,
) -> Result<HttpResponse, ServiceError> {
    let created = registry
        .portfolio_service
        .create_portfolio(&user.person_id, body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(created))
}

/// GET /api/portfolio/me — the caller's own aggregate.
pub async fn get_my_portfolio(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
) -> Result<HttpResponse, ServiceError> {
    let own = registry
        .portfolio_service
        .get_by_person(&user.person_id)
        .await?;
    let aggregate = registry.portfolio_service.get_aggregate(own.id).await?;
    Ok(HttpResponse::Ok().json(aggregate))
}

/// GET /api/portfolio/{id} — full aggregate; private portfolios are only
/// visible to their owner.
pub async fn get_portfolio(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    let aggregate = registry.portfolio_service.get_aggregate(id).await?;
    if !aggregate.portfolio.is_public && aggregate.portfolio.person_id != user.person_id {
        return Err(ServiceError::Forbidden(
            "this portfolio is private".to_string(),
        ));
    }
    Ok(HttpResponse::Ok().json(aggregate))
}

// ── Field edits ──

pub async fn edit_biography(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
    body: web::Json<EditBiography>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_owner(&registry, id, &user.person_id).await?;
    let updated = registry
        .portfolio_service
        .edit_biography(id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn edit_names(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
    body: web::Json<EditNames>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_owner(&registry, id, &user.person_id).await?;
    let updated = registry
        .portfolio_service
        .edit_names(id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn edit_rating(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
    body: web::Json<EditRating>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_owner(&registry, id, &user.person_id).await?;
    let updated = registry
        .portfolio_service
        .edit_rating(id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn edit_avatar(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
    body: web::Json<EditAvatar>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_owner(&registry, id, &user.person_id).await?;
    let updated = registry
        .portfolio_service
        .edit_avatar(id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn edit_theme(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
    body: web::Json<EditTheme>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_owner(&registry, id, &user.person_id).await?;
    let updated = registry
        .portfolio_service
        .edit_background_theme(id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn edit_main_color(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
    body: web::Json<EditMainColor>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_owner(&registry, id, &user.person_id).await?;
    let updated = registry
        .portfolio_service
        .edit_main_color(id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn edit_visibility(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
    body: web::Json<EditVisibility>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_owner(&registry, id, &user.person_id).await?;
    let updated = registry
        .portfolio_service
        .set_visibility(id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn edit_cv_url(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
    body: web::Json<EditCvUrl>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_owner(&registry, id, &user.person_id).await?;
    let updated = registry
        .portfolio_service
        .set_cv_url(id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// POST /api/portfolio/{id}/like — anyone authenticated can like.
pub async fn like(
    _user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let updated = registry
        .portfolio_service
        .increment_likes(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

// ── Social media links ──

pub async fn add_social_link(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
    body: web::Json<CreateSocialMediaLink>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_owner(&registry, id, &user.person_id).await?;
    let links = registry
        .portfolio_service
        .add_social_media_link(id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(links))
}

pub async fn get_social_links(
    _user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let links = registry
        .portfolio_service
        .get_social_media_links(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(links))
}

pub async fn remove_social_link(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let link_id = path.into_inner();
    registry
        .portfolio_service
        .remove_social_media_link(link_id, &user.person_id)
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("social media link {link_id} removed"),
    })))
}

// ── Share links ──

pub async fn create_share_link(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
    body: web::Json<CreateShareLink>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_owner(&registry, id, &user.person_id).await?;
    let link = registry
        .portfolio_service
        .create_share_link(id, body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(link))
}

pub async fn get_share_links(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_owner(&registry, id, &user.person_id).await?;
    let links = registry.portfolio_service.get_share_links(id).await?;
    Ok(HttpResponse::Ok().json(links))
}

// ── Views / downloads ──

pub async fn record_view(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let view = registry
        .portfolio_service
        .record_view(path.into_inner(), &user.person_id)
        .await?;
    Ok(HttpResponse::Created().json(view))
}

pub async fn get_views(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_owner(&registry, id, &user.person_id).await?;
    let views = registry.portfolio_service.get_views(id).await?;
    Ok(HttpResponse::Ok().json(views))
}

pub async fn record_download(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let download = registry
        .portfolio_service
        .record_download(path.into_inner(), &user.person_id)
        .await?;
    Ok(HttpResponse::Created().json(download))
}

pub async fn get_downloads(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_owner(&registry, id, &user.person_id).await?;
    let downloads = registry.portfolio_service.get_downloads(id).await?;
    Ok(HttpResponse::Ok().json(downloads))
}

// ── Linked portfolios ──

pub async fn link_portfolio(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ServiceError> {
    let (id, parent_id) = path.into_inner();
    require_owner(&registry, id, &user.person_id).await?;
    let updated = registry
        .portfolio_service
        .link_portfolio(id, parent_id)
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn unlink_portfolio(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_owner(&registry, id, &user.person_id).await?;
    let updated = registry.portfolio_service.unlink_portfolio(id).await?;
    Ok(HttpResponse::Ok().json(updated))
}
