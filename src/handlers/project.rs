use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::error::ServiceError;
use crate::github::GithubClient;
use crate::models::project::{
    CreateProject, EditCategories, EditDescription, EditHostedLink, EditImages,
};
use crate::registry::Registry;

/// Fail with 403 unless the caller owns the portfolio the project belongs
/// to; 404 when the project itself is missing.
async fn require_project_owner(
    registry: &Registry,
    project_id: Uuid,
    person_id: &str,
) -> Result<(), ServiceError> {
    let project = registry.project_service.get_project(project_id).await?;
    let portfolio = registry
        .portfolio_service
        .get_portfolio(project.portfolio_id)
        .await?;
    if portfolio.person_id != person_id {
        return Err(ServiceError::Forbidden(
            "you can only modify projects on your own portfolio".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/project/{portfolio_id} — add a batch of projects.
pub async fn add_projects(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
    body: web::Json<Vec<CreateProject>>,
) -> Result<HttpResponse, ServiceError> {
    let portfolio_id = path.into_inner();
    let portfolio = registry
        .portfolio_service
        .get_portfolio(portfolio_id)
        .await?;
    if portfolio.person_id != user.person_id {
        return Err(ServiceError::Forbidden(
            "you can only add projects to your own portfolio".to_string(),
        ));
    }
    let projects = registry
        .project_service
        .add_projects(portfolio_id, body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(projects))
}

/// GET /api/project/{portfolio_id} — list a portfolio's projects.
pub async fn get_projects(
    _user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let projects = registry
        .project_service
        .get_projects(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(projects))
}

/// GET /api/project/item/{id} — one project.
pub async fn get_project(
    _user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let project = registry
        .project_service
        .get_project(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(project))
}

pub async fn edit_description(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
    body: web::Json<EditDescription>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_project_owner(&registry, id, &user.person_id).await?;
    let updated = registry
        .project_service
        .edit_description(id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn edit_hosted_link(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
    body: web::Json<EditHostedLink>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_project_owner(&registry, id, &user.person_id).await?;
    let updated = registry
        .project_service
        .edit_hosted_link(id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn edit_images(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
    body: web::Json<EditImages>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_project_owner(&registry, id, &user.person_id).await?;
    let updated = registry
        .project_service
        .edit_images(id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn edit_categories(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
    body: web::Json<EditCategories>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_project_owner(&registry, id, &user.person_id).await?;
    let updated = registry
        .project_service
        .edit_categories(id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/project/item/{id}
pub async fn delete_project(
    user: AuthenticatedUser,
    registry: web::Data<Registry>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();
    require_project_owner(&registry, id, &user.person_id).await?;
    registry.project_service.delete_project(id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("project {id} deleted"),
    })))
}

/// GET /api/project/github/{username} — proxy GitHub's repository listing.
pub async fn list_github_repos(
    _user: AuthenticatedUser,
    github: web::Data<GithubClient>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let repos = github.list_repositories(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(repos))
}
