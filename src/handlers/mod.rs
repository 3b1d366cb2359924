pub mod portfolio;
pub mod project;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Portfolio routes (all behind the auth cookie) ──
    cfg.service(
        web::scope("/portfolio")
            .route("", web::post().to(portfolio::create_portfolio))
            .route("/me", web::get().to(portfolio::get_my_portfolio))
            .route("/{id}", web::get().to(portfolio::get_portfolio))
            .route("/{id}/biography", web::put().to(portfolio::edit_biography))
            .route("/{id}/names", web::put().to(portfolio::edit_names))
            .route("/{id}/rating", web::put().to(portfolio::edit_rating))
            .route("/{id}/avatar", web::put().to(portfolio::edit_avatar))
            .route("/{id}/theme", web::put().to(portfolio::edit_theme))
            .route("/{id}/color", web::put().to(portfolio::edit_main_color))
            .route("/{id}/visibility", web::put().to(portfolio::edit_visibility))
            .route("/{id}/cv", web::put().to(portfolio::edit_cv_url))
            .route("/{id}/like", web::post().to(portfolio::like))
            .route("/{id}/social-links", web::post().to(portfolio::add_social_link))
            .route("/{id}/social-links", web::get().to(portfolio::get_social_links))
            .route("/social-links/{link_id}", web::delete().to(portfolio::remove_social_link))
            .route("/{id}/share-links", web::post().to(portfolio::create_share_link))
            .route("/{id}/share-links", web::get().to(portfolio::get_share_links))
            .route("/{id}/views", web::post().to(portfolio::record_view))
            .route("/{id}/views", web::get().to(portfolio::get_views))
            .route("/{id}/downloads", web::post().to(portfolio::record_download))
            .route("/{id}/downloads", web::get().to(portfolio::get_downloads))
            .route("/{id}/link/{parent_id}", web::put().to(portfolio::link_portfolio))
            .route("/{id}/link", web::delete().to(portfolio::unlink_portfolio)),
    );

    // ── Project routes ──
    cfg.service(
        web::scope("/project")
            .route("/github/{username}", web::get().to(project::list_github_repos))
            .route("/item/{id}", web::get().to(project::get_project))
            .route("/item/{id}/description", web::put().to(project::edit_description))
            .route("/item/{id}/hosted-link", web::put().to(project::edit_hosted_link))
            .route("/item/{id}/images", web::put().to(project::edit_images))
            .route("/item/{id}/categories", web::put().to(project::edit_categories))
            .route("/item/{id}", web::delete().to(project::delete_project))
            .route("/{portfolio_id}", web::post().to(project::add_projects))
            .route("/{portfolio_id}", web::get().to(project::get_projects)),
    );
}
