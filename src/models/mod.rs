pub mod portfolio;
pub mod portfolio_download;
pub mod portfolio_link;
pub mod portfolio_view;
pub mod project;
pub mod social_media_link;
