use std::sync::Arc;

use actix_web::{HttpResponse, web};

use crate::handlers::{home_handlers, talk_handlers};
use crate::models::talk::TalkStore;
use crate::render::Renderer;
use crate::services::timezone::TimezoneLookup;

/// Collaborators shared by every handler, built once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<dyn TalkStore>,
    pub time_zones: Arc<dyn TimezoneLookup>,
    pub renderer: Arc<dyn Renderer>,
}

impl AppContext {
    pub fn new(
        store: Arc<dyn TalkStore>,
        time_zones: Arc<dyn TimezoneLookup>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        Self { store, time_zones, renderer }
    }
}

/// Largest talk submission body accepted.
pub const MAX_FORM_BYTES: usize = 10 * 1024 * 1024;

/// Register the site routes. Handlers are mounted for every method they
/// may receive and reject the ones they don't serve themselves.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::route().to(home_handlers::index)))
        .service(
            web::resource("/talk/new")
                .app_data(web::PayloadConfig::new(MAX_FORM_BYTES))
                .route(web::post().to(talk_handlers::submit))
                .route(web::route().to(talk_handlers::new_form)),
        )
        .service(web::resource("/talk").route(web::route().to(talk_handlers::detail)));
}

/// Fallback for paths no route claims.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../templates/errors/404.html"))
}
