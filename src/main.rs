use std::io;
use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use talksite::app::{self, AppContext};
use talksite::config::{Config, StoreBackend};
use talksite::db;
use talksite::models::talk::{MemoryTalkStore, PgTalkStore, TalkStore};
use talksite::render::AskamaRenderer;
use talksite::services::timezone::StaticTimezoneLookup;

fn startup_error(e: impl std::fmt::Display) -> io::Error {
    io::Error::other(e.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(startup_error)?;

    let store: Arc<dyn TalkStore> = match &config.store {
        StoreBackend::Postgres { database_url, max_connections } => {
            let pool = db::init_pool(database_url, *max_connections)
                .await
                .map_err(startup_error)?;
            db::run_migrations(&pool).await.map_err(startup_error)?;
            Arc::new(PgTalkStore::new(pool))
        }
        StoreBackend::Memory => {
            log::warn!("Using in-memory talk store (talks lost on restart)");
            Arc::new(MemoryTalkStore::new())
        }
    };

    let time_zones = match &config.timezones_file {
        Some(path) => StaticTimezoneLookup::from_file(path)?,
        None => StaticTimezoneLookup::bundled(),
    };

    let ctx = AppContext::new(
        store,
        Arc::new(time_zones),
        Arc::new(AskamaRenderer::new(config.app_name.clone())),
    );

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(ctx.clone()))
            .service(actix_files::Files::new("/static", "./static"))
            .configure(app::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(app::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
