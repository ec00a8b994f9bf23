use std::sync::Arc;

use axum::Router;
use perfbook_core::books::{BookService, BookServiceTrait, InMemoryBookRepository};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::api;
use crate::config::{LogFormat, ServerConfig};

pub struct AppState {
    pub book_service: Arc<dyn BookServiceTrait>,
    pub config: ServerConfig,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

pub fn build_state(config: &ServerConfig) -> Arc<AppState> {
    let repository = Arc::new(InMemoryBookRepository::new());
    let book_service = BookService::with_settings(repository, config.tracking_settings());

    Arc::new(AppState {
        book_service: Arc::new(book_service),
        config: config.clone(),
    })
}

pub fn app(state: Arc<AppState>) -> Router {
    api::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
