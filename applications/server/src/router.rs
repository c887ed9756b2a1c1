/// HTTP routing
use crate::{api, config::WebSettings, state::AppState};
use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router
///
/// All routes are `GET`. CORS is fully permissive.
pub fn create_router(app_state: AppState, web: &WebSettings) -> Router {
    let index_path = web.index_path.clone();

    let songs_routes = Router::new()
        .route("/search", get(api::songs::search))
        .route("/download_mp3", get(api::songs::download_mp3))
        .route("/download/:index", get(api::songs::download_song));

    let player_routes = Router::new()
        .route("/play/:index", get(api::player::play))
        .route("/next", get(api::player::next))
        .route("/previous", get(api::player::previous))
        .route("/ended", get(api::player::ended))
        .route("/toggle_shuffle", get(api::player::toggle_shuffle))
        .route("/toggle_repeat", get(api::player::toggle_repeat))
        .route("/toggle_play", get(api::player::toggle_play))
        .route("/recently_played", get(api::player::recently_played))
        .route("/queue", get(api::player::queue))
        .route("/state", get(api::player::state));

    Router::new()
        .route(
            "/",
            get(move || {
                let index_path = index_path.clone();
                async move { api::web::serve_index(&index_path).await }
            }),
        )
        .route("/health", get(api::health::health))
        .merge(songs_routes)
        .merge(player_routes)
        .nest_service("/static", ServeDir::new(&web.static_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
