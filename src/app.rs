use crate::{
    config::Config,
    pages::{route_table::RouteTable, views::Views},
    routes::{apply_routes, get_not_found::get_not_found},
    types::app_state::AppState,
};
use axum::Router;
use tower_http::{cors::CorsLayer, normalize_path::NormalizePath};

/// The page router behind a layer that trims trailing and repeated leading
/// slashes before routing.
pub type App = NormalizePath<Router>;

pub fn gen_state(config: &Config) -> AppState {
    AppState {
        route_table: RouteTable::new(&config.base_url),
        views: Views::new(&config.assets_dir, config.view_load_timeout),
    }
}

pub fn gen_app(config: &Config) -> App {
    app_with_state(gen_state(config))
}

pub fn app_with_state(state: AppState) -> App {
    let cors_middleware = CorsLayer::new();

    let pages = apply_routes(Router::new());
    let router = match state.route_table.base() {
        "" => pages,
        base => Router::new().nest(base, pages),
    };

    let router = router
        .fallback(get_not_found)
        .layer(cors_middleware)
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

#[cfg(test)]
pub fn test_config() -> Config {
    Config {
        assets_dir: std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
        ..Default::default()
    }
}
