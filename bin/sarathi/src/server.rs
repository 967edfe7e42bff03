//! The HTTP server: routes, shared state, and handlers.
//!
//! Handlers are the outermost error boundary. Every store failure is
//! swallowed here: detail routes fall back to the not-found page,
//! listings to their empty states, and the sitemap to its static routes.
//! Visitors never see a raw error.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use sarathi_content::{ContentClient, queries};
use sarathi_core::{Config, schema};
use sarathi_render::{PageRenderer, SitemapGenerator, robots, template};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tracing::warn;

/// Shared server state, constructed once and read-only afterwards.
pub struct AppState {
    pub config: Config,
    pub client: ContentClient,
    pub renderer: PageRenderer,
    pub sitemap: SitemapGenerator,
}

impl AppState {
    /// Build the state from configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let client = ContentClient::new(&config.cms);
        let renderer = PageRenderer::new(config.clone());
        let sitemap = SitemapGenerator::new(config.clone());
        Self {
            config,
            client,
            renderer,
            sitemap,
        }
    }
}

/// Query-string filters accepted by the listing routes.
#[derive(Debug, Deserialize, Default)]
pub struct ListingQuery {
    /// `?type=` on /exams.
    #[serde(rename = "type")]
    pub exam_type: Option<String>,

    /// `?board=` on /board-exams.
    pub board: Option<String>,

    /// `?category=` on /blog.
    pub category: Option<String>,
}

/// Create the site router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let assets_dir = state.config.server.assets_dir.clone();

    Router::new()
        .route("/", get(home))
        .route("/exams", get(exams_listing))
        .route("/exams/{slug}", get(exam_guide_detail))
        .route("/board-exams", get(board_exams_listing))
        .route("/board-exams/{slug}", get(board_exam_detail))
        .route("/blog", get(blog_listing))
        .route("/blog/{slug}", get(blog_post_detail))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/privacy", get(privacy))
        .route("/resources", get(resources))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/robots.txt", get(robots_txt))
        .route("/studio", get(studio))
        .route("/studio/schema.json", get(studio_schema))
        .route("/studio/{*rest}", get(studio))
        .nest_service("/static", ServeDir::new(assets_dir))
        .fallback(fallback)
        .with_state(state)
}

/// Turn a rendered page into a response; template failures become a
/// minimal 500 rather than a panic.
fn page(result: template::Result<String>) -> Response {
    match result {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            warn!(error = %err, "template rendering failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Something went wrong</h1>".to_string()),
            )
                .into_response()
        }
    }
}

fn not_found(state: &AppState, message: &str) -> Response {
    match state.renderer.not_found_page(message) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(err) => {
            warn!(error = %err, "template rendering failed");
            (
                StatusCode::NOT_FOUND,
                Html("<h1>Page not found</h1>".to_string()),
            )
                .into_response()
        }
    }
}

async fn home(State(state): State<Arc<AppState>>) -> Response {
    let featured = match queries::featured_content(&state.client).await {
        Ok(featured) => featured,
        Err(err) => {
            warn!(error = %err, "featured content unavailable, rendering placeholders");
            Default::default()
        }
    };
    page(state.renderer.home_page(&featured))
}

async fn exams_listing(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let guides = match queries::all_exam_guides(&state.client).await {
        Ok(guides) => guides,
        Err(err) => {
            warn!(error = %err, "exam guide listing unavailable");
            Vec::new()
        }
    };
    page(state.renderer.exams_listing(&guides, query.exam_type.as_deref()))
}

async fn exam_guide_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Response {
    match queries::exam_guide_by_slug(&state.client, &slug).await {
        Ok(Some(guide)) => {
            let related = queries::related_exam_guides(&state.client, &slug, guide.exam_type)
                .await
                .unwrap_or_default();
            page(state.renderer.exam_guide_page(&guide, &related))
        }
        Ok(None) => not_found(&state, "No exam guide with that address."),
        Err(err) => {
            warn!(error = %err, slug, "exam guide lookup failed");
            not_found(&state, "No exam guide with that address.")
        }
    }
}

async fn board_exams_listing(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let exams = match queries::all_board_exams(&state.client).await {
        Ok(exams) => exams,
        Err(err) => {
            warn!(error = %err, "board exam listing unavailable");
            Vec::new()
        }
    };
    page(state.renderer.board_exams_listing(&exams, query.board.as_deref()))
}

async fn board_exam_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Response {
    match queries::board_exam_by_slug(&state.client, &slug).await {
        Ok(Some(exam)) => page(state.renderer.board_exam_page(&exam)),
        Ok(None) => not_found(&state, "No board exam guide with that address."),
        Err(err) => {
            warn!(error = %err, slug, "board exam lookup failed");
            not_found(&state, "No board exam guide with that address.")
        }
    }
}

async fn blog_listing(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let posts = match queries::all_blog_posts(&state.client).await {
        Ok(posts) => posts,
        Err(err) => {
            warn!(error = %err, "blog listing unavailable");
            Vec::new()
        }
    };
    page(state.renderer.blog_listing(&posts, query.category.as_deref()))
}

async fn blog_post_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Response {
    match queries::blog_post_by_slug(&state.client, &slug).await {
        Ok(Some(post)) => page(state.renderer.blog_post_page(&post)),
        Ok(None) => not_found(&state, "No blog post with that address."),
        Err(err) => {
            warn!(error = %err, slug, "blog post lookup failed");
            not_found(&state, "No blog post with that address.")
        }
    }
}

async fn about(State(state): State<Arc<AppState>>) -> Response {
    page(state.renderer.about_page())
}

async fn contact(State(state): State<Arc<AppState>>) -> Response {
    page(state.renderer.contact_page())
}

async fn privacy(State(state): State<Arc<AppState>>) -> Response {
    page(state.renderer.privacy_page())
}

async fn resources(State(state): State<Arc<AppState>>) -> Response {
    page(state.renderer.resources_page())
}

async fn sitemap_xml(State(state): State<Arc<AppState>>) -> Response {
    // Any slug listing failing degrades that kind to nothing; the static
    // routes always make it out.
    let exams = queries::exam_guide_slugs(&state.client).await.unwrap_or_default();
    let boards = queries::board_exam_slugs(&state.client).await.unwrap_or_default();
    let posts = queries::blog_post_slugs(&state.client).await.unwrap_or_default();

    let entries = state.sitemap.build_entries(&exams, &boards, &posts);
    let xml = state.sitemap.render(&entries);
    ([(header::CONTENT_TYPE, "application/xml")], xml).into_response()
}

async fn robots_txt(State(state): State<Arc<AppState>>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain")],
        robots::generate(&state.config),
    )
        .into_response()
}

async fn studio(State(state): State<Arc<AppState>>) -> Response {
    page(state.renderer.studio_page())
}

async fn studio_schema() -> Response {
    Json(schema::manifest()).into_response()
}

async fn fallback(State(state): State<Arc<AppState>>) -> Response {
    not_found(&state, "The page you are looking for does not exist.")
}

#[cfg(test)]
mod tests {
    use sarathi_core::{CmsConfig, ServerConfig, SiteConfig};

    use super::*;

    fn config() -> Config {
        Config {
            site: SiteConfig {
                title: "CareerSarathi".to_string(),
                base_url: "https://careersarathi.example".to_string(),
                description: None,
                organization: "CAREERSARATHI".to_string(),
            },
            cms: CmsConfig::default(),
            server: ServerConfig::default(),
        }
    }

    #[test]
    fn test_state_builds_without_project_id() {
        let state = AppState::new(config());
        assert!(!state.client.is_configured());
    }

    #[test]
    fn test_router_builds() {
        let state = Arc::new(AppState::new(config()));
        let _router = create_router(state);
    }

    #[tokio::test]
    async fn test_home_degrades_without_store() {
        let state = Arc::new(AppState::new(config()));
        let response = home(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_detail_slug_is_404() {
        let state = Arc::new(AppState::new(config()));
        let response =
            exam_guide_detail(State(state), Path("no-such-guide".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_listing_without_store_is_200() {
        let state = Arc::new(AppState::new(config()));
        let response = exams_listing(State(state), Query(ListingQuery::default())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_sitemap_degrades_to_static_routes() {
        let state = Arc::new(AppState::new(config()));
        let response = sitemap_xml(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_studio_schema_serves_manifest() {
        let response = studio_schema().await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
