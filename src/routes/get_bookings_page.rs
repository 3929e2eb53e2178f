use crate::{
    pages::{route_table::Page, views},
    types::app_state::AppState,
    utils::app_error::AppError,
};
use axum::{extract::State, response::Response};
#[cfg(test)]
use axum_macros::debug_handler;

use super::render_page;

#[cfg_attr(test, debug_handler)]
pub async fn get_bookings_page(State(state): State<AppState>) -> Result<Response, AppError> {
    render_page(&state, &Page::Bookings, &views::bookings_state()).await
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::{
        app::{gen_app, test_config},
        pages::views::extract_state,
        types::page_state::PageState,
    };

    async fn request(method: Method, uri: &str) -> (StatusCode, String) {
        let response = gen_app(&test_config())
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn renders_bookings_page() {
        let (status, body) = request(Method::GET, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            extract_state(&body),
            PageState::Bookings {
                bookings: Vec::new()
            }
        );
    }

    #[tokio::test]
    async fn query_strings_never_change_the_page() {
        for uri in [
            "/?page=0",
            "/?page=abc",
            "/?page=99999999999",
            "/?utm_source=x&page=-1",
        ] {
            let (status, body) = request(Method::GET, uri).await;

            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains(r#"data-view="bookings""#), "{uri}");
        }
    }

    #[tokio::test]
    async fn extra_slashes_are_normalized() {
        for uri in ["//", "///", "/?x=1"] {
            let (status, body) = request(Method::GET, uri).await;

            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains(r#"data-view="bookings""#), "{uri}");
        }
    }

    #[tokio::test]
    async fn head_is_served_like_get() {
        let (status, body) = request(Method::HEAD, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn other_methods_are_not_allowed() {
        let (status, _) = request(Method::POST, "/").await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
