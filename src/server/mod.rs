mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::{DynAPI, API};
use crate::server::handlers::{launches, places, profile, routes, searches, sessions};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/startup", get(sessions::startup))
        .route("/sessions", post(sessions::create).delete(sessions::destroy))
        .route("/profile", get(profile::find).put(profile::update))
        .route("/places/suggestions", get(places::find_suggestions))
        .route("/places/locate", post(places::locate))
        .route("/places/:id", get(places::find))
        .route("/routes", post(routes::create))
        .route("/searches", post(searches::create))
        .route("/launches", post(launches::create))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), hyper::Error> {
    let api = Arc::new(api) as DynAPI;

    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
}

async fn root() -> &'static str {
    "Hello, World!"
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::router;
    use crate::api::DynAPI;
    use crate::engine::test_support;

    fn app() -> Router {
        router(Arc::new(test_support::engine()) as DynAPI)
    }

    async fn call(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    #[tokio::test]
    async fn hello_world() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn search_returns_filtered_offers() {
        let (status, body) = call(
            app(),
            Method::POST,
            "/searches",
            Some(json!({ "origin": "A St", "destination": "B Ave", "vehicle": "bike" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let offers = body.as_array().unwrap();
        assert_eq!(offers.len(), 3);
        assert_eq!(offers[0]["service"], "uber");
        assert_eq!(offers[0]["estimated_price"]["amount"], 25);
        assert_eq!(offers[0]["estimated_time_label"], "3-5 min");
        assert_eq!(offers[2]["provider"]["name"], "Rapido");
    }

    #[tokio::test]
    async fn search_without_origin_is_bad_request() {
        let (status, body) = call(
            app(),
            Method::POST,
            "/searches",
            Some(json!({ "origin": "", "destination": "B Ave" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please enter both source and destination");
    }

    #[tokio::test]
    async fn launch_reports_store_listing() {
        let (status, body) = call(
            app(),
            Method::POST,
            "/launches",
            Some(json!({
                "service": "uber",
                "platform": "android",
                "installed_schemes": []
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "needs_install");
        assert_eq!(
            body["store_url"],
            "https://play.google.com/store/apps/details?id=com.ubercab"
        );
        assert_eq!(body["prompt"]["message"], "Do you want to install Uber?");
    }

    #[tokio::test]
    async fn session_lifecycle_drives_startup() {
        let app = app();

        let (_, body) = call(app.clone(), Method::GET, "/startup", None).await;
        assert_eq!(body["destination"], "authentication");

        let (status, body) = call(
            app.clone(),
            Method::POST,
            "/sessions",
            Some(json!({ "email": "rider@example.com", "password": "pw" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["destination"], "search");

        let (_, body) = call(app.clone(), Method::GET, "/profile", None).await;
        assert_eq!(body["email"], "rider@example.com");
        assert_eq!(body["preferred_vehicle"], "sedan");

        let (status, _) = call(
            app.clone(),
            Method::PUT,
            "/profile",
            Some(json!({
                "email": "rider@example.com",
                "name": "",
                "phone": "",
                "preferred_vehicle": "auto"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = call(app.clone(), Method::DELETE, "/sessions", None).await;
        assert_eq!(body["destination"], "authentication");

        let (_, body) = call(app, Method::GET, "/startup", None).await;
        assert_eq!(body["destination"], "authentication");
    }

    #[tokio::test]
    async fn text_route_is_echoed_back() {
        let (status, body) = call(
            app(),
            Method::POST,
            "/routes",
            Some(json!({
                "origin": { "kind": "text", "description": "A St" },
                "destination": { "kind": "text", "description": "B Ave" }
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["origin"], "A St");
        assert_eq!(body["origin_coordinates"], Value::Null);
    }
}
