#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use folio_core::upload::UploadPolicy;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use folio_api::config::{ServerConfig, DEFAULT_MAX_CONTENT_LENGTH, DEV_SECRET_KEY};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_api::upload::ImageStore;

const BOUNDARY: &str = "----folio-test-boundary";

/// Build a test `ServerConfig` rooted at `static_dir`.
pub fn test_config(static_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        secret_key: DEV_SECRET_KEY.to_string(),
        database_url: "sqlite::memory:".to_string(),
        upload_dir: static_dir.join("uploads"),
        static_dir,
        max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
        allowed_extensions: vec![
            "png".into(),
            "jpg".into(),
            "jpeg".into(),
            "gif".into(),
            "webp".into(),
        ],
    }
}

/// A database pool plus a private static directory for one test.
pub struct TestContext {
    pub pool: SqlitePool,
    pub config: ServerConfig,
    _static_dir: TempDir,
}

impl TestContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_config(pool, |_| {})
    }

    pub fn with_config(pool: SqlitePool, adjust: impl FnOnce(&mut ServerConfig)) -> Self {
        let static_dir = tempfile::tempdir().unwrap();
        let mut config = test_config(static_dir.path().to_path_buf());
        adjust(&mut config);
        Self {
            pool,
            config,
            _static_dir: static_dir,
        }
    }

    /// Build the full application router, mirroring `main.rs`.
    pub fn app(&self) -> Router {
        let images = ImageStore::new(
            self.config.upload_dir.clone(),
            UploadPolicy::new(&self.config.allowed_extensions),
        );
        let state = AppState {
            pool: self.pool.clone(),
            config: Arc::new(self.config.clone()),
            images: Arc::new(images),
        };
        build_app_router(state, &self.config)
    }

    /// On-disk location of a stored `uploads/...` path.
    pub fn image_file(&self, public_path: &str) -> PathBuf {
        self.config.static_dir.join(public_path)
    }

    /// Number of files currently in the upload directory.
    pub fn upload_count(&self) -> usize {
        match std::fs::read_dir(&self.config.upload_dir) {
            Ok(entries) => entries.count(),
            Err(_) => 0,
        }
    }
}

/// Make every `event` (`INSERT`, `UPDATE` or `DELETE`) on `table` fail at
/// the database, leaving the table itself readable.
pub async fn reject_writes(pool: &SqlitePool, table: &str, event: &str) {
    let sql = format!(
        "CREATE TRIGGER reject_{table}_{event} BEFORE {event} ON {table} \
         BEGIN SELECT RAISE(ABORT, 'writes rejected'); END"
    );
    sqlx::query(&sql).execute(pool).await.unwrap();
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::post(uri).body(Body::empty()).unwrap()).await
}

/// POST an `application/x-www-form-urlencoded` body. Values must not need
/// percent-encoding beyond `@`.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{k}={}", v.replace('@', "%40").replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&");
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// A file part for [`post_multipart`].
pub struct FilePart<'a> {
    pub field: &'a str,
    pub file_name: &'a str,
    pub data: &'a [u8],
}

pub fn image<'a>(file_name: &'a str, data: &'a [u8]) -> FilePart<'a> {
    FilePart {
        field: "image",
        file_name,
        data,
    }
}

/// Encode text fields and an optional file as `multipart/form-data`.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<FilePart<'_>>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(file) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                file.field, file.file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<FilePart<'_>>,
) -> Response<Body> {
    let request = Request::post(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(fields, file)))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a `303 See Other` and return its `Location`.
pub fn redirect_location(response: &Response<Body>) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string()
}

/// GET a `{ "data": [...] }` list page and return the array.
pub async fn list(app: Router, uri: &str) -> Vec<serde_json::Value> {
    let response = get(app, uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]
        .as_array()
        .unwrap()
        .clone()
}
