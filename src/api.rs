//! Backend HTTP bindings
//!
//! Typed wrappers around the document API. Every call goes through `fetch`
//! on the window and returns `Result<T, String>` with a human-readable
//! message, so components never touch raw `JsValue` errors.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response, UrlSearchParams};

// ============================================================================
// Wire Types
// ============================================================================

/// Document summary as returned by the list endpoint.
///
/// `content` is only guaranteed on the detail endpoint, so the summary
/// carries the card-rendering fields alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

/// Full document, including body content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doc {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// Creation payload. `id` and `slug` are assigned by the backend.
///
/// `cover_image` serializes to an explicit `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDoc {
    pub title: String,
    pub category: String,
    pub content: String,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
}

/// Response of the upload endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResponse {
    pub data_url: String,
}

// ============================================================================
// Request plumbing
// ============================================================================

/// Backend base URL, read from the optional `DOCS_HUB_BACKEND` window
/// global. Empty means same-origin relative paths.
pub fn backend_base() -> String {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("DOCS_HUB_BACKEND")).ok())
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// Build the list-endpoint query string. Parameters are included only when
/// non-empty; both empty yields an empty string (no `?`).
pub fn list_query(q: &str, category: &str) -> String {
    let params = UrlSearchParams::new().expect_throw("UrlSearchParams unavailable");
    if !q.is_empty() {
        params.append("q", q);
    }
    if !category.is_empty() {
        params.append("category", category);
    }
    let encoded = String::from(params.to_string());
    if encoded.is_empty() {
        encoded
    } else {
        format!("?{encoded}")
    }
}

/// Send a request and check the HTTP status. The body is not consumed here.
async fn send(request: Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Request failed: {e:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "Fetch did not return a Response".to_string())?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }
    Ok(response)
}

/// Read and parse a response body as JSON.
async fn read_json(response: Response) -> Result<JsValue, String> {
    let body = response
        .json()
        .map_err(|e| format!("Response is not JSON: {e:?}"))?;
    JsFuture::from(body)
        .await
        .map_err(|e| format!("Failed to read response body: {e:?}"))
}

async fn get_json(url: &str) -> Result<JsValue, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("Invalid request: {e:?}"))?;

    let response = send(request).await?;
    read_json(response).await
}

// ============================================================================
// Document API
// ============================================================================

/// List documents, optionally filtered by free-text query and category.
pub async fn list_docs(q: &str, category: &str) -> Result<Vec<DocSummary>, String> {
    let url = format!("{}/api/docs{}", backend_base(), list_query(q, category));
    let json = get_json(&url).await?;
    serde_wasm_bindgen::from_value(json)
        .map_err(|e| format!("Failed to deserialize document list: {e}"))
}

/// Fetch a single document by slug, including its content.
pub async fn get_doc(slug: &str) -> Result<Doc, String> {
    let url = format!("{}/api/docs/{}", backend_base(), slug);
    let json = get_json(&url).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| format!("Failed to deserialize document: {e}"))
}

/// Create a new document. Only the HTTP status is inspected; the created
/// document is re-fetched through the list reload that follows a save.
pub async fn create_doc(doc: &NewDoc) -> Result<(), String> {
    let url = format!("{}/api/docs", backend_base());
    let body = serde_json::to_string(doc).map_err(|e| format!("Failed to serialize document: {e}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| format!("Invalid request: {e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("Failed to set headers: {e:?}"))?;

    send(request).await?;
    Ok(())
}

/// Upload a file as multipart form data (field `file`) and return the
/// reference the backend hands back, a data URL or a hosted URL.
pub async fn upload_file(file: &web_sys::File) -> Result<UploadResponse, String> {
    let url = format!("{}/api/upload", backend_base());

    let form = FormData::new().map_err(|e| format!("Failed to build form data: {e:?}"))?;
    form.append_with_blob("file", file)
        .map_err(|e| format!("Failed to attach file: {e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    // The browser supplies the multipart Content-Type with its boundary.
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| format!("Invalid request: {e:?}"))?;

    let response = send(request).await?;
    let json = read_json(response).await?;
    serde_wasm_bindgen::from_value(json)
        .map_err(|e| format!("Failed to deserialize upload response: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_doc_serializes_missing_cover_as_null() {
        let doc = NewDoc {
            title: "Intro Linux".to_string(),
            category: "linux".to_string(),
            content: "# Intro".to_string(),
            tags: vec!["setup".to_string(), "intro".to_string()],
            cover_image: None,
        };

        let json: serde_json::Value = serde_json::to_value(&doc).unwrap();
        assert!(json["cover_image"].is_null());
        assert_eq!(json["title"], "Intro Linux");
        assert_eq!(json["category"], "linux");
    }

    #[test]
    fn test_new_doc_preserves_tag_order_and_duplicates() {
        let doc = NewDoc {
            title: String::new(),
            category: "web".to_string(),
            content: String::new(),
            tags: vec!["b".to_string(), "a".to_string(), "b".to_string()],
            cover_image: Some("data:image/png;base64,xyz".to_string()),
        };

        let json = serde_json::to_string(&doc).unwrap();
        let parsed: NewDoc = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.tags, vec!["b", "a", "b"]);
        assert_eq!(parsed.cover_image.as_deref(), Some("data:image/png;base64,xyz"));
    }

    #[test]
    fn test_doc_summary_tolerates_missing_optional_fields() {
        let summary: DocSummary = serde_json::from_str(
            r#"{"id":"1","slug":"a","title":"Intro Linux","category":"linux"}"#,
        )
        .unwrap();
        assert!(summary.tags.is_empty());
        assert!(summary.cover_image.is_none());
    }
}
