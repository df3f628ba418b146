//! HTTP transports the API client can run on.
//!
//! - [`FetchTransport`]: `window.fetch`, browser builds
//! - [`ReqwestTransport`]: `reqwest`, native builds with the `server` feature
//! - [`UnavailableTransport`]: stub for native builds without a client

use async_trait::async_trait;
use std::rc::Rc;
use url::Url;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built request; headers already include any Authorization.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    /// Raw body text (may be empty)
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request. Futures are not `Send` because browser fetch futures
/// are not.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Transport for the current build target.
pub fn default_transport() -> Rc<dyn Transport> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(FetchTransport)
    }
    #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
    {
        Rc::new(ReqwestTransport::new())
    }
    #[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
    {
        Rc::new(UnavailableTransport)
    }
}

// ============ Browser ============

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Headers, Request, RequestInit, Response};

        let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{:?}", e));

        let window = web_sys::window().ok_or_else(|| ApiError::Network("No window".into()))?;

        let headers = Headers::new().map_err(js_err)?;
        for (name, value) in &request.headers {
            headers.set(name, value).map_err(js_err)?;
        }

        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            headers
                .set("Content-Type", "application/json")
                .map_err(js_err)?;
            let body_str = serde_json::to_string(body)?;
            opts.set_body(&wasm_bindgen::JsValue::from_str(&body_str));
        }
        opts.set_headers(&headers);

        let js_request =
            Request::new_with_str_and_init(request.url.as_str(), &opts).map_err(js_err)?;

        let resp_value = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(js_err)?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| ApiError::Network("Not a Response".into()))?;

        let text = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;

        Ok(HttpResponse {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

// ============ Native ============

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Native stub when no HTTP client is compiled in.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableTransport;

#[async_trait(?Send)]
impl Transport for UnavailableTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Network(
            "no HTTP transport available in this build".to_string(),
        ))
    }
}
