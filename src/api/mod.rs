//! Backend API client.
//!
//! One [`ApiClient`] is shared by the whole app. It joins endpoint paths onto
//! the configured base URL, attaches `Authorization: Bearer <token>` whenever
//! the session holds a token, and maps non-2xx answers to
//! [`ApiError::Server`] carrying the backend's `message`. There is no retry,
//! timeout or caching.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;
use url::Url;

use crate::error::ApiError;
use crate::models::{
    CategoriesResponse, Category, Credentials, LoginResponse, MessageResponse, NewAccount,
    NewCategory, NewSubCategory, Product, ProductResponse, ProductsResponse, SearchResponse,
    WishlistItemRequest, WishlistResponse,
};
use crate::session::Session;
use crate::state::products::ProductQuery;

pub mod transport;

pub use transport::{default_transport, HttpRequest, HttpResponse, Method, Transport};

// =============================================================================
// Endpoints
// =============================================================================

pub const PRODUCTS_PATH: &str = "/product/fetch-product";
pub const SEARCH_PATH: &str = "/product/search";
/// Followed by the product id
pub const PRODUCT_PATH: &str = "/product/";
pub const CATEGORIES_PATH: &str = "/product/categories";
pub const ADD_CATEGORY_PATH: &str = "/product/add-catogory";
pub const ADD_SUBCATEGORY_PATH: &str = "/product/add-subcategory";
/// Followed by the user id
pub const WISHLIST_PATH: &str = "/product/wishlist/";
pub const LOGIN_PATH: &str = "/user/login";
pub const SIGNUP_PATH: &str = "/user/signup";

#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    transport: Rc<dyn Transport>,
    session: Session,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && Rc::ptr_eq(&self.transport, &other.transport)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.base.as_str())
            .field("session", &self.session)
            .finish()
    }
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        transport: Rc<dyn Transport>,
        session: Session,
    ) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url)?;
        // Url::join replaces the last segment unless the base ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            transport,
            session,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    fn build(&self, method: Method, url: Url, body: Option<serde_json::Value>) -> HttpRequest {
        let mut request = HttpRequest::new(method, url);
        if let Some(token) = self.session.token() {
            request
                .headers
                .push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        request.body = body;
        request
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError> {
        let path = url.path().to_string();
        let request = self.build(method, url, body);
        tracing::debug!("{} {}", method, path);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("{} {} failed: {}", method, path, e);
                return Err(e);
            }
        };

        if !response.is_success() {
            let message = serde_json::from_str::<MessageResponse>(&response.body)
                .ok()
                .and_then(|m| m.message);
            tracing::warn!("{} {} returned {}", method, path, response.status);
            return Err(ApiError::Server {
                status: response.status,
                message,
            });
        }

        let text = if response.body.trim().is_empty() {
            "{}"
        } else {
            response.body.as_str()
        };
        Ok(serde_json::from_str(text)?)
    }

    async fn get<R: DeserializeOwned>(&self, url: Url) -> Result<R, ApiError> {
        self.execute(Method::Get, url, None).await
    }

    async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body)?;
        self.execute(method, url, Some(body)).await
    }

    // ============ Products ============

    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        let response: ProductsResponse = self.get(self.endpoint(PRODUCTS_PATH)?).await?;
        Ok(response.products)
    }

    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        let mut url = self.endpoint(SEARCH_PATH)?;
        url.query_pairs_mut().append_pair("query", query);
        let response: SearchResponse = self.get(url).await?;
        Ok(response.results)
    }

    /// Full list for [`ProductQuery::All`], filtered results otherwise.
    pub async fn load_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
        match query {
            ProductQuery::All => self.fetch_products().await,
            ProductQuery::Search(q) => self.search_products(q).await,
        }
    }

    /// `Ok(None)` when the backend has no such product.
    pub async fn fetch_product(&self, product_id: &str) -> Result<Option<Product>, ApiError> {
        let path = format!("{}{}", PRODUCT_PATH, urlencoding::encode(product_id));
        match self.get::<ProductResponse>(self.endpoint(&path)?).await {
            Ok(response) => Ok(response.product),
            Err(e) if e.status() == Some(404) => Ok(None),
            Err(e) => Err(e),
        }
    }

    // ============ Categories ============

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let response: CategoriesResponse = self.get(self.endpoint(CATEGORIES_PATH)?).await?;
        Ok(response.categories)
    }

    pub async fn add_category(&self, category: &NewCategory) -> Result<MessageResponse, ApiError> {
        self.send_json(Method::Post, self.endpoint(ADD_CATEGORY_PATH)?, category)
            .await
    }

    pub async fn add_subcategory(
        &self,
        sub_category: &NewSubCategory,
    ) -> Result<MessageResponse, ApiError> {
        self.send_json(
            Method::Post,
            self.endpoint(ADD_SUBCATEGORY_PATH)?,
            sub_category,
        )
        .await
    }

    // ============ Wishlist ============

    fn wishlist_url(&self, user_id: &str) -> Result<Url, ApiError> {
        let path = format!("{}{}", WISHLIST_PATH, urlencoding::encode(user_id));
        self.endpoint(&path)
    }

    pub async fn fetch_wishlist(&self, user_id: &str) -> Result<Vec<Product>, ApiError> {
        let response: WishlistResponse = self.get(self.wishlist_url(user_id)?).await?;
        Ok(response.wishlist)
    }

    pub async fn add_to_wishlist(&self, user_id: &str, product_id: &str) -> Result<(), ApiError> {
        let body = WishlistItemRequest {
            product_id: product_id.to_string(),
        };
        let _: serde_json::Value = self
            .send_json(Method::Post, self.wishlist_url(user_id)?, &body)
            .await?;
        Ok(())
    }

    pub async fn remove_from_wishlist(
        &self,
        user_id: &str,
        product_id: &str,
    ) -> Result<(), ApiError> {
        let body = WishlistItemRequest {
            product_id: product_id.to_string(),
        };
        let _: serde_json::Value = self
            .send_json(Method::Delete, self.wishlist_url(user_id)?, &body)
            .await?;
        Ok(())
    }

    // ============ Accounts ============

    /// Log in and, on success, store the token (and user id if the backend
    /// returned one) in the session. On failure the session is untouched.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .send_json(Method::Post, self.endpoint(LOGIN_PATH)?, credentials)
            .await?;
        self.session
            .sign_in(&response.token, response.resolved_user_id());
        Ok(response)
    }

    pub async fn signup(&self, account: &NewAccount) -> Result<MessageResponse, ApiError> {
        self.send_json(Method::Post, self.endpoint(SIGNUP_PATH)?, account)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned responses and records what was sent.
    #[derive(Default)]
    struct ScriptedTransport {
        responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
        sent: RefCell<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn reply(&self, status: u16, body: serde_json::Value) {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
        }

        fn fail(&self, error: ApiError) {
            self.responses.borrow_mut().push_back(Err(error));
        }

        fn last(&self) -> HttpRequest {
            self.sent.borrow().last().cloned().unwrap()
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.sent.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted response".into())))
        }
    }

    fn client(base: &str) -> (ApiClient, Rc<ScriptedTransport>) {
        let transport = Rc::new(ScriptedTransport::default());
        let client = ApiClient::new(base, transport.clone(), Session::in_memory()).unwrap();
        (client, transport)
    }

    #[test]
    fn base_with_or_without_trailing_slash() {
        let (a, _) = client("http://shop.test/api");
        let (b, _) = client("http://shop.test/api/");
        assert_eq!(
            a.endpoint(PRODUCTS_PATH).unwrap().as_str(),
            "http://shop.test/api/product/fetch-product"
        );
        assert_eq!(
            a.endpoint(PRODUCTS_PATH).unwrap(),
            b.endpoint(PRODUCTS_PATH).unwrap()
        );
    }

    #[test]
    fn relative_base_is_rejected() {
        let transport = Rc::new(ScriptedTransport::default());
        let result = ApiClient::new("/api", transport, Session::in_memory());
        assert!(matches!(result, Err(ApiError::Url(_))));
    }

    #[tokio::test]
    async fn bearer_attached_only_with_token() {
        let (client, transport) = client("http://shop.test");
        transport.reply(200, json!({ "products": [] }));
        client.fetch_products().await.unwrap();
        assert_eq!(transport.last().header("authorization"), None);

        client.session().sign_in("tok-1", None);
        transport.reply(200, json!({ "products": [] }));
        client.fetch_products().await.unwrap();
        assert_eq!(
            transport.last().header("Authorization"),
            Some("Bearer tok-1")
        );
    }

    #[tokio::test]
    async fn search_sends_query_parameter() {
        let (client, transport) = client("http://shop.test");
        transport.reply(200, json!({ "results": [{ "_id": "p1", "title": "HP 15" }] }));
        let results = client.search_products("hp laptop").await.unwrap();

        assert_eq!(results.len(), 1);
        let sent = transport.last();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.url.path(), "/product/search");
        assert_eq!(
            sent.url.query_pairs().find(|(k, _)| k == "query").unwrap().1,
            "hp laptop"
        );
    }

    #[tokio::test]
    async fn server_error_carries_message() {
        let (client, transport) = client("http://shop.test");
        transport.reply(409, json!({ "message": "Category already exists" }));
        let err = client
            .add_category(&NewCategory {
                name: "Laptop".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 409,
                message: Some("Category already exists".into())
            }
        );
    }

    #[tokio::test]
    async fn non_json_error_body_has_no_message() {
        let (client, transport) = client("http://shop.test");
        transport
            .responses
            .borrow_mut()
            .push_back(Ok(HttpResponse {
                status: 502,
                body: "<html>Bad Gateway</html>".into(),
            }));
        let err = client.fetch_products().await.unwrap_err();
        assert_eq!(err.user_message("Failed to fetch products."), "Failed to fetch products.");
    }

    #[tokio::test]
    async fn malformed_success_body_is_decode_error() {
        let (client, transport) = client("http://shop.test");
        transport.reply(200, json!({ "products": "nope" }));
        assert!(matches!(
            client.fetch_products().await,
            Err(ApiError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn empty_success_body_is_accepted() {
        let (client, transport) = client("http://shop.test");
        transport
            .responses
            .borrow_mut()
            .push_back(Ok(HttpResponse {
                status: 201,
                body: String::new(),
            }));
        client.add_to_wishlist("u1", "p1").await.unwrap();
    }

    #[tokio::test]
    async fn unknown_product_is_none() {
        let (client, transport) = client("http://shop.test");
        transport.reply(200, json!({ "product": null }));
        assert_eq!(client.fetch_product("p1").await.unwrap(), None);

        transport.reply(404, json!({ "message": "Product not found" }));
        assert_eq!(client.fetch_product("p2").await.unwrap(), None);

        transport.reply(200, json!({ "product": { "_id": "p3", "title": "Dell" } }));
        let product = client.fetch_product("p3").await.unwrap().unwrap();
        assert_eq!(product.title, "Dell");
        assert_eq!(transport.last().url.path(), "/product/p3");
    }

    #[tokio::test]
    async fn wishlist_remove_is_delete_with_body() {
        let (client, transport) = client("http://shop.test");
        transport.reply(200, json!({}));
        client.remove_from_wishlist("user 1", "p9").await.unwrap();

        let sent = transport.last();
        assert_eq!(sent.method, Method::Delete);
        assert_eq!(sent.url.path(), "/product/wishlist/user%201");
        assert_eq!(sent.body, Some(json!({ "productId": "p9" })));
    }

    #[tokio::test]
    async fn login_success_stores_session() {
        let (client, transport) = client("http://shop.test");
        transport.reply(200, json!({ "token": "jwt", "userId": "u7" }));
        client
            .login(&Credentials {
                email: "a@b.c".into(),
                password: "pw".into(),
            })
            .await
            .unwrap();

        assert_eq!(client.session().token().as_deref(), Some("jwt"));
        assert_eq!(client.session().user_id().as_deref(), Some("u7"));
    }

    #[tokio::test]
    async fn login_failure_leaves_session_empty() {
        let (client, transport) = client("http://shop.test");
        transport.reply(401, json!({ "message": "Invalid password" }));
        let err = client
            .login(&Credentials {
                email: "a@b.c".into(),
                password: "bad".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.user_message("Login failed"), "Invalid password");
        assert!(!client.session().is_logged_in());
    }

    #[tokio::test]
    async fn network_failure_propagates() {
        let (client, transport) = client("http://shop.test");
        transport.fail(ApiError::Network("connection refused".into()));
        assert!(matches!(
            client.list_categories().await,
            Err(ApiError::Network(_))
        ));
    }
}
