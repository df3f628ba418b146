//! Mock catalog backend for integration testing
//!
//! Simulates the storefront REST API (products, categories, wishlist, users)
//! and records what the client sent so tests can assert on headers and
//! request counts.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

pub const VALID_EMAIL: &str = "ada@example.com";
pub const VALID_PASSWORD: &str = "hunter2";
pub const TOKEN: &str = "mock-token-1";
pub const USER_ID: &str = "user-1";

/// One request as seen by the mock
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

struct MockState {
    products: Vec<Value>,
    categories: Vec<Value>,
    wishlists: BTreeMap<String, BTreeSet<String>>,
    fail_wishlist_writes: bool,
    requests: Vec<Recorded>,
}

/// Mock storefront backend
pub struct MockBackend {
    addr: SocketAddr,
    state: Arc<RwLock<MockState>>,
    handle: JoinHandle<()>,
}

type Shared = Arc<RwLock<MockState>>;

impl MockBackend {
    /// Start a mock backend on a random port with a small catalog
    pub async fn start() -> Self {
        let state = Arc::new(RwLock::new(MockState {
            products: vec![
                product("p1", "HP AMD Ryzen 3", "s-laptop", &[("4 GB", 529.99, 3)]),
                product(
                    "p2",
                    "HP Pavilion Gaming",
                    "s-laptop",
                    &[("8 GB", 899.0, 5), ("16 GB", 1099.0, 1)],
                ),
                product("p3", "Dell Inspiron Tablet", "s-tablet", &[("4 GB", 399.5, 0)]),
            ],
            categories: vec![json!({
                "_id": "c-laptop",
                "name": "Laptop",
                "subCategories": [{ "_id": "s-laptop", "name": "HP", "category": "c-laptop" }]
            })],
            wishlists: BTreeMap::new(),
            fail_wishlist_writes: false,
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/product/fetch-product", get(list_products))
            .route("/product/search", get(search_products))
            .route("/product/categories", get(list_categories))
            .route("/product/add-catogory", post(add_category))
            .route("/product/add-subcategory", post(add_subcategory))
            .route(
                "/product/wishlist/{user_id}",
                get(get_wishlist).post(add_wishlist).delete(remove_wishlist),
            )
            .route("/product/{id}", get(get_product))
            .route("/user/login", post(login))
            .route("/user/signup", post(signup))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Base URL to hand to the client
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make every wishlist add/remove answer 500
    pub async fn fail_wishlist_writes(&self, fail: bool) {
        self.state.write().await.fail_wishlist_writes = fail;
    }

    /// Server-side wishlist for a user
    pub async fn wishlist(&self, user_id: &str) -> BTreeSet<String> {
        self.state
            .read()
            .await
            .wishlists
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn category_names(&self) -> Vec<String> {
        self.state
            .read()
            .await
            .categories
            .iter()
            .filter_map(|c| c["name"].as_str().map(str::to_string))
            .collect()
    }

    pub async fn requests(&self) -> Vec<Recorded> {
        self.state.read().await.requests.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.state.read().await.requests.len()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn product(id: &str, title: &str, sub_category: &str, variants: &[(&str, f64, u32)]) -> Value {
    json!({
        "_id": id,
        "title": title,
        "description": format!("{title} description"),
        "subCategory": sub_category,
        "variants": variants
            .iter()
            .map(|(ram, price, qty)| json!({ "ram": ram, "price": price, "qty": qty }))
            .collect::<Vec<_>>(),
        "images": [format!("https://img.example/{id}.png")],
    })
}

async fn record(state: &Shared, method: &str, path: String, headers: &HeaderMap) {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.write().await.requests.push(Recorded {
        method: method.to_string(),
        path,
        authorization,
    });
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "message": message })))
}

async fn list_products(State(state): State<Shared>, headers: HeaderMap) -> Json<Value> {
    record(&state, "GET", "/product/fetch-product".into(), &headers).await;
    let products = state.read().await.products.clone();
    Json(json!({ "products": products }))
}

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    query: String,
}

async fn search_products(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Json<Value> {
    record(&state, "GET", "/product/search".into(), &headers).await;
    let needle = params.query.to_lowercase();
    let results: Vec<Value> = state
        .read()
        .await
        .products
        .iter()
        .filter(|p| {
            p["title"]
                .as_str()
                .is_some_and(|t| t.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();
    Json(json!({ "results": results }))
}

async fn get_product(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    record(&state, "GET", format!("/product/{id}"), &headers).await;
    state
        .read()
        .await
        .products
        .iter()
        .find(|p| p["_id"] == id.as_str())
        .cloned()
        .map(|p| Json(json!({ "product": p })))
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Product not found"))
}

async fn list_categories(State(state): State<Shared>, headers: HeaderMap) -> Json<Value> {
    record(&state, "GET", "/product/categories".into(), &headers).await;
    let categories = state.read().await.categories.clone();
    Json(json!({ "categories": categories }))
}

async fn add_category(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record(&state, "POST", "/product/add-catogory".into(), &headers).await;
    let Some(name) = body["name"].as_str().filter(|n| !n.trim().is_empty()) else {
        return error(StatusCode::BAD_REQUEST, "Name is required");
    };
    let mut state = state.write().await;
    let id = format!("c-{}", state.categories.len() + 1);
    state
        .categories
        .push(json!({ "_id": id, "name": name, "subCategories": [] }));
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Category added" })),
    )
}

async fn add_subcategory(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record(&state, "POST", "/product/add-subcategory".into(), &headers).await;
    let (Some(category_id), Some(name)) = (body["categoryId"].as_str(), body["name"].as_str())
    else {
        return error(StatusCode::BAD_REQUEST, "categoryId and name are required");
    };
    let mut state = state.write().await;
    let Some(category) = state
        .categories
        .iter_mut()
        .find(|c| c["_id"] == category_id)
    else {
        return error(StatusCode::NOT_FOUND, "Category not found");
    };
    let sub_id = format!("{category_id}-{name}");
    if let Some(subs) = category["subCategories"].as_array_mut() {
        subs.push(json!({ "_id": sub_id, "name": name, "category": category_id }));
    }
    (StatusCode::CREATED, Json(json!({})))
}

async fn get_wishlist(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Json<Value> {
    record(&state, "GET", format!("/product/wishlist/{user_id}"), &headers).await;
    let state = state.read().await;
    let ids = state.wishlists.get(&user_id).cloned().unwrap_or_default();
    let wishlist: Vec<Value> = state
        .products
        .iter()
        .filter(|p| p["_id"].as_str().is_some_and(|id| ids.contains(id)))
        .cloned()
        .collect();
    Json(json!({ "wishlist": wishlist }))
}

async fn change_wishlist(
    state: Shared,
    method: &str,
    headers: &HeaderMap,
    user_id: String,
    body: Value,
    add: bool,
) -> (StatusCode, Json<Value>) {
    record(&state, method, format!("/product/wishlist/{user_id}"), headers).await;
    let mut state = state.write().await;
    if state.fail_wishlist_writes {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable");
    }
    let Some(product_id) = body["productId"].as_str() else {
        return error(StatusCode::BAD_REQUEST, "productId is required");
    };
    let entry = state.wishlists.entry(user_id).or_default();
    if add {
        entry.insert(product_id.to_string());
    } else {
        entry.remove(product_id);
    }
    (StatusCode::OK, Json(json!({ "message": "ok" })))
}

async fn add_wishlist(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    change_wishlist(state, "POST", &headers, user_id, body, true).await
}

async fn remove_wishlist(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    change_wishlist(state, "DELETE", &headers, user_id, body, false).await
}

async fn login(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record(&state, "POST", "/user/login".into(), &headers).await;
    if body["email"] == VALID_EMAIL && body["password"] == VALID_PASSWORD {
        (
            StatusCode::OK,
            Json(json!({ "token": TOKEN, "userId": USER_ID })),
        )
    } else {
        error(StatusCode::UNAUTHORIZED, "Invalid credentials")
    }
}

async fn signup(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record(&state, "POST", "/user/signup".into(), &headers).await;
    if body["email"] == VALID_EMAIL {
        return error(StatusCode::CONFLICT, "User already exists");
    }
    (
        StatusCode::CREATED,
        Json(json!({ "message": "User registered" })),
    )
}
