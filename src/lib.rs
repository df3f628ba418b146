//! Storefront - Rust Implementation
//!
//! A storefront and catalog admin UI for a small e-commerce backend.
//!
//! This library provides:
//! - A REST client for the catalog backend (products, categories, wishlist, users)
//! - Session persistence (bearer token and user id)
//! - Framework-free view state for every page
//! - The Dioxus web UI (Home, Login, Signup, product page)

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod state;
