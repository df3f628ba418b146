//! Framework-free view-state.
//!
//! Each page keeps one of these structs in a signal; the Dioxus layer only
//! wires events to methods and renders the result.

pub mod auth;
pub mod categories;
pub mod notify;
pub mod product_detail;
pub mod products;
pub mod wishlist;
