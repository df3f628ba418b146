//! Shared UI components for the storefront.

pub mod add_category_modal;
pub mod add_subcategory_modal;
pub mod error_alert;
pub mod header;
pub mod layout;
pub mod pagination;
pub mod product_card;
pub mod sidebar;
pub mod toast;
pub mod wishlist_dropdown;

pub use add_category_modal::AddCategoryModal;
pub use add_subcategory_modal::AddSubCategoryModal;
pub use error_alert::ErrorAlert;
pub use header::Header;
pub use layout::Layout;
pub use pagination::Pagination;
pub use product_card::{ProductCard, WishlistHeart};
pub use sidebar::Sidebar;
pub use toast::ToastHost;
pub use wishlist_dropdown::WishlistDropdown;
