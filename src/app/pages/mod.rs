//! Routed pages.

mod home;
mod login;
mod product_view;
mod signup;

pub use home::Home;
pub use login::Login;
pub use product_view::ProductView;
pub use signup::Signup;
