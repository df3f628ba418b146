//! Reactive view of the persisted session.
//!
//! The session itself lives in storage behind [`crate::session::Session`];
//! this context mirrors it into a signal so the header and wishlist re-render
//! on login and logout. Every sign-in/sign-out goes through here.

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::app::api_context::use_api;
use crate::error::ApiError;
use crate::models::Credentials;
use crate::session::{Session, SessionInfo};

/// Global session state shared via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    info: Signal<SessionInfo>,
}

impl SessionContext {
    pub fn info(&self) -> SessionInfo {
        self.info.read().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.info.read().is_logged_in()
    }

    pub fn user_id(&self) -> Option<String> {
        self.info.read().user_id.clone()
    }

    /// Re-read the persisted session.
    pub fn sync(&self, session: &Session) {
        let mut info = self.info;
        info.set(session.snapshot());
    }

    pub async fn login(
        &self,
        api: &ApiClient,
        credentials: &Credentials,
    ) -> Result<(), ApiError> {
        let result = api.login(credentials).await;
        self.sync(api.session());
        result.map(|_| ())
    }

    pub fn logout(&self, session: &Session) {
        session.sign_out();
        self.sync(session);
    }
}

/// Initialize session context provider - call once at app root
pub fn use_session_provider() {
    let api = use_api();
    let info = use_signal(SessionInfo::default);
    let ctx = SessionContext { info };

    use_context_provider(|| ctx);

    // Storage is only readable in the browser; effects never run during SSR
    use_effect(move || {
        ctx.sync(api.session());
    });
}

/// Get session context - use in any component
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
