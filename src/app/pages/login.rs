//! Login page.

use dioxus::prelude::*;

use crate::app::api_context::use_api;
use crate::app::components::Layout;
use crate::app::session_context::use_session;
use crate::app::toast_context::use_toasts;
use crate::app::Route;
use crate::state::auth::{LoginForm, LOGIN_FAILED, LOGIN_SUCCESS};

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let session = use_session();
    let toasts = use_toasts();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::default);
    let mut submitting = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if submitting() {
            return;
        }
        let credentials = match form.read().validate() {
            Ok(credentials) => credentials,
            Err(e) => {
                toasts.error(e.user_message());
                return;
            }
        };
        let api = api.clone();
        submitting.set(true);
        spawn(async move {
            let result = session.login(&api, &credentials).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    tracing::info!("Signed in as {}", credentials.email);
                    toasts.success(LOGIN_SUCCESS);
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    toasts.error(e.user_message(LOGIN_FAILED));
                }
            }
        });
    };

    let LoginForm { email, password } = form.read().clone();

    rsx! {
        Layout { title: "Login",
            div { class: "auth card",
                h1 { "Sign In to your Account" }
                form { onsubmit: submit,
                    input {
                        class: "input",
                        r#type: "email",
                        placeholder: "Email",
                        required: true,
                        value: "{email}",
                        oninput: move |e| form.write().email = e.value(),
                    }
                    input {
                        class: "input",
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: "{password}",
                        oninput: move |e| form.write().password = e.value(),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        "SIGN IN"
                    }
                }
                p { class: "text-muted",
                    "Don't have an account? "
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }
        }
    }
}
