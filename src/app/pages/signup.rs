//! Signup page.

use dioxus::prelude::*;

use crate::app::api_context::use_api;
use crate::app::components::Layout;
use crate::app::toast_context::use_toasts;
use crate::app::Route;
use crate::state::auth::{SignupForm, SIGNUP_FAILED, SIGNUP_SUCCESS};

#[component]
pub fn Signup() -> Element {
    let api = use_api();
    let toasts = use_toasts();
    let nav = use_navigator();
    let mut form = use_signal(SignupForm::default);
    let mut submitting = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if submitting() {
            return;
        }
        let account = match form.read().validate() {
            Ok(account) => account,
            Err(e) => {
                toasts.error(e.user_message());
                return;
            }
        };
        let api = api.clone();
        submitting.set(true);
        spawn(async move {
            let result = api.signup(&account).await;
            submitting.set(false);
            match result {
                Ok(resp) => {
                    toasts.success(resp.message.unwrap_or_else(|| SIGNUP_SUCCESS.to_string()));
                    form.write().clear();
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!("Signup failed: {}", e);
                    toasts.error(e.user_message(SIGNUP_FAILED));
                }
            }
        });
    };

    let SignupForm {
        name,
        email,
        password,
    } = form.read().clone();

    rsx! {
        Layout { title: "Sign up",
            div { class: "auth card",
                h1 { "Create Account" }
                form { onsubmit: submit,
                    input {
                        class: "input",
                        placeholder: "Name",
                        required: true,
                        value: "{name}",
                        oninput: move |e| form.write().name = e.value(),
                    }
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
                        "SIGN UP"
                    }
                }
                p { class: "text-muted",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
