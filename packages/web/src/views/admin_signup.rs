use api::{ApiConfig, PublicApi, Role, SignupRequest};
use dioxus::prelude::*;
use ui::{push_toast, use_toasts, SignupForm, ToastLevel};

use crate::Route;

#[component]
pub fn AdminSignup() -> Element {
    let nav = use_navigator();
    let toasts = use_toasts();
    let mut error_message = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let handle_submit = move |request: SignupRequest| {
        spawn(async move {
            busy.set(true);
            let client = PublicApi::new(ApiConfig::default());
            let result = client.signup(Role::Admin, &request).await;
            busy.set(false);
            match result {
                Ok(response) => {
                    error_message.set(None);
                    push_toast(toasts, ToastLevel::Success, &response.message);
                    nav.push(Route::AdminLogin {});
                }
                Err(err) => {
                    error_message.set(Some(err.message()));
                    push_toast(toasts, ToastLevel::Error, "Admin signup failed!");
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            header {
                class: "auth-page__header",
                h1 { class: "brand", "CourseDeck" }
                div {
                    class: "auth-page__actions",
                    Link { class: "button button--outline", to: Route::AdminLogin {}, "Login" }
                    Link { class: "button button--solid", to: Route::Home {}, "Home" }
                }
            }
            main {
                class: "auth-page__body",
                SignupForm {
                    heading: "Admin Sign Up",
                    error: error_message(),
                    busy: busy(),
                    on_submit: handle_submit,
                }
            }
        }
    }
}
