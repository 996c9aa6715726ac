use api::{ApiConfig, Credentials, PublicApi, Role};
use dioxus::prelude::*;
use ui::{push_toast, use_auth, use_toasts, CredentialsForm, ToastLevel};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let toasts = use_toasts();
    let mut error_message = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let handle_submit = move |(email, password): (String, String)| {
        spawn(async move {
            busy.set(true);
            let client = PublicApi::new(ApiConfig::default());
            let result = client
                .login(Role::User, &Credentials { email, password })
                .await;
            busy.set(false);
            match result {
                Ok((response, _)) => {
                    error_message.set(None);
                    let message = if response.message.is_empty() {
                        "Login successful".to_string()
                    } else {
                        response.message.clone()
                    };
                    push_toast(toasts, ToastLevel::Success, &message);
                    auth.login(&response.actor, &response.token);
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    error_message.set(Some(err.message()));
                    push_toast(toasts, ToastLevel::Error, "Login failed!");
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
                    Link { class: "button button--outline", to: Route::Signup {}, "Sign Up" }
                    Link { class: "button button--solid", to: Route::Home {}, "Join" }
                }
            }
            main {
                class: "auth-page__body",
                CredentialsForm {
                    heading: "Welcome back to CourseDeck",
                    subtitle: "Just login and start your journey!",
                    submit_label: "Login",
                    error: error_message(),
                    busy: busy(),
                    on_submit: handle_submit,
                }
            }
        }
    }
}
