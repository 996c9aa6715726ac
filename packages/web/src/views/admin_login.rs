use api::{ApiConfig, Credentials, PublicApi, Role};
use dioxus::prelude::*;
use ui::{push_toast, use_admin_auth, use_toasts, CredentialsForm, ToastLevel};

use crate::Route;

#[component]
pub fn AdminLogin() -> Element {
    let admin = use_admin_auth();
    let nav = use_navigator();
    let toasts = use_toasts();
    let mut error_message = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let handle_submit = move |(email, password): (String, String)| {
        spawn(async move {
            busy.set(true);
            let client = PublicApi::new(ApiConfig::default());
            let result = client
                .login(Role::Admin, &Credentials { email, password })
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
                    admin.login(&response.actor, &response.token);
                    nav.replace(Route::AdminDashboard {});
                }
                Err(err) => {
                    error_message.set(Some(err.message()));
                    push_toast(toasts, ToastLevel::Error, "Admin login failed!");
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
                    Link { class: "button button--outline", to: Route::AdminSignup {}, "Sign Up" }
                    Link { class: "button button--solid", to: Route::Home {}, "Home" }
                }
            }
            main {
                class: "auth-page__body",
                CredentialsForm {
                    heading: "Admin Login",
                    subtitle: "Manage your course listings",
                    submit_label: "Login",
                    error: error_message(),
                    busy: busy(),
                    on_submit: handle_submit,
                }
            }
        }
    }
}
