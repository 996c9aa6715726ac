use api::{merge_purchases, PurchaseRecord};
use dioxus::prelude::*;
use ui::{push_toast, use_auth, use_toasts, SidebarDest, StorefrontSidebar, ToastLevel};

use crate::views::spawn_logout;
use crate::Route;

/// The caller's purchase history, joined against the catalog snapshot the
/// backend sends along.
#[component]
pub fn Purchases() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let toasts = use_toasts();
    let mut records = use_signal(Vec::<PurchaseRecord>::new);
    let mut error_message = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        let Some(client) = auth.api() else {
            return;
        };
        match client.purchases().await {
            Ok(response) => {
                records.set(merge_purchases(response.purchases, &response.course_data));
            }
            Err(err) => {
                tracing::error!("failed to fetch purchases: {err}");
                let message = err.message();
                error_message.set(Some(message.clone()));
                push_toast(toasts, ToastLevel::Error, &message);
            }
        }
    });

    let on_navigate = move |dest: SidebarDest| {
        match dest {
            SidebarDest::Home => nav.push(Route::Home {}),
            SidebarDest::Courses => nav.push(Route::Courses {}),
            SidebarDest::Purchases => nav.push(Route::Purchases {}),
            SidebarDest::Login => nav.push(Route::Login {}),
        };
    };

    // A purchase whose course was deleted server-side still renders, with
    // placeholder text.
    let cards: Vec<_> = records()
        .into_iter()
        .map(|record| {
            let title = record
                .course
                .as_ref()
                .map(|c| c.title.clone())
                .unwrap_or_else(|| "Unknown Course".to_string());
            let description = record
                .course
                .as_ref()
                .filter(|c| !c.description.is_empty())
                .map(|c| ui::truncate_description(&c.description, 100))
                .unwrap_or_else(|| "No description".to_string());
            let price = record
                .course
                .as_ref()
                .map(|c| c.price.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            let image = record
                .course
                .as_ref()
                .map(|c| c.image_url().to_string())
                .unwrap_or_else(|| "/placeholder.png".to_string());
            (record.purchase.id, title, description, price, image)
        })
        .collect();

    rsx! {
        div {
            class: "layout",
            StorefrontSidebar {
                active: SidebarDest::Purchases,
                logged_in: auth.is_authenticated(),
                on_navigate: on_navigate,
                on_logout: move |_| spawn_logout(auth, nav, toasts),
            }
            main {
                class: "layout__main",
                header {
                    class: "layout__header",
                    h2 { "My Purchases" }
                }
                if let Some(message) = error_message() {
                    div { class: "form-error", "{message}" }
                }
                if cards.is_empty() {
                    p { class: "empty-state", "You have no purchases yet." }
                } else {
                    div {
                        class: "course-grid",
                        for (id, title, description, price, image) in cards {
                            div {
                                key: "{id}",
                                class: "purchase-card",
                                img {
                                    class: "purchase-card__image",
                                    src: "{image}",
                                    alt: "{title}",
                                }
                                h3 { class: "purchase-card__title", "{title}" }
                                p { class: "purchase-card__description", "{description}" }
                                span { class: "purchase-card__price", "\u{20b9}{price} only" }
                            }
                        }
                    }
                }
            }
        }
    }
}
