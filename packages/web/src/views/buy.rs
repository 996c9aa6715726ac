use api::{run_purchase, ApiConfig, CheckoutGateway, Course, PurchaseOutcome};
use dioxus::prelude::*;
use ui::{push_toast, use_auth, use_toasts, ToastLevel};

use crate::Route;

/// The gateway driving the real hosted widget on the web.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn platform_gateway() -> impl CheckoutGateway {
    api::RazorpayCheckout::new(ApiConfig::default().checkout_script_url)
}

/// Off the web platform there is no widget to open; the scripted gateway
/// completes immediately so the flow stays exercisable.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn platform_gateway() -> impl CheckoutGateway {
    api::StubCheckout::completing("offline-payment", "offline-signature")
}

/// One purchase attempt for one course.
#[component]
pub fn Buy(course_id: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let toasts = use_toasts();
    let mut course = use_signal(|| Option::<Course>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut processing = use_signal(|| false);

    let detail_id = course_id.clone();
    let _loader = use_resource(move || {
        let course_id = detail_id.clone();
        async move {
            let Some(client) = auth.api() else {
                return;
            };
            match client.course(&course_id).await {
                Ok(detail) => course.set(Some(detail)),
                Err(err) => {
                    tracing::error!("failed to load course {course_id}: {err}");
                    load_error.set(Some("Failed to load course details".to_string()));
                }
            }
        }
    });

    let purchase_id = course_id.clone();
    let handle_purchase = move |_| {
        let course_id = purchase_id.clone();
        spawn(async move {
            let (Some(client), Some(buyer)) = (auth.api(), auth.actor()) else {
                nav.push(Route::Login {});
                return;
            };
            processing.set(true);
            let gateway = platform_gateway();
            let outcome = run_purchase(&client, &gateway, &course_id, &buyer).await;
            processing.set(false);
            match outcome {
                PurchaseOutcome::Completed => {
                    push_toast(toasts, ToastLevel::Success, "Payment successful!");
                    nav.push(Route::Purchases {});
                }
                PurchaseOutcome::AlreadyPurchased => {
                    push_toast(toasts, ToastLevel::Info, "You already purchased this course");
                    nav.push(Route::Purchases {});
                }
                PurchaseOutcome::CheckoutUnavailable => {
                    push_toast(
                        toasts,
                        ToastLevel::Error,
                        "Checkout failed to load. Please check your connection.",
                    );
                }
                PurchaseOutcome::OrderFailed(err) => {
                    push_toast(toasts, ToastLevel::Error, &err.message());
                }
                PurchaseOutcome::Dismissed => {}
                PurchaseOutcome::VerificationFailed(_) => {
                    push_toast(toasts, ToastLevel::Error, "Payment verification failed");
                }
            }
        });
    };

    rsx! {
        if let Some(message) = load_error() {
            div {
                class: "buy buy--error",
                div {
                    class: "buy__error-panel",
                    p { "{message}" }
                    Link { class: "button button--solid", to: Route::Purchases {}, "Purchases" }
                }
            }
        } else {
            div {
                class: "buy",
                h1 { class: "buy__heading", "Buy Course" }
                div {
                    class: "buy__panel",
                    div {
                        class: "buy__details",
                        h2 { "Order Details" }
                        div {
                            class: "buy__line",
                            span { "Total Price: " }
                            strong {
                                {course().map(|c| format!("\u{20b9}{}", c.price)).unwrap_or_default()}
                            }
                        }
                        div {
                            class: "buy__line",
                            span { "Course Name: " }
                            strong {
                                {course().map(|c| c.title).unwrap_or_default()}
                            }
                        }
                    }
                    div {
                        class: "buy__payment",
                        button {
                            class: "buy__pay",
                            disabled: processing() || course().is_none(),
                            onclick: handle_purchase,
                            if processing() {
                                "Processing..."
                            } else {
                                "Pay with Razorpay"
                            }
                        }
                    }
                }
            }
        }
    }
}
