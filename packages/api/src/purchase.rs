//! # Purchase flow
//!
//! The one piece of the client with real state-machine structure. A purchase
//! attempt walks, in order:
//!
//! 1. make sure the checkout script is usable (no backend call happens if it
//!    is not),
//! 2. create the order server-side,
//! 3. hand control to the checkout widget,
//! 4. verify the payment server-side with the widget's confirmation.
//!
//! [`run_purchase`] owns steps 1–4 and reports how the attempt ended as a
//! [`PurchaseOutcome`]; the Buy view maps each outcome to a notification and
//! (for the terminal-success and already-purchased cases) a navigation. The
//! backend side is abstracted as [`OrderBackend`] and the widget as
//! [`CheckoutGateway`], so the whole machine runs under test with scripted
//! substitutes.
//!
//! Nothing here guards against two concurrent attempts; the button driving
//! the flow is disabled while one is in flight, and the backend remains the
//! real enforcement point.

use store::Actor;

use crate::checkout::{
    CheckoutGateway, CheckoutOptions, CheckoutOutcome, CheckoutPrefill, CheckoutTheme,
};
use crate::client::AuthorizedApi;
use crate::error::ApiError;
use crate::models::{OrderIntent, PaymentReceipt};

/// Merchant name shown in the widget header.
const CHECKOUT_DISPLAY_NAME: &str = "CourseDeck";

/// The two backend calls a purchase attempt makes.
pub trait OrderBackend {
    fn create_order(
        &self,
        course_id: &str,
    ) -> impl std::future::Future<Output = Result<OrderIntent, ApiError>>;
    fn verify_payment(
        &self,
        receipt: &PaymentReceipt,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

impl OrderBackend for AuthorizedApi {
    async fn create_order(&self, course_id: &str) -> Result<OrderIntent, ApiError> {
        AuthorizedApi::create_order(self, course_id).await
    }

    async fn verify_payment(&self, receipt: &PaymentReceipt) -> Result<(), ApiError> {
        AuthorizedApi::verify_payment(self, receipt).await?;
        Ok(())
    }
}

/// How a purchase attempt ended.
#[derive(Debug)]
pub enum PurchaseOutcome {
    /// Payment captured and verified.
    Completed,
    /// The backend flagged the course as already owned.
    AlreadyPurchased,
    /// The widget script could not be loaded; no backend call was made.
    CheckoutUnavailable,
    /// Order creation failed for any other reason.
    OrderFailed(ApiError),
    /// The user closed the widget without paying.
    Dismissed,
    /// Payment went through the widget but the backend rejected the receipt.
    VerificationFailed(ApiError),
}

/// Drive one purchase attempt from script load to verification.
pub async fn run_purchase<B, C>(
    backend: &B,
    gateway: &C,
    course_id: &str,
    buyer: &Actor,
) -> PurchaseOutcome
where
    B: OrderBackend,
    C: CheckoutGateway,
{
    if !gateway.ensure_loaded().await {
        return PurchaseOutcome::CheckoutUnavailable;
    }

    let order = match backend.create_order(course_id).await {
        Ok(order) => order,
        Err(err) if err.already_purchased() => return PurchaseOutcome::AlreadyPurchased,
        Err(err) => {
            tracing::error!("order creation failed: {err}");
            return PurchaseOutcome::OrderFailed(err);
        }
    };

    let options = widget_options(&order, buyer);
    let confirmation = match gateway.open(options).await {
        Ok(CheckoutOutcome::Completed(confirmation)) => confirmation,
        Ok(CheckoutOutcome::Dismissed) => return PurchaseOutcome::Dismissed,
        Err(err) => {
            tracing::error!("checkout widget failed: {err}");
            return PurchaseOutcome::CheckoutUnavailable;
        }
    };

    let receipt = PaymentReceipt {
        razorpay_order_id: confirmation.order_id,
        razorpay_payment_id: confirmation.payment_id,
        razorpay_signature: confirmation.signature,
        course_id: course_id.to_string(),
    };
    match backend.verify_payment(&receipt).await {
        Ok(()) => PurchaseOutcome::Completed,
        Err(err) => {
            tracing::error!("payment verification failed: {err}");
            PurchaseOutcome::VerificationFailed(err)
        }
    }
}

fn widget_options(order: &OrderIntent, buyer: &Actor) -> CheckoutOptions {
    CheckoutOptions {
        key: order.key.clone(),
        amount: order.amount,
        currency: order.currency.clone(),
        name: CHECKOUT_DISPLAY_NAME.to_string(),
        description: order
            .course
            .as_ref()
            .map(|course| course.title.clone())
            .unwrap_or_default(),
        order_id: order.order_id.clone(),
        prefill: CheckoutPrefill {
            name: buyer.full_name(),
            email: buyer.email.clone(),
        },
        theme: CheckoutTheme::default(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::checkout::StubCheckout;
    use crate::error::{ApiError, ErrorBody};
    use crate::models::Course;

    /// Scripted backend recording every call it receives.
    #[derive(Clone, Default)]
    struct FakeBackend {
        already_purchased: bool,
        reject_receipts: bool,
        orders_created: Arc<Mutex<Vec<String>>>,
        receipts: Arc<Mutex<Vec<PaymentReceipt>>>,
    }

    impl OrderBackend for FakeBackend {
        async fn create_order(&self, course_id: &str) -> Result<OrderIntent, ApiError> {
            self.orders_created
                .lock()
                .unwrap()
                .push(course_id.to_string());
            if self.already_purchased {
                return Err(ApiError::Backend {
                    status: 400,
                    body: serde_json::from_str(r#"{"alreadyPurchased":true}"#).unwrap(),
                });
            }
            Ok(OrderIntent {
                key: "k".to_string(),
                amount: 500,
                currency: "INR".to_string(),
                order_id: "o1".to_string(),
                course: Some(Course {
                    id: course_id.to_string(),
                    title: "X".to_string(),
                    description: String::new(),
                    price: 500,
                    image: None,
                }),
            })
        }

        async fn verify_payment(&self, receipt: &PaymentReceipt) -> Result<(), ApiError> {
            self.receipts.lock().unwrap().push(receipt.clone());
            if self.reject_receipts {
                return Err(ApiError::Backend {
                    status: 400,
                    body: ErrorBody::from_text("signature mismatch".to_string()),
                });
            }
            Ok(())
        }
    }

    fn buyer() -> Actor {
        Actor {
            id: "u1".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_happy_path_verifies_exact_receipt() {
        let backend = FakeBackend::default();
        let gateway = StubCheckout::completing("p1", "s1");

        let outcome = run_purchase(&backend, &gateway, "c1", &buyer()).await;
        assert!(matches!(outcome, PurchaseOutcome::Completed));

        let receipts = backend.receipts.lock().unwrap();
        assert_eq!(
            *receipts,
            vec![PaymentReceipt {
                razorpay_order_id: "o1".to_string(),
                razorpay_payment_id: "p1".to_string(),
                razorpay_signature: "s1".to_string(),
                course_id: "c1".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_widget_options_built_from_order_and_buyer() {
        let backend = FakeBackend::default();
        let gateway = StubCheckout::completing("p1", "s1");

        run_purchase(&backend, &gateway, "c1", &buyer()).await;

        let opened = gateway.opened();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].key, "k");
        assert_eq!(opened[0].amount, 500);
        assert_eq!(opened[0].currency, "INR");
        assert_eq!(opened[0].order_id, "o1");
        assert_eq!(opened[0].description, "X");
        assert_eq!(opened[0].prefill.name, "A B");
        assert_eq!(opened[0].prefill.email, "a@b.com");
    }

    #[tokio::test]
    async fn test_already_purchased_is_stable_across_attempts() {
        let backend = FakeBackend {
            already_purchased: true,
            ..Default::default()
        };
        let gateway = StubCheckout::completing("p1", "s1");

        for _ in 0..2 {
            let outcome = run_purchase(&backend, &gateway, "c1", &buyer()).await;
            assert!(matches!(outcome, PurchaseOutcome::AlreadyPurchased));
        }
        // never reaches the widget or the verify call
        assert!(gateway.opened().is_empty());
        assert!(backend.receipts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unloadable_script_makes_no_backend_calls() {
        let backend = FakeBackend::default();
        let gateway = StubCheckout::unavailable();

        let outcome = run_purchase(&backend, &gateway, "c1", &buyer()).await;
        assert!(matches!(outcome, PurchaseOutcome::CheckoutUnavailable));
        assert!(backend.orders_created.lock().unwrap().is_empty());
        assert!(backend.receipts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dismissed_widget_skips_verification() {
        let backend = FakeBackend::default();
        let gateway = StubCheckout::dismissing();

        let outcome = run_purchase(&backend, &gateway, "c1", &buyer()).await;
        assert!(matches!(outcome, PurchaseOutcome::Dismissed));
        assert_eq!(backend.orders_created.lock().unwrap().len(), 1);
        assert!(backend.receipts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_receipt_is_verification_failure() {
        let backend = FakeBackend {
            reject_receipts: true,
            ..Default::default()
        };
        let gateway = StubCheckout::completing("p1", "s1");

        let outcome = run_purchase(&backend, &gateway, "c1", &buyer()).await;
        assert!(matches!(outcome, PurchaseOutcome::VerificationFailed(_)));
    }
}
