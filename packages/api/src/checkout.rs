//! # Checkout gateway
//!
//! The third-party payment widget is opaque UI the client hands control to
//! mid-purchase. [`CheckoutGateway`] is the capability interface in front of
//! it, so the purchase flow can be driven by a scripted substitute in tests
//! and by the real hosted widget on the web:
//!
//! | Impl | Platform |
//! |------|----------|
//! | [`StubCheckout`] | tests, native fallback |
//! | `RazorpayCheckout` | web (wasm + `web` feature), see `crate::razorpay` |
//!
//! `ensure_loaded` is idempotent: once the widget script is present it
//! resolves immediately. `open` resolves only when the widget finishes —
//! either with the payment confirmation or with a dismissal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration handed to the checkout widget.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckoutOptions {
    pub key: String,
    /// Amount in the currency's minor unit, as created server-side.
    pub amount: i64,
    pub currency: String,
    /// Merchant display name.
    pub name: String,
    pub description: String,
    pub order_id: String,
    pub prefill: CheckoutPrefill,
    pub theme: CheckoutTheme,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckoutPrefill {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckoutTheme {
    pub color: String,
}

impl Default for CheckoutTheme {
    fn default() -> Self {
        Self {
            color: "#3399cc".to_string(),
        }
    }
}

/// What the widget's completion callback delivers.
///
/// Field renames match the widget's response object, so the wasm gateway can
/// deserialize the callback payload directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    #[serde(rename = "razorpay_order_id")]
    pub order_id: String,
    #[serde(rename = "razorpay_payment_id")]
    pub payment_id: String,
    #[serde(rename = "razorpay_signature")]
    pub signature: String,
}

/// How a checkout session ended.
#[derive(Clone, Debug, PartialEq)]
pub enum CheckoutOutcome {
    Completed(PaymentConfirmation),
    /// The user closed the widget without paying.
    Dismissed,
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("checkout widget failed: {0}")]
    Failed(String),
}

/// Capability interface over the payment widget.
pub trait CheckoutGateway {
    /// Make sure the widget is usable. `false` means the script could not be
    /// loaded and no checkout can happen in this session.
    fn ensure_loaded(&self) -> impl std::future::Future<Output = bool>;

    /// Open the widget and wait for it to finish.
    fn open(
        &self,
        options: CheckoutOptions,
    ) -> impl std::future::Future<Output = Result<CheckoutOutcome, CheckoutError>>;
}

/// Scripted gateway for tests and the native fallback.
#[derive(Clone, Debug)]
pub struct StubCheckout {
    script_available: bool,
    behavior: StubBehavior,
    opened: std::sync::Arc<std::sync::Mutex<Vec<CheckoutOptions>>>,
}

#[derive(Clone, Debug)]
enum StubBehavior {
    Complete { payment_id: String, signature: String },
    Dismiss,
}

impl StubCheckout {
    /// Gateway whose widget completes with the given payment fields, echoing
    /// back the order id it was opened with.
    pub fn completing(payment_id: &str, signature: &str) -> Self {
        Self {
            script_available: true,
            behavior: StubBehavior::Complete {
                payment_id: payment_id.to_string(),
                signature: signature.to_string(),
            },
            opened: Default::default(),
        }
    }

    /// Gateway whose widget is closed without paying.
    pub fn dismissing() -> Self {
        Self {
            script_available: true,
            behavior: StubBehavior::Dismiss,
            opened: Default::default(),
        }
    }

    /// Gateway whose script never loads.
    pub fn unavailable() -> Self {
        Self {
            script_available: false,
            behavior: StubBehavior::Dismiss,
            opened: Default::default(),
        }
    }

    /// Every options value the widget was opened with, in order.
    pub fn opened(&self) -> Vec<CheckoutOptions> {
        self.opened.lock().unwrap().clone()
    }
}

impl CheckoutGateway for StubCheckout {
    async fn ensure_loaded(&self) -> bool {
        self.script_available
    }

    async fn open(&self, options: CheckoutOptions) -> Result<CheckoutOutcome, CheckoutError> {
        self.opened.lock().unwrap().push(options.clone());
        match &self.behavior {
            StubBehavior::Complete {
                payment_id,
                signature,
            } => Ok(CheckoutOutcome::Completed(PaymentConfirmation {
                order_id: options.order_id,
                payment_id: payment_id.clone(),
                signature: signature.clone(),
            })),
            StubBehavior::Dismiss => Ok(CheckoutOutcome::Dismissed),
        }
    }
}
