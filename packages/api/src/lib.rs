//! # API crate — backend access for the CourseDeck client
//!
//! Everything the views need to talk to the outside world: the REST client
//! for the external backend, the wire models, the checkout-widget gateway,
//! and the purchase flow that orchestrates the two.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`client`] | — | `PublicApi` / `AuthorizedApi` REST client over `reqwest` |
//! | [`models`] | — | Wire models and response envelopes |
//! | [`error`] | — | `ApiError` taxonomy and tolerant error-body decoding |
//! | [`checkout`] | — | `CheckoutGateway` capability trait + scripted stub |
//! | [`razorpay`] | `web` | Hosted-widget gateway (script injection, JS interop) |
//! | [`purchase`] | — | The create-order → widget → verify state machine |
//! | [`config`] | — | Backend base URL and checkout script URL |

pub mod checkout;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod purchase;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod razorpay;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use razorpay::RazorpayCheckout;

pub use checkout::{CheckoutGateway, CheckoutOutcome, StubCheckout};
pub use client::{AuthorizedApi, CourseDraft, ImageFile, PublicApi, Role};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    merge_purchases, Course, Credentials, OrderIntent, Purchase, PurchaseRecord, SignupRequest,
};
pub use purchase::{run_purchase, PurchaseOutcome};
pub use store::{Actor, Session};
