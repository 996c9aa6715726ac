//! # Hosted checkout widget — web platform
//!
//! [`RazorpayCheckout`] is the [`CheckoutGateway`] used in the browser. The
//! widget ships as a hosted script that installs a `Razorpay` constructor on
//! `window`; this module injects the script on first use and drives the
//! widget through its documented options object.
//!
//! Completion is callback-based on the JS side. Both callbacks (`handler`
//! for success, `modal.ondismiss` for the user closing the widget) resolve a
//! oneshot that [`RazorpayCheckout::open`] awaits, turning the hand-off into
//! an ordinary `Future`. The callbacks are leaked (`Closure::forget`) — the
//! widget keeps them for the lifetime of the page and there is no teardown
//! hook to reclaim them.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::checkout::{CheckoutError, CheckoutGateway, CheckoutOptions, CheckoutOutcome};

const GLOBAL_NAME: &str = "Razorpay";

/// Gateway backed by the hosted checkout script.
#[derive(Clone, Debug)]
pub struct RazorpayCheckout {
    script_url: String,
}

impl RazorpayCheckout {
    pub fn new(script_url: impl Into<String>) -> Self {
        Self {
            script_url: script_url.into(),
        }
    }

    fn global_constructor() -> Option<js_sys::Function> {
        let window = web_sys::window()?;
        let ctor = js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_NAME)).ok()?;
        ctor.dyn_into::<js_sys::Function>().ok()
    }

    fn inject_script(&self) -> Option<oneshot::Receiver<bool>> {
        let document = web_sys::window()?.document()?;
        let script: web_sys::HtmlScriptElement = document
            .create_element("script")
            .ok()?
            .dyn_into()
            .ok()?;
        script.set_src(&self.script_url);

        let (sender, receiver) = oneshot::channel::<bool>();
        let sender = Rc::new(RefCell::new(Some(sender)));

        let on_load = {
            let sender = Rc::clone(&sender);
            Closure::<dyn FnMut()>::new(move || {
                if let Some(sender) = sender.borrow_mut().take() {
                    let _ = sender.send(true);
                }
            })
        };
        let on_error = Closure::<dyn FnMut()>::new(move || {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(false);
            }
        });
        script.set_onload(Some(on_load.as_ref().unchecked_ref()));
        script.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_load.forget();
        on_error.forget();

        document.body()?.append_child(&script).ok()?;
        Some(receiver)
    }
}

impl CheckoutGateway for RazorpayCheckout {
    async fn ensure_loaded(&self) -> bool {
        if Self::global_constructor().is_some() {
            return true;
        }
        match self.inject_script() {
            Some(receiver) => receiver.await.unwrap_or(false),
            None => false,
        }
    }

    async fn open(&self, options: CheckoutOptions) -> Result<CheckoutOutcome, CheckoutError> {
        let constructor = Self::global_constructor()
            .ok_or_else(|| CheckoutError::Failed("widget script not loaded".to_string()))?;

        let js_options = serde_wasm_bindgen::to_value(&options)
            .map_err(|err| CheckoutError::Failed(err.to_string()))?;

        let (sender, receiver) = oneshot::channel::<CheckoutOutcome>();
        let sender = Rc::new(RefCell::new(Some(sender)));

        // Success callback: the widget delivers the three confirmation fields.
        let handler = {
            let sender = Rc::clone(&sender);
            Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
                let Some(sender) = sender.borrow_mut().take() else {
                    return;
                };
                match serde_wasm_bindgen::from_value(response) {
                    Ok(confirmation) => {
                        let _ = sender.send(CheckoutOutcome::Completed(confirmation));
                    }
                    Err(err) => {
                        tracing::error!("unreadable checkout confirmation: {err}");
                        let _ = sender.send(CheckoutOutcome::Dismissed);
                    }
                }
            })
        };
        js_sys::Reflect::set(&js_options, &JsValue::from_str("handler"), handler.as_ref())
            .map_err(|_| CheckoutError::Failed("could not attach handler".to_string()))?;
        handler.forget();

        // Dismissal callback, fired when the user closes the widget.
        let on_dismiss = Closure::<dyn FnMut()>::new(move || {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(CheckoutOutcome::Dismissed);
            }
        });
        let modal = js_sys::Object::new();
        js_sys::Reflect::set(&modal, &JsValue::from_str("ondismiss"), on_dismiss.as_ref())
            .map_err(|_| CheckoutError::Failed("could not attach dismiss hook".to_string()))?;
        js_sys::Reflect::set(&js_options, &JsValue::from_str("modal"), &modal)
            .map_err(|_| CheckoutError::Failed("could not attach dismiss hook".to_string()))?;
        on_dismiss.forget();

        let widget =
            js_sys::Reflect::construct(&constructor, &js_sys::Array::of1(&js_options))
                .map_err(|_| CheckoutError::Failed("widget construction failed".to_string()))?;
        let open = js_sys::Reflect::get(&widget, &JsValue::from_str("open"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or_else(|| CheckoutError::Failed("widget has no open()".to_string()))?;
        open.call0(&widget)
            .map_err(|_| CheckoutError::Failed("widget open() threw".to_string()))?;

        receiver
            .await
            .map_err(|_| CheckoutError::Failed("widget closed without a result".to_string()))
    }
}
