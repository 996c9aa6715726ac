//! # Wire models
//!
//! Everything the backend sends or receives, named after what it is rather
//! than which endpoint produced it.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Course`] | A purchasable listing; the client only ever holds read-only copies. |
//! | [`OrderIntent`] | One purchase attempt's server-created order, consumed by the checkout widget and never persisted. |
//! | [`PaymentReceipt`] | The three checkout confirmation fields plus the course id, sent for verification. |
//! | [`Purchase`] | Server-recorded proof that the caller paid for a course. |
//! | [`PurchaseRecord`] | A purchase joined client-side with its course (if it still exists). |
//!
//! Response envelopes ([`AuthResponse`], [`CoursesResponse`], ...) mirror the
//! backend's JSON field names, camelCase with Mongo-style `_id`.

use serde::{Deserialize, Serialize};
use store::Actor;

/// A purchasable course listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub image: Option<CourseImage>,
}

/// Hosted image attached to a course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseImage {
    pub url: String,
}

impl Course {
    /// Image URL, or a neutral placeholder when the course has none.
    pub fn image_url(&self) -> &str {
        self.image
            .as_ref()
            .map(|image| image.url.as_str())
            .unwrap_or("/placeholder.png")
    }
}

/// Server-created order for one purchase attempt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderIntent {
    /// Gateway API key the widget is opened with.
    pub key: String,
    /// Amount in the currency's minor unit.
    pub amount: i64,
    pub currency: String,
    pub order_id: String,
    /// Echo of the course being bought, used for the widget description.
    #[serde(default)]
    pub course: Option<Course>,
}

/// Payment-verification request body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    #[serde(rename = "courseId")]
    pub course_id: String,
}

/// A completed purchase as recorded by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "courseId")]
    pub course_id: String,
}

/// A purchase joined with its course data for display.
#[derive(Clone, Debug, PartialEq)]
pub struct PurchaseRecord {
    pub purchase: Purchase,
    /// `None` when the course was deleted server-side after purchase.
    pub course: Option<Course>,
}

/// Join purchases against the catalog snapshot by course id.
///
/// Linear search is fine at catalog scale; a purchase whose course is gone
/// keeps a `None` course so the view can render placeholder text.
pub fn merge_purchases(purchases: Vec<Purchase>, courses: &[Course]) -> Vec<PurchaseRecord> {
    purchases
        .into_iter()
        .map(|purchase| {
            let course = courses
                .iter()
                .find(|course| course.id == purchase.course_id)
                .cloned();
            PurchaseRecord { purchase, course }
        })
        .collect()
}

/// Plain acknowledgement from the backend.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Signup request body.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Login request body.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Login response: message plus the actor record and bearer token.
///
/// The backend names the actor field after the role (`user` or `admin`);
/// both aliases land in [`AuthResponse::actor`].
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: String,
    #[serde(alias = "user", alias = "admin")]
    pub actor: Actor,
    pub token: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CoursesResponse {
    pub courses: Vec<Course>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CourseResponse {
    pub course: Course,
}

/// `GET /user/purchases` payload: purchases plus the backend's current
/// course snapshot to join against.
#[derive(Clone, Debug, Deserialize)]
pub struct PurchasesResponse {
    pub purchases: Vec<Purchase>,
    #[serde(rename = "courseData")]
    pub course_data: Vec<Course>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_scenario() {
        let raw = r#"{
            "message": "Login successful",
            "user": {"_id":"u1","firstName":"A","lastName":"B","email":"a@b.com"},
            "token": "t1"
        }"#;
        let response: AuthResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.actor.first_name, "A");
        assert_eq!(response.token, "t1");
    }

    #[test]
    fn test_auth_response_admin_alias() {
        let raw = r#"{
            "admin": {"_id":"a1","firstName":"Root","lastName":"Admin","email":"r@a.com"},
            "token": "t2"
        }"#;
        let response: AuthResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.actor.id, "a1");
        assert_eq!(response.message, "");
    }

    #[test]
    fn test_empty_catalog_parses() {
        let response: CoursesResponse = serde_json::from_str(r#"{"courses":[]}"#).unwrap();
        assert!(response.courses.is_empty());
    }

    #[test]
    fn test_order_intent_scenario() {
        let raw = r#"{
            "key": "k",
            "amount": 500,
            "currency": "INR",
            "orderId": "o1",
            "course": {"_id":"c1","title":"X"}
        }"#;
        let order: OrderIntent = serde_json::from_str(raw).unwrap();
        assert_eq!(order.order_id, "o1");
        assert_eq!(order.amount, 500);
        assert_eq!(order.course.unwrap().title, "X");
    }

    #[test]
    fn test_payment_receipt_wire_names() {
        let receipt = PaymentReceipt {
            razorpay_order_id: "o1".to_string(),
            razorpay_payment_id: "p1".to_string(),
            razorpay_signature: "s1".to_string(),
            course_id: "c1".to_string(),
        };
        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["razorpay_order_id"], "o1");
        assert_eq!(value["razorpay_payment_id"], "p1");
        assert_eq!(value["razorpay_signature"], "s1");
        assert_eq!(value["courseId"], "c1");
    }

    #[test]
    fn test_merge_purchases_joins_by_course_id() {
        let courses = vec![
            Course {
                id: "c1".to_string(),
                title: "X".to_string(),
                description: "about X".to_string(),
                price: 500,
                image: None,
            },
            Course {
                id: "c2".to_string(),
                title: "Y".to_string(),
                description: String::new(),
                price: 700,
                image: None,
            },
        ];
        let purchases = vec![
            Purchase {
                id: "p1".to_string(),
                course_id: "c2".to_string(),
            },
            Purchase {
                id: "p2".to_string(),
                course_id: "gone".to_string(),
            },
        ];

        let records = merge_purchases(purchases, &courses);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].course.as_ref().unwrap().title, "Y");
        // deleted course: record survives with no course attached
        assert_eq!(records[1].course, None);
    }
}
