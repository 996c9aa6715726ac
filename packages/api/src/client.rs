//! # REST client
//!
//! Two-stage client over the external backend: [`PublicApi`] for the calls
//! that need no credential (signup, login, the public catalog) and
//! [`AuthorizedApi`] for everything behind a bearer token. A successful
//! login upgrades a `PublicApi` into an `AuthorizedApi` for the same role.
//!
//! Requests are plain `reqwest`, which compiles to `fetch` on wasm and to a
//! normal HTTP client natively. No timeout is configured and nothing is
//! retried; failures surface once at the call site.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{ApiError, ErrorBody};
use crate::models::{
    AuthResponse, Course, CourseResponse, CoursesResponse, Credentials, MessageResponse,
    OrderIntent, PaymentReceipt, PurchasesResponse, SignupRequest,
};

/// Which account namespace a session belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Path segment for the role's account endpoints.
    pub fn segment(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// Client for endpoints that need no credential.
#[derive(Clone, Debug)]
pub struct PublicApi {
    config: ApiConfig,
    http: reqwest::Client,
}

impl PublicApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Create an account. Returns the backend's acknowledgement message.
    pub async fn signup(
        &self,
        role: Role,
        request: &SignupRequest,
    ) -> Result<MessageResponse, ApiError> {
        let url = format!("{}/{}/signup", self.config.base_url, role.segment());
        let response = self.http.post(&url).json(request).send().await?;
        parse_response(response).await
    }

    /// Obtain a credential. On success the caller gets the actor record plus
    /// an [`AuthorizedApi`] carrying the fresh token.
    pub async fn login(
        &self,
        role: Role,
        credentials: &Credentials,
    ) -> Result<(AuthResponse, AuthorizedApi), ApiError> {
        let url = format!("{}/{}/login", self.config.base_url, role.segment());
        let response = self.http.post(&url).json(credentials).send().await?;
        let auth: AuthResponse = parse_response(response).await?;
        let authorized = AuthorizedApi::new(self.config.clone(), role, auth.token.clone());
        Ok((auth, authorized))
    }

    /// The public catalog.
    pub async fn courses(&self) -> Result<Vec<Course>, ApiError> {
        let url = format!("{}/course/courses", self.config.base_url);
        let response = self.http.get(&url).send().await?;
        let body: CoursesResponse = parse_response(response).await?;
        Ok(body.courses)
    }
}

/// New or edited course listing, submitted as a multipart form.
#[derive(Clone, Debug, Default)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub image: Option<ImageFile>,
}

/// An image file read client-side before submission.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageFile {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl CourseDraft {
    fn into_form(self) -> Result<reqwest::multipart::Form, ApiError> {
        let mut form = reqwest::multipart::Form::new()
            .text("title", self.title)
            .text("description", self.description)
            .text("price", self.price.to_string());
        if let Some(image) = self.image {
            let part = reqwest::multipart::Part::bytes(image.bytes)
                .file_name(image.filename)
                .mime_str(&image.mime)?;
            form = form.part("image", part);
        }
        Ok(form)
    }
}

/// Client for endpoints behind a bearer credential.
#[derive(Clone, Debug)]
pub struct AuthorizedApi {
    config: ApiConfig,
    http: reqwest::Client,
    role: Role,
    token: String,
}

impl AuthorizedApi {
    pub fn new(config: ApiConfig, role: Role, token: String) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            role,
            token,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    fn bearer(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.header("Authorization", format!("Bearer {}", self.token))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self.bearer(self.http.get(&url)).send().await?;
        parse_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self.bearer(self.http.post(&url)).json(body).send().await?;
        parse_response(response).await
    }

    /// Single course detail.
    pub async fn course(&self, course_id: &str) -> Result<Course, ApiError> {
        let body: CourseResponse = self.get(&format!("/course/{course_id}")).await?;
        Ok(body.course)
    }

    /// Start a purchase attempt for a course.
    pub async fn create_order(&self, course_id: &str) -> Result<OrderIntent, ApiError> {
        self.post(&format!("/course/buy/{course_id}"), &serde_json::json!({}))
            .await
    }

    /// Confirm a completed checkout with the backend.
    pub async fn verify_payment(
        &self,
        receipt: &PaymentReceipt,
    ) -> Result<MessageResponse, ApiError> {
        self.post("/course/payment/verify", receipt).await
    }

    /// The caller's purchases plus the course snapshot to join against.
    pub async fn purchases(&self) -> Result<PurchasesResponse, ApiError> {
        self.get("/user/purchases").await
    }

    /// Server-side session clear for this role.
    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        self.get(&format!("/{}/logout", self.role.segment())).await
    }

    /// Admin: listings owned by the caller.
    pub async fn admin_courses(&self) -> Result<Vec<Course>, ApiError> {
        let body: CoursesResponse = self.get("/course/admin/courses").await?;
        Ok(body.courses)
    }

    /// Admin: publish a new listing.
    pub async fn create_course(&self, draft: CourseDraft) -> Result<MessageResponse, ApiError> {
        let url = format!("{}/course/create", self.config.base_url);
        let response = self
            .bearer(self.http.post(&url))
            .multipart(draft.into_form()?)
            .send()
            .await?;
        parse_response(response).await
    }

    /// Admin: update an existing listing.
    pub async fn update_course(
        &self,
        course_id: &str,
        draft: CourseDraft,
    ) -> Result<MessageResponse, ApiError> {
        let url = format!("{}/course/update/{course_id}", self.config.base_url);
        let response = self
            .bearer(self.http.put(&url))
            .multipart(draft.into_form()?)
            .send()
            .await?;
        parse_response(response).await
    }

    /// Admin: remove a listing.
    pub async fn delete_course(&self, course_id: &str) -> Result<MessageResponse, ApiError> {
        let url = format!("{}/course/delete/{course_id}", self.config.base_url);
        let response = self.bearer(self.http.delete(&url)).send().await?;
        parse_response(response).await
    }
}

async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let text = response.text().await.unwrap_or_default();
        let body =
            serde_json::from_str::<ErrorBody>(&text).unwrap_or_else(|_| ErrorBody::from_text(text));
        tracing::debug!(status = status.as_u16(), "backend reported failure");
        Err(ApiError::Backend {
            status: status.as_u16(),
            body,
        })
    }
}
