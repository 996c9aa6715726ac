use dioxus::prelude::*;
use ui::{push_toast, SessionHandle, ToastLevel, Toasts};

/// Server-side logout, then local session clear on success.
///
/// The backend call failing leaves the local session intact (matching the
/// backend's cookie-based session, which would still be live).
pub(crate) fn spawn_logout(auth: SessionHandle, nav: Navigator, toasts: Signal<Toasts>) {
    spawn(async move {
        match auth.api() {
            Some(client) => match client.logout().await {
                Ok(_) => {
                    push_toast(toasts, ToastLevel::Success, "Logged out");
                    auth.logout(nav);
                }
                Err(err) => {
                    tracing::error!("logout failed: {err}");
                    push_toast(toasts, ToastLevel::Error, &err.message());
                }
            },
            None => auth.logout(nav),
        }
    });
}

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod courses;
pub use courses::Courses;

mod buy;
pub use buy::Buy;

mod purchases;
pub use purchases::Purchases;

mod admin_login;
pub use admin_login::AdminLogin;

mod admin_signup;
pub use admin_signup::AdminSignup;

mod dashboard;
pub use dashboard::AdminDashboard;

mod course_create;
pub use course_create::CourseCreate;

mod course_update;
pub use course_update::CourseUpdate;

mod our_courses;
pub use our_courses::OurCourses;
