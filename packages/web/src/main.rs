use dioxus::prelude::*;

use ui::{AdminAuthProvider, AdminProtectedRoute, AuthProvider, ProtectedRoute, ToastProvider};
use views::{
    AdminDashboard, AdminLogin, AdminSignup, Buy, CourseCreate, CourseUpdate, Courses, Home,
    Login, OurCourses, Purchases, Signup,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/courses")]
    Courses {},
    #[route("/admin/login")]
    AdminLogin {},
    #[route("/admin/signup")]
    AdminSignup {},

    #[layout(UserGuard)]
        #[route("/buy/:course_id")]
        Buy { course_id: String },
        #[route("/purchases")]
        Purchases {},
    #[end_layout]

    #[layout(AdminGuard)]
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/admin/create-course")]
        CourseCreate {},
        #[route("/admin/update-course/:course_id")]
        CourseUpdate { course_id: String },
        #[route("/admin/our-courses")]
        OurCourses {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            AdminAuthProvider {
                ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Everything under this layout needs an end-user session.
#[component]
fn UserGuard() -> Element {
    rsx! {
        ProtectedRoute {
            Outlet::<Route> {}
        }
    }
}

/// Everything under this layout needs an admin session.
#[component]
fn AdminGuard() -> Element {
    rsx! {
        AdminProtectedRoute {
            Outlet::<Route> {}
        }
    }
}

/// Unmatched paths land back on the home view.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("unmatched route: /{}", segments.join("/"));
    nav.replace(Route::Home {});
    rsx! {}
}
