//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{
    use_admin_auth, use_auth, AdminAuthProvider, AuthProvider, SessionHandle,
};

mod guard;
pub use guard::{AdminProtectedRoute, ProtectedRoute};

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, ToastProvider, Toasts};

mod course_card;
pub use course_card::{truncate_description, CourseCard};

mod forms;
pub use forms::{CourseForm, CourseFormValue, CredentialsForm, SignupForm};

mod sidebar;
pub use sidebar::{AdminDest, AdminSidebar, SidebarDest, StorefrontSidebar};
