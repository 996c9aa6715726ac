//! Form components shared by the user and admin views.

use api::{ImageFile, SignupRequest};
use dioxus::prelude::*;

/// Email + password form used by both login views.
#[component]
pub fn CredentialsForm(
    heading: String,
    subtitle: String,
    submit_label: String,
    error: Option<String>,
    busy: bool,
    on_submit: EventHandler<(String, String)>,
) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx! {
        div {
            class: "auth-panel",
            h2 { class: "auth-panel__heading", "{heading}" }
            p { class: "auth-panel__subtitle", "{subtitle}" }
            div {
                class: "form-field",
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    placeholder: "name@email.com",
                    required: true,
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    placeholder: "********",
                    required: true,
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            if let Some(message) = error {
                div { class: "form-error", "{message}" }
            }
            button {
                class: "auth-panel__submit",
                disabled: busy,
                onclick: move |_| on_submit.call((email(), password())),
                "{submit_label}"
            }
        }
    }
}

/// Account-creation form; reports the full signup payload.
#[component]
pub fn SignupForm(
    heading: String,
    error: Option<String>,
    busy: bool,
    on_submit: EventHandler<SignupRequest>,
) -> Element {
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx! {
        div {
            class: "auth-panel",
            h2 { class: "auth-panel__heading", "{heading}" }
            div {
                class: "form-field",
                label { r#for: "firstname", "First name" }
                input {
                    id: "firstname",
                    r#type: "text",
                    placeholder: "Type your first name",
                    required: true,
                    value: first_name(),
                    oninput: move |evt| first_name.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { r#for: "lastname", "Last name" }
                input {
                    id: "lastname",
                    r#type: "text",
                    placeholder: "Type your last name",
                    required: true,
                    value: last_name(),
                    oninput: move |evt| last_name.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    placeholder: "name@email.com",
                    required: true,
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    placeholder: "********",
                    required: true,
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            if let Some(message) = error {
                div { class: "form-error", "{message}" }
            }
            button {
                class: "auth-panel__submit",
                disabled: busy,
                onclick: move |_| {
                    on_submit.call(SignupRequest {
                        first_name: first_name(),
                        last_name: last_name(),
                        email: email(),
                        password: password(),
                    })
                },
                "{heading}"
            }
        }
    }
}

/// What the course form hands back on submit.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseFormValue {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub image: Option<ImageFile>,
}

/// Create/update course form with a client-side image preview.
#[component]
pub fn CourseForm(
    heading: String,
    submit_label: String,
    #[props(default)] initial_title: String,
    #[props(default)] initial_description: String,
    #[props(default)] initial_price: Option<i64>,
    busy: bool,
    on_submit: EventHandler<CourseFormValue>,
) -> Element {
    let mut title = use_signal(move || initial_title.clone());
    let mut description = use_signal(move || initial_description.clone());
    let mut price = use_signal(move || {
        initial_price.map(|p| p.to_string()).unwrap_or_default()
    });
    let mut image = use_signal(|| Option::<ImageFile>::None);
    let mut preview_url = use_signal(|| Option::<String>::None);
    let mut form_error = use_signal(|| Option::<String>::None);

    let on_image = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        let Some(bytes) = engine.read_file(&name).await else {
            return;
        };
        let mime = mime_for(&name);
        preview_url.set(object_url(&bytes, &mime));
        image.set(Some(ImageFile {
            filename: name,
            mime,
            bytes,
        }));
    };

    let handle_submit = move |_| {
        let Ok(parsed_price) = price().trim().parse::<i64>() else {
            form_error.set(Some("Price must be a number".to_string()));
            return;
        };
        form_error.set(None);
        on_submit.call(CourseFormValue {
            title: title().trim().to_string(),
            description: description().trim().to_string(),
            price: parsed_price,
            image: image(),
        });
    };

    rsx! {
        div {
            class: "course-form",
            h3 { class: "course-form__heading", "{heading}" }
            div {
                class: "form-field",
                label { "Title" }
                input {
                    r#type: "text",
                    placeholder: "Enter your course title",
                    required: true,
                    value: title(),
                    oninput: move |evt| title.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Description" }
                input {
                    r#type: "text",
                    placeholder: "Enter your course description",
                    required: true,
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Price" }
                input {
                    r#type: "number",
                    placeholder: "Enter your course price",
                    required: true,
                    value: price(),
                    oninput: move |evt| price.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Course Image" }
                if let Some(url) = preview_url() {
                    img { class: "course-form__preview", src: "{url}" }
                }
                if let Some(file) = image() {
                    p { class: "course-form__filename", "Selected: {file.filename}" }
                }
                input {
                    r#type: "file",
                    accept: "image/*",
                    onchange: on_image,
                }
            }
            if let Some(message) = form_error() {
                div { class: "form-error", "{message}" }
            }
            button {
                class: "course-form__submit",
                disabled: busy,
                onclick: handle_submit,
                "{submit_label}"
            }
        }
    }
}

fn mime_for(filename: &str) -> String {
    let mime = match filename.rsplit('.').next().map(|ext| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "webp" => "image/webp",
        Some(ext) if ext == "gif" => "image/gif",
        _ => "application/octet-stream",
    };
    mime.to_string()
}

/// Object URL for an in-memory file, so the image can be previewed before
/// it is ever uploaded.
#[cfg(target_arch = "wasm32")]
fn object_url(bytes: &[u8], mime: &str) -> Option<String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let props = web_sys::BlobPropertyBag::new();
    props.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &props).ok()?;
    web_sys::Url::create_object_url_with_blob(&blob).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn object_url(_bytes: &[u8], _mime: &str) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_common_extensions() {
        assert_eq!(mime_for("cover.PNG"), "image/png");
        assert_eq!(mime_for("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for("noext"), "application/octet-stream");
    }
}
