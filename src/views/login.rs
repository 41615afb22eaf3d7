// ============================================================================
// LOGIN VIEW - Formulario de acceso
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, create_element, on_click, on_input, on_submit, remove_attribute, set_attribute,
    set_class_name, set_text_content, ElementBuilder,
};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::constants::MSG_LOGIN_ERROR;

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login() llamado");

    // Estado local del formulario (en closures)
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));
    let loading = Rc::new(RefCell::new(false));

    let login_screen = ElementBuilder::new("div")?.class("login-screen").build();
    let login_container = ElementBuilder::new("div")?.class("login-container").build();

    // Header
    let login_header = ElementBuilder::new("div")?
        .class("login-header")
        .child(
            &ElementBuilder::new("div")?
                .class("login-logo")
                .text("☕")
                .build(),
        )?
        .child(&ElementBuilder::new("h1")?.text("Café de Altura").build())?
        .child(
            &ElementBuilder::new("p")?
                .text("Cafés de especialidad de origen")
                .build(),
        )?
        .build();

    // Región de mensajes (errores de login, confirmación de logout)
    let message = ElementBuilder::new("div")?.id("message")?.class("message").build();
    if let Some(text) = state.message.borrow().as_ref() {
        set_text_content(&message, text);
    }

    // Formulario
    let form = create_element("form")?;
    set_class_name(&form, "login-form");
    set_attribute(&form, "id", "login-form")?;

    let email_group = create_input_group("email", "Email", "email", "Ingresa tu email", email.clone())?;
    let password_group = create_input_group(
        "password",
        "Contraseña",
        "password",
        "Ingresa tu contraseña",
        password.clone(),
    )?;

    // Submit button
    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .text("Iniciar Sesión")
        .build();

    // Event listener para submit
    {
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let state = state.clone();
        let message = message.clone();
        let submit_btn = submit_btn.clone();

        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();

            // Petición pendiente: ignorar el submit hasta que resuelva
            if *loading.borrow() {
                return;
            }
            *loading.borrow_mut() = true;
            let _ = set_attribute(&submit_btn, "disabled", "true");

            // Limpiar mensaje previo
            state.set_message(None);
            set_text_content(&message, "");

            let email_val = email.borrow().clone();
            let password_val = password.borrow().clone();

            let state = state.clone();
            let loading = loading.clone();
            let message = message.clone();
            let submit_btn = submit_btn.clone();

            spawn_local(async move {
                let api = ApiClient::new();
                match api.login(&email_val, &password_val).await {
                    Ok(response) => {
                        log::info!("✅ [LOGIN] Login exitoso");
                        state.session.login(response.token);
                        state.set_message(None);
                        *loading.borrow_mut() = false;
                        crate::rerender_app();
                    }
                    Err(e) => {
                        log::error!("❌ [LOGIN] Error en login: {}", e);
                        state.set_message(Some(MSG_LOGIN_ERROR.to_string()));
                        set_text_content(&message, MSG_LOGIN_ERROR);
                        *loading.borrow_mut() = false;
                        let _ = remove_attribute(&submit_btn, "disabled");
                    }
                }
            });
        })?;
    }

    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &submit_btn)?;

    // Footer con enlace al registro
    let footer = ElementBuilder::new("div")?.class("login-footer").build();
    let register_link = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-register-link")
        .text("¿No tienes cuenta? Regístrate")
        .build();
    {
        let state = state.clone();
        on_click(&register_link, move |_| {
            *state.show_register.borrow_mut() = true;
            state.set_message(None);
            crate::rerender_app();
        })?;
    }
    append_child(&footer, &register_link)?;

    // Ensamblar pantalla
    append_child(&login_container, &login_header)?;
    append_child(&login_container, &message)?;
    append_child(&login_container, &form)?;
    append_child(&login_container, &footer)?;
    append_child(&login_screen, &login_container)?;

    Ok(login_screen)
}

/// Helper para crear un form group (label + input)
pub(crate) fn create_input_group(
    id: &str,
    label_text: &str,
    input_type: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", input_type)?;
    set_attribute(&input, "id", id)?;
    set_attribute(&input, "name", id)?;
    set_attribute(&input, "placeholder", placeholder)?;
    set_class_name(&input, "form-input");

    // Event listener para input
    on_input(&input, move |e: web_sys::InputEvent| {
        if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            *value.borrow_mut() = target.value();
        }
    })?;

    append_child(&group, &label)?;
    append_child(&group, &input)?;

    Ok(group)
}
