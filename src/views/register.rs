// ============================================================================
// REGISTER VIEW - Formulario de registro de usuarios
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, create_element, on_click, on_submit, remove_attribute, set_attribute,
    set_class_name, set_text_content, ElementBuilder,
};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::constants::MSG_REGISTER_ERROR;
use crate::views::login::create_input_group;

/// Renderizar vista de registro
pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [REGISTER] render_register() llamado");

    let name = Rc::new(RefCell::new(String::new()));
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));
    let loading = Rc::new(RefCell::new(false));

    let register_screen = ElementBuilder::new("div")?.class("login-screen").build();
    let register_container = ElementBuilder::new("div")?.class("login-container").build();

    let register_header = ElementBuilder::new("div")?
        .class("login-header")
        .child(&ElementBuilder::new("h1")?.text("Crear cuenta").build())?
        .child(
            &ElementBuilder::new("p")?
                .text("Regístrate para ver nuestros cafés")
                .build(),
        )?
        .build();

    let message = ElementBuilder::new("div")?
        .id("register-message")?
        .class("message")
        .build();

    let form = create_element("form")?;
    set_class_name(&form, "login-form");
    set_attribute(&form, "id", "register-form")?;

    let name_group = create_input_group("name", "Nombre", "text", "Ingresa tu nombre", name.clone())?;
    let email_group = create_input_group("email", "Email", "email", "Ingresa tu email", email.clone())?;
    let password_group = create_input_group(
        "password",
        "Contraseña",
        "password",
        "Ingresa tu contraseña",
        password.clone(),
    )?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .text("Registrarse")
        .build();

    // Event listener para submit
    {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let state = state.clone();
        let message = message.clone();
        let submit_btn = submit_btn.clone();

        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();

            if *loading.borrow() {
                return;
            }
            *loading.borrow_mut() = true;
            let _ = set_attribute(&submit_btn, "disabled", "true");
            set_text_content(&message, "");

            let name_val = name.borrow().clone();
            let email_val = email.borrow().clone();
            let password_val = password.borrow().clone();

            let state = state.clone();
            let loading = loading.clone();
            let message = message.clone();
            let submit_btn = submit_btn.clone();

            spawn_local(async move {
                let api = ApiClient::new();
                match api.register(&name_val, &email_val, &password_val).await {
                    Ok(response) => {
                        log::info!("✅ [REGISTER] Usuario registrado");
                        state.session.login(response.token);
                        state.set_message(None);
                        *state.show_register.borrow_mut() = false;
                        *loading.borrow_mut() = false;
                        crate::rerender_app();
                    }
                    Err(e) => {
                        log::error!("❌ [REGISTER] Error en registro: {}", e);
                        set_text_content(&message, MSG_REGISTER_ERROR);
                        *loading.borrow_mut() = false;
                        let _ = remove_attribute(&submit_btn, "disabled");
                    }
                }
            });
        })?;
    }

    append_child(&form, &name_group)?;
    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &submit_btn)?;

    // Footer con enlace de vuelta al login
    let footer = ElementBuilder::new("div")?.class("login-footer").build();
    let login_link = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-register-link")
        .text("¿Ya tienes cuenta? Inicia sesión")
        .build();
    {
        let state = state.clone();
        on_click(&login_link, move |_| {
            *state.show_register.borrow_mut() = false;
            state.set_message(None);
            crate::rerender_app();
        })?;
    }
    append_child(&footer, &login_link)?;

    append_child(&register_container, &register_header)?;
    append_child(&register_container, &message)?;
    append_child(&register_container, &form)?;
    append_child(&register_container, &footer)?;
    append_child(&register_screen, &register_container)?;

    Ok(register_screen)
}
