// ============================================================================
// CAFE LIST VIEW - Listado de cafés autenticado
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, set_inner_html, ElementBuilder};
use crate::models::Cafe;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::constants::{MSG_CAFES_ERROR, MSG_LOADING, MSG_LOGOUT};

/// Renderizar vista de cafés y disparar la carga del listado
pub fn render_cafes(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [CAFES] render_cafes() llamado");

    let screen = ElementBuilder::new("div")?.id("cafes")?.class("cafes-screen").build();

    // Header con título y botón de logout
    let header = ElementBuilder::new("div")?.class("cafes-header").build();
    let title = ElementBuilder::new("h2")?.text("Cafés disponibles").build();
    let logout_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .id("logout-btn")?
        .class("btn-logout")
        .text("Cerrar sesión")
        .build();

    // Logout: sin llamada de red, solo limpiar token y volver al login
    {
        let state = state.clone();
        on_click(&logout_btn, move |_| {
            state.session.logout();
            state.set_message(Some(MSG_LOGOUT.to_string()));
            *state.show_register.borrow_mut() = false;
            crate::rerender_app();
        })?;
    }

    append_child(&header, &title)?;
    append_child(&header, &logout_btn)?;

    // Lista con placeholder de carga
    let list = ElementBuilder::new("ul")?.id("cafe-list")?.class("cafe-list").build();
    let placeholder = ElementBuilder::new("li")?.text(MSG_LOADING).build();
    append_child(&list, &placeholder)?;

    append_child(&screen, &header)?;
    append_child(&screen, &list)?;

    // Fetch del listado (un único fetch por montaje de la vista)
    if let Some(token) = state.session.token() {
        let list = list.clone();
        spawn_local(async move {
            let api = ApiClient::new();
            match api.get_cafes(&token).await {
                Ok(cafes) => {
                    if let Err(e) = render_cafe_items(&list, &cafes) {
                        log::error!("❌ [CAFES] Error renderizando lista: {:?}", e);
                    }
                }
                Err(e) => {
                    // La sesión se mantiene; el error se muestra en la lista
                    log::error!("❌ [CAFES] Error obteniendo cafés: {}", e);
                    set_inner_html(&list, "");
                    if let Ok(item) = ElementBuilder::new("li") {
                        let item = item.text(MSG_CAFES_ERROR).build();
                        let _ = append_child(&list, &item);
                    }
                }
            }
        });
    } else {
        // No debería ocurrir: la vista solo se monta con sesión activa
        log::warn!("⚠️ [CAFES] Vista montada sin token");
        set_inner_html(&list, "");
        let item = ElementBuilder::new("li")?.text(MSG_CAFES_ERROR).build();
        append_child(&list, &item)?;
    }

    Ok(screen)
}

/// Reemplazar el contenido de la lista con una entrada por café,
/// en el orden de la respuesta
fn render_cafe_items(list: &Element, cafes: &[Cafe]) -> Result<(), JsValue> {
    set_inner_html(list, "");
    for cafe in cafes {
        let item = ElementBuilder::new("li")?
            .class("cafe-item")
            .text(&cafe.display_line())
            .build();
        append_child(list, &item)?;
    }
    log::info!("✅ [CAFES] {} cafés renderizados", cafes.len());
    Ok(())
}
