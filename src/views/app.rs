// ============================================================================
// APP VIEW - Selección de pantalla según el estado de la sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::state::AppState;
use crate::views::{render_cafes, render_login, render_register};

/// Renderizar la pantalla activa: lista de cafés si hay sesión, si no el
/// formulario de login (o el de registro si está activo)
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    if state.session.is_logged_in() {
        render_cafes(state)
    } else if *state.show_register.borrow() {
        render_register(state)
    } else {
        render_login(state)
    }
}
