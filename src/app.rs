// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::AppState;
use crate::views::render_app;

/// Aplicación principal: estado + elemento raíz
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación restaurando la sesión desde storage
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        Ok(Self {
            state: AppState::new(),
            root,
        })
    }

    /// Renderizar la pantalla activa (re-render completo)
    pub fn render(&self) -> Result<(), JsValue> {
        // Limpiar contenido anterior
        set_inner_html(&self.root, "");

        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;

        Ok(())
    }
}
