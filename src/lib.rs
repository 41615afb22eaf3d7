// ============================================================================
// CAFÉ DE ALTURA - FRONTEND WEB (RUST PURO + WASM)
// ============================================================================
// - Views: Funciones que renderizan DOM
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

// Instancia única de App, viva durante toda la página
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("☕ Café de Altura - Rust puro + WASM");

    let app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-renderizar la app (re-render completo). Las vistas lo invocan tras
/// una transición de sesión (login, logout, registro).
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ App no está inicializada");
        }
    });
}
