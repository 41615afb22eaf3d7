// ============================================================================
// SESSION STATE - Sesión compartida + persistencia en localStorage
// ============================================================================
// Envuelve la máquina de estados pura (models::Session) y aplica los efectos
// de storage en cada transición. Se construye una vez en App::new() y se pasa
// a las vistas; no hay estado global accesible desde fuera.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Session;
use crate::utils::storage;

#[derive(Clone)]
pub struct SessionState {
    session: Rc<RefCell<Session>>,
}

impl SessionState {
    /// Restaurar la sesión desde localStorage al arrancar
    pub fn restore() -> Self {
        let token = storage::load_token();
        if token.is_some() {
            log::info!("💾 Token encontrado en storage, restaurando sesión");
        }
        Self {
            session: Rc::new(RefCell::new(Session::from_token(token))),
        }
    }

    /// Transición a LoggedIn: persiste el token y actualiza el estado
    pub fn login(&self, token: String) {
        if let Err(e) = storage::save_token(&token) {
            log::error!("❌ Error guardando token: {}", e);
        }
        self.session.borrow_mut().login(token);
    }

    /// Transición a LoggedOut: elimina el token persistido
    pub fn logout(&self) {
        if let Err(e) = storage::clear_token() {
            log::error!("❌ Error eliminando token: {}", e);
        }
        self.session.borrow_mut().logout();
        log::info!("👋 Sesión cerrada");
    }

    pub fn token(&self) -> Option<String> {
        self.session.borrow().token().map(String::from)
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.borrow().is_logged_in()
    }
}
