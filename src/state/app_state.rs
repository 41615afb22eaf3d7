// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::SessionState;

/// Estado de la aplicación: sesión + estado de UI
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,

    // UI State
    /// Mensaje fijo de la región #message (errores de login, "Sesión cerrada")
    pub message: Rc<RefCell<Option<String>>>,
    /// Mostrar la vista de registro en lugar del login
    pub show_register: Rc<RefCell<bool>>,
}

impl AppState {
    /// Crear el estado inicial restaurando la sesión desde storage
    pub fn new() -> Self {
        Self {
            session: SessionState::restore(),
            message: Rc::new(RefCell::new(None)),
            show_register: Rc::new(RefCell::new(false)),
        }
    }

    pub fn set_message(&self, message: Option<String>) {
        *self.message.borrow_mut() = message;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
