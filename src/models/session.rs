// ============================================================================
// SESSION - Máquina de estados de la sesión (puro, sin efectos)
// ============================================================================
// La presencia del token es la única señal de "logged in". El token nunca
// se valida en el cliente.
// ============================================================================

/// Estado lógico de la sesión
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    LoggedOut,
    LoggedIn { token: String },
}

impl Session {
    /// Estado inicial a partir del token persistido (si existe)
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) => Session::LoggedIn { token },
            None => Session::LoggedOut,
        }
    }

    /// Transición LoggedOut → LoggedIn (también re-login con token nuevo)
    pub fn login(&mut self, token: String) {
        *self = Session::LoggedIn { token };
    }

    /// Transición LoggedIn → LoggedOut
    pub fn logout(&mut self) {
        *self = Session::LoggedOut;
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::LoggedIn { token } => Some(token),
            Session::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::LoggedOut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_without_token() {
        let session = Session::from_token(None);
        assert_eq!(session, Session::LoggedOut);
        assert!(!session.is_logged_in());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_initial_state_with_token() {
        let session = Session::from_token(Some("abc".to_string()));
        assert!(session.is_logged_in());
        assert_eq!(session.token(), Some("abc"));
    }

    #[test]
    fn test_login_transition() {
        let mut session = Session::LoggedOut;
        session.login("abc".to_string());
        assert!(session.is_logged_in());
        assert_eq!(session.token(), Some("abc"));
    }

    #[test]
    fn test_logout_transition() {
        let mut session = Session::from_token(Some("abc".to_string()));
        session.logout();
        assert_eq!(session, Session::LoggedOut);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_logout_when_already_logged_out() {
        // Logout es idempotente independientemente del estado previo
        let mut session = Session::LoggedOut;
        session.logout();
        assert_eq!(session, Session::LoggedOut);
    }
}
