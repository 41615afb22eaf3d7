/// URL base del backend
/// Configurada en tiempo de compilación via BACKEND_URL (ver build.rs):
/// - Por defecto vacía: mismo origen que la página
/// - Producción: p.ej. https://api.cafedealtura.com
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// Clave de localStorage donde se persiste el token de sesión
pub const TOKEN_KEY: &str = "token";

// Mensajes fijos de la UI
pub const MSG_LOADING: &str = "Cargando...";
pub const MSG_LOGIN_ERROR: &str = "Login incorrecto";
pub const MSG_REGISTER_ERROR: &str = "Error al registrar usuario";
pub const MSG_LOGOUT: &str = "Sesión cerrada";
pub const MSG_CAFES_ERROR: &str = "No autorizado o error al cargar cafés";
