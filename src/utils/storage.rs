// ============================================================================
// STORAGE - Persistencia del token en localStorage
// ============================================================================
// El token se guarda como string crudo (sin serializar) bajo TOKEN_KEY,
// sobrevive recargas de página y solo se elimina en el logout.
// ============================================================================

use web_sys::{window, Storage};

use crate::utils::constants::TOKEN_KEY;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Leer el token persistido (None si no hay sesión guardada)
pub fn load_token() -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(TOKEN_KEY).ok()?
}

/// Guardar el token de sesión
pub fn save_token(token: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(TOKEN_KEY, token)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

/// Eliminar el token de sesión
pub fn clear_token() -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(TOKEN_KEY)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}
