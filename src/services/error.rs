// ============================================================================
// API ERROR - Errores de la capa de red
// ============================================================================
// Las vistas colapsan cualquier variante al mensaje fijo de su pantalla;
// la distinción solo se usa para logging.
// ============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let error = ApiError::Status(401);
        assert_eq!(error.to_string(), "HTTP 401");
    }

    #[test]
    fn test_network_error_display() {
        let error = ApiError::Network("fetch failed".to_string());
        assert_eq!(error.to_string(), "Network error: fetch failed");
    }
}
