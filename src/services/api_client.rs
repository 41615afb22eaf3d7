// ============================================================================
// API CLIENT - SOLO comunicación HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;

use crate::models::{AuthResponse, Cafe, LoginRequest, RegisterRequest};
use crate::services::error::ApiError;
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Login: POST /api/users/login con {email, password}
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let url = format!("{}/api/users/login", self.base_url);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Iniciando sesión para: {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Registro: POST /api/auth/register con {name, email, password}
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let url = format!("{}/api/auth/register", self.base_url);
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("📝 Registrando usuario: {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Listar cafés: GET /api/cafes con Authorization: Bearer <token>
    pub async fn get_cafes(&self, token: &str) -> Result<Vec<Cafe>, ApiError> {
        let url = format!("{}/api/cafes", self.base_url);

        log::info!("📋 Obteniendo lista de cafés...");

        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        let cafes = response
            .json::<Vec<Cafe>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        log::info!("✅ Cafés recibidos: {} cafés", cafes.len());

        Ok(cafes)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
