// ============================================================================
// MODELS - Estructuras compartidas con el backend
// ============================================================================

pub mod auth;
pub mod cafe;
pub mod session;

pub use auth::*;
pub use cafe::*;
pub use session::*;
