pub mod gate;
pub mod keygen;
pub mod middleware;
pub mod role;

pub use gate::ApiKeyGate;
pub use middleware::{ApiKeyMiddleware, API_KEY_HEADER};
pub use role::{permits, RequiredRole};
