/// HTTP liveness and health endpoints
pub mod health;
/// Scheduled closing of polls nobody finished
pub mod expiry;
