//! HTTP DTOs for the liveness endpoint.

use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub const OK: Self = Self { status: "ok" };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_serializes_to_fixed_body() {
        let json = serde_json::to_string(&HealthResponse::OK).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}
