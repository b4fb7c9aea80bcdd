// src/auth.rs
// DOCUMENTATION: Staff authentication gate
// PURPOSE: Capability checks for write operations, kept out of business logic

use actix_web::HttpRequest;

/// Header carrying the staff token on write requests
pub const STAFF_TOKEN_HEADER: &str = "X-Staff-Token";

/// Capability-check collaborator for staff-only operations
/// DOCUMENTATION: Holds the configured staff token and answers yes/no
/// questions about a request; handlers never compare tokens themselves.
/// An empty configured token matches nothing, so all writes are rejected.
#[derive(Debug, Clone)]
pub struct StaffAuth {
    token: String,
}

impl StaffAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.staff_token.clone())
    }

    /// Check whether the request carries the configured staff token
    /// DOCUMENTATION: Reads X-Staff-Token; a missing or non-ASCII header
    /// is simply "not staff", never an error
    pub fn is_staff(&self, req: &HttpRequest) -> bool {
        if self.token.is_empty() {
            return false;
        }

        req.headers()
            .get(STAFF_TOKEN_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(|presented| presented == self.token)
            .unwrap_or(false)
    }

    /// Capability: reorder images within a sibling set
    pub fn can_reorder_images(&self, req: &HttpRequest) -> bool {
        self.is_staff(req)
    }

    /// Capability: create, update, or delete towns, attractions, and images
    pub fn can_modify_content(&self, req: &HttpRequest) -> bool {
        self.is_staff(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_matching_token_is_staff() {
        let auth = StaffAuth::new("secret");
        let req = TestRequest::default()
            .insert_header((STAFF_TOKEN_HEADER, "secret"))
            .to_http_request();

        assert!(auth.is_staff(&req));
        assert!(auth.can_reorder_images(&req));
        assert!(auth.can_modify_content(&req));
    }

    #[actix_web::test]
    async fn test_wrong_token_is_not_staff() {
        let auth = StaffAuth::new("secret");
        let req = TestRequest::default()
            .insert_header((STAFF_TOKEN_HEADER, "guess"))
            .to_http_request();

        assert!(!auth.is_staff(&req));
    }

    #[actix_web::test]
    async fn test_missing_header_is_not_staff() {
        let auth = StaffAuth::new("secret");
        let req = TestRequest::default().to_http_request();

        assert!(!auth.is_staff(&req));
    }

    #[actix_web::test]
    async fn test_empty_configured_token_never_matches() {
        let auth = StaffAuth::new("");
        let req = TestRequest::default()
            .insert_header((STAFF_TOKEN_HEADER, ""))
            .to_http_request();

        assert!(!auth.is_staff(&req));
    }
}
