//! JSON shapes exchanged with the waitlist server. Field names follow
//! the server's snake_case exactly; decoding goes through serde so a
//! shape mismatch fails loudly instead of propagating missing fields.

use serde::{Deserialize, Serialize};

/// User object as returned by `GET /user/` and `POST /auth/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub is_verified: bool,
    pub referral_code: String,
    pub referral_count: u32,
}

/// Body for `POST /auth/` and `POST /auth/<referral_code>/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
}

/// Body for `POST /resend-verification-email/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendRequest {
    pub email: String,
}

/// `{"message": ...}` — verification results and most error bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response of `GET /waitlist/?id=<id>`. The server sends the full
/// waitlist record; only the rank matters client-side.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionResponse {
    pub position: u64,
}

/// One page of a ranked listing: `{results, total_pages, links}`. The
/// `links` object is ignored; the client builds its own page strip.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse<T> {
    pub results: Vec<T>,
    pub total_pages: u32,
}

/// Row of `GET /global-waitlist/?page=<n>`: a display name and a rank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WaitlistEntry {
    pub user: String,
    pub position: u64,
}

/// Row of `GET /referrals/<id>/?page=<n>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferralEntry {
    pub referee: RefereeSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefereeSummary {
    pub name: String,
    pub is_verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_global_waitlist_page() {
        let body = r#"{
            "links": {"next": "http://x/global-waitlist/?page=3", "previous": null},
            "total_pages": 4,
            "results": [
                {"user": "Ada", "position": 11},
                {"user": "Bo", "position": 12}
            ]
        }"#;
        let page: PageResponse<WaitlistEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0], WaitlistEntry { user: "Ada".into(), position: 11 });
    }

    #[test]
    fn decodes_referrals_page_with_nested_referee() {
        let body = r#"{
            "links": {"next": null, "previous": null},
            "total_pages": 1,
            "results": [{"referee": {"name": "Cy", "is_verified": false}}]
        }"#;
        let page: PageResponse<ReferralEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(page.results[0].referee.name, "Cy");
        assert!(!page.results[0].referee.is_verified);
    }

    #[test]
    fn position_response_ignores_extra_record_fields() {
        let body = r#"{"id": 9, "user": 42, "position": 137}"#;
        let pos: PositionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(pos.position, 137);
    }

    #[test]
    fn user_response_requires_every_field() {
        // A missing field is a decode error, not a silently defaulted value.
        let body = r#"{"id": 1, "name": "Ada", "email": "a@b.com"}"#;
        assert!(serde_json::from_str::<UserResponse>(body).is_err());
    }

    #[test]
    fn register_request_serializes_name_and_email_only() {
        let req = RegisterRequest { name: "Ada".into(), email: "a@b.com".into() };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Ada", "email": "a@b.com"}));
    }
}
