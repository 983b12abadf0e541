use serde::{Deserialize, Serialize};

use crate::wire::UserResponse;

/// Sentinel id meaning "no account is bound to this session".
pub const ANONYMOUS_ID: u64 = 0;

/// The client-side user profile. Persisted as-is to session storage and
/// rebuilt from [`UserResponse`] after every lookup or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub is_verified: bool,
    pub referral_code: String,
    pub referral_count: u32,
}

impl User {
    /// The anonymous sentinel: id 0, everything else empty.
    pub fn anonymous() -> Self {
        User {
            id: ANONYMOUS_ID,
            name: String::new(),
            email: String::new(),
            is_verified: false,
            referral_code: String::new(),
            referral_count: 0,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.id == ANONYMOUS_ID
    }
}

impl Default for User {
    fn default() -> Self {
        User::anonymous()
    }
}

impl From<UserResponse> for User {
    fn from(raw: UserResponse) -> Self {
        User {
            id: raw.id,
            name: raw.name,
            email: raw.email,
            is_verified: raw.is_verified,
            referral_code: raw.referral_code,
            referral_count: raw.referral_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_sentinel_has_id_zero_and_no_verification() {
        let user = User::anonymous();
        assert_eq!(user.id, 0);
        assert!(user.is_anonymous());
        assert!(!user.is_verified);
        assert!(user.email.is_empty());
        assert_eq!(user.referral_count, 0);
    }

    #[test]
    fn wire_object_maps_onto_profile() {
        let raw: UserResponse = serde_json::from_str(
            r#"{
                "id": 42,
                "name": "Ada",
                "email": "ada@example.com",
                "is_verified": true,
                "referral_code": "a1b2c3",
                "referral_count": 3
            }"#,
        )
        .unwrap();
        let user = User::from(raw);
        assert_eq!(user.id, 42);
        assert_eq!(user.name, "Ada");
        assert!(user.is_verified);
        assert_eq!(user.referral_code, "a1b2c3");
        assert_eq!(user.referral_count, 3);
        assert!(!user.is_anonymous());
    }

    #[test]
    fn profile_round_trips_through_storage_json() {
        let user = User {
            id: 7,
            name: "Bo".into(),
            email: "bo@example.com".into(),
            is_verified: false,
            referral_code: "zzz999".into(),
            referral_count: 0,
        };
        let stored = serde_json::to_string(&user).unwrap();
        let restored: User = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, user);
    }
}
