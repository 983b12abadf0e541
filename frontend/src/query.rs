//! Helpers for the two query parameters the client cares about: the
//! referral code on invite links (`?refCd=`) and the one-time code on
//! verification links (`?code=`).

/// Current `location.search`, empty when unavailable.
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Referral code carried by an invite link.
pub fn referral_code(search: &str) -> Option<String> {
    param(search, "refCd")
}

/// One-time code carried by a verification link.
pub fn verification_code(search: &str) -> Option<String> {
    param(search, "code")
}

fn param(search: &str, key: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search
        .split('&')
        .filter_map(|pair| {
            let mut kv = pair.splitn(2, '=');
            match (kv.next(), kv.next()) {
                (Some(k), Some(v)) if k == key => Some(v.to_string()),
                _ => None,
            }
        })
        .find(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_referral_code() {
        assert_eq!(referral_code("?refCd=a1b2c3"), Some("a1b2c3".to_string()));
        assert_eq!(
            referral_code("?utm=x&refCd=zz99&other=1"),
            Some("zz99".to_string())
        );
    }

    #[test]
    fn missing_or_empty_params_are_none() {
        assert_eq!(referral_code(""), None);
        assert_eq!(referral_code("?code=abc"), None);
        assert_eq!(referral_code("?refCd="), None);
        assert_eq!(verification_code("?refCd=abc"), None);
    }

    #[test]
    fn extracts_the_verification_code() {
        assert_eq!(verification_code("?code=XyZ123"), Some("XyZ123".to_string()));
    }

    #[test]
    fn value_may_contain_an_equals_sign() {
        assert_eq!(param("?code=a=b", "code"), Some("a=b".to_string()));
    }
}
