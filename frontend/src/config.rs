//! Base URLs baked in at build time. WASM has no process environment,
//! so these come from `option_env!` with local-dev fallbacks.

/// Base URL of the waitlist API, no trailing slash expected.
pub fn server_url() -> &'static str {
    option_env!("SERVER_URL").unwrap_or("http://localhost:8000/api")
}

/// Base URL this client is served from, used to build invite links.
pub fn client_url() -> &'static str {
    option_env!("CLIENT_URL").unwrap_or("http://localhost:8080")
}

/// Where `/admin/` redirects to.
pub fn admin_url() -> String {
    admin_url_from(server_url())
}

/// The admin panel lives next to the API: the API base's last path
/// segment is replaced with `admin/`. A bare origin just gets `/admin/`
/// appended.
pub fn admin_url_from(server: &str) -> String {
    let trimmed = server.trim_end_matches('/');
    let scheme_end = trimmed.find("//").map_or(0, |i| i + 1);
    match trimmed.rfind('/') {
        Some(i) if i > scheme_end => format!("{}/admin/", &trimmed[..i]),
        _ => format!("{trimmed}/admin/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_url_replaces_the_api_path_segment() {
        assert_eq!(
            admin_url_from("http://localhost:8000/api"),
            "http://localhost:8000/admin/"
        );
        assert_eq!(
            admin_url_from("https://waitlist.example.com/api/"),
            "https://waitlist.example.com/admin/"
        );
    }

    #[test]
    fn admin_url_on_a_bare_origin_appends_admin() {
        assert_eq!(
            admin_url_from("https://api.example.com"),
            "https://api.example.com/admin/"
        );
        assert_eq!(
            admin_url_from("https://api.example.com/"),
            "https://api.example.com/admin/"
        );
    }
}
