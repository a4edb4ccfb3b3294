const DEV_API_BASE_URL: &str = "http://localhost:5000";
const PROD_API_BASE_URL: &str = "/.netlify/functions/api";

pub const CURRENCY_SYMBOL: &str = "₹";

/// Base URL of the payment API.
///
/// `MINIPAY_API_URL` set at build time wins; otherwise debug builds talk to a
/// local server and release builds to the deployed functions endpoint.
pub fn api_base_url() -> &'static str {
    match option_env!("MINIPAY_API_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => default_base_url(),
    }
}

fn default_base_url() -> &'static str {
    if cfg!(debug_assertions) {
        DEV_API_BASE_URL
    } else {
        PROD_API_BASE_URL
    }
}

pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(
            join_url("http://localhost:5000", "/api/transactions"),
            "http://localhost:5000/api/transactions"
        );
        assert_eq!(
            join_url("http://localhost:5000/", "api/transactions"),
            "http://localhost:5000/api/transactions"
        );
        assert_eq!(
            join_url("/.netlify/functions/api", "/api/user/profile"),
            "/.netlify/functions/api/api/user/profile"
        );
    }

    #[test]
    fn base_url_is_never_empty() {
        assert!(!api_base_url().is_empty());
    }

    #[test]
    fn debug_builds_target_local_server() {
        if cfg!(debug_assertions) {
            assert_eq!(default_base_url(), DEV_API_BASE_URL);
        } else {
            assert_eq!(default_base_url(), PROD_API_BASE_URL);
        }
    }
}
