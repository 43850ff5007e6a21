use actix_web::cookie::Cookie;
use actix_web::cookie::time::Duration;
use prodle_core::SESSION_COOKIE;
use prodle_core::TOKEN_DURATION;

/// Attributes of the cookie that carries the session token.
#[derive(Debug, Clone, Copy)]
pub struct CookiePolicy {
    pub secure: bool,
    pub http_only: bool,
}

impl Default for CookiePolicy {
    fn default() -> Self {
        Self {
            secure: true,
            http_only: false,
        }
    }
}

impl CookiePolicy {
    pub fn issue(&self, token: String) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, token)
            .path("/")
            .secure(self.secure)
            .http_only(self.http_only)
            .max_age(Duration::seconds(TOKEN_DURATION.as_secs() as i64))
            .finish()
    }
    /// Removal cookie. The token itself stays valid until it expires.
    pub fn clear(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE, "")
            .path("/")
            .secure(self.secure)
            .http_only(self.http_only)
            .finish();
        cookie.make_removal();
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn issued_cookie_carries_token() {
        let cookie = CookiePolicy::default().issue("abc".to_string());
        assert_eq!(cookie.name(), "jwt");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
    }
    #[test]
    fn cleared_cookie_is_empty_and_expired() {
        let cookie = CookiePolicy::default().clear();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
