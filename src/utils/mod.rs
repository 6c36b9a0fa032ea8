//! Utility functions and helpers.

pub mod console;
pub mod http;

use url::Url;

/// Extract the domain from a URL string.
pub fn get_domain(url_str: &str) -> Option<String> {
    Url::parse(url_str)
        .ok()
        .and_then(|u| u.host_str().map(|s| s.to_string()))
}

/// Build a `tel:` link, dropping dashes and spaces from the number.
pub fn tel_href(phone: &str) -> String {
    format!("tel:{}", phone.trim().replace(['-', ' '], ""))
}

/// Build a `mailto:` link.
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_domain() {
        assert_eq!(
            get_domain("https://nptel.ac.in/courses"),
            Some("nptel.ac.in".to_string())
        );
        assert_eq!(get_domain("#"), None);
    }

    #[test]
    fn test_tel_href() {
        assert_eq!(tel_href("+91-XXX-XXX XXXX"), "tel:+91XXXXXXXXXX");
    }

    #[test]
    fn test_mailto_href() {
        assert_eq!(
            mailto_href(" library@mvgsc.edu "),
            "mailto:library@mvgsc.edu"
        );
    }
}
