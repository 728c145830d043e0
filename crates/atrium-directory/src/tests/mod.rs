use crate::HttpDirectoryClient;

use std::time::Duration;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = HttpDirectoryClient::new("https://directory.example.com/");
    assert_eq!(client.base_url, "https://directory.example.com");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = HttpDirectoryClient::new("https://directory.example.com");
    assert_eq!(client.base_url, "https://directory.example.com");
}

#[test]
fn test_with_timeout_builds() {
    let client =
        HttpDirectoryClient::with_timeout("https://directory.example.com/", Duration::from_secs(5))
            .unwrap();
    assert_eq!(client.base_url, "https://directory.example.com");
}
