use crate::types::PostFilter;

pub const REDDIT_API_BASE: &str = "https://www.reddit.com";

/// Builds the listing request URL. Values are appended verbatim; callers
/// pre-sanitize anything containing reserved URL characters.
pub fn user_request_url(
    api_base: &str,
    user: &str,
    kind: Option<&str>,
    after: Option<&str>,
    filter: Option<&PostFilter>,
) -> String {
    let empty = PostFilter::default();
    let filter = filter.unwrap_or(&empty);

    let mut url = format!("{}/user/{}", api_base, user);
    if let Some(kind) = kind.filter(|k| !k.is_empty()) {
        url.push('/');
        url.push_str(kind);
    }
    url.push_str(".json?raw_json=1");
    if let Some(sort) = &filter.sort {
        url.push_str(&format!("&sort={}", sort));
    }
    if let Some(time) = &filter.time {
        url.push_str(&format!("&t={}", time));
    }
    if let Some(after) = after {
        url.push_str(&format!("&after={}", after));
    }
    url
}
