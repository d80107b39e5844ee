use listings::PostFilter;

/// Builds the client-side display path for a user listing. The trailing `?`
/// is emitted even with no parameters, and every parameter is prefixed with
/// `&`; link-building callers rely on both shapes exactly as-is.
pub fn user_pathname(
    user: &str,
    path: Option<&str>,
    after: Option<&str>,
    filter: Option<&PostFilter>,
) -> String {
    let empty = PostFilter::default();
    let filter = filter.unwrap_or(&empty);

    let mut pathname = format!("/u/{}", user);
    if let Some(path) = path.filter(|p| !p.is_empty()) {
        pathname.push('/');
        pathname.push_str(path);
    }
    pathname.push('?');
    if let Some(sort) = &filter.sort {
        pathname.push_str(&format!("&sort={}", sort));
    }
    if let Some(time) = &filter.time {
        pathname.push_str(&format!("&time={}", time));
    }
    if let Some(after) = after {
        pathname.push_str(&format!("&after={}", after));
    }
    pathname
}
