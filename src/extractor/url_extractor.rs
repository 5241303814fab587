use url::Url;

const ABSOLUTE_PREFIXES: &[&str] = &["http://", "https://"];

fn has_http_scheme(href: &str) -> bool {
    ABSOLUTE_PREFIXES.iter().any(|prefix| {
        href.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Turns an href from the listings page into an absolute link.
///
/// Hrefs starting with an `http(s)://` scheme are returned untouched, even
/// when they are not valid URLs; everything else is resolved against `base`.
pub fn resolve_link(href: &str, base: &str) -> String {
    if has_http_scheme(href) {
        return href.to_string();
    }
    match Url::parse(base).and_then(|base| base.join(href)) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}{}", base, href),
    }
}
