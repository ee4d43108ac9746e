//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Scheme prepended to protocol-relative asset URLs
const ASSET_SCHEME: &str = "https:";

/// Characters escaped in a route segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Make an asset URL absolute
///
/// Asset URLs arrive protocol-relative (`//images.ctfassets.net/...`).
/// A missing or empty URL yields `None`, never an empty string.
///
/// # Examples
/// ```ignore
/// asset_url(Some("//cdn.example.com/a.png")) // -> Some("https://cdn.example.com/a.png")
/// ```
pub fn asset_url(raw: Option<&str>) -> Option<String> {
    match raw {
        Some(url) if !url.is_empty() => Some(format!("{}{}", ASSET_SCHEME, url)),
        _ => None,
    }
}

/// Site path of a blog article
pub fn blog_path(slug: &str) -> String {
    format!("/blog/{}", utf8_percent_encode(slug, SEGMENT))
}
