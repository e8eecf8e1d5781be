/// Longest slug kept from a topic
const MAX_SLUG_LEN: usize = 100;

const FALLBACK_SLUG: &str = "untitled";

/// Object key for a topic: `{prefix}/{slug}.txt`
///
/// Pure function of its inputs, so the same topic always maps to the same
/// object. Topics differing only in case or punctuation share a key.
pub fn storage_key(prefix: &str, topic: &str) -> String {
    let file_name = format!("{}.txt", slugify(topic));
    let prefix = prefix.trim_matches('/');

    if prefix.is_empty() {
        file_name
    } else {
        format!("{}/{}", prefix, file_name)
    }
}

/// Lowercase alphanumerics; every other run of characters becomes one `-`
fn slugify(topic: &str) -> String {
    let mut slug = String::with_capacity(topic.len());
    let mut pending_dash = false;

    for ch in topic.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    let slug: String = slug.chars().take(MAX_SLUG_LEN).collect();
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}
