/// Split `name` at the leftmost occurrence of `separator`.
///
/// The split only counts when both halves are non-empty, so a leading
/// separator (`__foo`) or a trailing one (`foo__`) yields `None`. The
/// separator is matched literally.
pub fn split_first<'a>(name: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    let index = name.find(separator)?;
    let rest_start = index + separator.len();
    if index == 0 || rest_start >= name.len() {
        return None;
    }
    Some((&name[..index], &name[rest_start..]))
}
