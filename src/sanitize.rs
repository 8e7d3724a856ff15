//! Normalization helpers shared by the lookup and rewrite stages.

/// Normalize an English token for dictionary lookup.
///
/// Drops every character that is not an ASCII letter or digit. With
/// `decapitalize`, the token is lowercased first.
pub fn sanitize_english(word: &str, decapitalize: bool) -> String {
    if decapitalize {
        word.to_lowercase()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect()
    } else {
        word.chars().filter(char::is_ascii_alphanumeric).collect()
    }
}

/// Delete every occurrence of every marker from `phonetic`.
///
/// Deletion repeats until nothing changes, so a marker that only appears
/// after another one was removed is caught too and the result is stable.
pub fn strip_markers<S: AsRef<str>>(phonetic: &str, markers: &[S]) -> String {
    let mut current = phonetic.to_string();
    loop {
        let before = current.len();
        for marker in markers {
            let marker = marker.as_ref();
            if !marker.is_empty() && current.contains(marker) {
                current = current.replace(marker, "");
            }
        }
        if current.len() == before {
            return current;
        }
    }
}

/// Returns true if `s` is fenced by `fence` on both sides with the fences not
/// overlapping.
pub fn is_fenced(s: &str, fence: &str) -> bool {
    s.len() >= fence.len() * 2 && s.starts_with(fence) && s.ends_with(fence)
}
