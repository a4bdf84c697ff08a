//! Legacy team text splitting.
//!
//! Legacy clients cap team prefix and suffix at a fixed width. Longer lines
//! are split across the two, with the formatting active at the split point
//! repeated at the start of the suffix.

use mc_sidebar_proto::text::last_colors;

/// Split `content` into `(prefix, suffix)`, each at most `width` characters.
pub fn split_legacy(content: &str, width: usize) -> (String, String) {
    let boundary = match content.char_indices().nth(width) {
        Some((index, _)) => index,
        None => return (content.to_string(), String::new()),
    };
    let (prefix, rest) = content.split_at(boundary);
    let mut suffix = last_colors(prefix);
    suffix.push_str(rest);
    if suffix.chars().count() > width {
        suffix = suffix.chars().take(width).collect();
    }
    (prefix.to_string(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_prefix_only() {
        assert_eq!(split_legacy("Hello", 16), ("Hello".into(), String::new()));
        let exact = "0123456789abcdef";
        assert_eq!(split_legacy(exact, 16), (exact.into(), String::new()));
    }

    #[test]
    fn uncolored_split_round_trips() {
        let content = "abcdefghijklmnopqrst";
        let (prefix, suffix) = split_legacy(content, 16);
        assert_eq!(prefix.chars().count(), 16);
        assert_eq!(suffix.chars().count(), 4);
        assert_eq!(format!("{prefix}{suffix}"), content);
    }

    #[test]
    fn color_carries_into_suffix() {
        let (prefix, suffix) = split_legacy("§cHello World Example", 16);
        assert_eq!(prefix, "§cHello World Ex");
        assert_eq!(suffix, "§cample");
        assert!(suffix.starts_with(&last_colors(&prefix)));
    }

    #[test]
    fn suffix_is_truncated_after_carry() {
        let content = format!("§a{}", "x".repeat(40));
        let (prefix, suffix) = split_legacy(&content, 16);
        assert_eq!(prefix.chars().count(), 16);
        assert_eq!(suffix.chars().count(), 16);
        assert!(suffix.starts_with("§a"));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let content = "§e日本語のテキストがここにあります長い";
        let (prefix, suffix) = split_legacy(content, 16);
        assert_eq!(prefix.chars().count(), 16);
        assert!(suffix.starts_with("§e"));
    }
}
