//! Text normalization for game-flavored markup.
//!
//! Plugin metadata fields frequently carry color tags meant for the game's
//! own text renderer (`[red]`, `[#ff0000]`, `[accent]`). The catalog is
//! plain JSON, so those tags are stripped before anything is emitted.

/// Removes color-markup tags from `text`.
///
/// A tag is a `[` followed by any run of non-`]` characters and a closing
/// `]`. A doubled `[[` escapes to a literal `[`. An unterminated `[` is
/// kept as-is.
#[must_use]
pub fn strip_color_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('[') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        if let Some(stripped) = after.strip_prefix('[') {
            out.push('[');
            rest = stripped;
        } else if let Some(end) = after.find(']') {
            rest = &after[end + 1..];
        } else {
            out.push('[');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(strip_color_markup("Example Plugin"), "Example Plugin");
    }

    #[test]
    fn named_tags_are_removed() {
        assert_eq!(strip_color_markup("[red]Hello[] world"), "Hello world");
        assert_eq!(strip_color_markup("[accent]Stats[]"), "Stats");
    }

    #[test]
    fn hex_tags_are_removed() {
        assert_eq!(strip_color_markup("[#ff0000]Danger"), "Danger");
    }

    #[test]
    fn doubled_bracket_escapes_to_literal() {
        assert_eq!(strip_color_markup("[[not a tag]"), "[not a tag]");
    }

    #[test]
    fn unterminated_tag_is_kept() {
        assert_eq!(strip_color_markup("broken [tag"), "broken [tag");
    }

    #[test]
    fn empty_input() {
        assert_eq!(strip_color_markup(""), "");
    }
}
