//! Rendering of the keys body: one `case <key>` line per translation key.
//!
//! The body is meant to be dropped inside a Swift `enum` (see
//! [`crate::templates::swift_enum`]), two nesting levels deep.

use crate::types::TranslationMap;

/// Nesting level of the `case` lines.
pub const CASE_LEVEL: usize = 2;

/// Leading whitespace for `level`: `indent_width * (level * 2)` spaces.
pub fn indentation(indent_width: usize, level: usize) -> String {
    " ".repeat(indent_width * (level * 2))
}

/// Renders the keys body. Lines are joined by `\n` with no trailing newline.
pub fn render(translations: &TranslationMap, indent_width: usize) -> String {
    let indent = indentation(indent_width, CASE_LEVEL);
    translations
        .keys()
        .map(|key| format!("{}case {}", indent, key))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_indent_is_eight_spaces() {
        let map: TranslationMap = [("hello", "Hello")].into_iter().collect();
        assert_eq!(render(&map, 2), "        case hello");
    }

    #[test]
    fn test_multiple_keys_have_no_trailing_newline() {
        let map: TranslationMap = [("a", "A"), ("b", "B"), ("c", "C")].into_iter().collect();
        let rendered = render(&map, 1);
        assert_eq!(rendered, "    case a\n    case b\n    case c");
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn test_indent_formula() {
        assert_eq!(indentation(2, 2).len(), 8);
        assert_eq!(indentation(4, 2).len(), 16);
        assert_eq!(indentation(3, 1).len(), 6);
        assert_eq!(indentation(0, 2), "");
    }

    #[test]
    fn test_empty_map_renders_empty_body() {
        assert_eq!(render(&TranslationMap::new(), 2), "");
    }
}
