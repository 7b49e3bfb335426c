//! Post-processing hooks applied to rendered bodies before they are written.
//!
//! A [`Template`] is a pure `&str -> String` transform. The generator passes
//! it the raw body (the `.strings` lines, or the `case` lines of the keys
//! file) and writes whatever it returns.

use std::sync::Arc;

use indoc::indoc;

/// Shared, thread-safe formatting hook.
pub type Template = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Header written by [`with_generated_header`].
pub const GENERATED_HEADER: &str = indoc! {"
    // This file is automatically generated by stringsgen.
    // Do not edit it manually, as your changes will be overwritten.
"};

/// Wraps any closure into a [`Template`].
pub fn template<F>(f: F) -> Template
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Keys template producing a Swift `String`-backed enum nested in
/// `extension Localizable`.
///
/// With the default indent width of 2, the `case` lines of the keys body
/// sit exactly two levels deep inside this wrapper.
pub fn swift_enum(enum_name: impl Into<String>) -> Template {
    let enum_name = enum_name.into();
    template(move |body| {
        format!(
            indoc! {"
                import Foundation

                extension Localizable {{
                    enum {}: String {{
                {}
                    }}
                }}
            "},
            enum_name, body
        )
    })
}

/// Template prepending `header` (followed by a blank line) to the body.
pub fn with_header(header: impl Into<String>) -> Template {
    let header = header.into();
    template(move |body| {
        let mut content = String::with_capacity(header.len() + body.len() + 2);
        content.push_str(&header);
        if !header.ends_with('\n') {
            content.push('\n');
        }
        content.push('\n');
        content.push_str(body);
        content
    })
}

/// Template prepending [`GENERATED_HEADER`].
pub fn with_generated_header() -> Template {
    with_header(GENERATED_HEADER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swift_enum_wraps_body() {
        let render = swift_enum("Key");
        let output = render("        case hello\n        case bye");
        let expected = "import Foundation\n\nextension Localizable {\n    enum Key: String {\n        case hello\n        case bye\n    }\n}\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_with_header_adds_blank_line() {
        let render = with_header("// Header");
        assert_eq!(render("\"a\" = \"b\";\n"), "// Header\n\n\"a\" = \"b\";\n");
    }

    #[test]
    fn test_with_generated_header() {
        let render = with_generated_header();
        let output = render("\"a\" = \"b\";\n");
        assert!(output.starts_with("// This file is automatically generated by stringsgen."));
        assert!(output.ends_with("overwritten.\n\n\"a\" = \"b\";\n"));
    }

    #[test]
    fn test_template_from_closure() {
        let upper = template(|body| body.to_uppercase());
        assert_eq!(upper("case hello"), "CASE HELLO");
    }
}
