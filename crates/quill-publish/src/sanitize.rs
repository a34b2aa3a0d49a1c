//! Markdown-to-plain-text sanitizer
//!
//! LinkedIn's UGC text body is plain text only, so generated markdown is
//! flattened before publishing. The transform is a pure function over
//! strings; the steps run in a fixed order because later patterns operate
//! on the result of earlier removals (italic unwrapping must follow bold
//! unwrapping or asymmetric marker counts mis-pair).

use regex::Regex;
use std::sync::OnceLock;

struct Patterns {
    header: Regex,
    bold: Regex,
    italic: Regex,
    fenced_block: Regex,
    inline_code: Regex,
    blank_runs: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        header: Regex::new(r"(?m)^#+\s+").unwrap(),
        bold: Regex::new(r"\*\*(.*?)\*\*").unwrap(),
        italic: Regex::new(r"\*(.*?)\*").unwrap(),
        fenced_block: Regex::new(r"(?s)```.*?```").unwrap(),
        inline_code: Regex::new(r"`([^`]+)`").unwrap(),
        blank_runs: Regex::new(r"\n\s*\n").unwrap(),
    })
}

/// Flatten markdown into platform-safe plain text
///
/// Steps, each on the previous step's output:
/// 1. Strip leading header markers, keeping the line content
/// 2. Unwrap `**bold**`
/// 3. Unwrap `*italic*`
/// 4. Delete fenced code blocks entirely, contents included
/// 5. Unwrap single-backtick inline code
/// 6. Collapse runs of blank lines to a single blank line
/// 7. Trim the whole result
pub fn clean_content(content: &str) -> String {
    let p = patterns();

    let content = p.header.replace_all(content, "");
    let content = p.bold.replace_all(&content, "$1");
    let content = p.italic.replace_all(&content, "$1");
    let content = p.fenced_block.replace_all(&content, "");
    let content = p.inline_code.replace_all(&content, "$1");
    let content = p.blank_runs.replace_all(&content, "\n\n");

    content.trim().to_string()
}

/// Backslash-escape literal double quotes
///
/// The request body goes through a structured serializer, which makes this
/// redundant for validity, but the escaped form is what the platform
/// payload has always carried.
pub fn escape_quotes(content: &str) -> String {
    content.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_transform() {
        let input = "# Title\n\n**bold** and *italic* and `code` and\n```\nblock\n```\n\n\n\nEnd";
        assert_eq!(
            clean_content(input),
            "Title\n\nbold and italic and code and\n\nEnd"
        );
    }

    #[test]
    fn test_idempotent() {
        let input = "## Header\n\nSome **text** with\n```rust\nfn main() {}\n```\nmore `bits`.";
        let once = clean_content(input);
        assert_eq!(clean_content(&once), once);
    }

    #[test]
    fn test_plain_text_unchanged_up_to_trim() {
        let input = "  Nothing fancy here.\nJust two lines.  ";
        assert_eq!(clean_content(input), "Nothing fancy here.\nJust two lines.");
    }

    #[test]
    fn test_headers_stripped_per_line() {
        let input = "# One\n## Two\n### Three";
        assert_eq!(clean_content(input), "One\nTwo\nThree");
    }

    #[test]
    fn test_fenced_block_contents_deleted() {
        let input = "before\n```\nsecret_fn()\n```\nafter";
        let out = clean_content(input);
        assert!(!out.contains("secret_fn"));
        assert!(out.contains("before"));
        assert!(out.contains("after"));
    }

    #[test]
    fn test_multiple_fenced_blocks_matched_non_greedily() {
        let input = "a\n```\none\n```\nkeep me\n```\ntwo\n```\nb";
        let out = clean_content(input);
        assert!(out.contains("keep me"));
        assert!(!out.contains("one"));
        assert!(!out.contains("two"));
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(clean_content(""), "");
        assert_eq!(clean_content("  \n\n\t "), "");
    }

    #[test]
    fn test_blank_line_runs_collapse() {
        let input = "para one\n\n\n\n\npara two";
        assert_eq!(clean_content(input), "para one\n\npara two");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"say "hi" twice"#), r#"say \"hi\" twice"#);
        assert_eq!(escape_quotes("no quotes"), "no quotes");
    }

    #[test]
    fn test_escaped_form_has_no_bare_quotes() {
        let escaped = escape_quotes(r#"a "b" c "d""#);
        // every remaining quote is preceded by a backslash
        let bytes = escaped.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if *b == b'"' {
                assert_eq!(bytes[i - 1], b'\\');
            }
        }
    }
}
