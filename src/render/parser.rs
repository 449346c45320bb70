//! `${NAME}` / `${NAME:-default}` placeholder scanner.

/// A parsed segment of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text to emit verbatim.
    Lit(&'a str),
    /// A recognised placeholder.
    Var {
        name: &'a str,
        /// Text after `:-`, if the clause was present. May be empty.
        default: Option<&'a str>,
    },
}

/// Parse a template string into a sequence of [`Segment`]s.
///
/// Anything that does not match the placeholder grammar is emitted as
/// literal text. Returns borrowed slices into `input`.
pub fn parse(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    // Start of the pending literal run.
    let mut lit_start = 0;
    // Where to resume looking for the next `${`.
    let mut cursor = 0;

    while let Some(off) = input[cursor..].find("${") {
        let open = cursor + off;

        match match_placeholder(&input[open..]) {
            Some((seg, len)) => {
                if open > lit_start {
                    segments.push(Segment::Lit(&input[lit_start..open]));
                }
                segments.push(seg);
                cursor = open + len;
                lit_start = cursor;
            }
            // Not a placeholder: the `$` stays literal and scanning resumes
            // right after it, so `$${A}` still finds `${A}`.
            None => cursor = open + 1,
        }
    }

    if lit_start < input.len() {
        segments.push(Segment::Lit(&input[lit_start..]));
    }

    segments
}

/// Try to match a placeholder at the start of `s` (which begins with `${`).
///
/// Returns the segment and the number of bytes it spans.
fn match_placeholder(s: &str) -> Option<(Segment<'_>, usize)> {
    let body = &s[2..];
    let name_len = ident_len(body);
    if name_len == 0 {
        return None;
    }
    let name = &body[..name_len];
    let rest = &body[name_len..];

    if rest.starts_with('}') {
        return Some((Segment::Var { name, default: None }, 2 + name_len + 1));
    }

    let after = rest.strip_prefix(":-")?;
    let close = after.find('}')?;
    let default = &after[..close];
    let len = 2 + name_len + 2 + close + 1;

    Some((
        Segment::Var {
            name,
            default: Some(default),
        },
        len,
    ))
}

/// Length in bytes of the `[A-Za-z_][A-Za-z0-9_]*` prefix of `s`.
fn ident_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return 0,
    }
    bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn var<'a>(name: &'a str, default: Option<&'a str>) -> Segment<'a> {
        Segment::Var { name, default }
    }

    #[test]
    fn plain_text_is_one_literal() {
        assert_eq!(parse("no tokens here"), vec![Segment::Lit("no tokens here")]);
    }

    #[test]
    fn empty_input_has_no_segments() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn bare_and_default_placeholders() {
        assert_eq!(
            parse("host=${HOST:-localhost} port=${PORT}"),
            vec![
                Segment::Lit("host="),
                var("HOST", Some("localhost")),
                Segment::Lit(" port="),
                var("PORT", None),
            ]
        );
    }

    #[test]
    fn empty_default_is_distinct_from_no_default() {
        assert_eq!(parse("${A:-}"), vec![var("A", Some(""))]);
        assert_eq!(parse("${A}"), vec![var("A", None)]);
    }

    #[test]
    fn default_is_taken_verbatim() {
        assert_eq!(
            parse("${A:- spaced :-${B} }"),
            vec![var("A", Some(" spaced :-${B")), Segment::Lit(" }")]
        );
    }

    #[test]
    fn malformed_tokens_are_literal() {
        let inputs = [
            "${1abc}", "${", "${}", "${A", "${A:-x", "${A-b}", "${A:b}", "${A }", "$A",
        ];
        for src in inputs {
            assert_eq!(parse(src), vec![Segment::Lit(src)], "input: {src:?}");
        }
    }

    #[test]
    fn scanning_resumes_after_failed_match() {
        assert_eq!(parse("$${A}"), vec![Segment::Lit("$"), var("A", None)]);
        assert_eq!(
            parse("${${A}}"),
            vec![Segment::Lit("${"), var("A", None), Segment::Lit("}")]
        );
    }

    #[test]
    fn default_stops_at_first_brace() {
        assert_eq!(parse("${A:-x}y}"), vec![var("A", Some("x")), Segment::Lit("y}")]);
    }

    #[test]
    fn adjacent_placeholders() {
        assert_eq!(
            parse("${A}${B:-x}${A}"),
            vec![var("A", None), var("B", Some("x")), var("A", None)]
        );
    }

    #[test]
    fn identifiers_allow_digits_and_underscores_after_first() {
        assert_eq!(parse("${_a1_B2}"), vec![var("_a1_B2", None)]);
    }

    #[test]
    fn non_ascii_text_around_placeholders() {
        assert_eq!(
            parse("é${X}ü"),
            vec![Segment::Lit("é"), var("X", None), Segment::Lit("ü")]
        );
    }
}
