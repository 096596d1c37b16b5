use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, ImageRef, LinkRef},
    types::InlineSpan,
};

/// Parses one text run into a sequence of [`InlineSpan`]s.
///
/// # Precedence
/// At each position, recognizers are tried in fixed order: inline code,
/// image, link, bold, italic, underline. Because a match's inner text is
/// captured immediately, it is never re-scanned by a later rule.
///
/// # Failure Policy
/// Unterminated syntax restores the cursor and falls through to literal
/// text; this function never fails.
pub fn parse_inline(s: &str) -> Vec<InlineSpan> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    // Flush accumulated plain text preceding a match
    fn flush_text(out: &mut Vec<InlineSpan>, cur: &Cursor<'_>, start: usize, end: usize) {
        if end > start {
            out.push(InlineSpan::Text(cur.slice(start, end).to_string()));
        }
    }

    while !cur.eof() {
        let at = cur.pos();

        if let Some(span) = try_parse_code_span(&mut cur) {
            flush_text(&mut out, &cur, text_start, at);
            text_start = cur.pos();
            out.push(span);
            continue;
        }
        if let Some(span) = try_parse_image(&mut cur) {
            flush_text(&mut out, &cur, text_start, at);
            text_start = cur.pos();
            out.push(span);
            continue;
        }
        if let Some(span) = try_parse_link(&mut cur) {
            flush_text(&mut out, &cur, text_start, at);
            text_start = cur.pos();
            out.push(span);
            continue;
        }
        if let Some(span) = try_parse_bold(&mut cur) {
            flush_text(&mut out, &cur, text_start, at);
            text_start = cur.pos();
            out.push(span);
            continue;
        }
        if let Some(span) = try_parse_italic(&mut cur) {
            flush_text(&mut out, &cur, text_start, at);
            text_start = cur.pos();
            out.push(span);
            continue;
        }
        if let Some(span) = try_parse_underline(&mut cur) {
            flush_text(&mut out, &cur, text_start, at);
            text_start = cur.pos();
            out.push(span);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &cur, text_start, cur.pos());
    out
}

/// Single-pass emphasis interiors hold plain text only.
fn text_run(inner: &str) -> Vec<InlineSpan> {
    vec![InlineSpan::Text(inner.to_string())]
}

/// Attempts to parse a code span at the current position.
///
/// Returns `None` if not at a backtick or the span isn't closed; the
/// cursor is restored on failure. An empty pair of backticks is not a
/// code span.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();

    while !cur.eof() && cur.peek() != Some(CodeSpan::TICK) {
        cur.bump();
    }
    if cur.peek() != Some(CodeSpan::TICK) {
        *cur = saved;
        return None;
    }
    let inner = cur.slice(inner_start, cur.pos());
    cur.bump(); // closing `

    if inner.is_empty() {
        *cur = saved;
        return None;
    }
    Some(InlineSpan::Code(inner.to_string()))
}

/// Shared bracket grammar: `[text](target)` with the cursor on `[`.
/// Returns `(text, target)`; the caller restores the cursor on `None`.
fn parse_bracket_body<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    cur.bump(); // [
    let text_start = cur.pos();
    while !cur.eof() && cur.peek() != Some(LinkRef::CLOSE) {
        cur.bump();
    }
    if cur.peek() != Some(LinkRef::CLOSE) {
        return None;
    }
    let text = cur.slice(text_start, cur.pos());
    cur.bump(); // ]

    if cur.peek() != Some(LinkRef::HREF_OPEN) {
        return None;
    }
    cur.bump(); // (
    let target_start = cur.pos();
    while !cur.eof() && cur.peek() != Some(LinkRef::HREF_CLOSE) {
        cur.bump();
    }
    if cur.peek() != Some(LinkRef::HREF_CLOSE) {
        return None;
    }
    let target = cur.slice(target_start, cur.pos());
    cur.bump(); // )

    Some((text, target))
}

fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some(LinkRef::OPEN) {
        return None;
    }
    let saved = cur.clone();
    match parse_bracket_body(cur) {
        Some((text, href)) => Some(InlineSpan::Link {
            href: href.to_string(),
            text: text.to_string(),
        }),
        None => {
            *cur = saved;
            None
        }
    }
}

fn try_parse_image(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if !cur.starts_with(ImageRef::SIGIL) {
        return None;
    }
    let saved = cur.clone();
    cur.bump(); // !
    match parse_bracket_body(cur) {
        Some((alt, src)) => Some(InlineSpan::Image {
            src: src.to_string(),
            alt: alt.to_string(),
        }),
        None => {
            *cur = saved;
            None
        }
    }
}

/// Shared delimiter-pair grammar for bold and underline. The interior must
/// be non-empty; a bare `****` or `____` stays literal.
fn parse_pair_delimited<'a>(cur: &mut Cursor<'a>, delim: &[u8]) -> Option<&'a str> {
    cur.bump_n(delim.len());
    let inner_start = cur.pos();
    while !cur.eof() && !cur.starts_with(delim) {
        cur.bump();
    }
    if !cur.starts_with(delim) {
        return None;
    }
    let inner = cur.slice(inner_start, cur.pos());
    cur.bump_n(delim.len());
    if inner.is_empty() {
        return None;
    }
    Some(inner)
}

fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if !cur.starts_with(Emphasis::BOLD) {
        return None;
    }
    let saved = cur.clone();
    match parse_pair_delimited(cur, Emphasis::BOLD) {
        Some(inner) => Some(InlineSpan::Bold(text_run(inner))),
        None => {
            *cur = saved;
            None
        }
    }
}

fn try_parse_underline(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if !cur.starts_with(Emphasis::UNDERLINE) {
        return None;
    }
    let saved = cur.clone();
    match parse_pair_delimited(cur, Emphasis::UNDERLINE) {
        Some(inner) => Some(InlineSpan::Underline(text_run(inner))),
        None => {
            *cur = saved;
            None
        }
    }
}

fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some(Emphasis::ITALIC) {
        return None;
    }
    let saved = cur.clone();
    cur.bump(); // *
    let inner_start = cur.pos();
    while !cur.eof() && cur.peek() != Some(Emphasis::ITALIC) {
        cur.bump();
    }
    if cur.peek() != Some(Emphasis::ITALIC) {
        *cur = saved;
        return None;
    }
    let inner = cur.slice(inner_start, cur.pos());
    cur.bump(); // closing *

    if inner.is_empty() {
        *cur = saved;
        return None;
    }
    Some(InlineSpan::Italic(text_run(inner)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> InlineSpan {
        InlineSpan::Text(s.to_string())
    }

    #[test]
    fn parse_plain_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn parse_code_span() {
        assert_eq!(
            parse_inline("run `cargo test` now"),
            vec![
                text("run "),
                InlineSpan::Code("cargo test".to_string()),
                text(" now"),
            ]
        );
    }

    #[test]
    fn code_span_pre_empts_bold() {
        assert_eq!(
            parse_inline("`**x**`"),
            vec![InlineSpan::Code("**x**".to_string())]
        );
    }

    #[test]
    fn parse_bold_and_italic() {
        assert_eq!(
            parse_inline("**strong** and *soft*"),
            vec![
                InlineSpan::Bold(vec![text("strong")]),
                text(" and "),
                InlineSpan::Italic(vec![text("soft")]),
            ]
        );
    }

    #[test]
    fn parse_underline() {
        assert_eq!(
            parse_inline("__under__"),
            vec![InlineSpan::Underline(vec![text("under")])]
        );
    }

    #[test]
    fn parse_link() {
        assert_eq!(
            parse_inline("see [docs](https://example.com)"),
            vec![
                text("see "),
                InlineSpan::Link {
                    href: "https://example.com".to_string(),
                    text: "docs".to_string(),
                },
            ]
        );
    }

    #[test]
    fn parse_image() {
        assert_eq!(
            parse_inline("![diagram](img.png)"),
            vec![InlineSpan::Image {
                src: "img.png".to_string(),
                alt: "diagram".to_string(),
            }]
        );
    }

    #[test]
    fn image_sigil_pre_empts_link() {
        let spans = parse_inline("![a](b)");
        assert!(matches!(spans[0], InlineSpan::Image { .. }));
    }

    #[test]
    fn link_url_is_not_rescanned_for_emphasis() {
        assert_eq!(
            parse_inline("[x](a**b**c)"),
            vec![InlineSpan::Link {
                href: "a**b**c".to_string(),
                text: "x".to_string(),
            }]
        );
    }

    #[test]
    fn unclosed_code_span_is_literal() {
        assert_eq!(parse_inline("`unclosed"), vec![text("`unclosed")]);
    }

    #[test]
    fn link_without_href_is_literal() {
        assert_eq!(parse_inline("[just brackets]"), vec![text("[just brackets]")]);
    }

    #[test]
    fn unclosed_bold_is_literal() {
        assert_eq!(parse_inline("**dangling"), vec![text("**dangling")]);
    }

    #[test]
    fn empty_delimiter_pairs_stay_literal() {
        assert_eq!(parse_inline("****"), vec![text("****")]);
        assert_eq!(parse_inline("``"), vec![text("``")]);
    }

    #[test]
    fn empty_input_yields_no_spans() {
        assert_eq!(parse_inline(""), vec![]);
    }

    #[test]
    fn concatenated_text_equals_input_minus_markers() {
        let spans = parse_inline("a **b** `c` [d](e)");
        let mut flat = String::new();
        for s in &spans {
            match s {
                InlineSpan::Text(t) | InlineSpan::Code(t) => flat.push_str(t),
                InlineSpan::Bold(run) | InlineSpan::Italic(run) | InlineSpan::Underline(run) => {
                    for inner in run {
                        if let InlineSpan::Text(t) = inner {
                            flat.push_str(t);
                        }
                    }
                }
                InlineSpan::Link { text, .. } => flat.push_str(text),
                InlineSpan::Image { alt, .. } => flat.push_str(alt),
            }
        }
        assert_eq!(flat, "a b c d");
    }

    #[test]
    fn multibyte_text_survives() {
        assert_eq!(
            parse_inline("héllo **wörld**"),
            vec![text("héllo "), InlineSpan::Bold(vec![text("wörld")])]
        );
    }
}
