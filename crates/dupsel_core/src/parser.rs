use cssparser::{Delimiter, ParseError, Parser, ParserInput, Token};
use log::{debug, trace};

/// Returns the `@import` specifiers of raw SCSS source in authored order, quotes stripped.
///
/// Imports nested inside blocks are included, a comma-separated `@import` yields one
/// specifier per string and `url(...)` imports are ignored.
pub fn imports_for(source: &str) -> Vec<String> {
    let stripped = strip_line_comments(source);
    let mut input = ParserInput::new(&stripped);
    let mut parser = Parser::new(&mut input);

    let mut specs = Vec::new();
    collect_imports(&mut parser, &mut specs);

    debug!("Found {} import specifiers", specs.len());
    specs
}

fn collect_imports<'i, 't>(input: &mut Parser<'i, 't>, specs: &mut Vec<String>) {
    loop {
        let token = match input.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::AtKeyword(ref name) if name.eq_ignore_ascii_case("import") => {
                let _ = input.parse_until_after(Delimiter::Semicolon, |input| {
                    read_import_arguments(input, specs);
                    Ok::<(), ParseError<'i, ()>>(())
                });
            }
            Token::CurlyBracketBlock => {
                let _ = input.parse_nested_block(|input| {
                    collect_imports(input, specs);
                    Ok::<(), ParseError<'i, ()>>(())
                });
            }
            _ => {}
        }
    }
}

fn read_import_arguments(input: &mut Parser<'_, '_>, specs: &mut Vec<String>) {
    while let Ok(token) = input.next() {
        // url() imports arrive as UnquotedUrl or Function tokens and are left alone
        if let Token::QuotedString(value) = token {
            trace!("Found import: '{}'", value);
            specs.push(value.to_string());
        }
    }
}

/// Blanks out SCSS `//` line comments, which are not CSS and would otherwise be tokenized.
fn strip_line_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut quote: Option<char> = None;
    let mut paren_depth = 0usize;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == q || c == '\n' {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => {
                quote = Some(c);
                out.push(c);
            }
            '(' => {
                paren_depth += 1;
                out.push(c);
            }
            ')' => {
                paren_depth = paren_depth.saturating_sub(1);
                out.push(c);
            }
            // `//` inside parentheses is part of a url, not a comment
            '/' if paren_depth == 0 && chars.peek() == Some(&'/') => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                out.push(c);
                if let Some(star) = chars.next() {
                    out.push(star);
                }
                let mut prev = '\0';
                for inner in chars.by_ref() {
                    out.push(inner);
                    if prev == '*' && inner == '/' {
                        break;
                    }
                    prev = inner;
                }
            }
            _ => out.push(c),
        }
    }

    out
}
