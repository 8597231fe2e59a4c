//! Flat `{{ name }}` token scanning and substitution.
//!
//! A token is two opening braces, optional whitespace, a formatter name made
//! of word characters, optional whitespace and two closing braces. Anything
//! that does not match that shape in full is literal text: unterminated
//! braces, names with spaces or a `:argument` suffix are passed through
//! untouched, never reported as errors.
//!
//! Only the braces and the name are replaced. Whitespace padding inside the
//! braces stays in the output, so `"{{ word }}"` expands to `" value "`.
//!
//! Scanning alternates between two states. Outside a token the scanner looks
//! for the next `{{`; inside it tries to read the rest of the token. When the
//! attempt fails only the first `{` becomes literal and scanning resumes one
//! character later, so `{{{foo}}}` still expands its inner token.

use std::ops::Range;

use tracing::trace;

use crate::arguments::Value;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A `{{ name }}` token found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    name: &'a str,
    leading: &'a str,
    trailing: &'a str,
    span: Range<usize>,
}

impl<'a> Token<'a> {
    /// Returns the formatter name inside the braces.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the whitespace between the opening braces and the name.
    #[must_use]
    pub const fn leading(&self) -> &'a str {
        self.leading
    }

    /// Returns the whitespace between the name and the closing braces.
    #[must_use]
    pub const fn trailing(&self) -> &'a str {
        self.trailing
    }

    /// Returns the byte range of the whole token, braces included.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// A piece of a scanned template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output unchanged.
    Literal(&'a str),
    /// A token to be replaced by formatter output.
    Token(Token<'a>),
}

/// Splits `template` into literal text and tokens, in order.
///
/// # Example
///
/// ```
/// use fakegen::template::{Segment, segments};
///
/// let parts: Vec<_> = segments("Hi {{ name }}!").collect();
///
/// assert_eq!(parts.len(), 3);
/// assert_eq!(parts.first(), Some(&Segment::Literal("Hi ")));
/// ```
#[must_use]
pub const fn segments(template: &str) -> Segments<'_> {
    Segments {
        template,
        cursor: 0,
        pending: None,
    }
}

/// Returns every token in `template` without resolving any of them.
#[must_use]
pub fn tokens(template: &str) -> Vec<Token<'_>> {
    segments(template)
        .filter_map(|segment| match segment {
            Segment::Token(token) => Some(token),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Replaces each token with the string `resolve` returns for its name.
///
/// The token's inner whitespace padding is kept on either side of the
/// resolved text.
///
/// Tokens are resolved left to right. The first failure aborts the
/// expansion and is returned as is; no partial output is produced.
///
/// # Errors
///
/// Returns the first error produced by `resolve`.
///
/// # Example
///
/// ```
/// use fakegen::template::expand;
///
/// let out: Result<String, ()> = expand("{{a}}-{{ b }}", |name| Ok(name.to_uppercase()));
///
/// assert_eq!(out, Ok("A- B ".to_owned()));
/// ```
pub fn expand<E, F>(template: &str, mut resolve: F) -> Result<String, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    let mut output = String::with_capacity(template.len());
    for segment in segments(template) {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Token(token) => {
                let value = resolve(token.name())?;
                trace!(formatter = token.name(), "expanded template token");
                output.push_str(token.leading());
                output.push_str(&value);
                output.push_str(token.trailing());
            }
        }
    }
    Ok(output)
}

/// Returns the text substituted for a formatter result.
///
/// Strings are inserted verbatim; other values use their JSON form.
#[must_use]
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Iterator over the [`Segment`]s of a template.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    template: &'a str,
    cursor: usize,
    pending: Option<Token<'a>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            self.cursor = token.span.end;
            return Some(Segment::Token(token));
        }

        let mut search_from = self.cursor;
        while let Some(offset) = self.template.get(search_from..)?.find(OPEN) {
            let start = search_from + offset;
            if let Some(token) = token_at(self.template, start) {
                if start == self.cursor {
                    self.cursor = token.span.end;
                    return Some(Segment::Token(token));
                }
                let literal = self.template.get(self.cursor..start)?;
                self.cursor = start;
                self.pending = Some(token);
                return Some(Segment::Literal(literal));
            }
            // `{` is one byte wide, so the next index is a char boundary.
            search_from = start + 1;
        }

        let rest = self.template.get(self.cursor..)?;
        self.cursor = self.template.len();
        (!rest.is_empty()).then_some(Segment::Literal(rest))
    }
}

/// Attempts to read a complete token starting at byte `start`.
fn token_at(template: &str, start: usize) -> Option<Token<'_>> {
    let body = template.get(start..)?.strip_prefix(OPEN)?;
    let name_part = body.trim_start();
    let leading = body.get(..body.len() - name_part.len())?;
    let name_len = name_part
        .find(|c: char| !is_word_char(c))
        .unwrap_or(name_part.len());
    if name_len == 0 {
        return None;
    }
    let name = name_part.get(..name_len)?;
    let after_name = name_part.get(name_len..)?;
    let tail = after_name.trim_start();
    if !tail.starts_with(CLOSE) {
        return None;
    }
    let trailing = after_name.get(..after_name.len() - tail.len())?;
    let consumed = template.len() - start - tail.len() + CLOSE.len();
    Some(Token {
        name,
        leading,
        trailing,
        span: start..start + consumed,
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
