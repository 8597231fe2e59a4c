//! Slug helpers for formatter output.
//!
//! These are plain string utilities with no knowledge of the registry. The
//! `slugified*` adapters wrap a formatter so its string output is slugified,
//! which is how providers build URL-safe values from free text.

use unicode_normalization::UnicodeNormalization;

use crate::arguments::{Arguments, Value};
use crate::provider::{FormatterResult, FormatterRng};

/// Converts `value` into a lowercase, hyphen-separated ASCII slug.
///
/// Accented characters are decomposed and stripped to their ASCII base,
/// anything other than ASCII letters, digits, underscores, whitespace and
/// hyphens is dropped (dots survive when `allow_dots` is set), and runs of
/// whitespace or hyphens collapse into a single hyphen.
///
/// # Examples
///
/// ```
/// use fakegen::text::slugify;
///
/// assert_eq!(slugify("a'b/c", false), "abc");
/// assert_eq!(slugify("àeì.öú", false), "aeiou");
/// assert_eq!(slugify("àeì.öú", true), "aei.ou");
/// assert_eq!(slugify("  Hello   World -- Again ", false), "hello-world-again");
/// ```
#[must_use]
pub fn slugify(value: &str, allow_dots: bool) -> String {
    let kept: String = value
        .nfkd()
        .filter(char::is_ascii)
        .filter(|c| is_slug_char(*c) || (allow_dots && *c == '.'))
        .collect();

    let mut slug = String::with_capacity(kept.len());
    let mut in_separator = false;
    for c in kept.trim_matches(is_space).chars().flat_map(char::to_lowercase) {
        if c == '-' || is_space(c) {
            if !in_separator {
                slug.push('-');
            }
            in_separator = true;
        } else {
            slug.push(c);
            in_separator = false;
        }
    }
    slug
}

/// Slugifies a domain label, keeping dots.
///
/// ```
/// use fakegen::text::slugify_domain;
///
/// assert_eq!(slugify_domain("a'b/.c"), "ab.c");
/// ```
#[must_use]
pub fn slugify_domain(value: &str) -> String {
    slugify(value, true)
}

/// Wraps `formatter` so string results are passed through [`slugify`].
pub fn slugified<F>(
    formatter: F,
) -> impl Fn(&mut FormatterRng, &Arguments) -> FormatterResult + Send + Sync + 'static
where
    F: Fn(&mut FormatterRng, &Arguments) -> FormatterResult + Send + Sync + 'static,
{
    move |rng: &mut FormatterRng, args: &Arguments| {
        formatter(rng, args).map(|value| slugify_value(value, false))
    }
}

/// Wraps `formatter` so string results are passed through
/// [`slugify_domain`].
pub fn slugified_domain<F>(
    formatter: F,
) -> impl Fn(&mut FormatterRng, &Arguments) -> FormatterResult + Send + Sync + 'static
where
    F: Fn(&mut FormatterRng, &Arguments) -> FormatterResult + Send + Sync + 'static,
{
    move |rng: &mut FormatterRng, args: &Arguments| {
        formatter(rng, args).map(|value| slugify_value(value, true))
    }
}

fn slugify_value(value: Value, allow_dots: bool) -> Value {
    match value {
        Value::String(text) => Value::String(slugify(&text, allow_dots)),
        other => other,
    }
}

const fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || is_space(c)
}

/// ASCII whitespace including vertical tab and the `\x1c`..=`\x1f`
/// separators, which `char::is_ascii_whitespace` leaves out.
const fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, '\x0b' | '\x1c'..='\x1f')
}

#[cfg(test)]
mod tests {
    //! Covers slug normalisation and the formatter adapters.

    use rand::SeedableRng;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("a'b/c", false, "abc")]
    #[case("àeìöú", false, "aeiou")]
    #[case("àeì.öú", false, "aeiou")]
    #[case("àeì.öú", true, "aei.ou")]
    #[case("Hello World", false, "hello-world")]
    #[case("--a  --  b--", false, "-a-b-")]
    #[case("snake_case stays", false, "snake_case-stays")]
    #[case("日本", false, "")]
    #[case::vertical_tab("a\x0bb", false, "a-b")]
    #[case::unit_separator("a\x1fb", false, "a-b")]
    #[case::separator_edges("\x1c a b \x0b", false, "a-b")]
    fn slugify_normalises(#[case] input: &str, #[case] allow_dots: bool, #[case] expected: &str) {
        assert_eq!(slugify(input, allow_dots), expected);
    }

    #[test]
    fn slugify_domain_keeps_dots() {
        assert_eq!(slugify_domain("a'b/.c"), "ab.c");
    }

    #[test]
    fn slugified_adapter_rewrites_string_output() {
        let formatter = slugified(|_, _| Ok(Value::from("a'b/c")));
        let mut rng = FormatterRng::seed_from_u64(0);

        assert_eq!(formatter(&mut rng, &Arguments::new()), Ok(Value::from("abc")));
    }

    #[test]
    fn slugified_domain_adapter_keeps_dots() {
        let formatter = slugified_domain(|_, _| Ok(Value::from("a'b/.c")));
        let mut rng = FormatterRng::seed_from_u64(0);

        assert_eq!(formatter(&mut rng, &Arguments::new()), Ok(Value::from("ab.c")));
    }

    #[test]
    fn slugified_adapter_leaves_non_strings_alone() {
        let formatter = slugified(|_, _| Ok(Value::from(12)));
        let mut rng = FormatterRng::seed_from_u64(0);

        assert_eq!(formatter(&mut rng, &Arguments::new()), Ok(Value::from(12)));
    }
}
