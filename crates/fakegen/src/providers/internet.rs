//! User names, domains and e-mail addresses.

use fake::Fake;
use fake::faker::company::raw::CompanyName;
use fake::faker::internet::raw::{DomainSuffix, Username};
use fake::faker::lorem::raw::Sentence;
use fake::locales::EN;

use super::{LocalFormatter, from_table};
use crate::arguments::{Arguments, Value};
use crate::provider::{FnProvider, FormatterResult, FormatterRng};
use crate::text::{slugified, slugify};

const EMAIL_FORMAT: &str = "{{user_name}}@{{domain_name}}";

const FORMATTERS: &[(&str, LocalFormatter)] = &[
    ("domain_name", domain_name),
    ("domain_word", domain_word),
    ("user_name", user_name),
];

/// Returns the `internet` provider.
///
/// Formatters: `domain_name`, `domain_word`, `user_name`, the composite
/// `email` and `slug(value)`, which slugifies `value` or a short generated
/// sentence.
#[must_use]
pub fn internet() -> FnProvider {
    from_table("internet", FORMATTERS)
        .with_composite("email", EMAIL_FORMAT)
        .with_formatter("slug", slugified(slug_source))
}

fn user_name(rng: &mut FormatterRng, _args: &Arguments) -> FormatterResult {
    let name: String = Username(EN).fake_with_rng(rng);
    Ok(Value::String(name))
}

fn domain_word(rng: &mut FormatterRng, _args: &Arguments) -> FormatterResult {
    let company: String = CompanyName(EN).fake_with_rng(rng);
    let first = company.split_whitespace().next().unwrap_or_default();
    Ok(Value::String(slugify(first, false)))
}

fn domain_name(rng: &mut FormatterRng, args: &Arguments) -> FormatterResult {
    let label = domain_word(rng, args)?;
    let suffix: String = DomainSuffix(EN).fake_with_rng(rng);
    let word = label.as_str().unwrap_or_default();
    Ok(Value::String(format!("{word}.{suffix}")))
}

fn slug_source(rng: &mut FormatterRng, args: &Arguments) -> FormatterResult {
    if let Some(value) = args.get_str(0, "value")? {
        return Ok(Value::from(value));
    }
    let sentence: String = Sentence(EN, 3..6).fake_with_rng(rng);
    Ok(Value::String(sentence))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::provider::Provider;

    fn invoke(name: &str, args: &Arguments) -> String {
        let mut rng = FormatterRng::seed_from_u64(21);
        let value = internet()
            .invoke(name, &mut rng, args)
            .expect("formatter succeeds");
        value.as_str().expect("string value").to_owned()
    }

    #[test]
    fn email_has_user_and_domain() {
        let email = invoke("email", &Arguments::new());

        let (user, domain) = email.split_once('@').expect("contains @");
        assert!(!user.is_empty());
        assert!(domain.contains('.'), "unexpected domain: {domain}");
    }

    #[test]
    fn domain_word_is_a_slug() {
        let word = invoke("domain_word", &Arguments::new());

        assert_eq!(slugify(&word, false), word);
    }

    #[test]
    fn slug_uses_supplied_value() {
        assert_eq!(
            invoke("slug", &Arguments::new().with_positional("Hello, World!")),
            "hello-world"
        );
    }

    #[test]
    fn slug_generates_text_when_no_value_is_given() {
        let slug = invoke("slug", &Arguments::new());

        assert!(!slug.is_empty());
        assert_eq!(slugify(&slug, false), slug);
    }
}
