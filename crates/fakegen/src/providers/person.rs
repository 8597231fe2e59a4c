//! Person names.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;

use super::{LocalFormatter, from_table};
use crate::arguments::{Arguments, Value};
use crate::provider::{FnProvider, FormatterResult, FormatterRng};

const NAME_FORMAT: &str = "{{first_name}} {{last_name}}";

const FORMATTERS: &[(&str, LocalFormatter)] =
    &[("first_name", first_name), ("last_name", last_name)];

/// Returns the `person` provider: `first_name`, `last_name` and the
/// composite `name`.
#[must_use]
pub fn person() -> FnProvider {
    from_table("person", FORMATTERS).with_composite("name", NAME_FORMAT)
}

fn first_name(rng: &mut FormatterRng, _args: &Arguments) -> FormatterResult {
    let first: String = FirstName(EN).fake_with_rng(rng);
    Ok(Value::String(first))
}

fn last_name(rng: &mut FormatterRng, _args: &Arguments) -> FormatterResult {
    let last: String = LastName(EN).fake_with_rng(rng);
    Ok(Value::String(last))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::provider::Provider;

    #[test]
    fn name_joins_first_and_last_name() {
        let mut rng = FormatterRng::seed_from_u64(2026);
        let value = person()
            .invoke("name", &mut rng, &Arguments::new())
            .expect("name formats");

        let text = value.as_str().expect("string value");
        assert!(text.contains(' '), "unexpected name: {text}");
    }

    #[test]
    fn same_seed_produces_same_name() {
        let provider = person();
        let mut first = FormatterRng::seed_from_u64(11);
        let mut second = FormatterRng::seed_from_u64(11);

        assert_eq!(
            provider.invoke("first_name", &mut first, &Arguments::new()),
            provider.invoke("first_name", &mut second, &Arguments::new())
        );
    }
}
