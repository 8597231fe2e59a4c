//! Postal addresses.

use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, CountryName, StreetName, ZipCode};
use fake::locales::EN;

use super::{LocalFormatter, from_table};
use crate::arguments::{Arguments, Value};
use crate::provider::{FnProvider, FormatterResult, FormatterRng};

const ADDRESS_FORMAT: &str = "{{building_number}} {{street_name}}, {{city}} {{postcode}}";

const FORMATTERS: &[(&str, LocalFormatter)] = &[
    ("building_number", building_number),
    ("city", city),
    ("country", country),
    ("postcode", postcode),
    ("street_name", street_name),
];

/// Returns the `address` provider.
///
/// Formatters: `building_number`, `city`, `country`, `postcode`,
/// `street_name` and the composite `address`.
#[must_use]
pub fn address() -> FnProvider {
    from_table("address", FORMATTERS).with_composite("address", ADDRESS_FORMAT)
}

fn building_number(rng: &mut FormatterRng, _args: &Arguments) -> FormatterResult {
    let number: String = BuildingNumber(EN).fake_with_rng(rng);
    Ok(Value::String(number))
}

fn city(rng: &mut FormatterRng, _args: &Arguments) -> FormatterResult {
    let name: String = CityName(EN).fake_with_rng(rng);
    Ok(Value::String(name))
}

fn country(rng: &mut FormatterRng, _args: &Arguments) -> FormatterResult {
    let name: String = CountryName(EN).fake_with_rng(rng);
    Ok(Value::String(name))
}

fn postcode(rng: &mut FormatterRng, _args: &Arguments) -> FormatterResult {
    let code: String = ZipCode(EN).fake_with_rng(rng);
    Ok(Value::String(code))
}

fn street_name(rng: &mut FormatterRng, _args: &Arguments) -> FormatterResult {
    let name: String = StreetName(EN).fake_with_rng(rng);
    Ok(Value::String(name))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::provider::Provider;

    #[test]
    fn address_line_expands_every_part() {
        let mut rng = FormatterRng::seed_from_u64(3);
        let value = address()
            .invoke("address", &mut rng, &Arguments::new())
            .expect("address formats");

        let text = value.as_str().expect("string value");
        assert!(text.contains(", "), "unexpected address: {text}");
        assert!(!text.contains("{{"), "unexpanded token in: {text}");
    }

    #[test]
    fn exposes_documented_formatters() {
        assert_eq!(
            address().formatter_names(),
            vec![
                "address",
                "building_number",
                "city",
                "country",
                "postcode",
                "street_name"
            ]
        );
    }
}
