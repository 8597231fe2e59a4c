//! Built-in data providers backed by the `fake` crate.
//!
//! These are ordinary plug-ins: the registry and generator know nothing about
//! them, and callers may register any subset, or shadow individual
//! formatters by registering their own provider afterwards. Composites such
//! as `name`, `address` and `email` pick up shadowed parts as well.
//!
//! # Example
//!
//! ```
//! use fakegen::{Generator, providers};
//!
//! let mut generator = Generator::with_seed(2026);
//! providers::register_defaults(&mut generator);
//!
//! let line = generator.parse("{{name}} lives in {{city}}").expect("known formatters");
//! assert!(line.contains(" lives in "));
//! ```

mod address;
mod internet;
mod lorem;
mod person;

use crate::arguments::Arguments;
use crate::error::FormatterError;
use crate::generator::Generator;
use crate::provider::{FnProvider, FormatterResult, FormatterRng};

pub use address::address;
pub use internet::internet;
pub use lorem::lorem;
pub use person::person;

/// A formatter implemented as a plain function.
type LocalFormatter = fn(&mut FormatterRng, &Arguments) -> FormatterResult;

/// Registers the person, address, lorem and internet providers, in that
/// order.
pub fn register_defaults(generator: &mut Generator) {
    generator.add_provider(person());
    generator.add_provider(address());
    generator.add_provider(lorem());
    generator.add_provider(internet());
}

/// Builds a provider from a table of named functions.
fn from_table(name: &str, table: &[(&'static str, LocalFormatter)]) -> FnProvider {
    table
        .iter()
        .fold(FnProvider::new(name), |provider, (formatter_name, formatter)| {
            provider.with_formatter(*formatter_name, *formatter)
        })
}

/// Largest count accepted by formatters that repeat a fragment.
const MAX_COUNT: usize = 10_000;

/// Reads a count parameter, falling back to `default`.
fn count_argument(
    args: &Arguments,
    index: usize,
    name: &str,
    default: usize,
) -> Result<usize, FormatterError> {
    let count = args.get_usize(index, name)?.unwrap_or(default);
    if count > MAX_COUNT {
        return Err(FormatterError::InvalidArgument {
            parameter: name.to_owned(),
            expected: "a count no greater than 10000",
        });
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::arguments::Value;

    #[test]
    fn defaults_register_four_providers() {
        let mut generator = Generator::with_seed(1);
        register_defaults(&mut generator);

        let names: Vec<_> = generator
            .registry()
            .providers()
            .map(|p| p.name().to_owned())
            .collect();

        assert_eq!(names, vec!["internet", "lorem", "address", "person"]);
    }

    #[test]
    fn every_default_formatter_runs_without_arguments() {
        let mut generator = Generator::with_seed(5);
        register_defaults(&mut generator);
        let names: BTreeSet<String> = generator.registry().formatter_names();

        for name in names {
            let value = generator.format(&name, &Arguments::new());
            assert!(value.is_ok(), "{name} failed: {value:?}");
        }
    }

    #[test]
    fn composites_pick_up_shadowed_parts() {
        let mut generator = Generator::with_seed(4);
        register_defaults(&mut generator);
        generator.add_provider(
            FnProvider::new("local")
                .with_formatter("city", |_, _| Ok(Value::from("Springfield")))
                .with_formatter("first_name", |_, _| Ok(Value::from("Ada"))),
        );

        let address = generator
            .format("address", &Arguments::new())
            .expect("address formats");
        let name = generator
            .format("name", &Arguments::new())
            .expect("name formats");

        assert!(
            address.as_str().is_some_and(|text| text.contains(", Springfield ")),
            "unexpected address: {address}"
        );
        assert!(
            name.as_str().is_some_and(|text| text.starts_with("Ada ")),
            "unexpected name: {name}"
        );
    }

    #[test]
    fn count_argument_defaults_when_absent() {
        assert_eq!(count_argument(&Arguments::new(), 0, "nb", 3), Ok(3));
        assert_eq!(
            count_argument(&Arguments::new().with_keyword("nb", 5), 0, "nb", 3),
            Ok(5)
        );
    }

    #[test]
    fn count_argument_rejects_oversized_counts() {
        let args = Arguments::new().with_positional(MAX_COUNT + 1);

        assert_eq!(
            count_argument(&args, 0, "nb", 3),
            Err(FormatterError::InvalidArgument {
                parameter: "nb".to_owned(),
                expected: "a count no greater than 10000",
            })
        );
    }
}
