//! Pluggable fake data generation behind a single generator facade.
//!
//! A [`Generator`] owns an ordered set of providers. Each provider exposes
//! named formatters; asking the generator for a name resolves it against the
//! providers newest first, so a provider registered later shadows any
//! earlier formatter with the same name.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Registering providers built from closures or custom [`Provider`] types
//! - Resolving a name to a reusable [`Formatter`] binding
//! - Invoking formatters by name, or with call syntax via [`invoke!`]
//! - Expanding `{{ name }}` templates against the registered formatters
//! - Seeding the random source for reproducible output
//!
//! # Example
//!
//! ```
//! use fakegen::{Arguments, FnProvider, Generator, Value, invoke};
//!
//! let mut generator = Generator::with_seed(7);
//! generator.add_provider(
//!     FnProvider::new("greetings")
//!         .with_formatter("greeting", |_, _| Ok(Value::from("hello")))
//!         .with_formatter("shout", |_, args| {
//!             let word = args.get_str(0, "word")?.unwrap_or("hey");
//!             Ok(Value::from(word.to_uppercase()))
//!         }),
//! );
//!
//! assert_eq!(generator.format("greeting", &Arguments::new()), Ok(Value::from("hello")));
//! assert_eq!(invoke!(generator, shout("yo")), Ok(Value::from("YO")));
//! assert_eq!(
//!     generator.parse("{{greeting}}, {{ greeting }}!").expect("known formatter"),
//!     "hello,  hello !"
//! );
//! ```

mod arguments;
pub mod cli;
pub mod documentor;
mod error;
mod generator;
mod provider;
pub mod providers;
mod registry;
pub mod template;
pub mod text;

pub use arguments::{Arguments, Value};
pub use error::{FormatterError, GeneratorError};
pub use generator::{Generator, MAX_COMPOSITE_DEPTH};
pub use provider::{FnProvider, FormatterFn, FormatterResult, FormatterRng, Provider};
pub use registry::{Formatter, FormatterRegistry};
