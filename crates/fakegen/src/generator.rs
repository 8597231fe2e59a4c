//! The generator facade: registration, dispatch by name and templating.
//!
//! Every call resolves its formatter afresh through the registry, so a
//! provider registered between two calls is visible to the second one. The
//! generator owns the random source handed to formatters; seeding it makes
//! the output of a given provider set reproducible.

use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::arguments::{Arguments, Value};
use crate::error::GeneratorError;
use crate::provider::Provider;
use crate::registry::{Formatter, FormatterRegistry};
use crate::template::{expand, render_value};

/// Resolves formatter names and expands templates against its providers.
///
/// # Example
///
/// ```
/// use fakegen::{Arguments, FnProvider, Generator, Value};
///
/// let mut generator = Generator::with_seed(7);
/// generator.add_provider(
///     FnProvider::new("foo").with_formatter("foo_formatter", |_, _| Ok(Value::from("foobar"))),
/// );
///
/// let value = generator.format("foo_formatter", &Arguments::new()).expect("formats");
/// assert_eq!(value, Value::from("foobar"));
///
/// let text = generator.parse("This is {{foo_formatter}}").expect("parses");
/// assert_eq!(text, "This is foobar");
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    registry: FormatterRegistry,
    rng: ChaCha8Rng,
    depth: usize,
}

/// Deepest chain of composite formatters expanded inside one another.
pub const MAX_COMPOSITE_DEPTH: usize = 16;

impl Generator {
    /// Creates a generator with no providers and an unpredictable seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: FormatterRegistry::new(),
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
            depth: 0,
        }
    }

    /// Creates a generator with no providers and a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            registry: FormatterRegistry::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            depth: 0,
        }
    }

    /// Reseeds the random source handed to formatters.
    pub fn seed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Registers a provider with priority over every earlier provider.
    pub fn add_provider<P>(&mut self, provider: P)
    where
        P: Provider + 'static,
    {
        self.add_shared_provider(Arc::new(provider));
    }

    /// Registers a provider that is also held elsewhere.
    pub fn add_shared_provider(&mut self, provider: Arc<dyn Provider>) {
        self.registry.add(provider);
    }

    /// Returns the registry backing this generator.
    #[must_use]
    pub const fn registry(&self) -> &FormatterRegistry {
        &self.registry
    }

    /// Resolves `name` to a formatter bound to its provider.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::NameNotFound`] when no provider exposes
    /// `name`.
    pub fn get_formatter(&self, name: &str) -> Result<Formatter, GeneratorError> {
        self.registry.resolve(name)
    }

    /// Resolves and invokes `name`, returning its value unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::NameNotFound`] for unknown names and
    /// [`GeneratorError::Formatter`] carrying the formatter's own error.
    pub fn format(&mut self, name: &str, args: &Arguments) -> Result<Value, GeneratorError> {
        let formatter = self.get_formatter(name)?;
        self.call(&formatter, args)
    }

    /// Invokes an already resolved formatter with this generator's random
    /// source.
    ///
    /// A composite formatter is expanded with [`Generator::parse`], so each
    /// of its parts resolves newest provider first; its arguments are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Formatter`] carrying the formatter's own
    /// error, any error raised while expanding a composite, and
    /// [`GeneratorError::CompositeDepth`] when composites nest deeper than
    /// [`MAX_COMPOSITE_DEPTH`].
    pub fn call(&mut self, formatter: &Formatter, args: &Arguments) -> Result<Value, GeneratorError> {
        if let Some(template) = formatter.composite() {
            return self.expand_composite(formatter.name(), template).map(Value::String);
        }
        Ok(formatter.call(&mut self.rng, args)?)
    }

    fn expand_composite(&mut self, name: &str, template: &str) -> Result<String, GeneratorError> {
        if self.depth >= MAX_COMPOSITE_DEPTH {
            return Err(GeneratorError::CompositeDepth {
                name: name.to_owned(),
            });
        }
        self.depth += 1;
        let expanded = self.parse(template);
        self.depth -= 1;
        expanded
    }

    /// Replaces every `{{ name }}` token in `template` with the output of the
    /// formatter it names, invoked without arguments.
    ///
    /// # Errors
    ///
    /// Fails with the first resolution or formatter error; text that is not
    /// a complete token never fails.
    pub fn parse(&mut self, template: &str) -> Result<String, GeneratorError> {
        expand(template, |name| {
            self.format(name, &Arguments::new())
                .map(|value| render_value(&value))
        })
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Calls a formatter with method-like syntax.
///
/// Rust has no fallback member dispatch, so the shorthand for
/// `generator.some_formatter(args)` is a macro expanding to
/// [`Generator::format`]. Positional arguments come first; keyword arguments
/// follow a `;`.
///
/// # Example
///
/// ```
/// use fakegen::{FnProvider, Generator, Value, invoke};
///
/// let mut generator = Generator::with_seed(1);
/// generator.add_provider(FnProvider::new("foo").with_formatter(
///     "foo_formatter_with_arguments",
///     |_, args| {
///         let param = args.get_str(0, "param")?.unwrap_or_default();
///         let append = args.get_str(1, "append")?.unwrap_or_default();
///         Ok(Value::from(format!("baz{param}{append}")))
///     },
/// ));
///
/// let value = invoke!(generator, foo_formatter_with_arguments("foo"; append = "!"));
/// assert_eq!(value, Ok(Value::from("bazfoo!")));
/// ```
#[macro_export]
macro_rules! invoke {
    ($generator:expr, $name:ident ( $($positional:expr),* $(,)? $(; $($key:ident = $value:expr),* $(,)?)? )) => {{
        let arguments = $crate::Arguments::new()
            $(.with_positional($positional))*
            $($(.with_keyword(stringify!($key), $value))*)?;
        $generator.format(stringify!($name), &arguments)
    }};
}
