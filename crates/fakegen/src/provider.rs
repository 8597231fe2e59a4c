//! The provider capability consumed by the registry.
//!
//! A provider is any value that exposes named formatter operations. The
//! registry only asks whether a name exists and invokes it. [`FnProvider`]
//! covers the common case of a provider assembled from closures at
//! registration time.
//!
//! A formatter may also be a composite: a `{{ name }}` template over other
//! formatter names. The generator expands composites against the whole
//! registry, so shadowing one part of a composite changes its output too.

use std::collections::BTreeMap;
use std::fmt;

use rand_chacha::ChaCha8Rng;

use crate::arguments::{Arguments, Value};
use crate::error::FormatterError;
use crate::template::{expand, render_value};

/// Random source handed to every formatter invocation.
pub type FormatterRng = ChaCha8Rng;

/// Result of a single formatter invocation.
pub type FormatterResult = Result<Value, FormatterError>;

/// Type-erased formatter callable stored by [`FnProvider`].
pub type FormatterFn = dyn Fn(&mut FormatterRng, &Arguments) -> FormatterResult + Send + Sync;

/// A bundle of named formatter operations.
///
/// Implementations decide which names they expose; the registry never
/// validates a provider when it is added.
pub trait Provider: Send + Sync {
    /// Human-readable provider name used by listings.
    fn name(&self) -> &str;

    /// Names of every formatter this provider exposes.
    fn formatter_names(&self) -> Vec<&str>;

    /// Returns `true` when the provider exposes `name`.
    ///
    /// Matching is exact: no case folding or fuzzy lookup.
    fn has_formatter(&self, name: &str) -> bool {
        self.formatter_names().contains(&name)
    }

    /// Returns the template behind `name` when it is a composite formatter.
    fn composite(&self, _name: &str) -> Option<&str> {
        None
    }

    /// Invokes the formatter called `name`.
    ///
    /// # Errors
    ///
    /// Returns whatever the formatter fails with, or
    /// [`FormatterError::Unsupported`] when `name` is not exposed.
    fn invoke(&self, name: &str, rng: &mut FormatterRng, args: &Arguments) -> FormatterResult;
}

/// A provider built from closures registered by name.
///
/// # Example
///
/// ```
/// use fakegen::{FnProvider, Provider, Value};
///
/// let provider = FnProvider::new("foo")
///     .with_formatter("foo_formatter", |_, _| Ok(Value::from("foobar")));
///
/// assert!(provider.has_formatter("foo_formatter"));
/// assert!(!provider.has_formatter("Foo_Formatter"));
/// ```
pub struct FnProvider {
    name: String,
    formatters: BTreeMap<String, Box<FormatterFn>>,
    composites: BTreeMap<String, String>,
}

impl FnProvider {
    /// Creates a provider with no formatters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formatters: BTreeMap::new(),
            composites: BTreeMap::new(),
        }
    }

    /// Adds a formatter, replacing any previous formatter with the same name.
    #[must_use]
    pub fn with_formatter<F>(mut self, name: impl Into<String>, formatter: F) -> Self
    where
        F: Fn(&mut FormatterRng, &Arguments) -> FormatterResult + Send + Sync + 'static,
    {
        self.insert_formatter(name, formatter);
        self
    }

    /// Adds a formatter in place.
    pub fn insert_formatter<F>(&mut self, name: impl Into<String>, formatter: F)
    where
        F: Fn(&mut FormatterRng, &Arguments) -> FormatterResult + Send + Sync + 'static,
    {
        let key = name.into();
        self.composites.remove(&key);
        self.formatters.insert(key, Box::new(formatter));
    }

    /// Adds a composite formatter expanding `template`, replacing any
    /// previous formatter with the same name.
    ///
    /// Through a [`Generator`](crate::Generator) each token resolves against
    /// every registered provider, newest first. Invoked on the provider
    /// directly, tokens resolve against this provider's closures only.
    #[must_use]
    pub fn with_composite(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        let key = name.into();
        self.formatters.remove(&key);
        self.composites.insert(key, template.into());
        self
    }

    fn expand_locally(&self, template: &str, rng: &mut FormatterRng) -> FormatterResult {
        let expanded = expand(template, |part| {
            let formatter = self
                .formatters
                .get(part)
                .ok_or_else(|| FormatterError::Unsupported {
                    formatter: part.to_owned(),
                })?;
            formatter(rng, &Arguments::new()).map(|value| render_value(&value))
        })?;
        Ok(Value::String(expanded))
    }
}

impl fmt::Debug for FnProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProvider")
            .field("name", &self.name)
            .field("formatters", &self.formatters.keys().collect::<Vec<_>>())
            .field("composites", &self.composites)
            .finish()
    }
}

impl Provider for FnProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn formatter_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .formatters
            .keys()
            .chain(self.composites.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names
    }

    fn has_formatter(&self, name: &str) -> bool {
        self.formatters.contains_key(name) || self.composites.contains_key(name)
    }

    fn composite(&self, name: &str) -> Option<&str> {
        self.composites.get(name).map(String::as_str)
    }

    fn invoke(&self, name: &str, rng: &mut FormatterRng, args: &Arguments) -> FormatterResult {
        if let Some(template) = self.composites.get(name) {
            return self.expand_locally(template, rng);
        }
        let formatter = self
            .formatters
            .get(name)
            .ok_or_else(|| FormatterError::Unsupported {
                formatter: name.to_owned(),
            })?;
        formatter(rng, args)
    }
}
