//! Ordered provider registry with override-by-recency resolution.
//!
//! Providers are kept in insertion order and searched from the most recently
//! added to the oldest, so registering a provider shadows any earlier
//! provider exposing the same formatter name without touching it.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::arguments::Arguments;
use crate::error::GeneratorError;
use crate::provider::{FormatterResult, FormatterRng, Provider};

/// An ordered collection of providers.
///
/// The sequence only grows through [`FormatterRegistry::add`]; it is never
/// reordered or deduplicated.
#[derive(Clone, Default)]
pub struct FormatterRegistry {
    providers: Vec<Arc<dyn Provider>>,
}

impl FormatterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Registers a provider ahead of every provider added before it.
    pub fn add(&mut self, provider: Arc<dyn Provider>) {
        debug!(
            provider = provider.name(),
            shadowing = self.providers.len(),
            "registered provider"
        );
        self.providers.push(provider);
    }

    /// Resolves `name` to the formatter of the most recently added provider
    /// that exposes it.
    ///
    /// Nothing is invoked and nothing is cached; every call searches again.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::NameNotFound`] when no provider exposes
    /// `name`.
    pub fn resolve(&self, name: &str) -> Result<Formatter, GeneratorError> {
        let Some(provider) = self.providers().find(|p| p.has_formatter(name)) else {
            debug!(formatter = name, "formatter not found");
            return Err(GeneratorError::NameNotFound {
                name: name.to_owned(),
            });
        };
        trace!(formatter = name, provider = provider.name(), "resolved formatter");
        Ok(Formatter {
            provider: Arc::clone(provider),
            name: name.to_owned(),
        })
    }

    /// Iterates providers in resolution order, newest first.
    pub fn providers(&self) -> impl Iterator<Item = &Arc<dyn Provider>> {
        self.providers.iter().rev()
    }

    /// Returns every formatter name reachable through the registry.
    #[must_use]
    pub fn formatter_names(&self) -> BTreeSet<String> {
        self.providers
            .iter()
            .flat_map(|p| p.formatter_names())
            .map(str::to_owned)
            .collect()
    }

    /// Returns the number of registered providers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` when no provider has been registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.providers().map(|p| p.name()))
            .finish()
    }
}

/// A formatter name bound to the provider that serves it.
///
/// Bindings are produced per lookup; holding one keeps the provider alive
/// but does not pin the registry.
#[derive(Clone)]
pub struct Formatter {
    provider: Arc<dyn Provider>,
    name: String,
}

impl Formatter {
    /// Returns the formatter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the provider the formatter is bound to.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Returns `true` when the binding targets exactly `provider`.
    #[must_use]
    pub fn is_bound_to(&self, provider: &Arc<dyn Provider>) -> bool {
        Arc::ptr_eq(&self.provider, provider)
    }

    /// Returns the template when the bound formatter is a composite.
    #[must_use]
    pub fn composite(&self) -> Option<&str> {
        self.provider.composite(&self.name)
    }

    /// Invokes the bound formatter.
    ///
    /// # Errors
    ///
    /// Returns the formatter's own failure unchanged.
    pub fn call(&self, rng: &mut FormatterRng, args: &Arguments) -> FormatterResult {
        self.provider.invoke(&self.name, rng, args)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("provider", &self.provider.name())
            .field("name", &self.name)
            .finish()
    }
}
