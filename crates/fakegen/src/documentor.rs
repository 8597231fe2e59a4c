//! Formatter listings with example output.
//!
//! The documentor walks the generator's providers newest first and invokes
//! each formatter without arguments to show a sample value. A formatter
//! shadowed by a newer provider is listed only under the provider that
//! actually serves it.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::arguments::Arguments;
use crate::generator::Generator;
use crate::provider::Provider;
use crate::template::render_value;

/// One formatter and a sample of its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterDoc {
    /// Formatter name.
    pub name: String,
    /// Sample output, or `None` when the formatter needs arguments or failed.
    pub example: Option<String>,
}

/// The formatters a provider serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDoc {
    /// Provider name.
    pub provider: String,
    /// Formatters served by this provider, sorted by name.
    pub formatters: Vec<FormatterDoc>,
}

impl fmt::Display for ProviderDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.provider)?;
        for doc in &self.formatters {
            match &doc.example {
                Some(example) => writeln!(f, "\t{}\t# {example}", doc.name)?,
                None => writeln!(f, "\t{}", doc.name)?,
            }
        }
        Ok(())
    }
}

/// Errors surfaced while documenting providers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentorError {
    /// No registered provider has the requested name.
    #[error("provider '{name}' is not registered")]
    ProviderNotFound {
        /// The provider name that was requested.
        name: String,
    },
}

/// Produces [`ProviderDoc`]s for a generator's providers.
#[derive(Debug)]
pub struct Documentor<'g> {
    generator: &'g mut Generator,
}

impl<'g> Documentor<'g> {
    /// Creates a documentor drawing examples from `generator`.
    pub const fn new(generator: &'g mut Generator) -> Self {
        Self { generator }
    }

    /// Documents every registered provider, newest first.
    pub fn document_all(&mut self) -> Vec<ProviderDoc> {
        let providers: Vec<Arc<dyn Provider>> =
            self.generator.registry().providers().cloned().collect();
        providers
            .iter()
            .map(|provider| self.document(provider))
            .collect()
    }

    /// Documents the most recently registered provider called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentorError::ProviderNotFound`] when no provider has
    /// that name.
    pub fn document_provider(&mut self, name: &str) -> Result<ProviderDoc, DocumentorError> {
        let provider = self
            .generator
            .registry()
            .providers()
            .find(|p| p.name() == name)
            .cloned()
            .ok_or_else(|| DocumentorError::ProviderNotFound {
                name: name.to_owned(),
            })?;
        Ok(self.document(&provider))
    }

    fn document(&mut self, provider: &Arc<dyn Provider>) -> ProviderDoc {
        let mut formatters: Vec<FormatterDoc> = provider
            .formatter_names()
            .into_iter()
            .filter_map(|name| {
                // An unknown name means "no such formatter" for listing purposes.
                let formatter = self.generator.get_formatter(name).ok()?;
                if !formatter.is_bound_to(provider) {
                    return None;
                }
                let example = self
                    .generator
                    .call(&formatter, &Arguments::new())
                    .ok()
                    .map(|value| render_value(&value));
                Some(FormatterDoc {
                    name: name.to_owned(),
                    example,
                })
            })
            .collect();
        formatters.sort_by(|a, b| a.name.cmp(&b.name));
        ProviderDoc {
            provider: provider.name().to_owned(),
            formatters,
        }
    }
}
