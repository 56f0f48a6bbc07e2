//! Parse entry points and configuration.
//!
//! A [`Parser`] owns a [`ParseConfig`] and, when caching is enabled, a map
//! from composed pattern to compiled expression. The map is read-mostly and
//! guarded by an `RwLock`, so one `Parser` can serve many threads parsing
//! different instances concurrently.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::binder::bind;
use crate::compose::{compile, compose_pattern};
use crate::errors::{Error, PatternError, Result};
use crate::field::{DynRecord, FieldDescriptor, Record};
use crate::target::Target;

/// Parser settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseConfig {
    /// Memoize compiled expressions across calls.
    pub cache: bool,
    /// Upper bound on the compiled expression size, in bytes.
    pub size_limit: Option<usize>,
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    #[must_use]
    pub fn with_size_limit(mut self, limit: usize) -> Self {
        self.size_limit = Some(limit);
        self
    }
}

/// Parses text into records according to a [`ParseConfig`].
#[derive(Default)]
pub struct Parser {
    config: ParseConfig,
    cache: RwLock<FxHashMap<String, Arc<Regex>>>,
}

impl Parser {
    pub fn new(config: ParseConfig) -> Self {
        Parser {
            config,
            cache: RwLock::new(FxHashMap::default()),
        }
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Populate `target` from `text`.
    ///
    /// Fails if `target` is not a record, its type has no template, the
    /// composed expression does not compile or match, or a field cannot be
    /// written. Fields written before a failing field stay written.
    pub fn parse<T: Target + ?Sized>(&self, text: &str, target: &mut T) -> Result<()> {
        let kind = target.kind();
        let record = target.as_record().ok_or(Error::NotRecord { kind })?;
        self.parse_record(text, record)
    }

    /// Build a fresh `R` from `text`.
    ///
    /// Nothing is returned on failure, so partial population is never
    /// observable.
    pub fn from_str<R: Record + Default>(&self, text: &str) -> Result<R> {
        let mut record = R::default();
        self.parse_record(text, &mut record)?;
        Ok(record)
    }

    /// Number of compiled expressions currently memoized.
    pub fn cached_expressions(&self) -> usize {
        self.cache.read().len()
    }

    /// Drop every memoized expression.
    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }

    #[tracing::instrument(level = "debug", skip_all, fields(record = record.type_name()))]
    fn parse_record(&self, text: &str, record: &mut dyn DynRecord) -> Result<()> {
        let type_name = record.type_name();
        let template = record
            .template()
            .ok_or(Error::MissingMarker { type_name })?;

        let descriptors = record.descriptors();
        let expression = self.expression(template, &descriptors)?;
        tracing::debug!(expression = expression.as_str(), "composed expression");

        bind(text, type_name, &expression, descriptors)
    }

    fn expression(
        &self,
        template: &str,
        descriptors: &[FieldDescriptor<'_>],
    ) -> Result<Arc<Regex>, PatternError> {
        let pattern = compose_pattern(template, descriptors.iter().map(|d| &d.spec))?;
        if !self.config.cache {
            return compile(&pattern, &self.config).map(Arc::new);
        }

        if let Some(hit) = self.cache.read().get(&pattern) {
            return Ok(Arc::clone(hit));
        }

        let compiled = Arc::new(compile(&pattern, &self.config)?);
        self.cache
            .write()
            .entry(pattern)
            .or_insert_with(|| Arc::clone(&compiled));
        Ok(compiled)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("config", &self.config)
            .field("cached_expressions", &self.cached_expressions())
            .finish()
    }
}
