//! Definition resolution across an ordered chain of sources.
//!
//! Sources are tried in priority order and the first non-empty definition
//! wins. Every source error is a soft miss; only "nothing worked" reaches the
//! caller, as `None`.

use tracing::{debug, instrument};

use crate::error::SourceError;
use crate::model::Definition;
use crate::traits::DefinitionSource;

/// Hooks for showing resolution results as they happen.
pub trait ResolveReporter: Send + Sync {
    fn on_definition(&self, definition: &Definition);
    fn on_miss(&self, word: &str, source: &str, error: &SourceError);
    fn on_nothing_found(&self, word: &str);
}

/// No-op resolve reporter.
pub struct NoopReporter;

impl ResolveReporter for NoopReporter {
    fn on_definition(&self, _: &Definition) {}
    fn on_miss(&self, _: &str, _: &str, _: &SourceError) {}
    fn on_nothing_found(&self, _: &str) {}
}

/// Tries each definition source in order until one succeeds.
pub struct Resolver {
    sources: Vec<Box<dyn DefinitionSource>>,
    reporter: Box<dyn ResolveReporter>,
}

impl Resolver {
    pub fn new(sources: Vec<Box<dyn DefinitionSource>>) -> Self {
        Self {
            sources,
            reporter: Box::new(NoopReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Box<dyn ResolveReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Names of the configured sources, in lookup order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Resolve `word`, returning `None` when every source missed.
    #[instrument(skip(self))]
    pub async fn resolve(&self, word: &str) -> Option<Definition> {
        for source in &self.sources {
            match source.lookup(word).await {
                Ok(definition) if !definition.text.trim().is_empty() => {
                    debug!(source = source.name(), "definition found");
                    self.reporter.on_definition(&definition);
                    return Some(definition);
                }
                Ok(_) => {
                    debug!(source = source.name(), "empty definition, skipping");
                    self.reporter
                        .on_miss(word, source.name(), &SourceError::NotFound);
                }
                Err(e) => {
                    debug!(source = source.name(), error = %e, "source missed");
                    self.reporter.on_miss(word, source.name(), &e);
                }
            }
        }

        self.reporter.on_nothing_found(word);
        None
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::model::DefinitionKind;

    enum Outcome {
        Text(&'static str),
        Missing,
        Down,
    }

    struct StubSource {
        name: &'static str,
        kind: DefinitionKind,
        outcome: Outcome,
        calls: Arc<AtomicU32>,
    }

    impl StubSource {
        fn boxed(
            name: &'static str,
            kind: DefinitionKind,
            outcome: Outcome,
        ) -> Box<dyn DefinitionSource> {
            Self::counted(name, kind, outcome, Arc::new(AtomicU32::new(0)))
        }

        fn counted(
            name: &'static str,
            kind: DefinitionKind,
            outcome: Outcome,
            calls: Arc<AtomicU32>,
        ) -> Box<dyn DefinitionSource> {
            Box::new(Self {
                name,
                kind,
                outcome,
                calls,
            })
        }
    }

    #[async_trait]
    impl DefinitionSource for StubSource {
        fn name(&self) -> &str {
            self.name
        }

        fn kind(&self) -> DefinitionKind {
            self.kind
        }

        async fn lookup(&self, word: &str) -> Result<Definition, SourceError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            match self.outcome {
                Outcome::Text(text) => Ok(Definition::new(word, self.kind, text)),
                Outcome::Missing => Err(SourceError::NotFound),
                Outcome::Down => Err(SourceError::Transport("connection refused".into())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl ResolveReporter for RecordingReporter {
        fn on_definition(&self, definition: &Definition) {
            self.events
                .lock()
                .unwrap()
                .push(format!("found:{}", definition.kind));
        }

        fn on_miss(&self, _word: &str, source: &str, _error: &SourceError) {
            self.events.lock().unwrap().push(format!("miss:{source}"));
        }

        fn on_nothing_found(&self, word: &str) {
            self.events.lock().unwrap().push(format!("none:{word}"));
        }
    }

    #[tokio::test]
    async fn first_source_wins() {
        let later_calls = Arc::new(AtomicU32::new(0));
        let resolver = Resolver::new(vec![
            StubSource::boxed("user-defs", DefinitionKind::UserOverride, Outcome::Text("mine")),
            StubSource::counted(
                "web",
                DefinitionKind::WebScrape,
                Outcome::Text("theirs"),
                Arc::clone(&later_calls),
            ),
        ]);

        let def = resolver.resolve("foo").await.unwrap();

        assert_eq!(def.text, "mine");
        assert_eq!(def.kind, DefinitionKind::UserOverride);
        assert_eq!(later_calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn falls_through_misses_and_transport_errors() {
        let resolver = Resolver::new(vec![
            StubSource::boxed("user-defs", DefinitionKind::UserOverride, Outcome::Missing),
            StubSource::boxed("dictionary", DefinitionKind::Dictionary, Outcome::Down),
            StubSource::boxed("web", DefinitionKind::WebScrape, Outcome::Text("\n1. scraped")),
        ]);

        let def = resolver.resolve("foo").await.unwrap();
        assert_eq!(def.kind, DefinitionKind::WebScrape);
        assert_eq!(def.text, "\n1. scraped");
    }

    #[tokio::test]
    async fn blank_definition_counts_as_miss() {
        let resolver = Resolver::new(vec![
            StubSource::boxed("user-defs", DefinitionKind::UserOverride, Outcome::Text("  \n")),
            StubSource::boxed("web", DefinitionKind::WebScrape, Outcome::Text("real")),
        ]);

        assert_eq!(resolver.resolve("foo").await.unwrap().text, "real");
    }

    #[tokio::test]
    async fn all_misses_yield_none() {
        let resolver = Resolver::new(vec![
            StubSource::boxed("user-defs", DefinitionKind::UserOverride, Outcome::Missing),
            StubSource::boxed("web", DefinitionKind::WebScrape, Outcome::Down),
        ]);
        assert!(resolver.resolve("foo").await.is_none());
    }

    #[tokio::test]
    async fn empty_chain_yields_none() {
        assert!(Resolver::new(vec![]).resolve("foo").await.is_none());
    }

    #[tokio::test]
    async fn reporter_sees_misses_then_result() {
        let reporter = RecordingReporter::default();
        let events = Arc::clone(&reporter.events);
        let resolver = Resolver::new(vec![
            StubSource::boxed("user-defs", DefinitionKind::UserOverride, Outcome::Missing),
            StubSource::boxed("dictionary", DefinitionKind::Dictionary, Outcome::Text("noun")),
        ])
        .with_reporter(Box::new(reporter));

        resolver.resolve("foo").await;

        assert_eq!(
            *events.lock().unwrap(),
            vec!["miss:user-defs", "found:dictionary"]
        );
    }

    #[tokio::test]
    async fn reporter_sees_nothing_found() {
        let reporter = RecordingReporter::default();
        let events = Arc::clone(&reporter.events);
        let resolver = Resolver::new(vec![StubSource::boxed(
            "web",
            DefinitionKind::WebScrape,
            Outcome::Down,
        )])
        .with_reporter(Box::new(reporter));

        resolver.resolve("qwxz").await;

        assert_eq!(*events.lock().unwrap(), vec!["miss:web", "none:qwxz"]);
    }

    #[test]
    fn source_names_in_order() {
        let resolver = Resolver::new(vec![
            StubSource::boxed("user-defs", DefinitionKind::UserOverride, Outcome::Missing),
            StubSource::boxed("web", DefinitionKind::WebScrape, Outcome::Missing),
        ]);
        assert_eq!(resolver.source_names(), vec!["user-defs", "web"]);
    }
}
