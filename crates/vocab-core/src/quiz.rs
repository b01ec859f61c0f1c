//! Interactive quiz over the word list.
//!
//! Draws a random sample of words, asks about each one in turn, and reveals
//! the definition through the resolver. Quizzing never modifies the list.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::VocabError;
use crate::resolver::Resolver;
use crate::store::ListStore;

/// Drives the question half of each quiz round.
pub trait QuizPrompter {
    /// Show question `index` of `total` for `word` and block until the user
    /// is ready for the answer. Any input, including none, continues.
    fn ask(&mut self, index: usize, total: usize, word: &str) -> std::io::Result<()>;

    /// Called between the question and the revealed definition.
    fn reveal(&mut self, _word: &str) -> std::io::Result<()> {
        Ok(())
    }
}

/// Outcome of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    /// Number of words asked.
    pub asked: usize,
    /// How many of them had a definition to reveal.
    pub defined: usize,
}

/// Draw `n` entries (all of them when `None`) without replacement.
pub fn sample_words<R: Rng + ?Sized>(
    words: &[String],
    n: Option<usize>,
    rng: &mut R,
) -> Result<Vec<String>, VocabError> {
    let n = n.unwrap_or(words.len());
    if n > words.len() {
        return Err(VocabError::InsufficientWords {
            requested: n,
            available: words.len(),
        });
    }

    let mut pool = words.to_vec();
    pool.shuffle(rng);
    pool.truncate(n);
    Ok(pool)
}

/// Runs quizzes against a word list and a resolver.
pub struct QuizEngine<'a> {
    store: &'a ListStore,
    resolver: &'a Resolver,
}

impl<'a> QuizEngine<'a> {
    pub fn new(store: &'a ListStore, resolver: &'a Resolver) -> Self {
        Self { store, resolver }
    }

    /// Quiz on `n` random words, or the whole list when `n` is `None`.
    pub async fn run<R: Rng + ?Sized>(
        &self,
        n: Option<usize>,
        rng: &mut R,
        prompter: &mut dyn QuizPrompter,
    ) -> Result<QuizSummary, VocabError> {
        let words = self.store.load()?;
        let sample = sample_words(&words, n, rng)?;
        let total = sample.len();
        debug!(total, available = words.len(), "starting quiz");

        let mut defined = 0;
        for (i, word) in sample.iter().enumerate() {
            prompter.ask(i + 1, total, word).map_err(VocabError::Prompt)?;
            prompter.reveal(word).map_err(VocabError::Prompt)?;
            if self.resolver.resolve(word).await.is_some() {
                defined += 1;
            }
        }

        Ok(QuizSummary {
            asked: total,
            defined,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;

    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    use super::*;
    use crate::error::SourceError;
    use crate::model::{Definition, DefinitionKind};
    use crate::traits::DefinitionSource;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[derive(Default)]
    struct ScriptedPrompter {
        asked: Vec<(usize, usize, String)>,
        revealed: Vec<String>,
    }

    impl QuizPrompter for ScriptedPrompter {
        fn ask(&mut self, index: usize, total: usize, word: &str) -> std::io::Result<()> {
            self.asked.push((index, total, word.to_string()));
            Ok(())
        }

        fn reveal(&mut self, word: &str) -> std::io::Result<()> {
            self.revealed.push(word.to_string());
            Ok(())
        }
    }

    /// Knows every word except those starting with "x".
    struct PickySource;

    #[async_trait]
    impl DefinitionSource for PickySource {
        fn name(&self) -> &str {
            "picky"
        }

        fn kind(&self) -> DefinitionKind {
            DefinitionKind::UserOverride
        }

        async fn lookup(&self, word: &str) -> Result<Definition, SourceError> {
            if word.starts_with('x') {
                Err(SourceError::NotFound)
            } else {
                Ok(Definition::new(word, self.kind(), format!("meaning of {word}")))
            }
        }
    }

    #[test]
    fn sample_returns_distinct_members() {
        let list = words(&["apple", "banana", "cherry", "date", "elder"]);
        let mut rng = StdRng::seed_from_u64(7);

        let picked = sample_words(&list, Some(3), &mut rng).unwrap();

        assert_eq!(picked.len(), 3);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 3);
        assert!(picked.iter().all(|w| list.contains(w)));
    }

    #[test]
    fn sample_none_means_everything() {
        let list = words(&["apple", "banana", "cherry"]);
        let mut rng = StdRng::seed_from_u64(1);

        let mut picked = sample_words(&list, None, &mut rng).unwrap();
        picked.sort();

        assert_eq!(picked, list);
    }

    #[test]
    fn sample_too_many_is_insufficient_words() {
        let list = words(&["apple", "banana"]);
        let mut rng = StdRng::seed_from_u64(1);

        let err = sample_words(&list, Some(3), &mut rng).unwrap_err();

        assert!(matches!(
            err,
            VocabError::InsufficientWords {
                requested: 3,
                available: 2
            }
        ));
    }

    #[test]
    fn sample_zero_and_empty_list() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_words(&words(&["a"]), Some(0), &mut rng)
            .unwrap()
            .is_empty());
        assert!(sample_words(&[], None, &mut rng).unwrap().is_empty());
    }

    #[tokio::test]
    async fn run_asks_each_word_once_in_order_with_progress() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("word-list.txt");
        let original = "apple\nxylem,banana";
        fs::write(&path, original).unwrap();

        let store = ListStore::new(&path);
        let sources: Vec<Box<dyn DefinitionSource>> = vec![Box::new(PickySource)];
        let resolver = Resolver::new(sources);
        let engine = QuizEngine::new(&store, &resolver);
        let mut prompter = ScriptedPrompter::default();
        let mut rng = StdRng::seed_from_u64(42);

        let summary = engine.run(None, &mut rng, &mut prompter).await.unwrap();

        assert_eq!(summary, QuizSummary { asked: 3, defined: 2 });
        let indices: Vec<_> = prompter.asked.iter().map(|(i, n, _)| (*i, *n)).collect();
        assert_eq!(indices, vec![(1, 3), (2, 3), (3, 3)]);
        let asked: Vec<_> = prompter.asked.iter().map(|(_, _, w)| w.clone()).collect();
        assert_eq!(asked, prompter.revealed);
        let unique: HashSet<_> = asked.iter().collect();
        assert_eq!(unique.len(), 3);

        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[tokio::test]
    async fn run_rejects_oversized_request_before_prompting() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("word-list.txt");
        fs::write(&path, "apple").unwrap();

        let store = ListStore::new(&path);
        let resolver = Resolver::new(vec![]);
        let mut prompter = ScriptedPrompter::default();
        let mut rng = StdRng::seed_from_u64(42);

        let err = QuizEngine::new(&store, &resolver)
            .run(Some(5), &mut rng, &mut prompter)
            .await
            .unwrap_err();

        assert!(matches!(err, VocabError::InsufficientWords { .. }));
        assert!(prompter.asked.is_empty());
    }

    #[tokio::test]
    async fn run_without_list_is_storage_unavailable() {
        let dir = TempDir::new().unwrap();
        let store = ListStore::new(dir.path().join("missing.txt"));
        let resolver = Resolver::new(vec![]);
        let mut prompter = ScriptedPrompter::default();
        let mut rng = StdRng::seed_from_u64(42);

        let err = QuizEngine::new(&store, &resolver)
            .run(None, &mut rng, &mut prompter)
            .await
            .unwrap_err();

        assert!(matches!(err, VocabError::StorageUnavailable { .. }));
    }
}
