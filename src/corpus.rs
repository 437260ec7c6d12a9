use crate::error::ConfigurationError;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Sentences shipped with the binary.
pub const BUILTIN_SENTENCES: [&str; 4] = [
    "The quick brown fox jumps over the lazy dog.",
    "Pack my box with five dozen liquor jugs.",
    "How vexingly quick daft zebras jump!",
    "The five boxing wizards jump quickly.",
];

/// Ordered, immutable pool of candidate reference texts. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeCorpus {
    sentences: Vec<String>,
}

impl PracticeCorpus {
    pub fn new<I, S>(sentences: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sentences: Vec<String> = sentences.into_iter().map(Into::into).collect();
        if sentences.is_empty() {
            return Err(ConfigurationError::EmptyCorpus);
        }
        Ok(Self { sentences })
    }

    pub fn builtin() -> Self {
        Self {
            sentences: BUILTIN_SENTENCES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl Default for PracticeCorpus {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Source of the reference text for a new session
pub trait ReferenceTextProvider {
    /// Pick one candidate text. Fails only when there is nothing to pick from.
    fn pick_random(&mut self) -> Result<String, ConfigurationError>;
}

impl<P: ReferenceTextProvider + ?Sized> ReferenceTextProvider for Box<P> {
    fn pick_random(&mut self) -> Result<String, ConfigurationError> {
        (**self).pick_random()
    }
}

/// Uniform selection over a corpus
#[derive(Debug)]
pub struct RandomTextProvider<R: Rng = ThreadRng> {
    sentences: Vec<String>,
    rng: R,
}

impl RandomTextProvider<ThreadRng> {
    pub fn new(corpus: PracticeCorpus) -> Self {
        Self::with_rng(corpus, rand::thread_rng())
    }
}

impl Default for RandomTextProvider<ThreadRng> {
    fn default() -> Self {
        Self::new(PracticeCorpus::builtin())
    }
}

impl<R: Rng> RandomTextProvider<R> {
    pub fn with_rng(corpus: PracticeCorpus, rng: R) -> Self {
        Self {
            sentences: corpus.sentences,
            rng,
        }
    }
}

impl<R: Rng> ReferenceTextProvider for RandomTextProvider<R> {
    fn pick_random(&mut self) -> Result<String, ConfigurationError> {
        self.sentences
            .choose(&mut self.rng)
            .cloned()
            .ok_or(ConfigurationError::EmptyCorpus)
    }
}

/// Always hands out the same text. Useful wherever the reference must be known up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTextProvider {
    text: String,
}

impl FixedTextProvider {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ReferenceTextProvider for FixedTextProvider {
    fn pick_random(&mut self) -> Result<String, ConfigurationError> {
        Ok(self.text.clone())
    }
}
