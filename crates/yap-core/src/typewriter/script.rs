use anyhow::Result;
use unicode_segmentation::UnicodeSegmentation;

/// One phrase with its grapheme boundaries precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Phrase {
    text: String,
    /// Byte offset after each grapheme. `ends[0]` is always 0.
    ends: Vec<usize>,
}

impl Phrase {
    fn new(text: String) -> Self {
        let mut ends = Vec::with_capacity(text.len() + 1);
        ends.push(0);
        ends.extend(
            text.grapheme_indices(true)
                .map(|(offset, grapheme)| offset + grapheme.len()),
        );
        Self { text, ends }
    }

    fn len(&self) -> usize {
        self.ends.len() - 1
    }

    fn prefix(&self, chars: usize) -> &str {
        let end = self.ends[chars.min(self.len())];
        &self.text[..end]
    }
}

/// Ordered, immutable list of phrases the typewriter cycles through.
///
/// A "character" is an extended grapheme cluster, so an emoji or a letter with
/// combining marks is revealed in a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    phrases: Vec<Phrase>,
}

impl Script {
    /// Builds a script from phrases.
    ///
    /// Empty phrases are allowed anywhere (they produce a zero-length typing
    /// phase), but at least one phrase must have visible content.
    ///
    /// # Errors
    /// Returns an error if `phrases` is empty or every phrase is empty.
    pub fn new<I, S>(phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<Phrase> = phrases
            .into_iter()
            .map(|p| Phrase::new(p.into()))
            .collect();

        if phrases.is_empty() {
            anyhow::bail!("Typewriter script needs at least one phrase");
        }
        if phrases.iter().all(|p| p.len() == 0) {
            anyhow::bail!("Typewriter script needs at least one non-empty phrase");
        }

        Ok(Self { phrases })
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Full text of the phrase at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn text(&self, index: usize) -> &str {
        &self.phrases[index].text
    }

    /// Length of the phrase at `index`, in characters.
    pub fn char_len(&self, index: usize) -> usize {
        self.phrases[index].len()
    }

    /// The first `chars` characters of the phrase at `index`.
    pub fn prefix(&self, index: usize, chars: usize) -> &str {
        self.phrases[index].prefix(chars)
    }
}
