//! Recommendation synthesis: an insertion-ordered set with an urgent-first
//! final ordering pass.

/// Insertion-ordered set of recommendation strings.
///
/// Duplicate pushes are ignored, keeping the first-seen position. The final
/// [`into_prioritized`](Self::into_prioritized) pass moves urgent entries to
/// the front while preserving relative order within each urgency class.
#[derive(Debug, Default)]
pub struct RecommendationSet {
    entries: Vec<String>,
}

impl RecommendationSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a recommendation unless an identical one is already present.
    pub fn push(&mut self, text: &str) {
        if !self.entries.iter().any(|e| e == text) {
            self.entries.push(text.to_string());
        }
    }

    /// Insert several recommendations in order.
    pub fn extend<'a>(&mut self, texts: impl IntoIterator<Item = &'a str>) {
        for text in texts {
            self.push(text);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finalize: urgent entries first, stable order otherwise.
    #[must_use]
    pub fn into_prioritized(self) -> Vec<String> {
        let (mut urgent, rest): (Vec<String>, Vec<String>) =
            self.entries.into_iter().partition(|e| is_urgent(e));
        urgent.extend(rest);
        urgent
    }
}

/// Whether a recommendation is tagged urgent.
#[must_use]
pub fn is_urgent(text: &str) -> bool {
    text.contains("URGENT")
}
