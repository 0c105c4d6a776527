use crate::{
    error::{Error, Result},
    knowledge::{KnowledgeBase, KnowledgeEntry},
    similarity::SequenceMatcher,
};

/// A candidate must score strictly above this to be returned.
pub const MATCH_THRESHOLD: f64 = 0.3;

/// Added to the score for every query token found inside a question token.
pub const KEYWORD_BONUS: f64 = 0.1;

/// Reply used whenever no knowledge entry is a plausible match.
pub const REFUSAL_MESSAGE: &str = "I can only answer questions based on the dashboard data. Please ask about tourist arrivals, countries, years (2003-2012), growth percentages, or forecasts.";

/// Outcome of matching a query against the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a> {
    /// The answer of the best entry, verbatim.
    Answered(&'a str),
    Unmatched,
}

impl<'a> MatchResult<'a> {
    /// The text to show the user: the answer, or [`REFUSAL_MESSAGE`].
    pub fn text(&self) -> &'a str {
        match *self {
            Self::Answered(answer) => answer,
            Self::Unmatched => REFUSAL_MESSAGE,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, Self::Answered(_))
    }
}

/// A knowledge-base question prepared for repeated scoring.
#[derive(Debug, Clone)]
struct Candidate {
    tokens: Vec<String>,
    sequence: SequenceMatcher,
}

impl Candidate {
    fn new(question: &str) -> Self {
        let normalized = normalize(question);
        Self {
            tokens: words(&normalized).map(str::to_owned).collect(),
            sequence: SequenceMatcher::new(&normalized),
        }
    }

    /// `query` must already be normalized.
    fn score(&self, query: &str) -> f64 {
        let similarity = self.sequence.ratio(query);
        let keyword_matches = words(query)
            .filter(|word| {
                self.tokens.iter().any(|token| token.contains(*word))
            })
            .count();
        similarity + KEYWORD_BONUS * keyword_matches as f64
    }
}

/// Picks the single best answer for free-text queries.
///
/// Every entry is scored as character-sequence similarity between the
/// lowercased query and question, plus [`KEYWORD_BONUS`] per query word
/// that appears inside any question word. The highest score wins, the
/// earliest entry wins ties, and nothing at or below [`MATCH_THRESHOLD`] is
/// accepted.
///
/// The matcher is immutable after construction and can be shared across
/// threads freely.
#[derive(Debug, Clone)]
pub struct AnswerMatcher {
    knowledge: KnowledgeBase,
    candidates: Vec<Candidate>,
}

impl AnswerMatcher {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        let candidates = knowledge
            .iter()
            .map(|entry| Candidate::new(&entry.question))
            .collect();
        Self {
            knowledge,
            candidates,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Answer `query`, or return [`MatchResult::Unmatched`].
    pub fn answer(&self, query: &str) -> MatchResult<'_> {
        if query.trim().is_empty() {
            tracing::debug!("empty query");
            return MatchResult::Unmatched;
        }

        let query = normalize(query);
        select_best(
            self.knowledge
                .iter()
                .zip(&self.candidates)
                .map(|(entry, candidate)| (entry, candidate.score(&query))),
        )
    }
}

/// Match `query` against a bare slice of entries without keeping a
/// prepared [`AnswerMatcher`] around.
pub fn match_query<'a>(
    knowledge: &'a [KnowledgeEntry],
    query: &str,
) -> Result<MatchResult<'a>> {
    if knowledge.is_empty() {
        return Err(Error::InvalidConfiguration(
            "knowledge base is empty".into(),
        ));
    }
    if query.trim().is_empty() {
        return Ok(MatchResult::Unmatched);
    }

    let query = normalize(query);
    Ok(select_best(knowledge.iter().map(|entry| {
        (entry, Candidate::new(&entry.question).score(&query))
    })))
}

/// Score of a single question against a query, both given raw.
pub fn score(question: &str, query: &str) -> f64 {
    Candidate::new(question).score(&normalize(query))
}

fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Whitespace-delimited words, also breaking on the ASCII information
/// separators U+001C..=U+001F.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
        .filter(|word| !word.is_empty())
}

fn select_best<'a>(
    scored: impl Iterator<Item = (&'a KnowledgeEntry, f64)>,
) -> MatchResult<'a> {
    let mut best: Option<(&KnowledgeEntry, f64)> = None;

    for (entry, score) in scored {
        tracing::trace!(question = %entry.question, score, "scored entry");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((entry, score));
        }
    }

    match best {
        Some((entry, score)) if score > MATCH_THRESHOLD => {
            tracing::debug!(question = %entry.question, score, "matched");
            MatchResult::Answered(&entry.answer)
        }
        Some((entry, score)) => {
            tracing::debug!(
                closest = %entry.question,
                score,
                "no entry above threshold"
            );
            MatchResult::Unmatched
        }
        None => MatchResult::Unmatched,
    }
}
