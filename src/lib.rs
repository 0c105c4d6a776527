//! dashqa - answers free-text questions from a fixed dashboard Q&A catalog.
//!
//! Every query is compared against each known question using a
//! character-sequence similarity ratio plus a small bonus for shared
//! keywords. The best-scoring entry's answer is returned when it clears a
//! fixed threshold; otherwise the caller gets a canned refusal.
//!
//! # Quick start
//!
//! ```
//! use dashqa::{AnswerMatcher, KnowledgeBase, KnowledgeEntry, MatchResult};
//!
//! let knowledge = KnowledgeBase::new(vec![
//!     KnowledgeEntry::new(
//!         "Which country had the highest tourist arrivals overall?",
//!         "The United States, with 546M arrivals.",
//!     ),
//!     KnowledgeEntry::new(
//!         "How many countries are covered in the dashboard?",
//!         "153 countries.",
//!     ),
//! ])
//! .unwrap();
//! let matcher = AnswerMatcher::new(knowledge);
//!
//! assert_eq!(
//!     matcher.answer("highest tourist arrivals"),
//!     MatchResult::Answered("The United States, with 546M arrivals."),
//! );
//! assert_eq!(matcher.answer("banana recipe"), MatchResult::Unmatched);
//! ```

pub mod catalog;
pub mod error;
pub mod knowledge;
pub mod matcher;
pub mod session;
pub mod similarity;
pub mod source;

pub use error::{Error, Result};
pub use knowledge::{KnowledgeBase, KnowledgeEntry};
pub use matcher::{AnswerMatcher, MatchResult, REFUSAL_MESSAGE};
pub use session::ChatSession;
pub use source::KnowledgeSource;
