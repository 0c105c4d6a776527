use std::collections::HashMap;

/// Sequences at least this long have their most frequent characters
/// removed from the block index.
const AUTOJUNK_MIN_LEN: usize = 200;

/// A run of equal characters: `a[a_start..a_start + len]` equals
/// `b[b_start..b_start + len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Character-sequence similarity against a fixed second sequence.
///
/// The score is the classic `2 * M / T` ratio, where `M` is the number of
/// characters covered by matching blocks and `T` is the combined length of
/// both sequences. Blocks are found greedily: take the longest common run,
/// then recurse into the unmatched text on either side of it.
///
/// The second sequence (`b`) is indexed once at construction so the same
/// matcher can score any number of first sequences. This makes the
/// computation asymmetric: `ratio(x)` on a matcher built from `y` is not
/// guaranteed to equal `ratio(y)` on one built from `x`.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    b: Vec<char>,
    /// Positions of each character in `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    pub fn new(b: &str) -> Self {
        let b: Vec<char> = b.chars().collect();
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        // Characters that make up more than ~1% of a long sequence would
        // seed a huge number of trivial blocks.
        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }

        Self { b, b2j }
    }

    /// Similarity of `a` to the indexed sequence, in `[0, 1]`.
    ///
    /// Two empty sequences are considered identical.
    pub fn ratio(&self, a: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let total = a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }

        let matched: usize =
            self.matching_blocks(&a).iter().map(|m| m.len).sum();
        2.0 * matched as f64 / total as f64
    }

    /// All matching blocks between `a` and the indexed sequence, ordered by
    /// position in `a`.
    pub fn matching_blocks(&self, a: &[char]) -> Vec<MatchingBlock> {
        let mut blocks = Vec::new();
        let mut pending = vec![(0, a.len(), 0, self.b.len())];

        while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
            let m = self.find_longest_match(a, a_lo, a_hi, b_lo, b_hi);
            if m.len == 0 {
                continue;
            }

            if a_lo < m.a_start && b_lo < m.b_start {
                pending.push((a_lo, m.a_start, b_lo, m.b_start));
            }
            if m.a_start + m.len < a_hi && m.b_start + m.len < b_hi {
                pending.push((
                    m.a_start + m.len,
                    a_hi,
                    m.b_start + m.len,
                    b_hi,
                ));
            }
            blocks.push(m);
        }

        blocks.sort_by_key(|m| (m.a_start, m.b_start));
        blocks
    }

    /// Longest block in `a[a_lo..a_hi]` x `b[b_lo..b_hi]`.
    ///
    /// Ties go to the block starting earliest in `a`, then earliest in `b`.
    /// Returns a zero-length block at `(a_lo, b_lo)` when nothing matches.
    fn find_longest_match(
        &self,
        a: &[char],
        a_lo: usize,
        a_hi: usize,
        b_lo: usize,
        b_hi: usize,
    ) -> MatchingBlock {
        let (mut best_i, mut best_j, mut best_len) = (a_lo, b_lo, 0);

        // run_len[j] = length of the common run ending at a[i - 1], b[j].
        let mut run_len: HashMap<usize, usize> = HashMap::new();
        for (offset, c) in a[a_lo..a_hi].iter().enumerate() {
            let i = a_lo + offset;
            let mut next_run_len = HashMap::new();

            if let Some(positions) = self.b2j.get(c) {
                for &j in positions {
                    if j < b_lo {
                        continue;
                    }
                    if j >= b_hi {
                        break;
                    }

                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| run_len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_run_len.insert(j, k);

                    if k > best_len {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_len = k;
                    }
                }
            }

            run_len = next_run_len;
        }

        // Pruned characters never seed a block but may still extend one.
        while best_i > a_lo
            && best_j > b_lo
            && a[best_i - 1] == self.b[best_j - 1]
        {
            best_i -= 1;
            best_j -= 1;
            best_len += 1;
        }
        while best_i + best_len < a_hi
            && best_j + best_len < b_hi
            && a[best_i + best_len] == self.b[best_j + best_len]
        {
            best_len += 1;
        }

        MatchingBlock {
            a_start: best_i,
            b_start: best_j,
            len: best_len,
        }
    }
}

/// One-shot similarity ratio of `a` against `b`.
pub fn ratio(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(b).ratio(a)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(ratio("tourist arrivals", "tourist arrivals"), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn both_empty_score_one() {
        assert_eq!(ratio("", ""), 1.0);
    }

    #[test]
    fn one_empty_scores_zero() {
        assert_eq!(ratio("", "abc"), 0.0);
        assert_eq!(ratio("abc", ""), 0.0);
    }

    #[test]
    fn shifted_overlap() {
        // "bcd" is shared: 2 * 3 / 8
        assert!((ratio("abcd", "bcde") - 0.75).abs() < 1e-12);
    }

    #[test]
    fn swapped_words_only_keep_one_side() {
        // "hello" is taken first; "world" then lies on the wrong side of it.
        let r = ratio("hello world", "world hello");
        assert!((r - 10.0 / 22.0).abs() < 1e-12);
    }

    #[test]
    fn blocks_recurse_into_remainders() {
        let matcher = SequenceMatcher::new("a b c xxxxxxxxxxx");
        let blocks = matcher.matching_blocks(&chars("abc"));
        assert_eq!(
            blocks,
            vec![
                MatchingBlock {
                    a_start: 0,
                    b_start: 0,
                    len: 1
                },
                MatchingBlock {
                    a_start: 1,
                    b_start: 2,
                    len: 1
                },
                MatchingBlock {
                    a_start: 2,
                    b_start: 4,
                    len: 1
                },
            ]
        );
        assert_eq!(matcher.ratio("abc"), 0.3);
    }

    #[test]
    fn longest_match_prefers_earliest_in_a() {
        let matcher = SequenceMatcher::new("xab");
        let m = matcher.find_longest_match(&chars("abab"), 0, 4, 0, 3);
        assert_eq!(
            m,
            MatchingBlock {
                a_start: 0,
                b_start: 1,
                len: 2
            }
        );
    }

    #[test]
    fn popular_characters_still_extend_blocks() {
        // Every character of a 250-long run is "popular", so nothing seeds a
        // block, yet the forward extension covers the whole run.
        let long = "a".repeat(250);
        assert_eq!(ratio(&long, &long), 1.0);
    }

    #[test]
    fn popular_filler_does_not_match_query() {
        let question = format!("growth rate {}", "#".repeat(300));
        let r = ratio("growth rate", &question);
        assert!((r - 2.0 * 11.0 / (11.0 + 312.0)).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn ratio_is_bounded(a in ".{0,40}", b in ".{0,40}") {
            let r = ratio(&a, &b);
            prop_assert!((0.0..=1.0).contains(&r));
        }

        #[test]
        fn ratio_of_self_is_one(a in ".{0,60}") {
            prop_assert_eq!(ratio(&a, &a), 1.0);
        }

        #[test]
        fn ratio_is_deterministic(a in "[a-z ]{0,30}", b in "[a-z ]{0,30}") {
            let matcher = SequenceMatcher::new(&b);
            prop_assert_eq!(matcher.ratio(&a), matcher.ratio(&a));
        }
    }
}
