//! Part-of-speech tie-breaking between candidates of one index bucket.

use kgvec_core::constants::{DEFAULT_POS, POS_PLACEHOLDER, VALID_POS_TAGS};

/// Map a caller-supplied POS hint onto a valid tag. Unknown or missing
/// hints become the noun tag.
pub fn normalize_hint(hint: Option<&str>) -> &'static str {
    hint.map(str::trim)
        .and_then(|h| {
            VALID_POS_TAGS
                .iter()
                .copied()
                .find(|tag| tag.eq_ignore_ascii_case(h))
        })
        .unwrap_or(DEFAULT_POS)
}

/// Recognizes POS-tagged keys using a source's suffix pattern
/// (`-{pos}`, `_{pos}_EN`).
#[derive(Debug, Clone, Default)]
pub struct PosTagger {
    pattern: Option<String>,
}

impl PosTagger {
    pub fn new(pattern: Option<&str>) -> Self {
        Self {
            pattern: pattern.map(str::to_string),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.pattern.is_some()
    }

    /// Suffix for `pos`, e.g. `_v_EN`.
    pub fn suffix(&self, pos: &str) -> Option<String> {
        self.pattern
            .as_deref()
            .map(|p| p.replace(POS_PLACEHOLDER, pos))
    }

    /// Whether `candidate` ends with the tag for `pos`.
    pub fn carries(&self, candidate: &str, pos: &str) -> bool {
        self.suffix(pos)
            .is_some_and(|suffix| candidate.ends_with(&suffix))
    }

    /// Pick one candidate from a bucket.
    ///
    /// Order: a candidate containing `surface` with the `pos` tag, then any
    /// candidate with the `pos` tag, then a noun-tagged candidate, then the
    /// first one. Untagged sources always take the first.
    pub fn select<'a>(&self, candidates: &'a [String], surface: &str, pos: &str) -> Option<&'a str> {
        let first = candidates.first()?;
        if !self.is_enabled() {
            return Some(first);
        }

        let tagged = |pos: &str| candidates.iter().find(|c| self.carries(c, pos));

        candidates
            .iter()
            .find(|c| !surface.is_empty() && c.contains(surface) && self.carries(c, pos))
            .or_else(|| tagged(pos))
            .or_else(|| {
                if pos != DEFAULT_POS {
                    tagged(DEFAULT_POS)
                } else {
                    None
                }
            })
            .or(Some(first))
            .map(String::as_str)
    }

    /// The candidates tagged with `pos`, or all of them when none is.
    pub fn filter<'a>(&self, candidates: &'a [String], pos: Option<&str>) -> Vec<&'a str> {
        let all = || candidates.iter().map(String::as_str).collect::<Vec<_>>();
        let Some(pos) = pos.filter(|_| self.is_enabled()) else {
            return all();
        };
        let tagged: Vec<&str> = candidates
            .iter()
            .filter(|c| self.carries(c, pos))
            .map(String::as_str)
            .collect();
        if tagged.is_empty() {
            all()
        } else {
            tagged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn hint_validation() {
        assert_eq!(normalize_hint(None), "n");
        assert_eq!(normalize_hint(Some("V")), "v");
        assert_eq!(normalize_hint(Some("x")), "n");
        assert_eq!(normalize_hint(Some("")), "n");
        assert_eq!(normalize_hint(Some(" j ")), "j");
    }

    #[test]
    fn babelnet_prefers_substring_with_tag() {
        let tagger = PosTagger::new(Some("_{pos}_EN"));
        let candidates = bucket(&["bn:bank_n_EN", "bn:Bank_v_EN", "bn:bank_v_EN"]);
        assert_eq!(tagger.select(&candidates, "bank", "v"), Some("bn:bank_v_EN"));
    }

    #[test]
    fn falls_back_to_any_tagged_then_noun() {
        let tagger = PosTagger::new(Some("_{pos}_EN"));
        let candidates = bucket(&["bn:Run_a_EN", "bn:Run_n_EN"]);
        assert_eq!(tagger.select(&candidates, "run", "a"), Some("bn:Run_a_EN"));
        assert_eq!(tagger.select(&candidates, "run", "v"), Some("bn:Run_n_EN"));
    }

    #[test]
    fn falls_back_to_first() {
        let tagger = PosTagger::new(Some("-{pos}"));
        let candidates = bucket(&["dog-x", "dog-y"]);
        assert_eq!(tagger.select(&candidates, "dog", "n"), Some("dog-x"));
    }

    #[test]
    fn untagged_source_takes_first() {
        let tagger = PosTagger::new(None);
        let candidates = bucket(&["Berlin", "Berlin_(band)"]);
        assert_eq!(tagger.select(&candidates, "Berlin_(band)", "n"), Some("Berlin"));
        assert_eq!(tagger.select(&[], "x", "n"), None);
    }

    #[test]
    fn filter_keeps_tagged_senses() {
        let tagger = PosTagger::new(Some("-{pos}"));
        let candidates = bucket(&["run-n", "run-v", "run-v2"]);
        assert_eq!(tagger.filter(&candidates, Some("v")), vec!["run-v"]);
        assert_eq!(tagger.filter(&candidates, Some("r")).len(), 3);
        assert_eq!(tagger.filter(&candidates, None).len(), 3);
    }
}
