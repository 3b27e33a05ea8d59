use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EvalError;

/// One human-rated word pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldPair {
    pub word1: String,
    pub word2: String,
    pub pos1: Option<String>,
    pub pos2: Option<String>,
    pub score: f64,
}

impl GoldPair {
    /// Both words are nouns. Pairs without POS information never are.
    pub fn is_noun_pair(&self) -> bool {
        let noun = |pos: &Option<String>| pos.as_deref().is_some_and(|p| p.eq_ignore_ascii_case("n"));
        noun(&self.pos1) && noun(&self.pos2)
    }
}

/// Supported gold-standard file layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoldStandard {
    /// `word1<TAB>word2<TAB>score`
    WordSim,
    /// Header line starting with `word1`, then `word1<TAB>word2<TAB>POS<TAB>score<TAB>…`
    SimLex,
    /// `word1-pos word2-pos score`, space separated
    Men,
}

impl FromStr for GoldStandard {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wordsim" | "wordsim353" | "ws353" => Ok(Self::WordSim),
            "simlex" | "simlex999" => Ok(Self::SimLex),
            "men" => Ok(Self::Men),
            _ => Err(EvalError::UnknownStandard { name: s.to_string() }),
        }
    }
}

impl GoldStandard {
    pub fn load(self, path: impl AsRef<Path>) -> Result<Vec<GoldPair>, EvalError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| EvalError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        self.parse(BufReader::new(file))
    }

    pub fn parse<R: BufRead>(self, reader: R) -> Result<Vec<GoldPair>, EvalError> {
        let mut pairs = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| EvalError::Io {
                path: "<reader>".to_string(),
                reason: e.to_string(),
            })?;
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                continue;
            }
            let pair = match self {
                Self::WordSim => parse_wordsim(line, line_no)?,
                Self::SimLex => {
                    if line.starts_with("word1") {
                        continue;
                    }
                    parse_simlex(line, line_no)?
                }
                Self::Men => parse_men(line, line_no)?,
            };
            pairs.push(pair);
        }
        Ok(pairs)
    }
}

fn parse_wordsim(line: &str, line_no: usize) -> Result<GoldPair, EvalError> {
    let fields: Vec<&str> = line.split('\t').collect();
    let [w1, w2, score, ..] = fields.as_slice() else {
        return Err(malformed(line_no, "expected 3 tab-separated fields"));
    };
    Ok(GoldPair {
        word1: w1.to_string(),
        word2: w2.to_string(),
        pos1: None,
        pos2: None,
        score: parse_score(score, line_no)?,
    })
}

fn parse_simlex(line: &str, line_no: usize) -> Result<GoldPair, EvalError> {
    let fields: Vec<&str> = line.split('\t').collect();
    let [w1, w2, pos, score, ..] = fields.as_slice() else {
        return Err(malformed(line_no, "expected at least 4 tab-separated fields"));
    };
    Ok(GoldPair {
        word1: w1.to_string(),
        word2: w2.to_string(),
        pos1: Some(pos.to_string()),
        pos2: Some(pos.to_string()),
        score: parse_score(score, line_no)?,
    })
}

fn parse_men(line: &str, line_no: usize) -> Result<GoldPair, EvalError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [t1, t2, score, ..] = fields.as_slice() else {
        return Err(malformed(line_no, "expected 3 space-separated fields"));
    };
    let (w1, p1) = split_tagged(t1, line_no)?;
    let (w2, p2) = split_tagged(t2, line_no)?;
    Ok(GoldPair {
        word1: w1.to_string(),
        word2: w2.to_string(),
        pos1: Some(p1.to_string()),
        pos2: Some(p2.to_string()),
        score: parse_score(score, line_no)?,
    })
}

/// `sun-n` → (`sun`, `n`)
fn split_tagged(token: &str, line_no: usize) -> Result<(&str, &str), EvalError> {
    token
        .rsplit_once('-')
        .filter(|(word, pos)| !word.is_empty() && !pos.is_empty())
        .ok_or_else(|| malformed(line_no, &format!("token {token:?} has no POS suffix")))
}

fn parse_score(raw: &str, line_no: usize) -> Result<f64, EvalError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| malformed(line_no, &format!("invalid score {raw:?}")))
}

fn malformed(line: usize, reason: &str) -> EvalError {
    EvalError::MalformedLine {
        line,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wordsim_lines() {
        let pairs = GoldStandard::WordSim
            .parse("tiger\tcat\t7.35\n\nbook\tpaper\t7.46\n".as_bytes())
            .unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].word2, "cat");
        assert_eq!(pairs[1].score, 7.46);
        assert!(pairs[0].pos1.is_none());
    }

    #[test]
    fn simlex_skips_header() {
        let text = "word1\tword2\tPOS\tSimLex999\nold\tnew\tA\t1.58\t2.72\n";
        let pairs = GoldStandard::SimLex.parse(text.as_bytes()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].pos1.as_deref(), Some("A"));
        assert_eq!(pairs[0].score, 1.58);
    }

    #[test]
    fn men_splits_pos() {
        let pairs = GoldStandard::Men
            .parse("sun-n sunlight-n 50.000000\nwell-known-j famous-j 40\n".as_bytes())
            .unwrap();
        assert_eq!(pairs[0].word1, "sun");
        assert_eq!(pairs[0].pos2.as_deref(), Some("n"));
        assert!(pairs[0].is_noun_pair());
        assert_eq!(pairs[1].word1, "well-known");
        assert!(!pairs[1].is_noun_pair());
    }

    #[test]
    fn malformed_lines_are_reported() {
        let err = GoldStandard::WordSim.parse("a\tb\n".as_bytes()).unwrap_err();
        assert!(matches!(err, EvalError::MalformedLine { line: 1, .. }));
        let err = GoldStandard::Men.parse("a b 3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, EvalError::MalformedLine { .. }));
        let err = GoldStandard::WordSim.parse("a\tb\tx\n".as_bytes()).unwrap_err();
        assert!(matches!(err, EvalError::MalformedLine { .. }));
    }

    #[test]
    fn names_parse() {
        assert_eq!("SimLex999".parse::<GoldStandard>().unwrap(), GoldStandard::SimLex);
        assert_eq!("MEN".parse::<GoldStandard>().unwrap(), GoldStandard::Men);
        assert!("rw".parse::<GoldStandard>().is_err());
    }
}
