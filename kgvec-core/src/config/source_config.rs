use serde::{Deserialize, Serialize};

/// One step of key normalization. Rules run in the order they are listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RewriteRule {
    /// Remove a namespace prefix if the key starts with it.
    StripPrefix { value: String },
    /// Replace every literal occurrence of `from` with `to`.
    Replace { from: String, to: String },
    /// Trim surrounding whitespace.
    Trim,
    /// Remove a trailing regex match, e.g. `#.*$`.
    StripSuffixPattern { pattern: String },
    /// Fold to lower case.
    Lowercase,
}

impl RewriteRule {
    pub fn strip_prefix(value: &str) -> Self {
        Self::StripPrefix {
            value: value.to_string(),
        }
    }

    pub fn replace(from: &str, to: &str) -> Self {
        Self::Replace {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn strip_suffix_pattern(pattern: &str) -> Self {
        Self::StripSuffixPattern {
            pattern: pattern.to_string(),
        }
    }
}

/// How similarity treats a surface form that maps to several senses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensePolicy {
    /// Pick one key per side with the linker's tie-break order.
    #[default]
    TieBreak,
    /// Average the cosine over every sense combination.
    Average,
}

/// The knowledge graphs with a built-in source preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeSource {
    WordNet,
    Dbnary,
    Dbpedia,
    Alod,
    BabelNet,
    #[default]
    Generic,
}

impl KnowledgeSource {
    /// The preset source configuration for this knowledge graph.
    pub fn preset(self) -> SourceConfig {
        match self {
            Self::WordNet => SourceConfig::wordnet(),
            Self::Dbnary => SourceConfig::dbnary(),
            Self::Dbpedia => SourceConfig::dbpedia(),
            Self::Alod => SourceConfig::alod(),
            Self::BabelNet => SourceConfig::babelnet(),
            Self::Generic => SourceConfig::generic(),
        }
    }
}

/// Per-source behaviour of the resolution pipeline.
///
/// The six query services only differ in these knobs, so one linker and one
/// engine are parametrized with a `SourceConfig` instead of being duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Display name used in logs.
    pub name: String,
    /// Ordered normalization rules for surface forms and canonical keys.
    pub rules: Vec<RewriteRule>,
    /// Rules applied to both tokens of a redirect triple after `<`/`>` removal.
    pub redirect_rules: Vec<RewriteRule>,
    /// Suffix that marks a key's part of speech, with `{pos}` as placeholder
    /// (`-{pos}` for WordNet, `_{pos}_EN` for BabelNet). `None` disables POS
    /// selection.
    pub pos_tag_pattern: Option<String>,
    /// Similarity behaviour for multi-sense keys.
    pub sense_policy: SensePolicy,
    /// Vector lookups and closest-concept queries cover every sense.
    pub multi_sense: bool,
    /// Retry a missed lookup once with the first character upper-cased.
    pub case_flip: bool,
    /// Test the raw surface against the store before normalizing.
    pub store_probe: bool,
    /// Prefixes tried in front of the surface during the store probe.
    pub probe_prefixes: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::generic()
    }
}

impl SourceConfig {
    /// WordNet: `wn-lemma:` keys with `#` sense suffixes and `-n`/`-v` POS tags.
    pub fn wordnet() -> Self {
        Self {
            name: "wordnet".to_string(),
            rules: vec![
                RewriteRule::strip_prefix("wn-lemma:"),
                RewriteRule::Trim,
                RewriteRule::strip_suffix_pattern("#.*$"),
            ],
            redirect_rules: Vec::new(),
            pos_tag_pattern: Some("-{pos}".to_string()),
            sense_policy: SensePolicy::TieBreak,
            multi_sense: true,
            case_flip: false,
            store_probe: false,
            probe_prefixes: Vec::new(),
        }
    }

    /// Wiktionary via DBnary.
    pub fn dbnary() -> Self {
        Self {
            name: "dbnary".to_string(),
            rules: vec![
                RewriteRule::strip_prefix("http://kaiko.getalp.org/dbnary/eng/"),
                RewriteRule::Trim,
                RewriteRule::replace(" ", "_"),
            ],
            redirect_rules: Vec::new(),
            pos_tag_pattern: None,
            sense_policy: SensePolicy::TieBreak,
            multi_sense: false,
            case_flip: true,
            store_probe: false,
            probe_prefixes: Vec::new(),
        }
    }

    /// DBpedia resources and ontology classes, with redirect support.
    pub fn dbpedia() -> Self {
        Self {
            name: "dbpedia".to_string(),
            rules: vec![
                RewriteRule::strip_prefix("dbr:"),
                RewriteRule::strip_prefix("http://dbpedia.org/resource/"),
                RewriteRule::strip_prefix("dbo:"),
                RewriteRule::strip_prefix("http://dbpedia.org/ontology/"),
                RewriteRule::Trim,
                RewriteRule::replace(" ", "_"),
                RewriteRule::replace("'", "_"),
                RewriteRule::replace("-", "_"),
                RewriteRule::replace(".", ""),
            ],
            redirect_rules: vec![RewriteRule::replace("http://dbpedia.org/resource/", "dbr:")],
            pos_tag_pattern: None,
            sense_policy: SensePolicy::TieBreak,
            multi_sense: false,
            case_flip: true,
            store_probe: false,
            probe_prefixes: Vec::new(),
        }
    }

    /// ALOD classic. The only case-insensitive source.
    pub fn alod() -> Self {
        Self {
            name: "alod".to_string(),
            rules: vec![
                RewriteRule::Lowercase,
                RewriteRule::Trim,
                RewriteRule::replace(" ", "_"),
                RewriteRule::replace("'", "_"),
                RewriteRule::replace("-", "_"),
            ],
            redirect_rules: Vec::new(),
            pos_tag_pattern: None,
            sense_policy: SensePolicy::TieBreak,
            multi_sense: false,
            case_flip: false,
            store_probe: false,
            probe_prefixes: Vec::new(),
        }
    }

    /// BabelNet: `bn:` keys tagged `_n_EN`, `_v_EN`, ...
    pub fn babelnet() -> Self {
        Self {
            name: "babelnet".to_string(),
            rules: vec![
                RewriteRule::strip_prefix("bn:"),
                RewriteRule::strip_suffix_pattern("_[a-zA-Z]_(en|EN)$"),
                RewriteRule::Trim,
                RewriteRule::replace(" ", "_"),
                RewriteRule::replace("'", "_"),
                RewriteRule::replace("-", "_"),
            ],
            redirect_rules: Vec::new(),
            pos_tag_pattern: Some("_{pos}_EN".to_string()),
            sense_policy: SensePolicy::TieBreak,
            multi_sense: false,
            case_flip: false,
            store_probe: false,
            probe_prefixes: Vec::new(),
        }
    }

    /// Any key/value vector file, linked by probing the store directly.
    pub fn generic() -> Self {
        Self {
            name: "generic".to_string(),
            rules: vec![RewriteRule::Trim, RewriteRule::replace(" ", "_")],
            redirect_rules: Vec::new(),
            pos_tag_pattern: None,
            sense_policy: SensePolicy::TieBreak,
            multi_sense: false,
            case_flip: true,
            store_probe: true,
            probe_prefixes: vec![
                "http://dbpedia.org/resource/".to_string(),
                "http://dbpedia.org/ontology/".to_string(),
            ],
        }
    }

    /// Whether keys of this source carry POS tags.
    pub fn uses_pos_tags(&self) -> bool {
        self.pos_tag_pattern.is_some()
    }
}
