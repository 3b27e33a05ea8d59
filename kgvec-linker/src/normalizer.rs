use kgvec_core::config::RewriteRule;
use kgvec_core::errors::ConfigError;
use regex::Regex;

/// A rewrite rule with its pattern compiled.
#[derive(Debug, Clone)]
enum CompiledRule {
    StripPrefix(String),
    Replace { from: String, to: String },
    Trim,
    StripSuffix(Regex),
    Lowercase,
}

/// Rewrites surface forms and canonical keys into lookup keys.
///
/// Built once per source from its ordered rule list. `normalize` is total:
/// any input yields a (possibly empty) key.
#[derive(Debug, Clone)]
pub struct KeyNormalizer {
    rules: Vec<CompiledRule>,
}

impl KeyNormalizer {
    /// Compile `rules`. Fails on an invalid suffix pattern.
    pub fn new(rules: &[RewriteRule]) -> Result<Self, ConfigError> {
        let rules = rules
            .iter()
            .map(compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// A normalizer that returns its input unchanged.
    pub fn identity() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn normalize(&self, raw: &str) -> String {
        let mut key = raw.to_string();
        for rule in &self.rules {
            match rule {
                CompiledRule::StripPrefix(prefix) => {
                    if let Some(rest) = key.strip_prefix(prefix.as_str()) {
                        key = rest.to_string();
                    }
                }
                CompiledRule::Replace { from, to } => {
                    if !from.is_empty() && key.contains(from.as_str()) {
                        key = key.replace(from.as_str(), to);
                    }
                }
                CompiledRule::Trim => {
                    let trimmed = key.trim();
                    if trimmed.len() != key.len() {
                        key = trimmed.to_string();
                    }
                }
                CompiledRule::StripSuffix(re) => {
                    if let Some(m) = re.find(&key) {
                        key.truncate(m.start());
                    }
                }
                CompiledRule::Lowercase => key = key.to_lowercase(),
            }
        }
        key
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

fn compile(rule: &RewriteRule) -> Result<CompiledRule, ConfigError> {
    Ok(match rule {
        RewriteRule::StripPrefix { value } => CompiledRule::StripPrefix(value.clone()),
        RewriteRule::Replace { from, to } => CompiledRule::Replace {
            from: from.clone(),
            to: to.clone(),
        },
        RewriteRule::Trim => CompiledRule::Trim,
        RewriteRule::StripSuffixPattern { pattern } => {
            // Anchor so only a match that reaches the end of the key is removed.
            let anchored = format!("(?:{pattern})$");
            let re = Regex::new(&anchored).map_err(|e| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;
            CompiledRule::StripSuffix(re)
        }
        RewriteRule::Lowercase => CompiledRule::Lowercase,
    })
}
