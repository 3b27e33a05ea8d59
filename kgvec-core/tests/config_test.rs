use kgvec_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = KgConfig::from_toml("").unwrap();

    // Cache defaults
    assert_eq!(config.cache.max_entries, 0);
    assert_eq!(config.cache.ttl_secs, 0);
    assert!(config.cache.is_unbounded());

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json_logs);

    assert!(config.services.is_empty());
}

#[test]
fn config_loads_services_with_preset() {
    let toml = r#"
[cache]
max_entries = 500

[[services]]
dataset = "DBpedia"
dataset_version = "2016-10"
vector_file = "/data/dbpedia.txt"
redirect_file = "/data/redirects_en.ttl"
source = "dbpedia"

[[services]]
dataset = "WordNet"
vector_file = "/data/wordnet.txt"
entity_file = "/data/wordnet_entities.txt"
source = "wordnet"
enabled = false
"#;
    let config = KgConfig::from_toml(toml).unwrap();
    assert_eq!(config.cache.max_entries, 500);
    assert!(!config.cache.is_unbounded());
    assert_eq!(config.services.len(), 2);

    let dbpedia = &config.services[0];
    assert_eq!(dbpedia.source, KnowledgeSource::Dbpedia);
    assert_eq!(dbpedia.redirect_file.as_deref(), Some("/data/redirects_en.ttl"));
    assert_eq!(dbpedia.model, "rdf2vec"); // default
    assert_eq!(dbpedia.resolved_source(), SourceConfig::dbpedia());
    assert!(dbpedia.enabled);

    let wordnet = &config.services[1];
    assert!(!wordnet.enabled);
    assert!(wordnet.resolved_source().multi_sense);
}

#[test]
fn explicit_source_config_overrides_preset() {
    let toml = r#"
[[services]]
dataset = "custom"
vector_file = "/data/custom.txt"
source = "dbpedia"

[services.source_config]
name = "custom"
pos_tag_pattern = "_{pos}"
sense_policy = "average"
rules = [
    { kind = "strip_prefix", value = "ex:" },
    { kind = "trim" },
    { kind = "replace", from = " ", to = "_" },
    { kind = "strip_suffix_pattern", pattern = "@[a-z]+$" },
]
"#;
    let config = KgConfig::from_toml(toml).unwrap();
    let source = config.services[0].resolved_source();
    assert_eq!(source.name, "custom");
    assert_eq!(source.sense_policy, SensePolicy::Average);
    assert_eq!(source.pos_tag_pattern.as_deref(), Some("_{pos}"));
    assert_eq!(source.rules.len(), 4);
    assert_eq!(source.rules[0], RewriteRule::strip_prefix("ex:"));
    assert_eq!(source.rules[1], RewriteRule::Trim);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = KgConfig::from_toml("[cache\nmax_entries = ").unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn validate_rejects_missing_vector_file() {
    let service = ServiceConfig {
        dataset: "DBpedia".to_string(),
        ..Default::default()
    };
    let err = service.validate().unwrap_err();
    assert!(err.to_string().contains("vector_file"));
}

#[test]
fn config_serde_roundtrip() {
    let mut config = KgConfig::default();
    config.services.push(ServiceConfig {
        dataset: "WordNet".to_string(),
        vector_file: "wn.txt".to_string(),
        source: KnowledgeSource::WordNet,
        ..Default::default()
    });
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = KgConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.services.len(), 1);
    assert_eq!(roundtripped.services[0].source, KnowledgeSource::WordNet);
    assert_eq!(roundtripped.cache.max_entries, config.cache.max_entries);
}
