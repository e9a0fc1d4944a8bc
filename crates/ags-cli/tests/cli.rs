//! Tests for settings resolution and report rendering.

use std::io::Write;
use std::path::Path;

use ags_cli::logging::{LogConfig, LogFormat};
use ags_cli::settings::{Overrides, resolve};
use ags_cli::summary::{dictionary_table, issue_table, report_json, rule_table, summary_line};
use ags_model::RuleId;
use ags_standards::DictionaryVersion;
use ags_validate::{RuleConfig, ValidationReport, validate};

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn report_for(text: &str) -> ValidationReport {
    validate(text, DictionaryVersion::V4_1_1, &RuleConfig::only([RuleId::Rule8]))
        .expect("validate")
}

const ONE_BAD_VALUE: &str = "\"GROUP\",\"LOCA\"\r\n\
\"HEADING\",\"LOCA_ID\",\"LOCA_NATE\"\r\n\
\"UNIT\",\"\",\"m\"\r\n\
\"TYPE\",\"ID\",\"2DP\"\r\n\
\"DATA\",\"BH1\",\"1.5\"\r\n";

#[test]
fn defaults_without_config() {
    let config = resolve(None, &Overrides::default()).expect("resolve");
    assert_eq!(config.dictionary, DictionaryVersion::V4_1_1);
    assert_eq!(config.rules.disabled_rules().count(), 0);
}

#[test]
fn flags_override_config_file() {
    let file = config_file("dictionary = \"v4_0_4\"\n\n[rules]\n\"2a\" = false\n\"8\" = false\n");
    let overrides = Overrides {
        dictionary: Some(DictionaryVersion::V4_1),
        disable: vec![RuleId::Rule19a],
        enable: vec![RuleId::Rule8],
    };
    let config = resolve(Some(file.path()), &overrides).expect("resolve");
    assert_eq!(config.dictionary, DictionaryVersion::V4_1);
    assert_eq!(
        config.rules.disabled_rules().collect::<Vec<_>>(),
        [RuleId::Rule2a, RuleId::Rule19a]
    );
}

#[test]
fn bad_config_names_the_file() {
    let file = config_file("[rules]\n\"99\" = false\n");
    let err = resolve(Some(file.path()), &Overrides::default()).unwrap_err();
    assert!(format!("{err:#}").contains("parse config"));

    let err = resolve(Some(Path::new("/nonexistent/ags.toml")), &Overrides::default())
        .unwrap_err();
    assert!(err.to_string().contains("read config"));
}

#[test]
fn summary_line_counts_issues() {
    let report = report_for(ONE_BAD_VALUE);
    insta::assert_snapshot!(
        summary_line(Path::new("site.ags"), &report),
        @"site.ags: 1 error(s), 0 warning(s) (AGS 4.1.1 dictionary)"
    );
}

#[test]
fn issue_table_lists_each_issue() {
    let report = report_for(ONE_BAD_VALUE);
    let rendered = issue_table(&report, false).to_string();
    assert!(rendered.contains("ERROR"));
    assert!(rendered.contains("LOCA_NATE"));
    assert!(rendered.contains('5'));
}

#[test]
fn json_report_omits_document() {
    let report = report_for(ONE_BAD_VALUE);
    let json = report_json(Path::new("site.ags"), &report).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");
    assert_eq!(value["file"], "site.ags");
    assert_eq!(value["dictionary"], "v4_1_1");
    assert_eq!(value["errors"], 1);
    assert_eq!(value["issues"][0]["rule"], "8");
    assert_eq!(value["issues"][0]["field"], "LOCA_NATE");
    assert!(value.get("document").is_none());
}

#[test]
fn dictionary_table_marks_default() {
    let dictionaries: Vec<_> = DictionaryVersion::all()
        .iter()
        .map(|&version| ags_standards::dictionary(version).expect("load"))
        .collect();
    let rendered = dictionary_table(&dictionaries, false).to_string();
    for version in DictionaryVersion::all() {
        assert!(rendered.contains(version.as_str()));
    }
    assert_eq!(rendered.matches('✓').count(), 1);
}

#[test]
fn rule_table_lists_every_rule_with_its_stage() {
    let rendered = rule_table(false).to_string();
    for rule in RuleId::all() {
        assert!(rendered.contains(&format!(" {} ", rule.as_str())), "{rule} missing");
    }
    for stage in ["Raw text", "Parsed data", "Dictionary"] {
        assert!(rendered.contains(stage));
    }
    assert!(rendered.contains("Data types must be listed in the TYPE group"));
}

#[test]
fn log_config_builders() {
    let config = LogConfig::default()
        .with_format(LogFormat::Json)
        .with_ansi(false)
        .with_log_file(Some("ags.log".into()));
    assert_eq!(config.format, LogFormat::Json);
    assert!(!config.with_ansi);
    assert!(config.use_env_filter);
}
