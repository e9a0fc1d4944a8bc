//! End-to-end validation tests against the v4.1.1 dictionary.

use ags_model::{Issue, RuleId, RuleSet, Severity};
use ags_standards::{DictionaryVersion, StandardsError};
use ags_validate::{
    RuleConfig, ValidateError, ValidationReport, validate, validate_with_dictionary,
    validate_with_version,
};
use proptest::prelude::*;

const VALID: &[&str] = &[
    r#""GROUP","PROJ""#,
    r#""HEADING","PROJ_ID","PROJ_NAME""#,
    r#""UNIT","","""#,
    r#""TYPE","ID","X""#,
    r#""DATA","121415","ACME Gas Works""#,
    "",
    r#""GROUP","TRAN""#,
    r#""HEADING","TRAN_ISNO","TRAN_DATE","TRAN_PROD","TRAN_STAT","TRAN_AGS","TRAN_RECV","TRAN_DLIM","TRAN_RCON""#,
    r#""UNIT","","yyyy-mm-dd","","","","","","""#,
    r#""TYPE","X","DT","X","X","X","X","X","X""#,
    r#""DATA","1","2024-05-01","ACME Drilling","FINAL","4.1.1","ACME Consulting","|","+""#,
    "",
    r#""GROUP","UNIT""#,
    r#""HEADING","UNIT_UNIT","UNIT_DESC""#,
    r#""UNIT","","""#,
    r#""TYPE","X","X""#,
    r#""DATA","m","metre""#,
    r#""DATA","yyyy-mm-dd","date""#,
    "",
    r#""GROUP","TYPE""#,
    r#""HEADING","TYPE_TYPE","TYPE_DESC""#,
    r#""UNIT","","""#,
    r#""TYPE","X","X""#,
    r#""DATA","2DP","Value; 2 decimal places""#,
    r#""DATA","DT","Date time""#,
    r#""DATA","ID","Unique identifier""#,
    r#""DATA","PA","Text listed in ABBR""#,
    r#""DATA","RL","Record link""#,
    r#""DATA","X","Text""#,
    "",
    r#""GROUP","ABBR""#,
    r#""HEADING","ABBR_HDNG","ABBR_CODE","ABBR_DESC""#,
    r#""UNIT","","","""#,
    r#""TYPE","X","X","X""#,
    r#""DATA","LOCA_TYPE","CP","Cable percussion""#,
    r#""DATA","SAMP_TYPE","U","Undisturbed""#,
    "",
    r#""GROUP","LOCA""#,
    r#""HEADING","LOCA_ID","LOCA_TYPE","LOCA_NATE""#,
    r#""UNIT","","","m""#,
    r#""TYPE","ID","PA","2DP""#,
    r#""DATA","BH1","CP","523145.00""#,
    r#""DATA","BH2","CP","523200.50""#,
    "",
    r#""GROUP","SAMP""#,
    r#""HEADING","LOCA_ID","SAMP_TOP","SAMP_REF","SAMP_TYPE","SAMP_ID","SAMP_LINK""#,
    r#""UNIT","","m","","","","""#,
    r#""TYPE","ID","2DP","X","PA","ID","RL""#,
    r#""DATA","BH1","1.50","1","U","S1","LOCA|BH1""#,
    r#""DATA","BH2","2.00","2","U","S2","""#,
];

/// 1-based line of the first SAMP DATA row in [`VALID`].
const SAMP_ROW: usize = 49;

fn ags(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\r\n")).collect()
}

/// [`VALID`] with one line replaced (1-based).
fn with_line(number: usize, line: &str) -> String {
    let mut lines = VALID.to_vec();
    lines[number - 1] = line;
    ags(&lines)
}

fn run(text: &str) -> ValidationReport {
    validate(text, DictionaryVersion::V4_1_1, &RuleConfig::all_enabled()).expect("validate")
}

fn of_rule(report: &ValidationReport, rule: RuleId) -> Vec<&Issue> {
    report.issues_for_rule(rule).collect()
}

#[test]
fn valid_file_has_no_issues() {
    let report = run(&ags(VALID));
    assert!(report.is_clean(), "unexpected issues: {:#?}", report.issues);
    assert_eq!(report.document.len(), 8);
}

#[test]
fn validation_is_repeatable() {
    let text = with_line(SAMP_ROW, r#""DATA","BH9","1.5","1","Z","S1","LOCA|BH9""#);
    let first = run(&text);
    let second = run(&text);
    assert!(!first.issues.is_empty());
    assert_eq!(first.issues, second.issues);
    assert_eq!(first.document, second.document);
}

#[test]
fn non_ascii_line_reports_once() {
    let report = run(&with_line(5, r#""DATA","121415","ŁÓDŹ Gas Works""#));
    let issues = of_rule(&report, RuleId::Rule1);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].line_number, Some(5));
    assert!(issues[0].is_error());
}

#[test]
fn decimal_places_boundary() {
    let passing = run(&with_line(SAMP_ROW, r#""DATA","BH1","50.12","1","U","S1","LOCA|BH1""#));
    assert!(of_rule(&passing, RuleId::Rule8).is_empty());

    let failing = run(&with_line(SAMP_ROW, r#""DATA","BH1","50.123","1","U","S1","LOCA|BH1""#));
    let issues = of_rule(&failing, RuleId::Rule8);
    assert_eq!(issues.len(), 1);
    insta::assert_snapshot!(
        issues[0].to_string(),
        @"[Rule 8] Error line 49 SAMP.SAMP_TOP: Value '50.123' in SAMP_TOP does not match unit 'm' and type '2DP'"
    );

    let empty = run(&with_line(5, r#""DATA","121415","""#));
    assert!(of_rule(&empty, RuleId::Rule8).is_empty());
}

#[test]
fn group_and_heading_names() {
    let text = ags(&[
        r#""GROUP","LOCATION""#,
        r#""HEADING","LOC@A_ID""#,
        r#""UNIT","""#,
        r#""TYPE","X""#,
        "",
        r#""GROUP","LOCA""#,
        r#""HEADING","LOCA_ID""#,
        r#""UNIT","""#,
        r#""TYPE","X""#,
    ]);
    let config = RuleConfig::only([RuleId::Rule19, RuleId::Rule19a]);
    let report = validate(&text, DictionaryVersion::V4_1_1, &config).expect("validate");

    let groups = of_rule(&report, RuleId::Rule19);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].group.as_deref(), Some("LOCATION"));

    let headings = of_rule(&report, RuleId::Rule19a);
    assert_eq!(headings.len(), 1);
    assert_eq!(headings[0].field.as_deref(), Some("LOC@A_ID"));
    assert_eq!(headings[0].severity, Severity::Warning);
}

#[test]
fn record_link_without_match() {
    let report = run(&with_line(SAMP_ROW, r#""DATA","BH1","1.50","1","U","S1","LOCA|BH9""#));
    let issues = of_rule(&report, RuleId::Rule11);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("no matching row"));
    assert_eq!(issues[0].line_number, Some(SAMP_ROW));
}

#[test]
fn record_link_to_missing_group() {
    let report = run(&with_line(SAMP_ROW, r#""DATA","BH1","1.50","1","U","S1","GEOL|BH1|0.00|1.00""#));
    let issues = of_rule(&report, RuleId::Rule11);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("GEOL"));
}

#[test]
fn record_link_with_wrong_key_count_matches_nothing() {
    let report = run(&with_line(SAMP_ROW, r#""DATA","BH1","1.50","1","U","S1","LOCA|BH1|extra""#));
    let issues = of_rule(&report, RuleId::Rule11);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("no matching row"));
}

#[test]
fn duplicate_keys_flag_every_row_and_ambiguous_links() {
    let report = run(&with_line(43, r#""DATA","BH1","CP","523200.50""#));

    let keys = of_rule(&report, RuleId::Rule10a);
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0].line_number, Some(42));
    assert_eq!(keys[1].line_number, Some(43));

    let links = of_rule(&report, RuleId::Rule11);
    assert_eq!(links.len(), 1);
    assert!(links[0].message.contains("multiple matching rows"));
}

#[test]
fn child_row_without_parent() {
    let report = run(&with_line(50, r#""DATA","BH9","2.00","2","U","S2","""#));
    let issues = of_rule(&report, RuleId::Rule10c);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].line_number, Some(50));
    assert!(issues[0].message.contains("LOCA_ID=BH9"));
}

#[test]
fn missing_parent_group() {
    let mut lines = VALID.to_vec();
    lines.drain(37..44);
    let report = run(&ags(&lines));
    let issues = of_rule(&report, RuleId::Rule10c);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("Parent group LOCA not found"));
}

#[test]
fn missing_proj_is_a_single_error() {
    let lines: Vec<&str> = VALID[6..].to_vec();
    let report = run(&ags(&lines));
    let proj: Vec<_> = report
        .issues
        .iter()
        .filter(|issue| issue.group.as_deref() == Some("PROJ"))
        .collect();
    assert_eq!(proj.len(), 1, "{proj:#?}");
    assert_eq!(proj[0].rule, RuleId::Rule13);
}

#[test]
fn two_proj_rows_is_a_single_error() {
    let mut lines = VALID.to_vec();
    lines.insert(5, r#""DATA","121416","Second project""#);
    let report = run(&ags(&lines));
    let proj: Vec<_> = report
        .issues
        .iter()
        .filter(|issue| issue.group.as_deref() == Some("PROJ"))
        .collect();
    assert_eq!(proj.len(), 1, "{proj:#?}");
    assert_eq!(proj[0].rule, RuleId::Rule13);
}

#[test]
fn required_field_blank() {
    let report = run(&with_line(50, r#""DATA","BH2","2.00","","U","S2","""#));
    let issues = of_rule(&report, RuleId::Rule10b);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field.as_deref(), Some("SAMP_REF"));
}

#[test]
fn undeclared_unit_and_abbreviation() {
    let mut lines = VALID.to_vec();
    lines.remove(16); // "m" row of UNIT
    let report = run(&ags(&lines));
    let units = of_rule(&report, RuleId::Rule15);
    let fields: Vec<_> = units.iter().filter_map(|i| i.field.as_deref()).collect();
    assert_eq!(fields, ["LOCA_NATE", "SAMP_TOP"]);

    let report = run(&with_line(SAMP_ROW, r#""DATA","BH1","1.50","1","U+XX","S1","LOCA|BH1""#));
    let abbreviations = of_rule(&report, RuleId::Rule16);
    assert_eq!(abbreviations.len(), 1);
    assert!(abbreviations[0].message.contains("'XX'"));
}

#[test]
fn undeclared_type_in_header() {
    let report = run(&with_line(41, r#""TYPE","ID","PA","3DP""#));
    let issues = of_rule(&report, RuleId::Rule17);
    assert_eq!(issues.len(), 1, "{issues:#?}");
    assert_eq!(issues[0].line_number, Some(41));
    assert_eq!(issues[0].group.as_deref(), Some("LOCA"));
    assert_eq!(issues[0].field.as_deref(), Some("LOCA_NATE"));
    assert!(issues[0].message.contains("'3DP'"));
}

#[test]
fn unit_and_type_values_must_be_declared() {
    let mut lines = VALID.to_vec();
    lines.splice(
        29..29,
        [
            r#""DATA","PT","Type listed in TYPE""#,
            r#""DATA","PU","Unit listed in UNIT""#,
        ],
    );
    lines.extend_from_slice(&[
        "",
        r#""GROUP","MYGP""#,
        r#""HEADING","MYGP_ID","MYGP_UNIT","MYGP_TYPE""#,
        r#""UNIT","","","""#,
        r#""TYPE","ID","PU","PT""#,
        r#""DATA","one","m","2DP""#,
        r#""DATA","two","ft","9DP""#,
    ]);
    let config = RuleConfig::only([RuleId::Rule15, RuleId::Rule17]);
    let report = validate(&ags(&lines), DictionaryVersion::V4_1_1, &config).expect("validate");

    let units = of_rule(&report, RuleId::Rule15);
    assert_eq!(units.len(), 1, "{units:#?}");
    assert_eq!(units[0].line_number, Some(59));
    assert_eq!(units[0].field.as_deref(), Some("MYGP_UNIT"));
    assert!(units[0].message.contains("'ft'"));

    let types = of_rule(&report, RuleId::Rule17);
    assert_eq!(types.len(), 1, "{types:#?}");
    assert_eq!(types[0].line_number, Some(59));
    assert_eq!(types[0].field.as_deref(), Some("MYGP_TYPE"));
    assert!(types[0].message.contains("'9DP'"));
}

#[test]
fn missing_type_group_is_a_single_error() {
    let mut lines = VALID.to_vec();
    lines.drain(19..30);
    let report = run(&ags(&lines));
    let issues = of_rule(&report, RuleId::Rule17);
    assert_eq!(issues.len(), 1, "{issues:#?}");
    assert_eq!(issues[0].message, "TYPE group not found");
    assert_eq!(issues[0].line_number, None);
}

#[test]
fn two_tran_rows_is_a_single_error() {
    let mut lines = VALID.to_vec();
    lines.insert(
        11,
        r#""DATA","2","2024-05-02","ACME Drilling","FINAL","4.1.1","ACME Consulting","|","+""#,
    );
    let report = run(&ags(&lines));
    let issues = of_rule(&report, RuleId::Rule14);
    assert_eq!(issues.len(), 1, "{issues:#?}");
    assert_eq!(issues[0].line_number, Some(7));
    assert!(issues[0].message.contains("found 2"));
}

#[test]
fn repeated_heading_reports_one_value_error_per_row() {
    let mut lines = VALID.to_vec();
    lines[38] = r#""HEADING","LOCA_ID","LOCA_TYPE","LOCA_NATE","LOCA_NATE""#;
    lines[39] = r#""UNIT","","","m","m""#;
    lines[40] = r#""TYPE","ID","PA","2DP","2DP""#;
    lines[41] = r#""DATA","BH1","CP","523145.00","1.5""#;
    lines[42] = r#""DATA","BH2","CP","523200.50","2.5""#;
    let config = RuleConfig::only([RuleId::Rule8]);
    let report = validate(&ags(&lines), DictionaryVersion::V4_1_1, &config).expect("validate");

    let rows: Vec<_> = of_rule(&report, RuleId::Rule8)
        .iter()
        .map(|issue| issue.line_number)
        .collect();
    assert_eq!(rows, [Some(42), Some(43)]);
}

#[test]
fn missing_abbr_group_is_a_warning() {
    let mut lines = VALID.to_vec();
    lines.drain(30..37);
    let report = run(&ags(&lines));
    let issues = of_rule(&report, RuleId::Rule16);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
}

#[test]
fn headings_out_of_dictionary_order() {
    let mut lines = VALID.to_vec();
    lines[38] = r#""HEADING","LOCA_ID","LOCA_NATE","LOCA_TYPE""#;
    lines[39] = r#""UNIT","","m","""#;
    lines[40] = r#""TYPE","ID","2DP","PA""#;
    lines[41] = r#""DATA","BH1","523145.00","CP""#;
    lines[42] = r#""DATA","BH2","523200.50","CP""#;
    let report = run(&ags(&lines));
    assert_eq!(report.error_count(), 1, "{:#?}", report.issues);
    let issues = of_rule(&report, RuleId::Rule7);
    assert_eq!(issues[0].field.as_deref(), Some("LOCA_TYPE"));
}

#[test]
fn dict_declared_heading_is_a_warning() {
    let mut lines = VALID.to_vec();
    lines[38] = r#""HEADING","LOCA_ID","LOCA_TYPE","LOCA_NATE","LOCA_XTRA","LOCA_YTRA""#;
    lines[39] = r#""UNIT","","","m","","""#;
    lines[40] = r#""TYPE","ID","PA","2DP","X","X""#;
    lines[41] = r#""DATA","BH1","CP","523145.00","a","b""#;
    lines[42] = r#""DATA","BH2","CP","523200.50","c","d""#;
    lines.extend_from_slice(&[
        "",
        r#""GROUP","DICT""#,
        r#""HEADING","DICT_TYPE","DICT_GRP","DICT_HDNG","DICT_STAT","DICT_DTYP""#,
        r#""UNIT","","","","","""#,
        r#""TYPE","PA","X","X","PA","PT""#,
        r#""DATA","HEADING","LOCA","LOCA_XTRA","OTHER","X""#,
    ]);
    let config = RuleConfig::only([RuleId::Rule9]);
    let report = validate(&ags(&lines), DictionaryVersion::V4_1_1, &config).expect("validate");

    let issues = of_rule(&report, RuleId::Rule9);
    assert_eq!(issues.len(), 2, "{issues:#?}");
    assert_eq!(issues[0].field.as_deref(), Some("LOCA_XTRA"));
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(issues[1].field.as_deref(), Some("LOCA_YTRA"));
    assert_eq!(issues[1].severity, Severity::Error);
}

#[test]
fn user_group_needs_dict_declaration() {
    let mut lines = VALID.to_vec();
    lines.extend_from_slice(&[
        "",
        r#""GROUP","MYGP""#,
        r#""HEADING","MYGP_ID""#,
        r#""UNIT","""#,
        r#""TYPE","X""#,
        r#""DATA","one""#,
    ]);
    let config = RuleConfig::only([RuleId::Rule18]);

    let report = validate(&ags(&lines), DictionaryVersion::V4_1_1, &config).expect("validate");
    let issues = of_rule(&report, RuleId::Rule18);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Error);

    lines.extend_from_slice(&[
        "",
        r#""GROUP","DICT""#,
        r#""HEADING","DICT_TYPE","DICT_GRP","DICT_HDNG","DICT_STAT","DICT_DTYP","DICT_PGRP""#,
        r#""UNIT","","","","","","""#,
        r#""TYPE","PA","X","X","PA","PT","X""#,
        r#""DATA","GROUP","MYGP","","","","-""#,
        r#""DATA","HEADING","MYGP","MYGP_ID","KEY","X","""#,
    ]);
    let report = validate(&ags(&lines), DictionaryVersion::V4_1_1, &config).expect("validate");
    let issues = of_rule(&report, RuleId::Rule18);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
}

#[test]
fn duplicate_group_is_reported_and_later_group_kept() {
    let mut lines = VALID.to_vec();
    lines.extend_from_slice(&[
        "",
        r#""GROUP","PROJ""#,
        r#""HEADING","PROJ_ID","PROJ_NAME""#,
        r#""UNIT","","""#,
        r#""TYPE","ID","X""#,
        r#""DATA","999","Replacement""#,
    ]);
    let report = run(&ags(&lines));
    let issues = of_rule(&report, RuleId::DuplicateGroup);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].line_number, Some(52));
    assert_eq!(issues[0].severity, Severity::Warning);
    let proj = report.document.get("PROJ").expect("PROJ");
    assert_eq!(proj.rows[0].get("PROJ_ID"), "999");
}

#[test]
fn disabled_rules_do_not_run() {
    let text = ags(VALID).replace("\r\n", "\n");
    let report = run(&text);
    assert_eq!(of_rule(&report, RuleId::Rule2a).len(), VALID.len());
    assert_eq!(report.error_count(), 0);

    let config = RuleConfig::all_enabled().disable(RuleId::Rule2a);
    let report = validate(&text, DictionaryVersion::V4_1_1, &config).expect("validate");
    assert!(report.is_clean(), "{:#?}", report.issues);
}

#[test]
fn raw_structure_problems() {
    let text = ags(&[
        r#""GROUP","LOCA","extra""#,
        r#""UNIT","""#,
        r#""TYPE","ID""#,
        r#""DATA","BH1""#,
        r#""HEADING","LOCA_ID""#,
        r#""DATA","BH1","surplus""#,
        r#""REMARK","x""#,
        r#"DATA,"BH2""#,
        r#""DATA","6" pipe""#,
    ]);
    let config = RuleConfig::only([
        RuleId::Rule2b,
        RuleId::Rule3,
        RuleId::Rule4a,
        RuleId::Rule4b,
        RuleId::Rule5,
    ]);
    let report = validate(&text, DictionaryVersion::V4_1_1, &config).expect("validate");

    assert_eq!(of_rule(&report, RuleId::Rule4a).len(), 1);

    let rule2b: Vec<_> = of_rule(&report, RuleId::Rule2b)
        .iter()
        .map(|issue| (issue.line_number, issue.message.as_str()))
        .collect();
    assert_eq!(
        rule2b,
        [
            (Some(2), "HEADING row missing or misplaced (found UNIT)"),
            (Some(3), "UNIT row missing or misplaced (found TYPE)"),
            (Some(4), "TYPE row missing or misplaced (found DATA)"),
        ]
    );

    // The unquoted descriptor on line 8 leaves "BH2" as the first field.
    let rule3: Vec<_> = of_rule(&report, RuleId::Rule3)
        .iter()
        .map(|issue| issue.line_number)
        .collect();
    assert_eq!(rule3, [Some(7), Some(8)]);

    let rule4b = of_rule(&report, RuleId::Rule4b);
    assert_eq!(rule4b.len(), 3);
    assert_eq!(rule4b[0].line_number, None);
    assert_eq!(rule4b[0].group.as_deref(), Some("LOCA"));
    assert_eq!(rule4b[1].line_number, Some(6));
    assert_eq!(rule4b[2].line_number, Some(9));

    let rule5: Vec<_> = of_rule(&report, RuleId::Rule5)
        .iter()
        .map(|issue| issue.line_number)
        .collect();
    assert_eq!(rule5, [Some(8), Some(9)]);
}

#[test]
fn issues_are_ordered_by_rule_set() {
    let text = with_line(SAMP_ROW, "\"DATA\",\"BH9\",\"1.5\",\"1\",\"Z\",\"S1\",\"LOCA|BH9\"\u{e9}");
    let report = run(&text);
    let sets: Vec<RuleSet> = report.issues.iter().map(|i| i.rule.rule_set()).collect();
    assert!(sets.windows(2).all(|pair| pair[0] <= pair[1]), "{sets:?}");
    for set in [RuleSet::Raw, RuleSet::Parsed, RuleSet::Dictionary] {
        assert!(sets.contains(&set), "no {set:?} issues");
    }
}

#[test]
fn empty_input_reports_missing_groups() {
    let report = run("");
    let rules: Vec<_> = report.issues.iter().map(|issue| issue.rule).collect();
    assert_eq!(rules, [RuleId::Rule13, RuleId::Rule14]);
}

#[test]
fn version_names_are_checked() {
    let err = validate_with_version("", "v9_9", &RuleConfig::all_enabled()).unwrap_err();
    assert!(matches!(
        err,
        ValidateError::Standards(StandardsError::UnknownVersion { .. })
    ));

    let report = validate_with_version(&ags(VALID), "4.0.4", &RuleConfig::all_enabled())
        .expect("validate");
    assert_eq!(report.dictionary, DictionaryVersion::V4_0_4);
}

#[test]
fn report_serializes_to_json() {
    let report = run(&with_line(SAMP_ROW, r#""DATA","BH1","50.123","1","U","S1","LOCA|BH1""#));
    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["dictionary"], "v4_1_1");
    assert_eq!(json["issues"][0]["rule"], "8");
    assert_eq!(json["issues"][0]["line_number"], 49);
}

proptest! {
    #[test]
    fn arbitrary_input_never_panics(text in "(\\PC|\r|\n|\"|,){0,200}") {
        let dictionary = ags_standards::dictionary(DictionaryVersion::V4_1_1).expect("load");
        let first = validate_with_dictionary(&text, dictionary, &RuleConfig::all_enabled());
        let second = validate_with_dictionary(&text, dictionary, &RuleConfig::all_enabled());
        prop_assert_eq!(first.issues, second.issues);
    }
}
