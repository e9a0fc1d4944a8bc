use std::io::{self, IsTerminal, Write};
use std::path::Path;

use ags_cli::settings::{self, Overrides};
use ags_cli::summary::{dictionary_table, issue_table, report_json, rule_table, summary_line};
use ags_ingest::{parse_with_diagnostics, read_ags_file, serialize, write_ags_file};
use ags_standards::DictionaryVersion;
use ags_validate::{ValidationReport, validate};
use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use crate::cli::{FormatArgs, ReportFormatArg, ValidateArgs};

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let span = info_span!("file", path = %args.file.display());
    let _guard = span.enter();

    let overrides = Overrides {
        dictionary: args.dictionary,
        disable: args.disable.clone(),
        enable: args.enable.clone(),
    };
    let config = settings::resolve(args.config.as_deref(), &overrides)?;
    let text = read_ags_file(&args.file).context("read AGS file")?;

    let report = validate(&text, config.dictionary, &config.rules)
        .with_context(|| format!("load dictionary {}", config.dictionary))?;
    info!(
        dictionary = %report.dictionary,
        groups = report.document.len(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validation complete"
    );
    Ok(report)
}

pub fn print_report(path: &Path, report: &ValidationReport, format: ReportFormatArg) -> Result<()> {
    match format {
        ReportFormatArg::Json => {
            println!("{}", report_json(path, report).context("serialize report")?);
        }
        ReportFormatArg::Table => {
            if !report.is_clean() {
                let styled = io::stdout().is_terminal();
                println!("{}", issue_table(report, styled));
            }
            println!("{}", summary_line(path, report));
        }
    }
    Ok(())
}

pub fn run_format(args: &FormatArgs) -> Result<()> {
    let text = read_ags_file(&args.file).context("read AGS file")?;
    let parsed = parse_with_diagnostics(&text);
    for duplicate in &parsed.duplicate_groups {
        warn!(
            group = %duplicate.name,
            discarded_line = duplicate.discarded_line,
            "duplicate group dropped from output"
        );
    }
    let formatted = serialize(&parsed.document);

    match &args.output {
        Some(path) => {
            write_ags_file(path, &formatted).context("write AGS file")?;
            info!(path = %path.display(), groups = parsed.document.len(), "file written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(formatted.as_bytes())
                .context("write to stdout")?;
            stdout.flush().context("flush stdout")?;
        }
    }
    Ok(())
}

pub fn run_dictionaries() -> Result<()> {
    let dictionaries = DictionaryVersion::all()
        .iter()
        .map(|&version| {
            ags_standards::dictionary(version)
                .with_context(|| format!("load dictionary {version}"))
        })
        .collect::<Result<Vec<_>>>()?;
    let styled = io::stdout().is_terminal();
    println!("{}", dictionary_table(&dictionaries, styled));
    Ok(())
}

pub fn run_rules() {
    let styled = io::stdout().is_terminal();
    println!("{}", rule_table(styled));
}
