use super::*;

fn settings(
    command: &str,
    args: &[&str],
) -> FormattingSettings {
    FormattingSettings {
        enable: true,
        command: command.to_string(),
        args: args.iter().map(|arg| arg.to_string()).collect(),
    }
}

#[test]
fn missing_formatter_returns_source_unchanged() {
    let source = "package p\n";
    let formatted = format_source(source, &settings("retype-no-such-formatter", &[])).unwrap();
    assert_eq!(formatted, source);
}

#[cfg(unix)]
#[test]
fn formatter_output_replaces_source() {
    let formatted = format_source("package p\n", &settings("tr", &["p", "q"])).unwrap();
    assert_eq!(formatted, "qackage q\n");
}

#[cfg(unix)]
#[test]
fn failing_formatter_reports_stderr() {
    let error = format_source("package p\n", &settings("sh", &["-c", "cat >/dev/null; echo broken >&2; exit 2"])).unwrap_err();
    match error {
        FormattingError::FormattingFailed {
            command,
            reason,
        } => {
            assert_eq!(command, "sh");
            assert_eq!(reason, "broken");
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn error_messages() {
    assert_eq!(FormattingError::CommandNotFound("gofmt".to_string()).to_string(), "gofmt is not available");
    assert_eq!(
        FormattingError::FormattingFailed {
            command: "gofmt".to_string(),
            reason: "<standard input>:1:1: expected 'package'".to_string(),
        }
        .to_string(),
        "gofmt failed: <standard input>:1:1: expected 'package'"
    );
}
