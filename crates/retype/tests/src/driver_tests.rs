use std::{
    fs,
    sync::atomic::{AtomicU64, Ordering},
};

use super::*;

fn test_dir() -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("retype_driver_test_{}_{id}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn options() -> Options {
    Options {
        file: Some(PathBuf::from("model.go")),
        from: "string".to_string(),
        to: "[]byte".to_string(),
        ..Options::default()
    }
}

fn validation_error(options: Options) -> String {
    options.validate(&Settings::default()).unwrap_err().to_string()
}

fn spec(
    from: &str,
    to: &str,
) -> RewriteSpec {
    RewriteSpec {
        from: from.to_string(),
        to: to.to_string(),
    }
}

#[test]
fn file_is_required() {
    let opts = Options {
        file: None,
        all: true,
        ..options()
    };
    assert_eq!(validation_error(opts), "no file is passed");
}

#[test]
fn a_locator_is_required() {
    assert_eq!(validation_error(options()), "--line, --struct or --all is not passed");
}

#[test]
fn line_and_struct_are_exclusive() {
    let opts = Options {
        line: Some("3".to_string()),
        struct_name: Some("foo".to_string()),
        ..options()
    };
    assert_eq!(validation_error(opts), "--line or --struct cannot be used together. pick one");
}

#[test]
fn field_requires_struct() {
    let opts = Options {
        all: true,
        field: Some("bar".to_string()),
        ..options()
    };
    assert_eq!(validation_error(opts), "--field is requiring --struct");
}

#[test]
fn line_takes_priority_over_all() {
    let opts = Options {
        line: Some("4,6".to_string()),
        all: true,
        ..options()
    };
    let config = opts.validate(&Settings::default()).unwrap();
    assert_eq!(config.locator, Locator::Lines("4,6".to_string()));
}

#[test]
fn struct_locator_carries_the_field() {
    let opts = Options {
        struct_name: Some("foo".to_string()),
        field: Some("bar".to_string()),
        ..options()
    };
    let config = opts.validate(&Settings::default()).unwrap();
    assert_eq!(
        config.locator,
        Locator::Struct {
            name: "foo".to_string(),
            field: Some("bar".to_string()),
        }
    );
    assert_eq!(config.spec, spec("string", "[]byte"));
    assert_eq!(config.formatting, None);
}

#[test]
fn settings_switch_features_on() {
    let settings = Settings::from_toml_str("skip_unexported = true\n[formatting]\nenable = true\n").unwrap();
    let opts = Options {
        all: true,
        ..options()
    };
    let config = opts.validate(&settings).unwrap();
    assert!(config.skip_unexported);
    assert_eq!(config.formatting.map(|f| f.command), Some("gofmt".to_string()));
}

#[test]
fn fmt_flag_enables_configured_formatter() {
    let settings = Settings::from_toml_str("[formatting]\ncommand = \"goimports\"\n").unwrap();
    let opts = Options {
        all: true,
        format: true,
        ..options()
    };
    let config = opts.validate(&settings).unwrap();
    assert_eq!(config.formatting.map(|f| f.command), Some("goimports".to_string()));
}

#[test]
fn struct_and_field_selection_rewrite() {
    let source = "package p\n\ntype foo struct {\n\tbar string\n\tbaz string\n}\n";
    let locator = Locator::Struct {
        name: "foo".to_string(),
        field: Some("bar".to_string()),
    };
    let (out, report) = retype_source(source, &locator, &spec("string", "[]byte"), false).unwrap();
    assert_eq!(out, "package p\n\ntype foo struct {\n\tbar []byte\n\tbaz string\n}\n");
    assert_eq!(report.span.start, 4);
    assert_eq!(report.span.end, 4);
}

#[test]
fn selection_errors_leave_nothing_rewritten() {
    let source = "package p\n\ntype foo struct {\n\tbar string\n}\n";
    let err = retype_source(source, &Locator::Lines("5,4".to_string()), &spec("string", "[]byte"), false).unwrap_err();
    assert!(matches!(err, RetypeError::InvalidRange { .. }));

    let locator = Locator::Struct {
        name: "bar".to_string(),
        field: None,
    };
    let err = retype_source(source, &locator, &spec("string", "[]byte"), false).unwrap_err();
    assert_eq!(err.to_string(), "struct name does not exist");
}

#[test]
fn syntax_errors_are_reported_before_selection() {
    let err = retype_source("type foo struct {}\n", &Locator::All, &spec("a", "b"), false).unwrap_err();
    assert!(matches!(err, RetypeError::Syntax { .. }));
    assert!(err.to_string().starts_with("<source>: expected package clause at offset 0"));
}

#[test]
fn malformed_target_type_is_rejected() {
    let source = "package p\n\ntype foo struct {\n\tbar string\n}\n";
    let err = retype_source(source, &Locator::All, &spec("string", "[]"), false).unwrap_err();
    assert!(matches!(err, RetypeError::InvalidOutput { .. }));
}

#[test]
fn run_prints_without_touching_the_file() {
    let dir = test_dir();
    let file = dir.join("model.go");
    let source = "package model\n\ntype User struct {\n\tID int\n}\n";
    fs::write(&file, source).unwrap();

    let config = Options {
        file: Some(file.clone()),
        all: true,
        from: "int".to_string(),
        to: "int64".to_string(),
        ..Options::default()
    }
    .validate(&Settings::default())
    .unwrap();
    let output = run(&config).unwrap();
    assert_eq!(output.source, "package model\n\ntype User struct {\n\tID int64\n}\n");
    assert_eq!(fs::read_to_string(&file).unwrap(), source);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn run_writes_back_with_write_flag() {
    let dir = test_dir();
    let file = dir.join("model.go");
    fs::write(&file, "package model\n\ntype User struct {\n\tID int\n}\n").unwrap();

    let config = Options {
        file: Some(file.clone()),
        write: true,
        all: true,
        from: "int".to_string(),
        to: "int64".to_string(),
        ..Options::default()
    }
    .validate(&Settings::default())
    .unwrap();
    run(&config).unwrap();
    assert_eq!(fs::read_to_string(&file).unwrap(), "package model\n\ntype User struct {\n\tID int64\n}\n");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn run_reports_missing_file() {
    let dir = test_dir();
    let config = Options {
        file: Some(dir.join("absent.go")),
        all: true,
        ..options()
    }
    .validate(&Settings::default())
    .unwrap();
    assert!(matches!(run(&config).unwrap_err(), RetypeError::Io { .. }));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn json_report_shape() {
    let output = RunOutput {
        file: PathBuf::from("a.go"),
        report: RewriteReport {
            span: crate::select::Span::new(1, 3),
            rewrites: vec![crate::rewrite::FieldRewrite {
                line: 2,
                name: "A".to_string(),
                from: "int".to_string(),
                to: "int64".to_string(),
            }],
        },
        source: "package a\n".to_string(),
    };
    let value = serde_json::to_value(&output).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "file": "a.go",
            "span": { "start": 1, "end": 3 },
            "rewrites": [{ "line": 2, "name": "A", "from": "int", "to": "int64" }],
            "source": "package a\n",
        })
    );
}
