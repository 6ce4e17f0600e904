use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use retype::{Options, RetypeError, Settings, config::LogLevel, driver};

#[derive(Parser, Debug)]
#[command(name = "retype", version, about = "Rewrite the declared types of Go struct fields")]
struct Args {
    /// Go source file to rewrite.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Write the result back to the file instead of stdout.
    #[arg(short, long)]
    write: bool,

    /// Line of a field, or a range of lines: 4 or 4,8.
    #[arg(long)]
    line: Option<String>,

    /// Struct to process.
    #[arg(long = "struct")]
    struct_name: Option<String>,

    /// Field of --struct to process.
    #[arg(long)]
    field: Option<String>,

    /// Process every struct in the file.
    #[arg(long)]
    all: bool,

    /// Type to replace, spelled the way gofmt prints it.
    #[arg(long)]
    from: String,

    /// Replacement type.
    #[arg(long)]
    to: String,

    /// Leave fields without an exported name alone.
    #[arg(long)]
    skip_unexported: bool,

    /// Pipe the result through the configured formatter (gofmt by default).
    #[arg(long = "fmt")]
    format: bool,

    /// Print a JSON report instead of the rewritten source.
    #[arg(long)]
    json: bool,

    /// Config file to use instead of looking up retype.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn load_settings(args: &Args) -> Result<Settings, RetypeError> {
    match (&args.config, &args.file) {
        (Some(path), _) => Settings::load(path),
        (None, Some(file)) => Settings::discover(file),
        (None, None) => Ok(Settings::default()),
    }
}

fn init_logging(
    args: &Args,
    settings: &Settings,
) {
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        settings.logging.level
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(EnvFilter::new(format!("retype={}", level.as_str())));

    let file_layer = args.log_file.as_ref().map(|log_path| {
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(Path::new(".")),
            log_path.file_name().unwrap_or(std::ffi::OsStr::new("retype.log")),
        );
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false)
            .with_filter(EnvFilter::new(format!("retype={}", LogLevel::Debug.as_str())))
    });

    tracing_subscriber::registry().with(file_layer).with(stderr_layer).init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        },
    };
    init_logging(&args, &settings);
    debug!(?settings, "loaded settings");

    match execute(args, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        },
    }
}

fn execute(
    args: Args,
    settings: &Settings,
) -> Result<(), RetypeError> {
    let json = args.json;
    let options = Options {
        file: args.file,
        write: args.write,
        line: args.line,
        struct_name: args.struct_name,
        field: args.field,
        all: args.all,
        from: args.from,
        to: args.to,
        skip_unexported: args.skip_unexported,
        format: args.format,
    };
    let config = options.validate(settings)?;
    let output = driver::run(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output).map_err(RetypeError::Report)?);
    } else if !config.write {
        print!("{}", output.source);
    }
    Ok(())
}
