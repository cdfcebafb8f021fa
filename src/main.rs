// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::time::Duration;
use toastdeck::config;
use toastdeck::{NotificationConfig, Notifier};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Render a toast notification and print the document

USAGE:
  toastdeck [OPTIONS]

OPTIONS:
  --title TEXT      Notification title
  --text TEXT       Notification text
  --status NAME     success, error, warning, info or any class name
  --stack NAME      Stack to push the notification to
  --timeout MS      Auto-dismiss delay, 0 or less disables it
  --at MS           Virtual time at which the document is printed [default: 50]
  --config PATH     Settings file [default: user config directory]
  -h, --help        Print help
";

struct Args {
    config: Option<PathBuf>,
    title: Option<String>,
    text: Option<String>,
    status: Option<String>,
    stack: Option<String>,
    timeout: Option<i64>,
    at: u64,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let parsed = Args {
        config: args.opt_value_from_str("--config")?,
        title: args.opt_value_from_str("--title")?,
        text: args.opt_value_from_str("--text")?,
        status: args.opt_value_from_str("--status")?,
        stack: args.opt_value_from_str("--stack")?,
        timeout: args.opt_value_from_str("--timeout")?,
        at: args.opt_value_from_str("--at")?.unwrap_or(50),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "Ignoring unexpected arguments");
    }
    Ok(parsed)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = parse_args()?;

    let settings = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };

    let mut notification = NotificationConfig::new();
    notification.title = args.title;
    notification.text = args.text;
    notification.status = args.status;
    notification.stack = args.stack;
    notification.autotimeout = args.timeout;

    let mut notifier = Notifier::with_settings(settings);
    notifier.send(notification);
    notifier.advance(Duration::from_millis(args.at));

    println!("{}", notifier.document());
    Ok(())
}
