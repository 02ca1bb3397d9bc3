// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: iced_lightbox [PATH] [OPTIONS]

PATH                 Gallery manifest (.toml) or image folder

Options:
  --open <N>         Open the lightbox at image N (0-based) once loaded
  --lang <TAG>       UI language, e.g. en-US or fr
  --config-dir <DIR> Directory holding settings.toml
  -h, --help         Print this help
";

fn configure_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .init();
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        open_index: args.opt_value_from_str("--open")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        path: args.opt_free_from_str()?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    configure_logging();

    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
