use std::fs::File;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use funcpad::core::config;
use funcpad::tui;

#[derive(Parser)]
#[command(name = "funcpad", about = "Interactive launcher for function projects")]
struct Args {
    /// Default language runtime for new projects
    #[arg(short, long)]
    language: Option<String>,

    /// Default template for new projects
    #[arg(short, long)]
    template: Option<String>,

    /// Where to write the log file (the TUI owns the terminal)
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = config::load();
    let resolved = config::resolve(
        file_config,
        config::Overrides {
            language: args.language,
            template: args.template,
            log_file: args.log_file,
        },
    );

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!(
        "funcpad starting up (language={}, template={})",
        resolved.language,
        resolved.template
    );

    tui::run(resolved)
}
