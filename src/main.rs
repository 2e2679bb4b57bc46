use clap::Parser;
use std::io;
use std::path::PathBuf;

use declutter::cli;
use declutter::config::Settings;
use declutter::output::{OutputFormatter, Prompter};

#[derive(Parser)]
#[command(
    name = "declutter",
    version,
    about = "Clean up a folder by filing loose files into category and year folders"
)]
struct Args {
    /// Directory to clean; a leading '$' reads the path from that
    /// environment variable (defaults to the current directory)
    path: Option<PathBuf>,

    /// Path to a configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock());

    let root = match cli::resolve_root(args.path.as_deref(), &mut prompter) {
        Ok(root) => root,
        Err(e) => {
            OutputFormatter::error(&format!("Error: {}", e));
            std::process::exit(1);
        }
    };

    // Settings come after root resolution: the scan-filter file lives in
    // the directory being cleaned, not in the process's own cwd.
    let settings = match Settings::load(&root, args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            OutputFormatter::error(&format!("Error loading configuration: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = cli::run(&root, &settings, &mut prompter) {
        OutputFormatter::error(&format!("Error: {}", e));
        std::process::exit(1);
    }
}
