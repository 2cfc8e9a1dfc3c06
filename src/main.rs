//! Binary entry point for `manifest-bump`.

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = manifest_bump::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
