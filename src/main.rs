use files_json_generator::config::Config;
use std::io::{self, IsTerminal};
use std::process;

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // stdout is reserved for the confirmation line.
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    match files_json_generator::run(&config) {
        Ok(_) => {
            println!("{} generated successfully!", config.output_file.display());
        }
        Err(e) => {
            eprintln!("Failed to generate {}: {}", config.output_file.display(), e);
            process::exit(1);
        }
    }
}
