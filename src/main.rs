mod app;
mod data;
mod host;
mod render;
mod ui;
mod utils;

use app::cli::{self, Parsed};

fn main() {
    env_logger::init();

    let cli = match cli::parse_from(std::env::args_os()) {
        Parsed::Run(cli) => cli,
        Parsed::Help(text) => {
            print!("{text}");
            return;
        }
    };

    // Failures are reported, never turned into a non-zero exit status.
    if let Err(e) = app::run::run(cli) {
        eprintln!("animatedfetching: {e:#}");
    }
}
