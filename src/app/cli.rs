use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// AnimatedFetching - A terminal fetch program with GIF support
#[derive(Debug, Default, Parser)]
#[command(name = "animatedfetching")]
pub struct Cli {
    /// Path to GIF file (default: ~/.config/animatedfetching/animation.gif)
    #[arg(short = 'g', long = "gif", value_name = "path")]
    pub gif: Option<PathBuf>,
}

pub enum Parsed {
    Run(Cli),
    /// Help was requested; the text is ready to print.
    Help(String),
}

/// Argument problems never stop the fetch: they are reported and the defaults are used.
pub fn parse_from<I, T>(args: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Parsed::Run(cli),
        Err(e) if e.kind() == ErrorKind::DisplayHelp => Parsed::Help(e.render().to_string()),
        Err(e) => {
            let msg = e.render().to_string();
            let first = msg.lines().next().unwrap_or("invalid arguments");
            eprintln!("Warning: {}", first.trim_start_matches("error: "));
            Parsed::Run(Cli::default())
        }
    }
}
