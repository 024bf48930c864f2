use crate::app::cli::Cli;
use crate::data::config::Config;
use crate::host::SystemInfo;
use crate::render::block_renderer::render_frame;
use crate::render::gif_loader;
use crate::ui::info_panel::InfoPanel;
use crate::utils::terminal::terminal_width;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

const CLEAR_AND_HOME: &str = "\x1b[2J\x1b[H";

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default();
    let gif_path = config.resolve_gif_path(cli.gif.as_deref());
    let term_width = terminal_width();
    let info = SystemInfo::gather();
    log::debug!("terminal width {term_width}, gif {}", gif_path.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stderr = io::stderr();
    let mut err = stderr.lock();

    present(&mut out, &mut err, &config, &gif_path, &info, term_width)?;
    out.flush().context("flush stdout")
}

/// Writes the whole banner. Image problems go to `err` and never change the info block.
pub fn present<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    config: &Config,
    gif_path: &Path,
    info: &SystemInfo,
    term_width: u16,
) -> Result<()> {
    if config.clear_screen {
        out.write_all(CLEAR_AND_HOME.as_bytes())?;
    }
    out.write_all(b"\n\n")?;

    draw_image(out, err, config, gif_path, term_width)?;

    let panel = InfoPanel {
        sections: &config.info_sections,
        show_hostname: config.show_hostname,
    };
    panel.render(out, info, term_width)?;
    Ok(())
}

fn draw_image<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    config: &Config,
    gif_path: &Path,
    term_width: u16,
) -> Result<()> {
    if !config.show_image {
        log::debug!("image disabled in config");
        return Ok(());
    }
    if !gif_path.exists() {
        writeln!(err, "Warning: GIF file not found at {}", gif_path.display())?;
        writeln!(err, "Continuing without animation...")?;
        return Ok(());
    }

    match gif_loader::load(gif_path, config.palette_mode()) {
        Ok(frame) => {
            render_frame(out, &frame, term_width, config.display_width()).context("render image")?;
        }
        Err(e) => {
            writeln!(err, "Warning: Failed to load GIF from {}: {e}", gif_path.display())?;
        }
    }
    Ok(())
}
