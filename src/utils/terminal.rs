use std::io::IsTerminal;

pub const FALLBACK_WIDTH: u16 = 80;

/// Column count of the terminal behind stdout, or 80 when there is none.
pub fn terminal_width() -> u16 {
    if !std::io::stdout().is_terminal() {
        return FALLBACK_WIDTH;
    }
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => cols,
        Ok(_) => FALLBACK_WIDTH,
        Err(e) => {
            log::debug!("terminal size unavailable: {e}");
            FALLBACK_WIDTH
        }
    }
}
