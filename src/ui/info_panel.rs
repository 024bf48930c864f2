use crate::data::config::InfoSection;
use crate::host::SystemInfo;
use crate::ui::layout::print_centered;
use crate::ui::theme::InfoColor;
use std::io::{self, Write};

pub const SEPARATOR_WIDTH: usize = 40;

pub struct InfoPanel<'a> {
    pub sections: &'a [InfoSection],
    pub show_hostname: bool,
}

impl InfoPanel<'_> {
    pub fn render<W: Write>(&self, out: &mut W, info: &SystemInfo, term_width: u16) -> io::Result<()> {
        out.write_all(b"\n")?;

        if self.show_hostname {
            print_centered(out, &InfoColor::Cyan.paint(&info.hostname), term_width)?;
            print_centered(out, &"-".repeat(SEPARATOR_WIDTH), term_width)?;
        }

        for section in self.sections {
            let Some(key) = section.info_key() else {
                log::debug!("skipping info section with unknown key {:?}", section.key);
                continue;
            };
            let label = section.color.paint(&format!("{:<10}", section.label()));
            let line = format!("{label} {}", info.get(key));
            print_centered(out, &line, term_width)?;
        }

        out.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::config::default_info_sections;

    fn sample_info() -> SystemInfo {
        SystemInfo {
            hostname: "devbox".into(),
            os: "Arch Linux".into(),
            kernel: "6.9.1".into(),
            uptime: "2h 5m".into(),
            shell: "zsh".into(),
            terminal: "xterm-256color".into(),
            cpu: "Ryzen".into(),
            memory: "1.0GB / 8.0GB".into(),
        }
    }

    #[test]
    fn default_panel_layout() {
        let sections = default_info_sections();
        let panel = InfoPanel {
            sections: &sections,
            show_hostname: true,
        };
        let mut out = Vec::new();
        panel.render(&mut out, &sample_info(), 0).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.split('\n').collect();
        // Leading blank, hostname, separator, seven fields, trailing blank, final split remainder.
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "\x1b[1;36mdevbox\x1b[0m");
        assert_eq!(lines[2], "-".repeat(40));
        assert_eq!(lines[3], "\x1b[1;36mOS        \x1b[0m Arch Linux");
        assert_eq!(lines[4], "\x1b[1;34mKernel    \x1b[0m 6.9.1");
        assert_eq!(lines[8], "\x1b[1;31mCPU       \x1b[0m Ryzen");
        assert_eq!(lines[9], "\x1b[1;36mMemory    \x1b[0m 1.0GB / 8.0GB");
        assert_eq!(lines[10], "");
    }

    #[test]
    fn lines_are_centered_by_raw_length() {
        let sections = vec![InfoSection {
            key: "shell".into(),
            label: Some("Shell".into()),
            color: InfoColor::Yellow,
        }];
        let panel = InfoPanel {
            sections: &sections,
            show_hostname: false,
        };
        let mut out = Vec::new();
        panel.render(&mut out, &sample_info(), 80).unwrap();
        let text = String::from_utf8(out).unwrap();

        let line = "\x1b[1;33mShell     \x1b[0m zsh";
        let pad = (80 - line.len()) / 2;
        assert_eq!(text, format!("\n{}{line}\n\n", " ".repeat(pad)));
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let sections = vec![
            InfoSection {
                key: "disk".into(),
                label: Some("Disk".into()),
                color: InfoColor::Blue,
            },
            InfoSection {
                key: "cpu".into(),
                label: None,
                color: InfoColor::White,
            },
        ];
        let panel = InfoPanel {
            sections: &sections,
            show_hostname: false,
        };
        let mut out = Vec::new();
        panel.render(&mut out, &sample_info(), 0).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "\n\x1b[1;37mcpu       \x1b[0m Ryzen\n\n");
    }
}
