use serde::Deserialize;

/// Basic ANSI foreground colors used for info labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum InfoColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    #[default]
    White,
}

impl From<String> for InfoColor {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

impl InfoColor {
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            _ => Self::White,
        }
    }

    /// SGR parameter for the foreground color.
    pub fn sgr(self) -> &'static str {
        match self {
            InfoColor::Black => "30",
            InfoColor::Red => "31",
            InfoColor::Green => "32",
            InfoColor::Yellow => "33",
            InfoColor::Blue => "34",
            InfoColor::Magenta => "35",
            InfoColor::Cyan => "36",
            InfoColor::White => "37",
        }
    }

    /// Bold + color, as used for labels and the hostname.
    pub fn paint(self, text: &str) -> String {
        format!("\x1b[1;{}m{text}\x1b[0m", self.sgr())
    }
}
