//! Text values carried by scoreboard packets.
//!
//! Older generations take raw strings with `§` formatting codes; newer ones
//! take rich text components (JSON). Only the trailing-color extraction needed
//! for splitting legacy team text is implemented here.

use serde::{Deserialize, Serialize};

/// Formatting code introducer.
pub const COLOR_CHAR: char = '§';

/// A legacy formatting code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatFormat {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl ChatFormat {
    const COLORS: [ChatFormat; 16] = [
        ChatFormat::Black,
        ChatFormat::DarkBlue,
        ChatFormat::DarkGreen,
        ChatFormat::DarkAqua,
        ChatFormat::DarkRed,
        ChatFormat::DarkPurple,
        ChatFormat::Gold,
        ChatFormat::Gray,
        ChatFormat::DarkGray,
        ChatFormat::Blue,
        ChatFormat::Green,
        ChatFormat::Aqua,
        ChatFormat::Red,
        ChatFormat::LightPurple,
        ChatFormat::Yellow,
        ChatFormat::White,
    ];

    /// Look up the format for the character following [`COLOR_CHAR`].
    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        if let Some(index) = code.to_digit(16) {
            return Some(Self::COLORS[index as usize]);
        }
        match code {
            'k' => Some(ChatFormat::Obfuscated),
            'l' => Some(ChatFormat::Bold),
            'm' => Some(ChatFormat::Strikethrough),
            'n' => Some(ChatFormat::Underline),
            'o' => Some(ChatFormat::Italic),
            'r' => Some(ChatFormat::Reset),
            _ => None,
        }
    }

    /// The code character (`'c'` for red).
    pub fn code(self) -> char {
        match self {
            ChatFormat::Obfuscated => 'k',
            ChatFormat::Bold => 'l',
            ChatFormat::Strikethrough => 'm',
            ChatFormat::Underline => 'n',
            ChatFormat::Italic => 'o',
            ChatFormat::Reset => 'r',
            color => {
                let index = Self::COLORS.iter().position(|c| *c == color).unwrap_or(0);
                char::from_digit(index as u32, 16).unwrap_or('0')
            }
        }
    }

    /// Whether this is one of the sixteen colors (not a style or reset).
    pub fn is_color(self) -> bool {
        Self::COLORS.contains(&self)
    }

    /// Color index as written into legacy team packets; `-1` means "none".
    pub fn legacy_index(self) -> i32 {
        Self::COLORS
            .iter()
            .position(|c| *c == self)
            .map_or(-1, |index| index as i32)
    }
}

impl std::fmt::Display for ChatFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{COLOR_CHAR}{}", self.code())
    }
}

/// Formatting codes in effect at the end of `input`.
///
/// Walks backwards collecting codes until a color or reset is found; styles
/// before that point are cleared by the color and are not included.
pub fn last_colors(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut collected: Vec<ChatFormat> = Vec::new();
    for index in (0..chars.len().saturating_sub(1)).rev() {
        if chars[index] != COLOR_CHAR {
            continue;
        }
        if let Some(format) = ChatFormat::from_code(chars[index + 1]) {
            collected.push(format);
            if format.is_color() || format == ChatFormat::Reset {
                break;
            }
        }
    }
    collected.iter().rev().map(ToString::to_string).collect()
}

/// A plain text component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    pub text: String,
}

impl RichText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Component JSON as sent on the wire.
    pub fn to_json(&self) -> String {
        serde_json::json!({ "text": self.text }).to_string()
    }
}

/// How a layout encodes display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    Raw,
    Rich,
}

/// A display text value in the encoding its layout expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Text {
    Raw(String),
    Rich(RichText),
}

impl Text {
    pub fn encode(encoding: TextEncoding, text: impl Into<String>) -> Self {
        match encoding {
            TextEncoding::Raw => Text::Raw(text.into()),
            TextEncoding::Rich => Text::Rich(RichText::plain(text)),
        }
    }

    /// The underlying string, regardless of encoding.
    pub fn as_str(&self) -> &str {
        match self {
            Text::Raw(text) => text,
            Text::Rich(rich) => &rich.text,
        }
    }

    pub fn encoding(&self) -> TextEncoding {
        match self {
            Text::Raw(_) => TextEncoding::Raw,
            Text::Rich(_) => TextEncoding::Rich,
        }
    }
}
