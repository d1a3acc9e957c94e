//! Quote-aware line tokenizer
//!
//! Splits one physical CSV line into trimmed fields. A double quote toggles
//! between [`ScanState::Normal`] and [`ScanState::InQuotes`] and is never
//! kept in the output. There is no `""` escape and no quoted newline.

/// Field delimiter
pub const DELIMITER: char = ',';

/// Quote character toggling the scan state
pub const QUOTE: char = '"';

/// Scanner state while walking a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Delimiters split fields
    Normal,
    /// Delimiters are literal text
    InQuotes,
}

/// Whitespace stripped around fields and around the whole input.
///
/// Unicode whitespace plus the byte order mark, minus NEL (U+0085), which
/// stays part of the field text.
pub fn is_trimmable(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trim [`is_trimmable`] characters from both ends
pub fn trim_field(text: &str) -> &str {
    text.trim_matches(is_trimmable)
}

impl ScanState {
    fn toggled(self) -> Self {
        match self {
            ScanState::Normal => ScanState::InQuotes,
            ScanState::InQuotes => ScanState::Normal,
        }
    }
}

/// Per-line field splitter
#[derive(Debug)]
pub struct LineTokenizer {
    state: ScanState,
    buffer: String,
    fields: Vec<String>,
}

impl LineTokenizer {
    pub fn new() -> Self {
        Self {
            state: ScanState::Normal,
            buffer: String::new(),
            fields: Vec::new(),
        }
    }

    /// Split a line into trimmed fields.
    ///
    /// Never fails. A line with N unquoted delimiters yields N+1 fields, and
    /// unbalanced quotes simply leave the scanner in `InQuotes` at the end.
    pub fn tokenize(mut self, line: &str) -> Vec<String> {
        for c in line.chars() {
            self.feed(c);
        }
        self.flush();
        self.fields
    }

    /// State the scanner ended in after `line`; `InQuotes` means unbalanced quotes
    pub fn final_state(line: &str) -> ScanState {
        line.chars()
            .filter(|&c| c == QUOTE)
            .fold(ScanState::Normal, |state, _| state.toggled())
    }

    fn feed(&mut self, c: char) {
        match (c, self.state) {
            (QUOTE, state) => self.state = state.toggled(),
            (DELIMITER, ScanState::Normal) => self.flush(),
            _ => self.buffer.push(c),
        }
    }

    fn flush(&mut self) {
        self.fields.push(trim_field(&self.buffer).to_string());
        self.buffer.clear();
    }
}

impl Default for LineTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenize a single line
pub fn tokenize_line(line: &str) -> Vec<String> {
    LineTokenizer::new().tokenize(line)
}
