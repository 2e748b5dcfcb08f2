/// Single-line query editor backing the log search bar. Stored as chars so
/// cursor movement is per grapheme-ish unit rather than per byte.
#[derive(Clone, Debug, Default)]
pub struct SearchField {
    chars: Vec<char>,
    cursor: usize,
}

impl SearchField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert(&mut self, ch: char) {
        if ch == '\n' || ch == '\r' || ch == '\t' {
            return;
        }
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    pub fn erase(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    /// Case-insensitive substring match; an empty query matches everything.
    pub fn matches(&self, line: &str) -> bool {
        if self.chars.is_empty() {
            return true;
        }
        let query: String = self.chars.iter().collect::<String>().to_lowercase();
        line.to_lowercase().contains(&query)
    }
}
