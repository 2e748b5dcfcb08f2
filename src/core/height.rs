/// Rows the terminal reports when its size cannot be read (piped output,
/// some CI runners).
pub const FALLBACK_TERMINAL_ROWS: u16 = 24;

/// Declarative budget of rows a view reserves around its list: static chrome
/// (borders, headers, footers) plus transient rows (search bar, banners).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HeightBudget {
    pub static_reserved: u16,
    pub dynamic_reserved: u16,
    pub min_height: usize,
    pub max_height: Option<usize>,
}

impl HeightBudget {
    pub fn new(static_reserved: u16, min_height: usize) -> Self {
        Self {
            static_reserved,
            dynamic_reserved: 0,
            min_height,
            max_height: None,
        }
    }

    pub fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = Some(max_height);
        self
    }

    /// Transient rows changed (search bar toggled, banner shown). The caller
    /// must re-resolve before the next render.
    pub fn set_dynamic_reserved(&mut self, rows: u16) {
        self.dynamic_reserved = rows;
    }

    /// Viewport height for the current terminal. `terminal_rows = None`
    /// means the size could not be read; a fixed default is used instead of
    /// failing. A short list never reserves rows it cannot fill.
    pub fn resolve(&self, terminal_rows: Option<u16>, item_count: usize) -> usize {
        let rows = terminal_rows.unwrap_or(FALLBACK_TERMINAL_ROWS);
        let available = rows
            .saturating_sub(self.static_reserved)
            .saturating_sub(self.dynamic_reserved) as usize;

        let mut height = available.max(self.min_height);
        if let Some(max_height) = self.max_height {
            height = height.min(max_height).max(self.min_height);
        }
        height.min(item_count.max(1)).max(1)
    }
}
