use chrono::NaiveDate;

/// Session-wide settings.
///
/// Builder-style, like the rest of the public API:
///
/// ```rust
/// use ewui_runtime::SessionConfig;
///
/// let config = SessionConfig::new()
///     .default_title("Untitled")
///     .default_size(640, 480)
///     .truncate_at(40);
/// assert_eq!(config.default_width, 640);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Title of the window synthesized when a document has none.
    pub default_title:  String,
    pub default_width:  u32,
    pub default_height: u32,
    /// Text-area values longer than this many characters are cut when
    /// displayed, and `...` is appended.
    pub truncate_at:    usize,
    /// Joins checked labels of checkbox and radio groups when displayed.
    pub list_separator: String,
    /// Initial date for calendars. `None` means the local date at build time.
    pub initial_date:   Option<NaiveDate>,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self {
            default_title:  "默认窗口".to_string(),
            default_width:  400,
            default_height: 300,
            truncate_at:    100,
            list_separator: ", ".to_string(),
            initial_date:   None,
        }
    }

    pub fn default_title(mut self, t: impl Into<String>) -> Self {
        self.default_title = t.into();
        self
    }

    pub fn default_size(mut self, width: u32, height: u32) -> Self {
        self.default_width  = width;
        self.default_height = height;
        self
    }

    pub fn truncate_at(mut self, chars: usize) -> Self {
        self.truncate_at = chars;
        self
    }

    pub fn list_separator(mut self, sep: impl Into<String>) -> Self {
        self.list_separator = sep.into();
        self
    }

    pub fn initial_date(mut self, date: NaiveDate) -> Self {
        self.initial_date = Some(date);
        self
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.initial_date.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
