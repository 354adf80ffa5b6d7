use strum_macros::Display;

/// Font family category used to estimate average glyph width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FontFamily {
    Monospace,
    Serif,
    DyslexicFriendly,
    DefaultSans,
}

impl FontFamily {
    /// Average character width as a fraction of the font size
    pub fn width_factor(&self) -> f64 {
        match self {
            FontFamily::Monospace => 0.8,
            FontFamily::Serif => 0.55,
            FontFamily::DyslexicFriendly => 1.0,
            FontFamily::DefaultSans => 0.6,
        }
    }
}

/// Viewport and font metrics read from the host display at segmentation time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub viewport_width: f64,
    pub font_size: f64,
    pub family: FontFamily,
}

impl LayoutMetrics {
    pub fn new(viewport_width: f64, font_size: f64, family: FontFamily) -> Self {
        Self {
            viewport_width,
            font_size,
            family,
        }
    }

    /// Metrics for a terminal of `cols` columns. The viewport is sized so
    /// that one segmented line is one terminal row.
    pub fn for_terminal(cols: u16, font_size: f64, family: FontFamily) -> Self {
        Self {
            viewport_width: cols as f64 * font_size * family.width_factor(),
            font_size,
            family,
        }
    }

    /// How many characters fit on one line, never less than one
    pub fn chars_per_line(&self) -> usize {
        let per_char = self.font_size * self.family.width_factor();
        if per_char <= 0.0 {
            return 1;
        }
        ((self.viewport_width / per_char).floor() as usize).max(1)
    }
}

/// Split `content` into display lines that fit the given metrics.
///
/// Embedded newlines are treated as spaces. Words are packed greedily and
/// never split: a word longer than the line width gets a line of its own.
/// Flattening the result reproduces the input word sequence exactly.
pub fn segment_lines(content: &str, metrics: &LayoutMetrics) -> Vec<String> {
    let limit = metrics.chars_per_line();
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in content.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            // An over-long word stands alone rather than being split
            current.push_str(word);
            if word_len >= limit {
                lines.push(std::mem::take(&mut current));
            }
        } else if current.chars().count() + 1 + word_len <= limit {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            if word_len >= limit {
                lines.push(std::mem::take(&mut current));
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
