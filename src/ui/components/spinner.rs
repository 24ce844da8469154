use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use std::time::{SystemTime, UNIX_EPOCH};
use unicode_width::UnicodeWidthStr;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Animated loading indicator, centred in its area unless `inline`.
pub struct Spinner<'a> {
    style: Style,
    label: &'a str,
    inline: bool,
}

impl<'a> Spinner<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            style: Style::default(),
            label,
            inline: false,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    pub fn frame() -> &'static str {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        FRAMES[(now / 100) as usize % FRAMES.len()]
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let text = format!("{} {}", Self::frame(), self.label);
        let (x, y) = if self.inline {
            (area.x, area.y)
        } else {
            (
                area.x + area.width.saturating_sub(text.width() as u16) / 2,
                area.y + area.height / 2,
            )
        };

        buf.set_stringn(x, y, text, area.width as usize, self.style);
    }
}
