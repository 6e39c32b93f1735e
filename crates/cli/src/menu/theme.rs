use crossterm::style::Color;

use super::types::LineStyle;

/// Colors and weight used to paint one kind of line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paint {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
}

impl Paint {
    const PLAIN: Paint = Paint {
        foreground: None,
        background: None,
        bold: false,
    };
}

const LIGHT: Color = Color::Rgb {
    r: 0xFF,
    g: 0xFD,
    b: 0xF5,
};
const GREEN: Color = Color::Rgb {
    r: 0x25,
    g: 0xA0,
    b: 0x65,
};
const BLUE: Color = Color::Rgb {
    r: 0x2D,
    g: 0x7D,
    b: 0x9A,
};
const GREY: Color = Color::Rgb {
    r: 0xA4,
    g: 0x9F,
    b: 0xA5,
};

/// Immutable style table for the two screens, built once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub title: Paint,
    pub item: Paint,
    pub selected_item: Paint,
    pub description: Paint,
    pub plain: Paint,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Paint {
                foreground: Some(LIGHT),
                background: Some(GREEN),
                bold: true,
            },
            item: Paint::PLAIN,
            selected_item: Paint {
                foreground: Some(LIGHT),
                background: Some(BLUE),
                bold: false,
            },
            description: Paint {
                foreground: Some(GREY),
                background: None,
                bold: false,
            },
            plain: Paint::PLAIN,
        }
    }
}

impl Theme {
    #[must_use]
    pub fn paint_for(&self, style: LineStyle) -> &Paint {
        match style {
            LineStyle::Title => &self.title,
            LineStyle::Item => &self.item,
            LineStyle::SelectedItem => &self.selected_item,
            LineStyle::Description => &self.description,
            LineStyle::Plain => &self.plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_item_differs_from_item() {
        let theme = Theme::default();
        assert_ne!(
            theme.paint_for(LineStyle::SelectedItem),
            theme.paint_for(LineStyle::Item)
        );
    }

    #[test]
    fn test_title_colors() {
        let theme = Theme::default();
        let title = theme.paint_for(LineStyle::Title);
        assert_eq!(
            title.background,
            Some(Color::Rgb {
                r: 37,
                g: 160,
                b: 101
            })
        );
        assert!(title.bold);
    }

    #[test]
    fn test_plain_has_no_colors() {
        let theme = Theme::default();
        assert_eq!(*theme.paint_for(LineStyle::Plain), Paint::PLAIN);
    }
}
