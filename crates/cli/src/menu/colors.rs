use crossterm::style::Color;
use histscript_core::config::{ColorDefinition, DisplayConfig};
use histscript_core::error::{Error, Result};

/// Trait for converting color definitions to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Result<Option<Color>>;
}

impl AsTermColor for ColorDefinition {
    fn as_crossterm_color(&self) -> Result<Option<Color>> {
        let defined_count = [self.rgb.is_some(), self.ansi.is_some(), self.name.is_some()]
            .iter()
            .filter(|&&x| x)
            .count();

        if defined_count > 1 {
            return Err(Error::MultipleColorTypes);
        }

        Ok(match (self.rgb, self.ansi, &self.name) {
            (Some((r, g, b)), None, None) => Some(Color::Rgb { r, g, b }),
            (None, Some(ansi), None) => Some(Color::AnsiValue(ansi)),
            (None, None, Some(name)) => Some(match name.to_lowercase().as_str() {
                "black" => Color::Black,
                "darkgrey" => Color::DarkGrey,
                "red" => Color::Red,
                "darkred" => Color::DarkRed,
                "green" => Color::Green,
                "darkgreen" => Color::DarkGreen,
                "yellow" => Color::Yellow,
                "darkyellow" => Color::DarkYellow,
                "blue" => Color::Blue,
                "darkblue" => Color::DarkBlue,
                "magenta" => Color::Magenta,
                "darkmagenta" => Color::DarkMagenta,
                "cyan" => Color::Cyan,
                "darkcyan" => Color::DarkCyan,
                "white" => Color::White,
                "grey" => Color::Grey,
                _ => return Err(Error::UnknownColorName(name.to_string())),
            }),
            (None, None, None) => None,
            _ => unreachable!(), // This case is prevented by the earlier check
        })
    }
}

fn color_from_definition(color_definition: &Option<ColorDefinition>) -> Result<Option<Color>> {
    match color_definition {
        None => Ok(None),
        Some(color_definition) => color_definition.as_crossterm_color(),
    }
}

/// How selected commands stand out from the rest.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SelectedStyle {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
}

impl SelectedStyle {
    /// # Errors
    ///
    /// Returns an error if a configured color is ambiguous or unknown.
    pub fn from_display(display: &DisplayConfig) -> Result<Self> {
        Ok(Self {
            foreground: color_from_definition(&display.selected_foreground)?,
            background: color_from_definition(&display.selected_background)?,
            bold: display.selected_bold,
        })
    }
}
