//! Menu states and the user choices that move between them.

/// Every state the menu can be in.
///
/// Menu states render and move to their `Await*` counterpart; only the
/// `Await*` states read input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuState {
    MainMenu,
    AwaitMainChoice,
    SelectMenu,
    AwaitSelectChoice,
    IncrementCursor,
    DecrementCursor,
    Generate,
    Finished,
}

/// A recognized answer at the main menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MainChoice {
    Preview,
    Generate,
    Select,
    Restart,
    Edit,
    Quit,
}

impl MainChoice {
    /// Accepts either the menu number or its letter, case-insensitively.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "p" => Some(Self::Preview),
            "2" | "g" => Some(Self::Generate),
            "3" | "s" => Some(Self::Select),
            "4" | "r" => Some(Self::Restart),
            "5" | "e" => Some(Self::Edit),
            "6" | "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// An answer at the select menu.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SelectChoice {
    PreviousPage,
    NextPage,
    MainMenu,
    Quit,
    /// `/pattern`
    Search(String),
    /// Anything else is treated as a selection expression.
    Expression(String),
    Nothing,
}

impl SelectChoice {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        if let Some(pattern) = input.strip_prefix('/') {
            return Self::Search(pattern.trim().to_string());
        }

        match input.to_lowercase().as_str() {
            "" => Self::Nothing,
            "p" => Self::PreviousPage,
            "n" => Self::NextPage,
            "m" => Self::MainMenu,
            "q" => Self::Quit,
            _ => Self::Expression(input.to_string()),
        }
    }
}
