//! Numbered command menu

use crate::error::PieceError;
use crate::game::Action;

/// A command read from the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Act(Action),
    Quit,
}

/// Menu entries in display order: (key, label, choice)
pub const MENU_ITEMS: [(&str, &str, MenuChoice); 6] = [
    ("1", "Play the front piece", MenuChoice::Act(Action::Play)),
    ("2", "Reserve the front piece (queue -> reserve)", MenuChoice::Act(Action::Reserve)),
    ("3", "Use the top reserved piece", MenuChoice::Act(Action::UseReserve)),
    ("4", "Swap queue front with reserve top", MenuChoice::Act(Action::SwapTop)),
    ("5", "Swap front 3 of the queue with top 3 of the reserve", MenuChoice::Act(Action::SwapTriple)),
    ("0", "Quit", MenuChoice::Quit),
];

impl MenuChoice {
    /// Parse one input line. Surrounding whitespace is ignored; anything that
    /// is not a listed key (including non-numeric text) is rejected.
    pub fn parse(input: &str) -> Result<Self, PieceError> {
        let trimmed = input.trim();
        let number: u32 = trimmed
            .parse()
            .map_err(|_| PieceError::InvalidMenuChoice(trimmed.to_string()))?;
        MENU_ITEMS
            .iter()
            .find(|(key, _, _)| key.parse::<u32>().ok() == Some(number))
            .map(|(_, _, choice)| *choice)
            .ok_or_else(|| PieceError::InvalidMenuChoice(trimmed.to_string()))
    }
}

/// Menu text shown under the game state
pub fn menu_text() -> String {
    let mut text = String::from("\nOptions:\n");
    for (key, label, _) in MENU_ITEMS {
        text.push_str(&format!("{} - {}\n", key, label));
    }
    text
}
