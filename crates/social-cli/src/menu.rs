//! Menu choices and rendering.

use std::io::Write;

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    AddPerson,
    AddFriendship,
    ListPeople,
    ShowFriends,
    RemovePerson,
    Exit,
}

impl Choice {
    pub const ALL: [Choice; 6] = [
        Choice::AddPerson,
        Choice::AddFriendship,
        Choice::ListPeople,
        Choice::ShowFriends,
        Choice::RemovePerson,
        Choice::Exit,
    ];

    /// Parse a menu selection. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddPerson),
            "2" => Some(Self::AddFriendship),
            "3" => Some(Self::ListPeople),
            "4" => Some(Self::ShowFriends),
            "5" => Some(Self::RemovePerson),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Self::AddPerson => 1,
            Self::AddFriendship => 2,
            Self::ListPeople => 3,
            Self::ShowFriends => 4,
            Self::RemovePerson => 5,
            Self::Exit => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddPerson => "Add Person",
            Self::AddFriendship => "Add Friendship",
            Self::ListPeople => "List People",
            Self::ShowFriends => "Show Friends",
            Self::RemovePerson => "Remove Person",
            Self::Exit => "Exit",
        }
    }

    /// The store operation this choice runs; `None` for Exit.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::AddPerson => Some(Operation::AddPerson),
            Self::AddFriendship => Some(Operation::AddFriendship),
            Self::ListPeople => Some(Operation::ListPeople),
            Self::ShowFriends => Some(Operation::ShowFriends),
            Self::RemovePerson => Some(Operation::RemovePerson),
            Self::Exit => None,
        }
    }
}

/// A menu entry that runs one store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AddPerson,
    AddFriendship,
    ListPeople,
    ShowFriends,
    RemovePerson,
}

impl Operation {
    /// Prefix for the line printed when this operation fails.
    pub fn error_prefix(&self) -> &'static str {
        match self {
            Self::AddPerson => "Error adding person",
            Self::AddFriendship => "Error adding friendship",
            Self::ListPeople => "Error listing people",
            Self::ShowFriends => "Error showing friends",
            Self::RemovePerson => "Error removing person",
        }
    }
}

/// Write the menu header and numbered entries.
pub fn render_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Social Network Menu:")?;
    for choice in Choice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    Ok(())
}
