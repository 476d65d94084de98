//! Menu choices
//!
//! Maps the numbers typed at the menu prompt to actions.

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    Exit = 0,
    AddStudent = 1,
    AddGrade = 2,
    List = 3,
    Details = 4,
    Save = 5,
    Load = 6,
}

impl MenuChoice {
    /// Entries in display order
    pub const DISPLAY_ORDER: [MenuChoice; 7] = [
        MenuChoice::AddStudent,
        MenuChoice::AddGrade,
        MenuChoice::List,
        MenuChoice::Details,
        MenuChoice::Save,
        MenuChoice::Load,
        MenuChoice::Exit,
    ];

    /// Look up the entry for a typed number
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(MenuChoice::Exit),
            1 => Some(MenuChoice::AddStudent),
            2 => Some(MenuChoice::AddGrade),
            3 => Some(MenuChoice::List),
            4 => Some(MenuChoice::Details),
            5 => Some(MenuChoice::Save),
            6 => Some(MenuChoice::Load),
            _ => None,
        }
    }

    /// The number shown next to the entry
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Text shown next to the number
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::AddStudent => "Add student",
            MenuChoice::AddGrade => "Add grade to student",
            MenuChoice::List => "List all students",
            MenuChoice::Details => "Show student details",
            MenuChoice::Save => "Save to file",
            MenuChoice::Load => "Load from file",
        }
    }
}
