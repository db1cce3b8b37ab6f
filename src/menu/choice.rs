//! Menu choices

/// Menu shown before every prompt for a choice
pub const MENU_TEXT: &str = "\
--- Student Management System ---
1. Add Student
2. View All Students
3. Search Student by Roll
4. Search Students by Name
5. Update Student
6. Delete Student
7. Exit";

/// A numbered menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Add,
    ViewAll,
    FindByRoll,
    SearchByName,
    Update,
    Delete,
    Exit,
}

impl Choice {
    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::Add),
            "2" => Some(Choice::ViewAll),
            "3" => Some(Choice::FindByRoll),
            "4" => Some(Choice::SearchByName),
            "5" => Some(Choice::Update),
            "6" => Some(Choice::Delete),
            "7" => Some(Choice::Exit),
            _ => None,
        }
    }
}
