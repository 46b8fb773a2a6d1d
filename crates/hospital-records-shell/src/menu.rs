//! Menu selections.

use hospital_records_core::{Layout, SearchField};

/// Main menu title and numbered entries.
pub const MAIN_MENU: &str = "\
===== Hospital Patient Record System =====
1. Add Patient Record
2. Search Patient Record
3. Update Patient Record
4. Delete Patient Record
5. View All Records
6. Exit";

/// A main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    Update,
    Delete,
    ViewAll,
    Exit,
}

impl MenuChoice {
    /// Parse a trimmed menu reply.
    pub fn parse(reply: &str) -> Option<Self> {
        match reply {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Search),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::ViewAll),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// What a search looks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBy {
    Id,
    Field(SearchField),
}

/// Search sub-menu for a layout: `a` is ID, then one letter per field.
#[derive(Debug, Clone)]
pub struct SearchMenu {
    options: Vec<(char, SearchBy)>,
}

impl SearchMenu {
    pub fn for_layout(layout: Layout) -> Self {
        let fields: &[SearchField] = if layout.has_assignment() {
            &SearchField::ALL
        } else {
            &SearchField::BASIC
        };

        let options = std::iter::once(SearchBy::Id)
            .chain(fields.iter().copied().map(SearchBy::Field))
            .zip('a'..)
            .map(|(by, letter)| (letter, by))
            .collect();
        Self { options }
    }

    /// Option line, e.g. `a) By ID   b) By Name`.
    pub fn options_line(&self) -> String {
        self.options
            .iter()
            .map(|(letter, by)| {
                let label = match by {
                    SearchBy::Id => "ID",
                    SearchBy::Field(field) => field.label(),
                };
                format!("{letter}) By {label}")
            })
            .collect::<Vec<_>>()
            .join("   ")
    }

    /// Selection prompt, e.g. `Choose (a-e): `.
    pub fn prompt(&self) -> String {
        let last = self.options.last().map_or('a', |(letter, _)| *letter);
        format!("Choose (a-{last}): ")
    }

    /// Resolve a reply, case-insensitively. Anything unrecognised searches by name.
    pub fn select(&self, reply: &str) -> SearchBy {
        let mut chars = reply.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c.to_ascii_lowercase()),
            _ => None,
        };
        self.options
            .iter()
            .find(|(option, _)| Some(*option) == letter)
            .map_or(SearchBy::Field(SearchField::Name), |(_, by)| *by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_basic_search_menu() {
        let menu = SearchMenu::for_layout(Layout::Basic);
        assert_eq!(
            menu.options_line(),
            "a) By ID   b) By Name   c) By Gender   d) By Disease   e) By Contact"
        );
        assert_eq!(menu.prompt(), "Choose (a-e): ");
        assert_eq!(menu.select("A"), SearchBy::Id);
        assert_eq!(menu.select("d"), SearchBy::Field(SearchField::Disease));
    }

    #[test]
    fn test_extended_search_menu() {
        let menu = SearchMenu::for_layout(Layout::Extended);
        assert!(menu.options_line().ends_with("f) By Ward   g) By Doctor"));
        assert_eq!(menu.prompt(), "Choose (a-g): ");
        assert_eq!(menu.select("g"), SearchBy::Field(SearchField::Doctor));
    }

    #[test]
    fn test_unknown_selection_searches_by_name() {
        let basic = SearchMenu::for_layout(Layout::Basic);
        assert_eq!(basic.select("z"), SearchBy::Field(SearchField::Name));
        // Ward is not offered in the basic layout
        assert_eq!(basic.select("f"), SearchBy::Field(SearchField::Name));
        assert_eq!(basic.select(""), SearchBy::Field(SearchField::Name));
    }
}
