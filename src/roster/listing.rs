//! # Employee List State
//!
//! [`ListState`] is everything the list screen needs to know that is not the
//! records themselves: the search query, which page is showing, which rows are
//! ticked and how the rows are laid out. It owns a copy of the collection as
//! last loaded from the store and keeps the derived views consistent after
//! every mutation.
//!
//! ## Derived views
//!
//! The filtered collection and the page count are recomputed eagerly whenever
//! the collection, the query or the page size changes. Collections are small
//! (tens of records), so there is no incremental bookkeeping.
//!
//! - Filtering preserves the order of the loaded collection. There is no sort.
//! - There is always at least one page, even when nothing matches.
//! - The current page is clamped into `1..=total_pages` on every recompute.
//!
//! ## Selection
//!
//! Selected ids live independently of the page and the query: a row hidden by
//! a search stays selected and shows up ticked again once the search is
//! cleared. Only [`ListState::load`] drops ids, and only those that are no
//! longer in the collection.
//!
//! The state never talks to the store. Callers reload it with
//! [`ListState::load`] after every write; [`crate::api::RosterApi`] does this
//! for its own list.

use crate::model::Employee;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Page counts up to this are shown in full; beyond it the links collapse.
const FULL_PAGINATION_LIMIT: usize = 7;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid date regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    List,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Table => write!(f, "table"),
            ViewMode::List => write!(f, "list"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "list" => Ok(ViewMode::List),
            _ => Err(format!("Unknown view mode: {}", s)),
        }
    }
}

/// One entry of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// Case-insensitive match on first name, last name, email, department and
/// position. An empty query matches everything.
///
/// This is the single search predicate; stores delegate to it so that
/// searching through a store and filtering a [`ListState`] agree.
pub fn matches_query(employee: &Employee, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let details = &employee.details;
    [
        details.first_name.as_str(),
        details.last_name.as_str(),
        details.email.as_str(),
        details.department.as_str(),
        details.position.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// `YYYY-MM-DD` becomes `DD/MM/YYYY`; anything else is returned untouched.
pub fn format_display_date(date: &str) -> String {
    match ISO_DATE.captures(date) {
        Some(caps) => format!("{}/{}/{}", &caps[3], &caps[2], &caps[1]),
        None => date.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct ListState {
    all: Vec<Employee>,
    query: String,
    filtered: Vec<Employee>,
    page_size: usize,
    current_page: usize,
    selected: BTreeSet<String>,
    view_mode: ViewMode,
    pending_delete: Option<String>,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            all: Vec::new(),
            query: String::new(),
            filtered: Vec::new(),
            page_size: page_size.max(1),
            current_page: 1,
            selected: BTreeSet::new(),
            view_mode: ViewMode::default(),
            pending_delete: None,
        }
    }

    /// Replaces the collection and drops selections of records that are gone.
    pub fn load(&mut self, records: Vec<Employee>) {
        self.all = records;
        let present: BTreeSet<&str> = self.all.iter().map(|e| e.id.as_str()).collect();
        self.selected.retain(|id| present.contains(id.as_str()));
        if let Some(id) = &self.pending_delete {
            if !present.contains(id.as_str()) {
                self.pending_delete = None;
            }
        }
        self.recompute();
    }

    /// Sets the search text and jumps back to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.current_page = 1;
        self.recompute();
    }

    /// Moves to `page` when it exists; anything else is ignored.
    pub fn set_page(&mut self, page: usize) {
        if (1..=self.total_pages()).contains(&page) {
            self.current_page = page;
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.current_page + 1);
    }

    pub fn previous_page(&mut self) {
        if self.current_page > 1 {
            self.set_page(self.current_page - 1);
        }
    }

    pub fn current_page_items(&self) -> &[Employee] {
        let start = (self.current_page - 1) * self.page_size;
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.filtered.len());
        &self.filtered[start..end]
    }

    pub fn toggle_select(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Header checkbox state: true when the page has rows and all are ticked.
    pub fn all_on_page_selected(&self) -> bool {
        let page = self.current_page_items();
        !page.is_empty() && page.iter().all(|e| self.is_selected(&e.id))
    }

    /// Ticks every row on the current page, or unticks them all if they
    /// already were. Selections on other pages are left alone.
    pub fn toggle_select_all_on_page(&mut self) {
        let page_ids: Vec<String> = self
            .current_page_items()
            .iter()
            .map(|e| e.id.clone())
            .collect();
        let all_selected = page_ids.iter().all(|id| self.selected.contains(id));

        if all_selected {
            for id in &page_ids {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(page_ids);
        }
    }

    /// Pagination bar entries; empty when there is only one page.
    pub fn page_links(&self) -> Vec<PageLink> {
        let total = self.total_pages();
        let current = self.current_page;
        let link = |number: usize| PageLink::Page {
            number,
            active: number == current,
        };

        if total <= 1 {
            return Vec::new();
        }
        if total <= FULL_PAGINATION_LIMIT {
            return (1..=total).map(link).collect();
        }

        let mut links = vec![link(1)];
        if current > 3 {
            links.push(PageLink::Ellipsis);
        }
        let start = current.saturating_sub(1).max(2);
        let end = (current + 1).min(total - 1);
        links.extend((start..=end).map(link));
        if current + 2 < total {
            links.push(PageLink::Ellipsis);
        }
        links.push(link(total));
        links
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Table => ViewMode::List,
            ViewMode::List => ViewMode::Table,
        };
    }

    /// Marks a record for deletion pending confirmation.
    /// Returns false when the id is not in the loaded collection.
    pub fn request_delete(&mut self, id: &str) -> bool {
        if self.all.iter().any(|e| e.id == id) {
            self.pending_delete = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<&Employee> {
        let id = self.pending_delete.as_deref()?;
        self.all.iter().find(|e| e.id == id)
    }

    pub fn take_pending_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn all_records(&self) -> &[Employee] {
        &self.all
    }

    pub fn filtered_records(&self) -> &[Employee] {
        &self.filtered
    }

    /// Selected ids in a stable order.
    pub fn selected_ids(&self) -> Vec<&str> {
        self.selected.iter().map(String::as_str).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    fn recompute(&mut self) {
        self.filtered = if self.query.is_empty() {
            self.all.clone()
        } else {
            self.all
                .iter()
                .filter(|e| matches_query(e, &self.query))
                .cloned()
                .collect()
        };
        self.current_page = self.current_page.clamp(1, self.total_pages());
        tracing::trace!(
            query = %self.query,
            matches = self.filtered.len(),
            page = self.current_page,
            "list recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Department, EmployeeDraft, Position};

    fn employee(id: usize, first: &str, department: Department) -> Employee {
        Employee::new(
            id.to_string(),
            EmployeeDraft {
                first_name: first.to_string(),
                last_name: format!("Last{}", id),
                date_of_employment: "2021-03-15".into(),
                date_of_birth: "1988-05-10".into(),
                phone: "+(90) 533 321 54 76".into(),
                email: format!("{}{}@example.com", first.to_lowercase(), id),
                department,
                position: Position::Medior,
            },
        )
    }

    fn roster(n: usize) -> Vec<Employee> {
        (1..=n)
            .map(|i| employee(i, &format!("Name{}", i), Department::Tech))
            .collect()
    }

    fn loaded(n: usize) -> ListState {
        let mut state = ListState::default();
        state.load(roster(n));
        state
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let state = loaded(0);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.current_page(), 1);
        assert!(state.current_page_items().is_empty());
        assert!(state.page_links().is_empty());
    }

    #[test]
    fn total_pages_rounds_up() {
        for (n, pages) in [(1, 1), (8, 1), (9, 2), (16, 2), (17, 3), (50, 7)] {
            assert_eq!(loaded(n).total_pages(), pages, "n = {n}");
        }
    }

    #[test]
    fn seventeen_records_scenario() {
        let mut state = loaded(17);
        assert_eq!(state.total_pages(), 3);

        state.set_page(3);
        let items = state.current_page_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "17");

        state.set_page(4);
        assert_eq!(state.current_page(), 3);
        state.set_page(0);
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn query_resets_to_first_page() {
        let mut state = loaded(20);
        state.set_page(3);
        state.set_query("name");
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn query_matches_each_searchable_field() {
        let mut records = roster(3);
        records[0].details.last_name = "Yılmaz".into();
        records[1].details.department = Department::Analytics;
        records[2].details.position = Position::Senior;
        let mut state = ListState::default();
        state.load(records);

        state.set_query("YILMAZ");
        assert!(state.filtered_records().is_empty()); // dotless ı does not fold to i
        state.set_query("yılmaz");
        assert_eq!(state.filtered_records().len(), 1);
        state.set_query("analytics");
        assert_eq!(state.filtered_records()[0].id, "2");
        state.set_query("SENIOR");
        assert_eq!(state.filtered_records()[0].id, "3");
        state.set_query("name22@example");
        assert_eq!(state.filtered_records()[0].id, "2");
    }

    #[test]
    fn filtering_preserves_load_order() {
        let mut state = ListState::default();
        state.load(vec![
            employee(3, "Zeynep", Department::Tech),
            employee(1, "Ali", Department::Tech),
            employee(2, "Mehmet", Department::Analytics),
        ]);
        state.set_query("tech");
        let ids: Vec<_> = state.filtered_records().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);

        state.set_query("");
        assert_eq!(state.filtered_records().len(), 3);
    }

    #[test]
    fn reload_clamps_current_page() {
        let mut state = loaded(17);
        state.set_page(3);
        state.load(roster(9));
        assert_eq!(state.current_page(), 2);
        state.load(Vec::new());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn selection_survives_query_changes() {
        let mut state = loaded(10);
        state.toggle_select("4");
        state.set_query("Name1");
        assert!(state.current_page_items().iter().all(|e| e.id != "4"));
        state.set_query("");
        assert!(state.is_selected("4"));
    }

    #[test]
    fn toggle_select_flips_membership() {
        let mut state = loaded(2);
        state.toggle_select("1");
        assert!(state.is_selected("1"));
        state.toggle_select("1");
        assert!(!state.is_selected("1"));
    }

    #[test]
    fn load_prunes_vanished_selections() {
        let mut state = loaded(5);
        state.toggle_select("2");
        state.toggle_select("5");
        state.load(roster(3));
        assert_eq!(state.selected_ids(), vec!["2"]);
    }

    #[test]
    fn select_all_only_touches_current_page() {
        let mut state = loaded(17);
        state.toggle_select("12");
        state.toggle_select_all_on_page();
        assert!(state.all_on_page_selected());
        assert_eq!(state.selected_count(), 9);

        state.toggle_select_all_on_page();
        assert_eq!(state.selected_ids(), vec!["12"]);
    }

    #[test]
    fn select_all_completes_partial_page_selection() {
        let mut state = loaded(8);
        state.toggle_select("3");
        state.toggle_select_all_on_page();
        assert_eq!(state.selected_count(), 8);
    }

    #[test]
    fn select_all_twice_restores_selection() {
        let mut state = loaded(17);
        state.toggle_select("2");
        state.set_page(2);
        let before: Vec<String> = state.selected_ids().into_iter().map(String::from).collect();

        state.toggle_select_all_on_page();
        state.toggle_select_all_on_page();

        let after: Vec<String> = state.selected_ids().into_iter().map(String::from).collect();
        assert_eq!(before, after);

        state.toggle_select_all_on_page();
        let full: Vec<String> = state.selected_ids().into_iter().map(String::from).collect();
        state.toggle_select_all_on_page();
        state.toggle_select_all_on_page();
        let again: Vec<String> = state.selected_ids().into_iter().map(String::from).collect();
        assert_eq!(full, again);
    }

    #[test]
    fn select_all_on_partial_page_then_clear_drops_page_rows() {
        let mut state = loaded(17);
        state.set_page(2);
        state.toggle_select("10");
        state.toggle_select_all_on_page();
        state.toggle_select_all_on_page();
        assert!(!state.is_selected("10"));
    }

    #[test]
    fn header_checkbox_is_off_for_empty_page() {
        let mut state = loaded(3);
        state.set_query("nobody");
        assert!(!state.all_on_page_selected());
    }

    #[test]
    fn short_pagination_lists_every_page() {
        let mut state = loaded(40);
        state.set_page(2);
        let links = state.page_links();
        assert_eq!(links.len(), 5);
        assert_eq!(
            links[1],
            PageLink::Page {
                number: 2,
                active: true
            }
        );
    }

    #[test]
    fn long_pagination_collapses_with_ellipses() {
        let mut state = loaded(100);
        assert_eq!(state.total_pages(), 13);

        let numbers = |links: Vec<PageLink>| -> Vec<Option<usize>> {
            links
                .into_iter()
                .map(|l| match l {
                    PageLink::Page { number, .. } => Some(number),
                    PageLink::Ellipsis => None,
                })
                .collect()
        };

        assert_eq!(
            numbers(state.page_links()),
            vec![Some(1), Some(2), None, Some(13)]
        );

        state.set_page(6);
        assert_eq!(
            numbers(state.page_links()),
            vec![Some(1), None, Some(5), Some(6), Some(7), None, Some(13)]
        );

        state.set_page(13);
        assert_eq!(
            numbers(state.page_links()),
            vec![Some(1), None, Some(12), Some(13)]
        );
    }

    #[test]
    fn previous_and_next_stop_at_the_ends() {
        let mut state = loaded(17);
        state.previous_page();
        assert_eq!(state.current_page(), 1);
        state.next_page();
        state.next_page();
        state.next_page();
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn pending_delete_tracks_loaded_records() {
        let mut state = loaded(3);
        assert!(!state.request_delete("42"));
        assert!(state.request_delete("2"));
        assert_eq!(state.pending_delete().map(|e| e.id.as_str()), Some("2"));

        state.load(roster(1));
        assert!(state.pending_delete().is_none());
    }

    #[test]
    fn cancelled_delete_clears_pending_record() {
        let mut state = loaded(3);
        assert!(state.request_delete("1"));
        state.cancel_delete();
        assert!(state.pending_delete().is_none());
        assert_eq!(state.take_pending_delete(), None);
        assert_eq!(state.all_records().len(), 3);
    }

    #[test]
    fn view_mode_toggles() {
        let mut state = ListState::default();
        assert_eq!(state.view_mode(), ViewMode::Table);
        state.toggle_view_mode();
        assert_eq!(state.view_mode(), ViewMode::List);
        assert_eq!("TABLE".parse::<ViewMode>().unwrap(), ViewMode::Table);
    }

    #[test]
    fn display_dates_are_day_first() {
        assert_eq!(format_display_date("2022-09-23"), "23/09/2022");
        assert_eq!(format_display_date("23/09/2022"), "23/09/2022");
        assert_eq!(format_display_date(""), "");
    }
}
