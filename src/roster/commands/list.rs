use crate::commands::{CmdResult, PageSummary};
use crate::error::Result;
use crate::listing::ListState;
use crate::store::EmployeeStore;

/// What a listing request asks for. `None` leaves that part of the list state
/// as it was.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub query: Option<String>,
    pub page: Option<usize>,
}

/// Reloads `state` from the store, applies the request and returns the
/// visible page.
pub fn run<S: EmployeeStore>(
    store: &S,
    state: &mut ListState,
    request: ListRequest,
) -> Result<CmdResult> {
    state.load(store.get_all()?);
    if let Some(query) = request.query {
        state.set_query(query);
    }
    if let Some(page) = request.page {
        state.set_page(page);
    }

    Ok(CmdResult::default()
        .with_listed_employees(state.current_page_items().to_vec())
        .with_page(summary(state)))
}

pub fn summary(state: &ListState) -> PageSummary {
    PageSummary {
        current_page: state.current_page(),
        total_pages: state.total_pages(),
        total_matches: state.filtered_records().len(),
        links: state.page_links(),
    }
}
