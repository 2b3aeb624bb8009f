//! Routes between the three screens: the list, the create form and the edit
//! form for one employee.
//!
//! | path        | route            |
//! |-------------|------------------|
//! | `/`         | [`Route::List`]  |
//! | `/add`      | [`Route::Create`]|
//! | `/edit/:id` | [`Route::Edit`]  |
//!
//! Every other path redirects to `/`.

use std::fmt;

/// How many previous routes [`Router::back`] can return to.
pub const HISTORY_LIMIT: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    List,
    Create,
    Edit(String),
}

impl Route {
    /// Resolves a path, redirecting unknown paths to the list.
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::List,
            "/add" => Route::Create,
            _ => match trimmed.strip_prefix("/edit/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Edit(id.to_string()),
                _ => Route::List,
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Create => "/add".to_string(),
            Route::Edit(id) => format!("/edit/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Tracks the active route and where we have been.
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            current: Route::List,
            history: Vec::new(),
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Navigates to `path` and returns the route that was actually entered.
    pub fn navigate(&mut self, path: &str) -> &Route {
        let route = Route::resolve(path);
        tracing::debug!(from = %self.current, to = %route, requested = path, "navigating");
        let previous = std::mem::replace(&mut self.current, route);
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(previous);
        &self.current
    }

    pub fn go(&mut self, route: Route) -> &Route {
        self.navigate(&route.path())
    }

    /// Returns to the previous route, if any.
    pub fn back(&mut self) -> Option<&Route> {
        let previous = self.history.pop()?;
        self.current = previous;
        Some(&self.current)
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_paths() {
        assert_eq!(Route::resolve("/"), Route::List);
        assert_eq!(Route::resolve("/add"), Route::Create);
        assert_eq!(Route::resolve("/edit/42"), Route::Edit("42".into()));
        assert_eq!(Route::resolve("/edit/42/"), Route::Edit("42".into()));
    }

    #[test]
    fn unknown_paths_redirect_to_list() {
        for path in ["/nope", "/edit/", "/edit", "/edit/1/2", "add", "/add/more"] {
            assert_eq!(Route::resolve(path), Route::List, "{path}");
        }
    }

    #[test]
    fn paths_round_trip_through_resolve() {
        for route in [Route::List, Route::Create, Route::Edit("abc".into())] {
            assert_eq!(Route::resolve(&route.path()), route);
        }
    }

    #[test]
    fn navigation_keeps_history() {
        let mut router = Router::new();
        router.navigate("/add");
        router.go(Route::Edit("7".into()));
        assert_eq!(router.current(), &Route::Edit("7".into()));
        assert_eq!(router.history(), &[Route::List, Route::Create]);

        assert_eq!(router.back(), Some(&Route::Create));
        assert_eq!(router.back(), Some(&Route::List));
        assert_eq!(router.back(), None);
    }

    #[test]
    fn history_drops_oldest_routes() {
        let mut router = Router::new();
        for i in 0..HISTORY_LIMIT + 5 {
            router.go(Route::Edit(i.to_string()));
        }
        assert_eq!(router.history().len(), HISTORY_LIMIT);
        assert_eq!(router.history()[0], Route::Edit("4".into()));
        assert_eq!(
            router.history().last(),
            Some(&Route::Edit((HISTORY_LIMIT + 3).to_string()))
        );
    }
}
