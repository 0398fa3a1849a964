//! In-app route navigation.

use portal_core::prelude::*;
use portal_core::Route;

/// Navigation capability injected into components that change the page
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&mut self, route: &Route);
}

/// Current route plus a back stack
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Return to the previous route; false when there is none
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                debug!("Back to {}", previous);
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Navigator for Router {
    fn navigate(&mut self, route: &Route) {
        if &self.current == route {
            return;
        }
        debug!("Navigate {} -> {}", self.current, route);
        let previous = std::mem::replace(&mut self.current, route.clone());
        self.history.push(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        let router = Router::default();
        assert!(router.current().is_home());
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_navigate_and_back() {
        let mut router = Router::default();
        router.navigate(&Route::from_doc_path("intro/index.mdx"));
        router.navigate(&Route::from_doc_path("tutorials/index.mdx"));
        assert_eq!(router.current().as_str(), "/tutorials/");
        assert_eq!(router.history_len(), 2);

        assert!(router.back());
        assert_eq!(router.current().as_str(), "/intro/");
        assert!(router.back());
        assert!(router.current().is_home());
        assert!(!router.back());
    }

    #[test]
    fn test_navigate_to_current_route_keeps_history() {
        let mut router = Router::default();
        let route = Route::from_doc_path("intro.mdx");
        router.navigate(&route);
        router.navigate(&route);
        assert_eq!(router.history_len(), 1);
    }
}
