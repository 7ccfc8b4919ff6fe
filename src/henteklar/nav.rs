//! Screen routing for clients.
//!
//! All screens move through one [`Navigator`] with named transitions instead of
//! each screen receiving callbacks for its neighbours. Routes behind the login
//! resolve to [`Route::Login`] while nobody is authenticated.

use crate::model::ChildId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Dashboard,
    CheckInOut,
    ChildProfile(ChildId),
    Settings,
}

impl Route {
    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Landing | Route::Login)
    }

    /// Translation key of the route's title
    pub fn title_key(&self) -> &'static str {
        match self {
            Route::Landing => "appName",
            Route::Login => "login",
            Route::Dashboard => "nav.overview",
            Route::CheckInOut => "nav.checkInOut",
            Route::ChildProfile(_) => "childProfile.contactInfo",
            Route::Settings => "nav.settings",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Navigator {
    /// Starts on the dashboard for a restored session, otherwise on the landing page.
    pub fn new(authenticated: bool) -> Self {
        let current = if authenticated {
            Route::Dashboard
        } else {
            Route::Landing
        };
        Self {
            current,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn go_to_landing(&mut self, authenticated: bool) -> &Route {
        self.navigate(Route::Landing, authenticated)
    }

    pub fn go_to_login(&mut self, authenticated: bool) -> &Route {
        self.navigate(Route::Login, authenticated)
    }

    pub fn go_to_dashboard(&mut self, authenticated: bool) -> &Route {
        self.navigate(Route::Dashboard, authenticated)
    }

    pub fn go_to_check_in_out(&mut self, authenticated: bool) -> &Route {
        self.navigate(Route::CheckInOut, authenticated)
    }

    pub fn go_to_child_profile(&mut self, id: ChildId, authenticated: bool) -> &Route {
        self.navigate(Route::ChildProfile(id), authenticated)
    }

    pub fn go_to_settings(&mut self, authenticated: bool) -> &Route {
        self.navigate(Route::Settings, authenticated)
    }

    /// Returns to the previous screen; stays put when there is none.
    pub fn go_back(&mut self) -> &Route {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
        }
        &self.current
    }

    pub fn on_login(&mut self) -> &Route {
        self.reset(Route::Dashboard)
    }

    pub fn on_logout(&mut self) -> &Route {
        self.reset(Route::Landing)
    }

    fn navigate(&mut self, route: Route, authenticated: bool) -> &Route {
        let target = if route.requires_session() && !authenticated {
            Route::Login
        } else {
            route
        };
        if target != self.current {
            let previous = std::mem::replace(&mut self.current, target);
            self.history.push(previous);
        }
        &self.current
    }

    fn reset(&mut self, route: Route) -> &Route {
        self.history.clear();
        self.current = route;
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_route_depends_on_session() {
        assert_eq!(Navigator::new(false).current(), &Route::Landing);
        assert_eq!(Navigator::new(true).current(), &Route::Dashboard);
    }

    #[test]
    fn protected_routes_redirect_to_login() {
        let mut nav = Navigator::new(false);
        assert_eq!(nav.go_to_check_in_out(false), &Route::Login);
        assert_eq!(
            nav.go_to_child_profile(ChildId::new("1"), false),
            &Route::Login
        );
        assert_eq!(nav.go_back(), &Route::Landing);
    }

    #[test]
    fn back_walks_history() {
        let mut nav = Navigator::new(true);
        nav.go_to_check_in_out(true);
        nav.go_to_child_profile(ChildId::new("3"), true);
        assert_eq!(nav.current(), &Route::ChildProfile(ChildId::new("3")));

        assert_eq!(nav.go_back(), &Route::CheckInOut);
        assert_eq!(nav.go_back(), &Route::Dashboard);
        assert!(!nav.can_go_back());
        assert_eq!(nav.go_back(), &Route::Dashboard);
    }

    #[test]
    fn navigating_to_current_route_adds_no_history() {
        let mut nav = Navigator::new(true);
        nav.go_to_dashboard(true);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn login_and_logout_reset_history() {
        let mut nav = Navigator::new(false);
        nav.go_to_login(false);
        assert_eq!(nav.on_login(), &Route::Dashboard);
        assert!(!nav.can_go_back());

        nav.go_to_settings(true);
        assert_eq!(nav.on_logout(), &Route::Landing);
        assert!(!nav.can_go_back());
    }
}
