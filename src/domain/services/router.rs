#[cfg(test)]
#[path = "router_test.rs"]
mod tests;

use crate::domain::models::View;

/// Data a view would load on entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewLoad {
    Stats,
    Dashboard,
}

/// What is missing right now. `dashboard` is only set for a signed in coach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewNeeds {
    pub stats: bool,
    pub dashboard: bool,
}

#[derive(Debug, Default)]
pub struct ViewRouter {
    active: View,
}

impl ViewRouter {
    pub fn active(&self) -> View {
        return self.active;
    }

    /// Activates `to` and reports the load its entry calls for, if any.
    pub fn navigate(&mut self, to: View, needs: ViewNeeds) -> Option<ViewLoad> {
        tracing::debug!(from = %self.active, to = %to, "navigate");
        self.active = to;

        match to {
            View::Stats if needs.stats => return Some(ViewLoad::Stats),
            View::Coach if needs.dashboard => return Some(ViewLoad::Dashboard),
            _ => return None,
        }
    }

    /// Sends the coach view back to landing. Returns true if it moved.
    pub fn leave_coach(&mut self) -> bool {
        if self.active != View::Coach {
            return false;
        }

        self.active = View::Landing;
        return true;
    }
}
