//! View session - the caller-owned cell holding "current parameters".
//!
//! The engine is pure; something still has to remember what the user picked
//! and which snapshot is on screen. A session owns both and recomputes the view
//! on demand. Every change bumps a generation number, and rendered views carry
//! the generation they were computed for, so a caller that renders off-thread
//! can drop results that arrive after a newer change.

use super::engine::{DerivedView, ViewEngine};
use super::monthly::MonthTotal;
use super::params::ViewParams;
use crate::entities::Record;
use crate::snapshot::Snapshot;
use chrono::NaiveDate;
use tracing::debug;

/// A derived view tagged with the session generation it was computed for.
#[derive(Debug, Clone)]
pub struct RenderedView<'a, R> {
    /// Session generation at render time
    pub generation: u64,
    /// The derived view
    pub view: DerivedView<'a, R>,
}

/// Current snapshot and parameters of one collection view.
#[derive(Debug)]
pub struct ViewSession<R: Record> {
    engine: ViewEngine<R>,
    snapshot: Snapshot<R>,
    params: ViewParams<R::SortKey>,
    generation: u64,
}

impl<R: Record> ViewSession<R> {
    /// Session over `snapshot` with idle default parameters.
    pub fn new(engine: ViewEngine<R>, snapshot: Snapshot<R>) -> Self {
        Self {
            engine,
            snapshot,
            params: ViewParams::default(),
            generation: 0,
        }
    }

    /// Current parameters
    pub const fn params(&self) -> &ViewParams<R::SortKey> {
        &self.params
    }

    /// Current snapshot
    pub const fn snapshot(&self) -> &Snapshot<R> {
        &self.snapshot
    }

    /// Current generation
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a view rendered at `generation` still reflects the session.
    pub const fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Replaces the parameters wholesale.
    pub fn set_params(&mut self, params: ViewParams<R::SortKey>) {
        self.params = params;
        self.bump("parameters replaced");
    }

    /// Modifies the parameters in place.
    pub fn update_params(&mut self, update: impl FnOnce(&mut ViewParams<R::SortKey>)) {
        update(&mut self.params);
        self.bump("parameters updated");
    }

    /// Resets every filter to idle, keeping the sort.
    pub fn clear_filters(&mut self) {
        self.params.clear_filters();
        self.bump("filters cleared");
    }

    /// Swaps in a freshly loaded snapshot.
    pub fn replace_snapshot(&mut self, snapshot: Snapshot<R>) {
        self.snapshot = snapshot;
        self.bump("snapshot replaced");
    }

    /// Runs the pipeline over the current snapshot and parameters.
    pub fn render(&self) -> RenderedView<'_, R> {
        let view = self.engine.derive(self.snapshot.records(), &self.params);
        debug!(
            generation = self.generation,
            shown = view.len(),
            of = self.snapshot.len(),
            "Rendered {} view",
            R::KIND
        );
        RenderedView {
            generation: self.generation,
            view,
        }
    }

    /// Twelve-month series over the whole snapshot, ignoring the filters.
    pub fn monthly_series(&self, today: NaiveDate) -> Vec<MonthTotal> {
        self.engine.monthly_series(self.snapshot.records(), today)
    }

    fn bump(&mut self, reason: &str) {
        self.generation += 1;
        debug!(generation = self.generation, "{} view: {reason}", R::KIND);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::config::AppConfig;
    use crate::core::params::{CategoryFilter, SortDirection};
    use crate::entities::{Application, ApplicationSortKey, Expense};
    use crate::test_utils::*;

    fn app_session() -> ViewSession<Application> {
        let snapshot = Snapshot::new(vec![
            favorite(application("1", "Atlassian", "Offer")),
            application("2", "Google", "Applied"),
            favorite(application("3", "Canva", "Interview")),
        ]);
        ViewSession::new(ViewEngine::from_config(&AppConfig::default()), snapshot)
    }

    #[test]
    fn test_new_session_shows_everything() {
        let session = app_session();
        let rendered = session.render();
        assert_eq!(rendered.generation, 0);
        assert_eq!(rendered.view.len(), 3);
        assert!(!session.params().is_filtering());
    }

    #[test]
    fn test_parameter_changes_bump_generation() {
        let mut session = app_session();
        let stale = session.render().generation;

        session.update_params(|p| p.favorite_only = true);
        assert!(!session.is_current(stale));

        let rendered = session.render();
        assert!(session.is_current(rendered.generation));
        assert_eq!(rendered.view.len(), 2);
    }

    #[test]
    fn test_clear_filters_keeps_sort() {
        let mut session = app_session();
        session.set_params(
            ViewParams::default()
                .with_query("atla")
                .with_category(CategoryFilter::Only("Offer".to_string()))
                .sorted_by(ApplicationSortKey::Status, SortDirection::Asc),
        );
        assert_eq!(session.render().view.len(), 1);

        session.clear_filters();
        let rendered = session.render();
        let ids: Vec<&str> = rendered.view.records.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "1"]);
        assert_eq!(session.generation(), 2);
    }

    #[test]
    fn test_replace_snapshot_is_wholesale() {
        let mut session = app_session();
        session.update_params(|p| p.query = "google".to_string());
        assert_eq!(session.render().view.len(), 1);

        session.replace_snapshot(Snapshot::new(vec![application("9", "Hooli", "Applied")]));
        assert_eq!(session.snapshot().len(), 1);
        assert!(session.render().view.is_empty());
    }

    #[test]
    fn test_session_series_ignores_filters() {
        let snapshot = Snapshot::new(vec![
            expense("1", "Rent", "Housing", 1000.0, "2024-06-01"),
            expense("2", "Lunch", "Food", 20.0, "2024-06-02"),
        ]);
        let mut session: ViewSession<Expense> =
            ViewSession::new(ViewEngine::from_config(&AppConfig::default()), snapshot);
        session.update_params(|p| p.category = CategoryFilter::Only("Food".to_string()));

        assert_eq!(session.render().view.summary.total, 20.0);
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert_eq!(session.monthly_series(today).last().unwrap().total, 1020.0);
    }
}
