//! The hunt flow state machine.
//!
//! All session mutation goes through the named transition operations below.
//! Every operation is a total function over the current state: calls whose
//! precondition does not hold leave the session untouched, so double-firing
//! UI events cannot skip or duplicate a stage.

use crate::station::{Station, StationCatalog};

/// Coarse top-level mode of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntPhase {
    Welcome,
    Overview,
    Active,
    Completed,
}

/// Per-station stage, only meaningful while the phase is [`HuntPhase::Active`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationStage {
    Navigation,
    Question,
    Explanation,
}

/// How a submitted answer is matched against the station's correct option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerPolicy {
    /// Exact string identity against the option list (multiple-choice UI).
    #[default]
    ExactOption,
    /// Case-insensitive comparison (free-text input variant).
    CaseInsensitive,
}

/// User-facing feedback, resolved to a localized string by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    WrongAnswer,
    StationDataMissing,
}

impl Feedback {
    /// Translation key for the feedback line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::WrongAnswer => "question.wrong_answer",
            Self::StationDataMissing => "question.station_missing",
        }
    }
}

/// Result of a [`HuntSession::submit_answer`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Correct: the session moved on to the explanation stage.
    Advanced,
    /// Wrong: feedback is shown, the player may retry without losing position.
    Rejected,
    /// No station record backs the current index; nothing changed.
    MissingStation,
    /// The call arrived outside the question stage and was dropped.
    Ignored,
}

/// One browser-tab hunt session. Created with defaults, mutated only through
/// the transition operations, discarded on unload.
#[derive(Debug, Clone, PartialEq)]
pub struct HuntSession {
    catalog: StationCatalog,
    policy: AnswerPolicy,
    phase: HuntPhase,
    stage: StationStage,
    current_station: usize,
    selected_answer: Option<String>,
    submitted: bool,
    feedback: Option<Feedback>,
}

impl HuntSession {
    #[must_use]
    pub fn new(catalog: StationCatalog) -> Self {
        Self::with_policy(catalog, AnswerPolicy::default())
    }

    #[must_use]
    pub fn with_policy(catalog: StationCatalog, policy: AnswerPolicy) -> Self {
        Self {
            catalog,
            policy,
            phase: HuntPhase::Welcome,
            stage: StationStage::Navigation,
            current_station: 1,
            selected_answer: None,
            submitted: false,
            feedback: None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> HuntPhase {
        self.phase
    }

    #[must_use]
    pub const fn stage(&self) -> StationStage {
        self.stage
    }

    /// 1-based position of the station the player is currently working on.
    #[must_use]
    pub const fn current_station(&self) -> usize {
        self.current_station
    }

    #[must_use]
    pub fn total_stations(&self) -> usize {
        self.catalog.len()
    }

    /// The record backing the current position. `None` only if the catalog
    /// was corrupted upstream; callers treat that as a logged anomaly.
    #[must_use]
    pub fn station(&self) -> Option<&Station> {
        self.catalog.station(self.current_station)
    }

    #[must_use]
    pub fn catalog(&self) -> &StationCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    /// True while wrong-answer feedback is being displayed.
    #[must_use]
    pub const fn submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Share of fully completed stations, scaled to `[0, 100]`.
    ///
    /// Derived from `current_station` on every call; never stored.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let total = self.catalog.len();
        if total == 0 {
            return 0;
        }
        let completed = self.current_station.saturating_sub(1).min(total);
        u8::try_from(completed * 100 / total).unwrap_or(100)
    }

    #[must_use]
    pub fn is_final_station(&self) -> bool {
        self.current_station >= self.catalog.len()
    }

    /// Certificate download is only offered once the hunt is complete.
    #[must_use]
    pub fn can_download_certificate(&self) -> bool {
        self.phase == HuntPhase::Completed
    }

    /// Welcome → Overview.
    pub fn start(&mut self) {
        if self.phase == HuntPhase::Welcome {
            self.phase = HuntPhase::Overview;
        }
    }

    /// Overview → Active, beginning with navigation to the first station.
    pub fn confirm_overview(&mut self) {
        if self.phase == HuntPhase::Overview {
            self.phase = HuntPhase::Active;
            self.stage = StationStage::Navigation;
        }
    }

    /// Navigation → Question, once the player reports arrival.
    pub fn arrive_at_station(&mut self) {
        if self.phase == HuntPhase::Active && self.stage == StationStage::Navigation {
            self.stage = StationStage::Question;
        }
    }

    /// Record the option the player currently has picked. Picking a new
    /// option dismisses a pending wrong-answer notice.
    pub fn select_answer(&mut self, answer: &str) {
        if self.phase == HuntPhase::Active && self.stage == StationStage::Question {
            self.selected_answer = Some(answer.to_string());
            self.submitted = false;
            self.feedback = None;
        }
    }

    /// Check the given answer against the current station.
    ///
    /// A wrong answer only raises feedback; position and stage are kept so
    /// the player can retry any number of times.
    pub fn submit_answer(&mut self, answer: &str) -> AnswerOutcome {
        if self.phase != HuntPhase::Active || self.stage != StationStage::Question {
            return AnswerOutcome::Ignored;
        }
        let Some(station) = self.catalog.station(self.current_station) else {
            self.feedback = Some(Feedback::StationDataMissing);
            return AnswerOutcome::MissingStation;
        };
        let correct = Self::answer_matches(self.policy, station, answer);
        self.selected_answer = Some(answer.to_string());
        if correct {
            self.stage = StationStage::Explanation;
            self.submitted = false;
            self.feedback = None;
            AnswerOutcome::Advanced
        } else {
            self.submitted = true;
            self.feedback = Some(Feedback::WrongAnswer);
            AnswerOutcome::Rejected
        }
    }

    /// Question → Navigation, dropping the current answer attempt.
    pub fn back_to_navigation(&mut self) {
        if self.phase == HuntPhase::Active && self.stage == StationStage::Question {
            self.stage = StationStage::Navigation;
            self.clear_attempt();
        }
    }

    /// Explanation → Navigation of the next station, or → Completed on the
    /// final one. The completion transition can fire at most once because the
    /// phase leaves `Active` with it.
    pub fn complete_explanation(&mut self) {
        if self.phase != HuntPhase::Active || self.stage != StationStage::Explanation {
            return;
        }
        if self.current_station < self.catalog.len() {
            self.current_station += 1;
            self.stage = StationStage::Navigation;
            self.clear_attempt();
        } else {
            self.phase = HuntPhase::Completed;
            self.clear_attempt();
        }
    }

    fn clear_attempt(&mut self) {
        self.selected_answer = None;
        self.submitted = false;
        self.feedback = None;
    }

    fn answer_matches(policy: AnswerPolicy, station: &Station, answer: &str) -> bool {
        station.correct_option().is_some_and(|correct| match policy {
            AnswerPolicy::ExactOption => answer == correct,
            AnswerPolicy::CaseInsensitive => answer.to_lowercase() == correct.to_lowercase(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::Station;

    fn catalog(total: u32) -> StationCatalog {
        let stations = (1..=total)
            .map(|id| Station {
                id,
                title: format!("Station {id}"),
                riddle: "Riddle".into(),
                explanation: "Explanation".into(),
                options: vec!["Dom".into(), "Rathaus".into(), "Brunnen".into()],
                correct_answer: 0,
                latitude: 48.43,
                longitude: 12.93,
                map_url: String::new(),
                google_maps_link: String::new(),
            })
            .collect();
        StationCatalog::from_stations(stations).unwrap()
    }

    fn active_session(total: u32) -> HuntSession {
        let mut session = HuntSession::new(catalog(total));
        session.start();
        session.confirm_overview();
        session
    }

    #[test]
    fn fresh_session_starts_on_welcome() {
        let session = HuntSession::new(catalog(3));
        assert_eq!(session.phase(), HuntPhase::Welcome);
        assert_eq!(session.current_station(), 1);
        assert_eq!(session.progress_percent(), 0);
    }

    #[test]
    fn start_and_confirm_only_fire_from_their_phase() {
        let mut session = HuntSession::new(catalog(3));
        session.confirm_overview();
        assert_eq!(session.phase(), HuntPhase::Welcome);
        session.start();
        assert_eq!(session.phase(), HuntPhase::Overview);
        session.start();
        assert_eq!(session.phase(), HuntPhase::Overview);
        session.confirm_overview();
        assert_eq!(session.phase(), HuntPhase::Active);
        assert_eq!(session.stage(), StationStage::Navigation);
    }

    #[test]
    fn arrive_moves_navigation_to_question_only() {
        let mut session = active_session(3);
        session.arrive_at_station();
        assert_eq!(session.stage(), StationStage::Question);
        // A duplicate tap changes nothing.
        session.arrive_at_station();
        assert_eq!(session.stage(), StationStage::Question);
    }

    #[test]
    fn correct_answer_advances_to_explanation() {
        let mut session = active_session(3);
        session.arrive_at_station();
        assert_eq!(session.submit_answer("Dom"), AnswerOutcome::Advanced);
        assert_eq!(session.stage(), StationStage::Explanation);
        assert!(!session.submitted());
        assert!(session.feedback().is_none());
    }

    #[test]
    fn wrong_answer_raises_feedback_and_keeps_position() {
        let mut session = active_session(3);
        session.arrive_at_station();
        for _ in 0..5 {
            assert_eq!(session.submit_answer("Rathaus"), AnswerOutcome::Rejected);
            assert_eq!(session.stage(), StationStage::Question);
            assert_eq!(session.current_station(), 1);
            assert!(session.submitted());
            assert_eq!(session.feedback(), Some(Feedback::WrongAnswer));
        }
        // Retrying with the right option still works after any number of misses.
        assert_eq!(session.submit_answer("Dom"), AnswerOutcome::Advanced);
    }

    #[test]
    fn selecting_a_new_option_dismisses_feedback() {
        let mut session = active_session(3);
        session.arrive_at_station();
        session.submit_answer("Rathaus");
        assert!(session.submitted());
        session.select_answer("Brunnen");
        assert!(!session.submitted());
        assert!(session.feedback().is_none());
        assert_eq!(session.selected_answer(), Some("Brunnen"));
    }

    #[test]
    fn exact_policy_is_case_sensitive() {
        let mut session = active_session(3);
        session.arrive_at_station();
        assert_eq!(session.submit_answer("dom"), AnswerOutcome::Rejected);
        assert_eq!(session.submit_answer("Dom"), AnswerOutcome::Advanced);
    }

    #[test]
    fn case_insensitive_policy_accepts_any_casing() {
        let mut session = HuntSession::with_policy(catalog(3), AnswerPolicy::CaseInsensitive);
        session.start();
        session.confirm_overview();
        session.arrive_at_station();
        assert_eq!(session.submit_answer("dom"), AnswerOutcome::Advanced);

        let mut session = HuntSession::with_policy(catalog(3), AnswerPolicy::CaseInsensitive);
        session.start();
        session.confirm_overview();
        session.arrive_at_station();
        assert_eq!(session.submit_answer("DOM"), AnswerOutcome::Advanced);
    }

    #[test]
    fn submit_outside_question_stage_is_ignored() {
        let mut session = active_session(3);
        assert_eq!(session.submit_answer("Dom"), AnswerOutcome::Ignored);
        assert_eq!(session.stage(), StationStage::Navigation);
        assert!(session.feedback().is_none());
    }

    #[test]
    fn back_to_navigation_clears_the_attempt() {
        let mut session = active_session(3);
        session.arrive_at_station();
        session.submit_answer("Rathaus");
        session.back_to_navigation();
        assert_eq!(session.stage(), StationStage::Navigation);
        assert!(session.selected_answer().is_none());
        assert!(!session.submitted());
        assert!(session.feedback().is_none());
    }

    #[test]
    fn complete_explanation_advances_by_exactly_one() {
        let mut session = active_session(3);
        session.arrive_at_station();
        session.submit_answer("Dom");
        session.complete_explanation();
        assert_eq!(session.current_station(), 2);
        assert_eq!(session.stage(), StationStage::Navigation);
        assert!(session.selected_answer().is_none());
        // Only reachable from the explanation stage.
        session.complete_explanation();
        assert_eq!(session.current_station(), 2);
    }

    #[test]
    fn final_explanation_completes_the_hunt() {
        let mut session = active_session(1);
        session.arrive_at_station();
        session.submit_answer("Dom");
        session.complete_explanation();
        assert_eq!(session.phase(), HuntPhase::Completed);
        assert!(session.can_download_certificate());
        // Repeated calls are inert once the phase left Active.
        session.complete_explanation();
        assert_eq!(session.phase(), HuntPhase::Completed);
        assert_eq!(session.current_station(), 1);
    }

    #[test]
    fn progress_is_the_floor_of_completed_over_total() {
        let mut session = active_session(3);
        assert_eq!(session.progress_percent(), 0);
        session.arrive_at_station();
        session.submit_answer("Dom");
        session.complete_explanation();
        assert_eq!(session.progress_percent(), 33);
        session.arrive_at_station();
        session.submit_answer("Dom");
        session.complete_explanation();
        assert_eq!(session.progress_percent(), 66);
    }

    #[test]
    fn missing_station_record_yields_defensive_feedback() {
        let mut session = active_session(2);
        session.arrive_at_station();
        // Force the invariant violation the guard exists for.
        session.current_station = 9;
        assert_eq!(session.submit_answer("Dom"), AnswerOutcome::MissingStation);
        assert_eq!(session.feedback(), Some(Feedback::StationDataMissing));
        assert_eq!(session.stage(), StationStage::Question);
        assert_eq!(session.feedback().map(Feedback::key), Some("question.station_missing"));
    }
}
