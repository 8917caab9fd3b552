//! End-to-end walks through the hunt flow.

use kiezquest_core::{
    AnswerOutcome, HuntPhase, HuntSession, Station, StationCatalog, StationStage,
};

fn three_station_catalog() -> StationCatalog {
    let stations = (1..=3)
        .map(|id| Station {
            id,
            title: format!("Station {id}"),
            riddle: format!("Riddle {id}"),
            explanation: format!("Explanation {id}"),
            options: vec!["Links".into(), "Rechts".into(), "Geradeaus".into()],
            correct_answer: 2,
            latitude: 48.43 + f64::from(id) * 0.001,
            longitude: 12.93 + f64::from(id) * 0.001,
            map_url: format!("/static/img/stations/{id}.jpg"),
            google_maps_link: format!("https://maps.example/{id}"),
        })
        .collect();
    StationCatalog::from_stations(stations).unwrap()
}

#[test]
fn full_hunt_walkthrough() {
    let mut session = HuntSession::new(three_station_catalog());

    session.start();
    assert_eq!(session.phase(), HuntPhase::Overview);
    session.confirm_overview();
    assert_eq!(session.phase(), HuntPhase::Active);
    assert_eq!(session.progress_percent(), 0);

    // Station 1: one miss, then the right answer.
    session.arrive_at_station();
    assert_eq!(session.submit_answer("Links"), AnswerOutcome::Rejected);
    assert_eq!(session.current_station(), 1);
    assert!(session.submitted());
    assert_eq!(session.submit_answer("Geradeaus"), AnswerOutcome::Advanced);
    assert_eq!(session.stage(), StationStage::Explanation);
    session.complete_explanation();
    assert_eq!(session.current_station(), 2);
    assert_eq!(session.progress_percent(), 33);

    // Stations 2 and 3 without detours.
    session.arrive_at_station();
    session.submit_answer("Geradeaus");
    session.complete_explanation();
    assert_eq!(session.progress_percent(), 66);

    session.arrive_at_station();
    session.submit_answer("Geradeaus");
    session.complete_explanation();
    assert_eq!(session.phase(), HuntPhase::Completed);
    assert_eq!(session.progress_percent(), 66);

    // Certificate download stays available and changes nothing.
    for _ in 0..3 {
        assert!(session.can_download_certificate());
        assert_eq!(session.phase(), HuntPhase::Completed);
    }
}

#[test]
fn progress_never_decreases() {
    let mut session = HuntSession::new(three_station_catalog());
    session.start();
    session.confirm_overview();
    let mut last = session.progress_percent();
    for _ in 0..3 {
        session.arrive_at_station();
        session.submit_answer("Falsch");
        session.back_to_navigation();
        session.arrive_at_station();
        session.submit_answer("Geradeaus");
        session.complete_explanation();
        let now = session.progress_percent();
        assert!(now >= last, "progress went backwards: {last} -> {now}");
        last = now;
    }
}

#[test]
fn completion_happens_exactly_once_and_only_on_the_final_station() {
    let mut session = HuntSession::new(three_station_catalog());
    session.start();
    session.confirm_overview();

    let mut completions = 0;
    for _ in 0..3 {
        session.arrive_at_station();
        session.submit_answer("Geradeaus");
        let before = session.phase();
        session.complete_explanation();
        if before != HuntPhase::Completed && session.phase() == HuntPhase::Completed {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
    assert_eq!(session.current_station(), 3);

    // Any further operation leaves the completed session alone.
    session.arrive_at_station();
    session.complete_explanation();
    assert_eq!(session.phase(), HuntPhase::Completed);
}

#[test]
fn stage_cycle_has_no_other_edges() {
    let mut session = HuntSession::new(three_station_catalog());
    session.start();
    session.confirm_overview();

    // Navigation: only arrive_at_station changes the stage.
    session.submit_answer("Geradeaus");
    session.back_to_navigation();
    session.complete_explanation();
    assert_eq!(session.stage(), StationStage::Navigation);
    assert_eq!(session.current_station(), 1);

    // Question: a wrong answer keeps the stage, back returns to navigation.
    session.arrive_at_station();
    session.submit_answer("Links");
    assert_eq!(session.stage(), StationStage::Question);
    session.back_to_navigation();
    assert_eq!(session.stage(), StationStage::Navigation);

    // Explanation: arrive/submit are inert, only completion moves on.
    session.arrive_at_station();
    session.submit_answer("Geradeaus");
    session.arrive_at_station();
    assert_eq!(session.submit_answer("Links"), AnswerOutcome::Ignored);
    assert_eq!(session.stage(), StationStage::Explanation);
    session.complete_explanation();
    assert_eq!(session.stage(), StationStage::Navigation);
    assert_eq!(session.current_station(), 2);
}
