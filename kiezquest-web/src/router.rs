use yew_router::prelude::*;

use crate::hunt::HuntPhase;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/overview")]
    Overview,
    #[at("/hunt")]
    Hunt,
    #[at("/done")]
    Done,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// The URL shown for a given hunt phase. Routes only mirror the session;
    /// progress cannot be reconstructed from a URL, so navigation never runs
    /// the other way.
    #[must_use]
    pub const fn from_phase(phase: HuntPhase) -> Self {
        match phase {
            HuntPhase::Welcome => Self::Home,
            HuntPhase::Overview => Self::Overview,
            HuntPhase::Active => Self::Hunt,
            HuntPhase::Completed => Self::Done,
        }
    }
}
