use std::rc::Rc;
use yew::prelude::*;

use crate::components::map_view::{MapMode, MapView};
use crate::i18n;
use kiezquest_core::Station;

#[derive(Properties, Clone)]
pub struct OverviewPageProps {
    pub stations: Rc<Vec<Station>>,
    pub on_begin: Callback<()>,
}

impl PartialEq for OverviewPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.stations, &other.stations) && self.on_begin == other.on_begin
    }
}

#[function_component(OverviewPage)]
pub fn overview_page(props: &OverviewPageProps) -> Html {
    let on_click = {
        let on_begin = props.on_begin.clone();
        Callback::from(move |_| on_begin.emit(()))
    };

    html! {
        <section class="panel overview" data-testid="overview-screen">
            <h2>{ i18n::t("overview.title") }</h2>
            <MapView mode={MapMode::Overview { stations: props.stations.clone() }} />
            <ol class="station-list">
                { for props.stations.iter().map(|station| html! {
                    <li key={station.id}><strong>{ &station.title }</strong></li>
                }) }
            </ol>
            <div class="controls">
                <button class="btn-primary" onclick={on_click}>
                    { i18n::t("overview.begin") }
                </button>
            </div>
        </section>
    }
}
