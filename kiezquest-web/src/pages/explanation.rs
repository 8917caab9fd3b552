use std::collections::BTreeMap;
use yew::prelude::*;

use crate::i18n;
use kiezquest_core::Station;

#[derive(Properties, Clone, PartialEq)]
pub struct ExplanationPageProps {
    pub station: Station,
    pub on_continue: Callback<()>,
}

fn title_for(station: &Station) -> String {
    let mut args = BTreeMap::new();
    args.insert("station", station.title.as_str());
    i18n::tr("explanation.title", Some(&args))
}

#[function_component(ExplanationPage)]
pub fn explanation_page(props: &ExplanationPageProps) -> Html {
    let on_click = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_| on_continue.emit(()))
    };

    html! {
        <section class="panel explanation" data-testid="explanation-screen">
            <h2>{ title_for(&props.station) }</h2>
            <img
                class="station-photo"
                src={props.station.map_url.clone()}
                alt={props.station.title.clone()}
                loading="lazy"
            />
            <p>{ &props.station.explanation }</p>
            <div class="controls">
                <button class="btn-primary" onclick={on_click}>
                    { i18n::t("explanation.continue") }
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_interpolates_the_station_name() {
        crate::i18n::set_lang("de");
        let station = Station {
            id: 2,
            title: "Gartlberg".into(),
            riddle: String::new(),
            explanation: String::new(),
            options: vec!["A".into(), "B".into()],
            correct_answer: 0,
            latitude: 48.43,
            longitude: 12.93,
            map_url: String::new(),
            google_maps_link: String::new(),
        };
        assert_eq!(title_for(&station), "Mehr über Gartlberg");
    }
}
