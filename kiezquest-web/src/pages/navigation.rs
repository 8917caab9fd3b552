use std::collections::BTreeMap;
use yew::prelude::*;

use crate::components::map_view::{MapMode, MapView};
use crate::geo::{self, GeoError, GeoPoint, MountToken};
use crate::i18n;
use kiezquest_core::Station;

#[derive(Properties, Clone, PartialEq)]
pub struct NavigationPageProps {
    pub station: Station,
    pub on_arrived: Callback<()>,
}

fn title_for(station: &Station) -> String {
    let mut args = BTreeMap::new();
    args.insert("station", station.title.as_str());
    i18n::tr("nav.title", Some(&args))
}

#[function_component(NavigationPage)]
pub fn navigation_page(props: &NavigationPageProps) -> Html {
    let user_position = use_state(|| None::<GeoPoint>);
    let geo_notice = use_state(|| None::<GeoError>);

    // One position request per station mount. The token ties the async
    // result to this mount; a fix that lands after teardown (stage change or
    // next station) is dropped instead of poking a map that moved on.
    {
        let user_position = user_position.clone();
        let geo_notice = geo_notice.clone();
        use_effect_with(props.station.id, move |_| {
            user_position.set(None);
            geo_notice.set(None);
            let token = MountToken::new();
            let token_for_request = token.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = geo::current_position().await;
                if !token_for_request.is_live() {
                    return;
                }
                match outcome {
                    Ok(point) => user_position.set(Some(point)),
                    Err(error) => {
                        log::warn!("geolocation unavailable: {error}");
                        geo_notice.set(Some(error));
                    }
                }
            });
            move || token.revoke()
        });
    }

    let on_click = {
        let on_arrived = props.on_arrived.clone();
        Callback::from(move |_| on_arrived.emit(()))
    };

    html! {
        <section class="panel navigation" data-testid="navigation-screen">
            <h2>{ title_for(&props.station) }</h2>
            { geo_notice.map_or_else(Html::default, |error| html! {
                <p class="notice" role="status">{ i18n::t(error.notice_key()) }</p>
            }) }
            <MapView
                mode={MapMode::Target { station: props.station.clone() }}
                user_position={*user_position}
            />
            <div class="controls">
                <a
                    class="btn-secondary"
                    href={props.station.google_maps_link.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { i18n::t("nav.open_maps") }
                </a>
                <button class="btn-primary" onclick={on_click}>
                    { i18n::t("nav.arrived") }
                </button>
            </div>
        </section>
    }
}
