//! Yew wrapper owning one [`MapSurface`] per mounted view.
//!
//! The surface handle lives in a mutable ref: exactly one widget per mount,
//! disposed in the effect destructor before any successor can bind the same
//! logical surface. A second initialization attempt on a live handle (a
//! re-render hazard) is skipped with a logged warning.

use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::geo::GeoPoint;
use crate::map::{MapSurface, OVERVIEW_ZOOM};
use kiezquest_core::Station;

#[derive(Clone, PartialEq)]
pub enum MapMode {
    /// Whole route at once, zoomed out.
    Overview { stations: Rc<Vec<Station>> },
    /// One target station, zoomed in, with an optional live-position marker.
    Target { station: Station },
}

#[derive(Properties, Clone, PartialEq)]
pub struct MapViewProps {
    pub mode: MapMode,
    #[prop_or_default]
    pub user_position: Option<GeoPoint>,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let container = use_node_ref();
    let surface = use_mut_ref(|| None::<MapSurface>);

    // Bind the widget once per mount, release it on unmount.
    {
        let container = container.clone();
        let surface = surface.clone();
        use_effect_with((), move |()| {
            if let Some(element) = container.cast::<HtmlElement>() {
                let mut slot = surface.borrow_mut();
                if slot.is_some() {
                    log::warn!("map surface already bound; skipping re-initialization");
                } else {
                    *slot = Some(MapSurface::mount(&element));
                }
            }
            move || {
                if let Some(mut live) = surface.borrow_mut().take() {
                    live.dispose();
                }
            }
        });
    }

    // Re-aim the viewport whenever the displayed data changes.
    {
        let surface = surface.clone();
        use_effect_with(props.mode.clone(), move |mode| {
            if let Some(live) = surface.borrow_mut().as_mut() {
                match mode {
                    MapMode::Overview { stations } => live.set_stations(stations, OVERVIEW_ZOOM),
                    MapMode::Target { station } => live.set_target(station),
                }
            }
        });
    }

    // Live position marker, independent of the target marker.
    {
        let surface = surface.clone();
        use_effect_with(props.user_position, move |position| {
            if let Some(live) = surface.borrow_mut().as_mut() {
                match position {
                    Some(point) => live.set_user_position(*point),
                    None => live.clear_user_position(),
                }
            }
        });
    }

    html! {
        <div ref={container} class="map-canvas" role="application" aria-label={crate::i18n::t("map.label")} />
    }
}
