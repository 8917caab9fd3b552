use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::certificate;
use crate::components::progress_header::ProgressHeader;
use crate::hunt::{self, AnswerOutcome, HuntPhase, HuntSession, StationStage};
use crate::i18n;
use crate::pages::completed::CompletedPage;
use crate::pages::explanation::ExplanationPage;
use crate::pages::navigation::NavigationPage;
use crate::pages::not_found::NotFound;
use crate::pages::overview::OverviewPage;
use crate::pages::question::QuestionPage;
use crate::pages::welcome::WelcomePage;
use crate::router::Route;

/// Current date in the active locale, for the certificate's issue line.
fn issue_date() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string(&i18n::current_lang(), &JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_default()
}

/// Main application component providing browser routing
///
/// Sets up the router context for the entire application and renders the main
/// `AppInner` component. This is the top-level component mounted to the DOM.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let session = use_state(|| HuntSession::new(hunt::load_station_catalog()));
    let current_language = use_state(i18n::current_lang);
    let stations = use_memo((), {
        let session = session.clone();
        move |()| session.catalog().stations().to_vec()
    });

    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::Home);

    // The URL mirrors the hunt phase; it never drives it. Session state is
    // not reconstructible from a URL, so stray deep links snap back to the
    // route of the live phase instead of skipping stations.
    {
        let phase = session.phase();
        let current_route = route.clone();
        use_effect_with((phase, current_route), move |(phase, current_route)| {
            if let Some(nav) = navigator.as_ref() {
                let expected = Route::from_phase(*phase);
                if *current_route != Route::NotFound && expected != *current_route {
                    nav.push(&expected);
                }
            }
        });
    }

    let on_start = {
        let session = session.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            next.start();
            session.set(next);
        })
    };

    let on_begin_hunt = {
        let session = session.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            next.confirm_overview();
            session.set(next);
        })
    };

    let on_arrived = {
        let session = session.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            next.arrive_at_station();
            session.set(next);
        })
    };

    let on_select_answer = {
        let session = session.clone();
        Callback::from(move |value: String| {
            let mut next = (*session).clone();
            next.select_answer(&value);
            session.set(next);
        })
    };

    let on_submit_answer = {
        let session = session.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            let Some(selected) = next.selected_answer().map(str::to_string) else {
                return;
            };
            if next.submit_answer(&selected) == AnswerOutcome::MissingStation {
                log::warn!(
                    "no station record behind index {}",
                    next.current_station()
                );
            }
            session.set(next);
        })
    };

    let on_back_to_navigation = {
        let session = session.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            next.back_to_navigation();
            session.set(next);
        })
    };

    let on_continue = {
        let session = session.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            next.complete_explanation();
            session.set(next);
        })
    };

    let on_download_certificate = {
        let session = session.clone();
        Callback::from(move |()| {
            if session.can_download_certificate() {
                certificate::download(&certificate::localized_text(&issue_date()));
            }
        })
    };

    // Language change callback
    let on_lang_change = {
        let current_language = current_language.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(select) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                i18n::set_lang(&select.value());
                current_language.set(select.value());
            }
        })
    };

    let main_view = if route == Route::NotFound {
        html! { <NotFound /> }
    } else {
        match session.phase() {
            HuntPhase::Welcome => html! { <WelcomePage on_start={on_start} /> },
            HuntPhase::Overview => html! {
                <OverviewPage stations={stations} on_begin={on_begin_hunt} />
            },
            HuntPhase::Active => session.station().cloned().map_or_else(
                || {
                    html! {
                        <p class="error" role="alert">{ i18n::t("error.catalog") }</p>
                    }
                },
                |station| {
                    let stage_view = match session.stage() {
                        StationStage::Navigation => html! {
                            <NavigationPage station={station} on_arrived={on_arrived.clone()} />
                        },
                        StationStage::Question => html! {
                            <QuestionPage
                                station={station}
                                selected={session.selected_answer().map(|s| AttrValue::from(s.to_string()))}
                                feedback={session.feedback()}
                                on_select={on_select_answer.clone()}
                                on_submit={on_submit_answer.clone()}
                                on_back={on_back_to_navigation.clone()}
                            />
                        },
                        StationStage::Explanation => html! {
                            <ExplanationPage station={station} on_continue={on_continue.clone()} />
                        },
                    };
                    html! {
                        <>
                            <ProgressHeader
                                current={session.current_station()}
                                total={session.total_stations()}
                                progress={session.progress_percent()}
                            />
                            { stage_view }
                        </>
                    }
                },
            ),
            HuntPhase::Completed => html! {
                <CompletedPage on_download={on_download_certificate} />
            },
        }
    };

    html! {
        <main id="main" role="main">
            <header class="top-bar">
                <nav aria-label={i18n::t("lang.label")}>
                    <label for="lang-select" class="sr-only">{ i18n::t("lang.label") }</label>
                    <select id="lang-select" onchange={on_lang_change} value={(*current_language).clone()}>
                        { for i18n::locales().iter().map(|meta| html! {
                            <option value={meta.code}>{ meta.name }</option>
                        }) }
                    </select>
                </nav>
            </header>
            { main_view }
            <crate::components::footer::Footer />
        </main>
    }
}
