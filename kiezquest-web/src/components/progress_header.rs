use std::collections::BTreeMap;
use yew::prelude::*;

use crate::i18n;

#[derive(Properties, Clone, PartialEq)]
pub struct ProgressHeaderProps {
    /// 1-based position of the station in progress.
    pub current: usize,
    pub total: usize,
    /// Completed share in `[0, 100]`.
    pub progress: u8,
}

fn station_of_label(current: usize, total: usize) -> String {
    let current = current.to_string();
    let total = total.to_string();
    let mut args = BTreeMap::new();
    args.insert("current", current.as_str());
    args.insert("total", total.as_str());
    i18n::tr("progress.station_of", Some(&args))
}

#[function_component(ProgressHeader)]
pub fn progress_header(props: &ProgressHeaderProps) -> Html {
    html! {
        <header class="hunt-header" data-testid="progress-header">
            <h1>{ i18n::t("app.title") }</h1>
            <p class="muted">{ i18n::t("app.tagline") }</p>
            <progress
                class="hunt-progress"
                value={props.progress.to_string()}
                max="100"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={props.progress.to_string()}
            />
            <p class="muted" aria-live="polite">{ station_of_label(props.current, props.total) }</p>
        </header>
    }
}
