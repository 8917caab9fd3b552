use yew::prelude::*;

use crate::i18n;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="panel not-found" data-testid="not-found-screen">
            <h2>{ i18n::t("notfound.title") }</h2>
            <a href="/">{ i18n::t("notfound.home") }</a>
        </section>
    }
}
