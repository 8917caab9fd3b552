use yew::prelude::*;

use crate::i18n;

#[derive(Properties, Clone, PartialEq)]
pub struct WelcomePageProps {
    pub on_start: Callback<()>,
}

#[function_component(WelcomePage)]
pub fn welcome_page(props: &WelcomePageProps) -> Html {
    let on_click = {
        let on_start = props.on_start.clone();
        Callback::from(move |_| on_start.emit(()))
    };

    html! {
        <section class="panel welcome" data-testid="welcome-screen">
            <h2>{ i18n::t("welcome.title") }</h2>
            <p class="muted">{ i18n::t("welcome.intro") }</p>
            <div class="controls">
                <button class="btn-primary" onclick={on_click}>
                    { i18n::t("welcome.start") }
                </button>
            </div>
        </section>
    }
}
