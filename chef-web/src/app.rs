use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::chat::Chat;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/chef-web.css"/>
        <Title text="AI Master Chef Bot"/>
        <Meta name="description" content="Ask for any dish and get a step-by-step recipe"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=Chat/>
                </Routes>
            </main>
        </Router>
    }
}
