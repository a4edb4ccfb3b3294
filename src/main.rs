mod api;
mod components;
mod config;
mod error;
mod format;
mod ledger;
mod models;
mod route;
mod session;

use components::auth::AuthScreen;
use components::dashboard::DashboardPage;
use components::history::HistoryPage;
use components::layout::Layout;
use route::{gate, PopStateListener, Route};
use session::{BrowserStorage, Session, SessionContext};
use tracing::{info, Level};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let session = use_state(|| Session::restore(&BrowserStorage));
    let requested = use_state(|| Route::from_path(&route::current_path()));
    let active = gate(*requested, session.is_authenticated());

    use_effect_with_deps(
        |active| {
            route::sync(*active);
            || ()
        },
        active,
    );

    {
        let requested = requested.clone();
        use_effect_with_deps(
            move |_| {
                let listener =
                    PopStateListener::register(Callback::from(move |r: Route| requested.set(r)));
                move || drop(listener)
            },
            (),
        );
    }

    let on_navigate = {
        let requested = requested.clone();
        Callback::from(move |r: Route| {
            route::push(r);
            requested.set(r);
        })
    };

    let content = match active {
        Route::Dashboard => html! {
            <Layout active={active} on_navigate={on_navigate.clone()}>
                <DashboardPage on_navigate={on_navigate.clone()} />
            </Layout>
        },
        Route::Transactions => html! {
            <Layout active={active} on_navigate={on_navigate.clone()}>
                <HistoryPage on_navigate={on_navigate.clone()} />
            </Layout>
        },
        Route::Login | Route::Root => html! { <AuthScreen on_navigate={on_navigate.clone()} /> },
    };

    html! {
        <ContextProvider<SessionContext> context={session}>
            { content }
        </ContextProvider<SessionContext>>
    }
}

fn main() {
    let mut layer_config = tracing_wasm::WASMLayerConfigBuilder::new();
    layer_config
        .set_max_level(if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .set_report_logs_in_timings(false);
    tracing_wasm::set_as_global_default_with_config(layer_config.build());

    info!(api = config::api_base_url(), "starting MiniPay");
    yew::Renderer::<App>::new().render();
}
