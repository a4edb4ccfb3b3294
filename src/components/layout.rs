use super::widgets::{icon_layout_grid, icon_list, icon_log_out};
use crate::route::Route;
use crate::session::{BrowserStorage, Session, SessionContext};
use yew::prelude::*;

struct NavItem {
    label: &'static str,
    route: Route,
    icon: fn() -> Html,
}

static NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        label: "Dashboard",
        route: Route::Dashboard,
        icon: icon_layout_grid,
    },
    NavItem {
        label: "Transactions",
        route: Route::Transactions,
        icon: icon_list,
    },
];

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-background">
            <Navbar active={props.active} on_navigate={props.on_navigate.clone()} />
            <main class="flex-1 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    active: Route,
    on_navigate: Callback<Route>,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    let session = use_context::<SessionContext>();
    let user_name = session
        .as_ref()
        .and_then(|s| s.user().map(|u| u.name.clone()))
        .unwrap_or_default();

    let on_logout = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| {
            if let Some(session) = session.as_ref() {
                session.set(Session::sign_out(&BrowserStorage));
            }
            on_navigate.emit(Route::Login);
        })
    };

    html! {
        <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
            <div class="flex items-center gap-8">
                <span class="text-[#173E63] text-2xl font-black tracking-tight">{"MiniPay"}</span>
                <nav class="flex items-center gap-2">
                    { for NAV_ITEMS.iter().map(|item| {
                        let class_name = if item.route == props.active {
                            "flex items-center gap-2 px-4 py-2 rounded-xl text-[13px] font-medium bg-[#173E63] text-white"
                        } else {
                            "flex items-center gap-2 px-4 py-2 rounded-xl text-[13px] font-medium text-[#173E63] hover:bg-white/40"
                        };
                        let on_navigate = props.on_navigate.clone();
                        let route = item.route;

                        html! {
                            <button type="button" class={class_name} onclick={Callback::from(move |_| on_navigate.emit(route))}>
                                <span class="shrink-0">{ (item.icon)() }</span>
                                <span>{ item.label }</span>
                            </button>
                        }
                    }) }
                </nav>
            </div>
            <div class="flex items-center gap-4">
                <span class="text-sm text-[#173E63]">{ user_name }</span>
                <button onclick={on_logout} class="flex items-center gap-2 px-4 py-2 rounded-xl hover:bg-white/40 transition-colors text-[13px] font-medium text-[#173E63]">
                    { icon_log_out() }
                    <span>{"Logout"}</span>
                </button>
            </div>
        </header>
    }
}
