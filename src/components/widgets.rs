use crate::config::CURRENCY_SYMBOL;
use crate::format::format_currency;
use crate::models::TransactionStatus;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Properties, PartialEq)]
pub struct BannerProps {
    pub notice: Option<Notice>,
}

#[function_component(Banner)]
pub fn banner(props: &BannerProps) -> Html {
    match &props.notice {
        Some(Notice::Success(msg)) => html! {
            <div class="rounded-[10px] px-4 py-3 text-sm bg-emerald-50 text-emerald-700 border border-emerald-200">{ msg.clone() }</div>
        },
        Some(Notice::Error(msg)) => html! {
            <div class="rounded-[10px] px-4 py-3 text-sm bg-red-50 text-red-600 border border-red-200">{ msg.clone() }</div>
        },
        None => html! {},
    }
}

/// `oninput` handler that mirrors the input's value into `handle`.
pub fn bind_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Wallet,
    ArrowUpRight,
    ArrowDownLeft,
    List,
    Check,
    Undo,
}

#[derive(Clone, PartialEq)]
pub enum StatValue {
    Money(f64),
    Count(usize),
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub value: StatValue,
    pub icon: StatIcon,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let value = match props.value {
        StatValue::Money(amount) => format_currency(amount, CURRENCY_SYMBOL),
        StatValue::Count(n) => n.to_string(),
    };
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest uppercase">{ props.title }</p>
                <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ value }</h3>
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::Wallet => icon_wallet(),
                        StatIcon::ArrowUpRight => icon_arrow_up_right(),
                        StatIcon::ArrowDownLeft => icon_arrow_down_left(),
                        StatIcon::List => icon_list(),
                        StatIcon::Check => icon_check(),
                        StatIcon::Undo => icon_undo(),
                    }
                }
            </div>
        </div>
    }
}

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

pub fn status_badge_class(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Success => "bg-emerald-100 text-emerald-700 px-3 py-1 rounded-full text-[10px] font-bold",
        TransactionStatus::Refunded => "bg-amber-100 text-amber-700 px-3 py-1 rounded-full text-[10px] font-bold",
        TransactionStatus::Failed | TransactionStatus::Unknown => "bg-red-100 text-red-600 px-3 py-1 rounded-full text-[10px] font-bold",
    }
}

pub fn spinner() -> Html {
    html! {
        <span class="inline-block w-4 h-4 border-2 border-white/40 border-t-white rounded-full animate-spin"></span>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-foreground">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
pub fn icon_list() -> Html {
    icon_base("M8 6h13M8 12h13M8 18h13M3 6h.01M3 12h.01M3 18h.01")
}
pub fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
pub fn icon_arrow_up_right() -> Html {
    icon_base("M7 17L17 7M7 7h10v10")
}
pub fn icon_arrow_down_left() -> Html {
    icon_base("M17 7L7 17M17 17H7V7")
}
pub fn icon_check() -> Html {
    icon_base("M20 6L9 17l-5-5")
}
pub fn icon_undo() -> Html {
    icon_base("M3 7v6h6M21 17a9 9 0 00-15-6.7L3 13")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
pub fn icon_send() -> Html {
    icon_base("M22 2L11 13M22 2l-7 20-4-9-9-4 20-7z")
}
