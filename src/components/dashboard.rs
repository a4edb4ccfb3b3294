use super::widgets::{
    bind_input, icon_plus, icon_send, page_shell, status_badge_class, Banner, Notice, StatCard,
    StatIcon, StatValue,
};
use crate::api::ApiClient;
use crate::config::CURRENCY_SYMBOL;
use crate::format::{format_currency, format_date};
use crate::ledger::{is_sender, totals};
use crate::models::{parse_amount, PaymentRequest, Transaction};
use crate::route::Route;
use crate::session::{BrowserStorage, SessionContext};
use tracing::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const RECENT_LIMIT: usize = 5;
const INVALID_AMOUNT: &str = "Enter an amount greater than zero.";

async fn refresh_profile(
    client: ApiClient,
    token: Option<String>,
    session: Option<SessionContext>,
) {
    match client.profile().await {
        Ok(profile) => {
            // a logout or another sign-in may have landed while the request was out
            let (Some(token), Some(session)) = (token, session) else {
                return;
            };
            if let Some(next) = session.refreshed(&BrowserStorage, &token, profile) {
                session.set(next);
            }
        }
        Err(err) => error!(error = %err, "error fetching profile"),
    }
}

async fn refresh_transactions(client: ApiClient, transactions: UseStateHandle<Vec<Transaction>>) {
    match client.transactions().await {
        Ok(list) => transactions.set(list),
        Err(err) => error!(error = %err, "error fetching transactions"),
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardProps) -> Html {
    let session = use_context::<SessionContext>();
    let token = session.as_ref().and_then(|s| s.token().map(str::to_owned));
    let user = session.as_ref().and_then(|s| s.user().cloned());
    let user_id = user.as_ref().map(|u| u.id.clone());

    let transactions = use_state(Vec::<Transaction>::new);
    let add_amount = use_state(|| "".to_string());
    let receiver_email = use_state(|| "".to_string());
    let pay_amount = use_state(|| "".to_string());
    let notice = use_state(|| None::<Notice>);
    let adding = use_state(|| false);
    let paying = use_state(|| false);

    {
        let session = session.clone();
        let transactions = transactions.clone();
        let token = token.clone();
        use_effect_with_deps(
            move |_| {
                let client = ApiClient::from_config(token.clone());
                spawn_local(refresh_profile(client.clone(), token, session));
                spawn_local(refresh_transactions(client, transactions));
                || ()
            },
            (),
        );
    }

    let on_add = {
        let session = session.clone();
        let token = token.clone();
        let add_amount = add_amount.clone();
        let notice = notice.clone();
        let adding = adding.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *adding {
                return;
            }
            let Some(amount) = parse_amount(&add_amount) else {
                notice.set(Some(Notice::Error(INVALID_AMOUNT.to_string())));
                return;
            };

            adding.set(true);
            notice.set(None);

            let token = token.clone();
            let client = ApiClient::from_config(token.clone());
            let session = session.clone();
            let add_amount = add_amount.clone();
            let notice = notice.clone();
            let adding = adding.clone();
            spawn_local(async move {
                match client.add_money(amount).await {
                    Ok(()) => {
                        info!(amount, "money added");
                        notice.set(Some(Notice::Success("Money added successfully!".to_string())));
                        add_amount.set("".to_string());
                        refresh_profile(client, token, session).await;
                    }
                    Err(err) => {
                        warn!(error = %err, "add money failed");
                        notice.set(Some(Notice::Error(err.user_message("Error adding money"))));
                    }
                }
                adding.set(false);
            });
        })
    };

    let on_pay = {
        let session = session.clone();
        let token = token.clone();
        let receiver_email = receiver_email.clone();
        let pay_amount = pay_amount.clone();
        let transactions = transactions.clone();
        let notice = notice.clone();
        let paying = paying.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *paying {
                return;
            }
            let Some(amount) = parse_amount(&pay_amount) else {
                notice.set(Some(Notice::Error(INVALID_AMOUNT.to_string())));
                return;
            };
            let body = PaymentRequest {
                receiver_email: receiver_email.trim().to_string(),
                amount,
            };

            paying.set(true);
            notice.set(None);

            let token = token.clone();
            let client = ApiClient::from_config(token.clone());
            let session = session.clone();
            let receiver_email = receiver_email.clone();
            let pay_amount = pay_amount.clone();
            let transactions = transactions.clone();
            let notice = notice.clone();
            let paying = paying.clone();
            spawn_local(async move {
                match client.send_payment(&body).await {
                    Ok(()) => {
                        info!(amount, "payment sent");
                        notice.set(Some(Notice::Success("Payment sent successfully!".to_string())));
                        receiver_email.set("".to_string());
                        pay_amount.set("".to_string());
                        refresh_profile(client.clone(), token, session).await;
                        refresh_transactions(client, transactions).await;
                    }
                    Err(err) => {
                        warn!(error = %err, "payment failed");
                        notice.set(Some(Notice::Error(err.user_message("Error sending payment"))));
                    }
                }
                paying.set(false);
            });
        })
    };

    let on_history = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Route::Transactions))
    };

    let sums = totals(&transactions, user_id.as_deref());
    let balance = user.as_ref().map(|u| u.balance).unwrap_or(0.0);
    let greeting = user
        .as_ref()
        .map(|u| format!("Welcome, {}", u.name))
        .unwrap_or_else(|| "Welcome".to_string());
    let input_class = "w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[13px] text-[#173E63] border-none";

    html! {
        { page_shell(
            "Dashboard",
            html! {
                <button onclick={on_history} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                    {"View Transaction History"}
                </button>
            },
            html! {
                <>
                    <p class="text-lg font-semibold text-[#173E63]">{ greeting }</p>

                    <Banner notice={(*notice).clone()} />

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <StatCard title="Balance" value={StatValue::Money(balance)} icon={StatIcon::Wallet} />
                        <StatCard title="Total Sent" value={StatValue::Money(sums.sent)} icon={StatIcon::ArrowUpRight} />
                        <StatCard title="Total Received" value={StatValue::Money(sums.received)} icon={StatIcon::ArrowDownLeft} />
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <h3 class="font-bold text-foreground text-lg mb-4">{"Add Money"}</h3>
                            <form class="space-y-3" onsubmit={on_add}>
                                <div class="space-y-1">
                                    <label class="text-[12px] font-bold text-muted-foreground">{ format!("Amount ({})", CURRENCY_SYMBOL) }</label>
                                    <input type="number" min="0.01" step="0.01" required={true} placeholder="Amount" class={input_class}
                                        value={(*add_amount).clone()}
                                        oninput={bind_input(&add_amount)} />
                                </div>
                                <button type="submit" disabled={*adding} class="flex items-center gap-2 bg-accent text-white px-4 py-2 rounded-xl font-bold text-sm">
                                    { icon_plus() }
                                    { if *adding { "Adding..." } else { "Add Money" } }
                                </button>
                            </form>
                        </div>

                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <h3 class="font-bold text-foreground text-lg mb-4">{"Send Payment"}</h3>
                            <form class="space-y-3" onsubmit={on_pay}>
                                <div class="space-y-1">
                                    <label class="text-[12px] font-bold text-muted-foreground">{"Receiver Email"}</label>
                                    <input type="email" required={true} placeholder="Receiver Email" class={input_class}
                                        value={(*receiver_email).clone()}
                                        oninput={bind_input(&receiver_email)} />
                                </div>
                                <div class="space-y-1">
                                    <label class="text-[12px] font-bold text-muted-foreground">{ format!("Amount ({})", CURRENCY_SYMBOL) }</label>
                                    <input type="number" min="0.01" step="0.01" required={true} placeholder="Amount" class={input_class}
                                        value={(*pay_amount).clone()}
                                        oninput={bind_input(&pay_amount)} />
                                </div>
                                <button type="submit" disabled={*paying} class="flex items-center gap-2 bg-accent text-white px-4 py-2 rounded-xl font-bold text-sm">
                                    { icon_send() }
                                    { if *paying { "Sending..." } else { "Send Payment" } }
                                </button>
                            </form>
                        </div>
                    </div>

                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                        <div class="p-6 flex justify-between items-center border-b border-border">
                            <h3 class="font-bold text-foreground text-lg">{"Recent Transactions"}</h3>
                        </div>
                        { if transactions.is_empty() {
                            html! { <p class="p-6 text-sm text-muted-foreground">{"No transactions yet."}</p> }
                        } else {
                            html! {
                                <div class="overflow-x-auto">
                                    <table class="w-full text-left border-collapse">
                                        <thead>
                                            <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                                                <th class="px-8 py-4 font-bold">{"Date"}</th>
                                                <th class="px-8 py-4 font-bold">{"Details"}</th>
                                                <th class="px-8 py-4 font-bold">{"Status"}</th>
                                                <th class="px-8 py-4 font-bold text-right">{"Amount"}</th>
                                            </tr>
                                        </thead>
                                        <tbody class="divide-y divide-border">
                                            { for transactions.iter().take(RECENT_LIMIT).map(|tx| {
                                                let outgoing = is_sender(tx, user_id.as_deref());
                                                let details = if outgoing {
                                                    format!("To: {}", tx.receiver_name.as_deref().unwrap_or("-"))
                                                } else {
                                                    format!("From: {}", tx.sender_name.as_deref().unwrap_or("-"))
                                                };
                                                let amount_label = if outgoing {
                                                    format!("- {}", format_currency(tx.amount, CURRENCY_SYMBOL))
                                                } else {
                                                    format!("+ {}", format_currency(tx.amount, CURRENCY_SYMBOL))
                                                };

                                                html! {
                                                    <tr key={tx.id.clone()} class="text-sm hover:bg-muted/30 transition-colors">
                                                        <td class="px-8 py-4 text-muted-foreground">{ tx.created_at.as_deref().map(format_date).unwrap_or_default() }</td>
                                                        <td class="px-8 py-4 text-foreground">{ details }</td>
                                                        <td class="px-8 py-4"><span class={status_badge_class(tx.status)}>{ tx.status.as_str() }</span></td>
                                                        <td class="px-8 py-4 text-right font-semibold text-foreground">{ amount_label }</td>
                                                    </tr>
                                                }
                                            }) }
                                        </tbody>
                                    </table>
                                </div>
                            }
                        }}
                    </div>
                </>
            }
        ) }
    }
}
