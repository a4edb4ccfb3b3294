use super::widgets::{
    page_shell, spinner, status_badge_class, Banner, Notice, StatCard, StatIcon, StatValue,
};
use crate::api::ApiClient;
use crate::config::CURRENCY_SYMBOL;
use crate::format::{format_currency, format_date};
use crate::ledger::{can_refund, filter_transactions, is_sender, summarize, Direction, StatusFilter};
use crate::models::Transaction;
use crate::route::Route;
use crate::session::SessionContext;
use tracing::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const FETCH_FAILED: &str = "Failed to fetch transactions";

async fn load_transactions(
    client: ApiClient,
    transactions: UseStateHandle<Vec<Transaction>>,
    notice: UseStateHandle<Option<Notice>>,
) {
    match client.transactions().await {
        Ok(list) => transactions.set(list),
        Err(err) => {
            error!(error = %err, "error fetching transactions");
            notice.set(Some(Notice::Error(FETCH_FAILED.to_string())));
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(HistoryPage)]
pub fn history_page(props: &HistoryProps) -> Html {
    let session = use_context::<SessionContext>();
    let token = session.as_ref().and_then(|s| s.token().map(str::to_owned));
    let user_id = session.as_ref().and_then(|s| s.user_id().map(str::to_owned));

    let transactions = use_state(Vec::<Transaction>::new);
    let direction = use_state(|| Direction::All);
    let status = use_state(|| StatusFilter::All);
    let notice = use_state(|| None::<Notice>);
    // id of the row whose refund is in flight
    let refunding = use_state(|| None::<String>);

    {
        let transactions = transactions.clone();
        let notice = notice.clone();
        let token = token.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(load_transactions(
                    ApiClient::from_config(token),
                    transactions,
                    notice,
                ));
                || ()
            },
            (),
        );
    }

    let filtered = use_memo(
        |deps: &(Vec<Transaction>, Direction, StatusFilter, Option<String>)| {
            let (list, direction, status, user_id) = deps;
            filter_transactions(list, user_id.as_deref(), *direction, *status)
        },
        (
            (*transactions).clone(),
            *direction,
            *status,
            user_id.clone(),
        ),
    );
    let summary = summarize(&filtered);

    let on_refund = {
        let token = token.clone();
        let transactions = transactions.clone();
        let notice = notice.clone();
        let refunding = refunding.clone();
        Callback::from(move |transaction_id: String| {
            if refunding.is_some() {
                return;
            }
            refunding.set(Some(transaction_id.clone()));
            notice.set(None);

            let client = ApiClient::from_config(token.clone());
            let transactions = transactions.clone();
            let notice = notice.clone();
            let refunding = refunding.clone();
            spawn_local(async move {
                match client.refund(&transaction_id).await {
                    Ok(()) => {
                        info!(transaction_id = %transaction_id, "refund processed");
                        notice.set(Some(Notice::Success(
                            "Refund processed successfully!".to_string(),
                        )));
                        load_transactions(client, transactions, notice).await;
                    }
                    Err(err) => {
                        warn!(error = %err, transaction_id = %transaction_id, "refund failed");
                        notice.set(Some(Notice::Error(err.user_message("Refund failed"))));
                    }
                }
                refunding.set(None);
            });
        })
    };

    let on_direction = {
        let direction = direction.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            direction.set(Direction::from_value(&select.value()));
        })
    };

    let on_status = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            status.set(StatusFilter::from_value(&select.value()));
        })
    };

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Route::Dashboard))
    };

    let select_class = "w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary";

    html! {
        { page_shell(
            "Transaction History",
            html! {
                <button onclick={on_back} class="bg-secondary text-secondary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                    {"Back to Dashboard"}
                </button>
            },
            html! {
                <>
                    <Banner notice={(*notice).clone()} />

                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <h3 class="font-bold text-foreground text-lg mb-4">{"Filter Transactions"}</h3>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div class="space-y-1">
                                <label class="text-sm font-medium text-foreground">{"Type"}</label>
                                <select class={select_class} onchange={on_direction}>
                                    { for Direction::OPTIONS.iter().map(|d| html! {
                                        <option value={d.value()} selected={*d == *direction}>{ d.label() }</option>
                                    }) }
                                </select>
                            </div>
                            <div class="space-y-1">
                                <label class="text-sm font-medium text-foreground">{"Status"}</label>
                                <select class={select_class} onchange={on_status}>
                                    { for StatusFilter::OPTIONS.iter().map(|s| html! {
                                        <option value={s.value()} selected={*s == *status}>{ s.label() }</option>
                                    }) }
                                </select>
                            </div>
                        </div>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                        <StatCard title="Filtered Transactions" value={StatValue::Count(summary.count)} icon={StatIcon::List} />
                        <StatCard title="Total Amount" value={StatValue::Money(summary.total_amount)} icon={StatIcon::Wallet} />
                        <StatCard title="Successful" value={StatValue::Count(summary.successful)} icon={StatIcon::Check} />
                        <StatCard title="Refunded" value={StatValue::Count(summary.refunded)} icon={StatIcon::Undo} />
                    </div>

                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                        <div class="p-6 border-b border-border">
                            <h3 class="font-bold text-foreground text-lg">{"Transaction Details"}</h3>
                        </div>
                        { if filtered.is_empty() {
                            html! {
                                <p class="text-center text-muted-foreground p-8">{"No transactions found matching your filters."}</p>
                            }
                        } else {
                            html! {
                                <div class="overflow-x-auto">
                                    <table class="w-full text-left border-collapse">
                                        <thead>
                                            <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                                                <th class="px-8 py-4 font-bold">{"Date"}</th>
                                                <th class="px-8 py-4 font-bold">{"Type"}</th>
                                                <th class="px-8 py-4 font-bold">{"Amount"}</th>
                                                <th class="px-8 py-4 font-bold">{"Status"}</th>
                                                <th class="px-8 py-4 font-bold">{"Details"}</th>
                                                <th class="px-8 py-4 font-bold">{"Action"}</th>
                                            </tr>
                                        </thead>
                                        <tbody class="divide-y divide-border">
                                            { for filtered.iter().map(|tx| {
                                                let outgoing = is_sender(tx, user_id.as_deref());
                                                let action = if can_refund(tx, user_id.as_deref()) {
                                                    let busy = refunding.as_deref() == Some(tx.id.as_str());
                                                    let on_click = {
                                                        let on_refund = on_refund.clone();
                                                        let id = tx.id.clone();
                                                        Callback::from(move |_| on_refund.emit(id.clone()))
                                                    };
                                                    html! {
                                                        <button onclick={on_click} disabled={refunding.is_some()} class="bg-red-500 text-white px-3 py-1 rounded-lg text-xs font-bold disabled:opacity-60">
                                                            { if busy { spinner() } else { html! { {"Refund"} } } }
                                                        </button>
                                                    }
                                                } else {
                                                    html! {}
                                                };

                                                html! {
                                                    <tr key={tx.id.clone()} class="text-sm hover:bg-muted/30 transition-colors">
                                                        <td class="px-8 py-4 text-muted-foreground">{ tx.created_at.as_deref().map(format_date).unwrap_or_default() }</td>
                                                        <td class="px-8 py-4">
                                                            if outgoing {
                                                                <span class="text-red-600 font-semibold">{"Sent"}</span>
                                                            } else {
                                                                <span class="text-emerald-600 font-semibold">{"Received"}</span>
                                                            }
                                                        </td>
                                                        <td class="px-8 py-4 font-semibold text-foreground">{ format_currency(tx.amount, CURRENCY_SYMBOL) }</td>
                                                        <td class="px-8 py-4"><span class={status_badge_class(tx.status)}>{ tx.status.as_str() }</span></td>
                                                        <td class="px-8 py-4 text-foreground">
                                                            if outgoing {
                                                                { format!("To: {}", tx.receiver_name.as_deref().unwrap_or("-")) }
                                                            } else {
                                                                { format!("From: {}", tx.sender_name.as_deref().unwrap_or("-")) }
                                                            }
                                                        </td>
                                                        <td class="px-8 py-4">{ action }</td>
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
