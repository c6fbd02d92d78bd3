use crate::components::indicators::{PriorityIndicator, StatusIndicator};
use crate::components::ticket_modal::TicketModal;
use helpdesk::filter::{ALL_VALUE, PriorityFilter, StatusFilter, TicketFilter};
use helpdesk::labels::{priority_badge, status_badge};
use helpdesk_shared::{AdminTicket, DESCRIPTION_PREVIEW_CHARS, Priority, TicketStatus};
use leptos::prelude::*;

/// 管理员视图：全部工单，支持搜索、筛选与状态切换
#[component]
pub fn TicketAdminList(
    #[prop(into)] tickets: Signal<Vec<AdminTicket>>,
    on_status_change: Callback<(i64, TicketStatus)>,
) -> impl IntoView {
    let (filter, set_filter) = signal(TicketFilter::default());
    let (modal_ticket, set_modal_ticket) = signal(Option::<AdminTicket>::None);

    // 任一输入变化都重新计算
    let filtered = Memo::new(move |_| {
        let filter = filter.get();
        tickets.with(|all| filter.apply(all).into_iter().cloned().collect::<Vec<_>>())
    });

    let on_close = Callback::new(move |()| set_modal_ticket.set(None));

    view! {
        <section class="space-y-8">
            <header>
                <h1 class="text-3xl font-extrabold mb-6">"Gerenciamento de Chamados"</h1>
                <form
                    class="flex flex-wrap gap-4 items-center"
                    role="search"
                    aria-label="Busca de chamados"
                    on:submit=|ev| ev.prevent_default()
                >
                    <input
                        type="search"
                        placeholder="Buscar por descrição, email ou ID"
                        aria-label="Campo de busca"
                        class="input input-bordered flex-grow"
                        prop:value=move || filter.with(|f| f.search.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_filter.update(|f| f.search = value);
                        }
                    />
                    <select
                        class="select select-bordered w-full sm:w-48"
                        aria-label="Filtro por status"
                        prop:value=move || filter.with(|f| f.status.value().to_string())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_filter.update(|f| f.status = StatusFilter::from_value(&value));
                        }
                    >
                        <option value=ALL_VALUE>"Todos os Status"</option>
                        {TicketStatus::ALL
                            .iter()
                            .map(|s| {
                                let value = s.as_str().to_string();
                                let label = status_badge(&value).text;
                                view! { <option value=value>{label}</option> }
                            })
                            .collect_view()}
                    </select>
                    <select
                        class="select select-bordered w-full sm:w-48"
                        aria-label="Filtro por prioridade"
                        prop:value=move || filter.with(|f| f.priority.value().to_string())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_filter.update(|f| f.priority = PriorityFilter::from_value(&value));
                        }
                    >
                        <option value=ALL_VALUE>"Todas as Prioridades"</option>
                        {Priority::ALL
                            .iter()
                            .map(|p| {
                                let value = p.as_str().to_string();
                                let label = priority_badge(&value).text;
                                view! { <option value=value>{label}</option> }
                            })
                            .collect_view()}
                    </select>
                </form>
            </header>

            <Show
                when=move || filtered.with(|t| !t.is_empty())
                fallback=|| view! {
                    <p class="text-center text-base-content/60 text-lg">
                        "Nenhum chamado corresponde aos filtros aplicados."
                    </p>
                }
            >
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || filtered.get()
                        key=|t| (t.ticket.id, t.ticket.status.clone())
                        children=move |item| {
                            let open = {
                                let item = item.clone();
                                move || set_modal_ticket.set(Some(item.clone()))
                            };
                            let open_on_key = open.clone();
                            let title_id = format!("ticket-title-{}", item.ticket.id);
                            view! {
                                <article
                                    class="card bg-base-100 shadow-lg hover:shadow-2xl cursor-pointer transition"
                                    tabindex="0"
                                    aria-labelledby=title_id.clone()
                                    on:click=move |_| open()
                                    on:keydown=move |ev: leptos::web_sys::KeyboardEvent| {
                                        if ev.key() == "Enter" || ev.key() == " " {
                                            ev.prevent_default();
                                            open_on_key();
                                        }
                                    }
                                >
                                    <div class="card-body">
                                        <h2 id=title_id class="card-title whitespace-pre-line">
                                            {item.ticket.preview(DESCRIPTION_PREVIEW_CHARS)}
                                        </h2>
                                        <div class="flex justify-between items-center text-sm my-4">
                                            <div class="flex gap-4">
                                                <div>
                                                    <h3 class="font-semibold mb-1">"Status"</h3>
                                                    <StatusIndicator status=item.ticket.status.as_str().to_string() />
                                                </div>
                                                <div>
                                                    <h3 class="font-semibold mb-1">"Prioridade"</h3>
                                                    <PriorityIndicator priority=item.ticket.priority.as_str().to_string() />
                                                </div>
                                            </div>
                                            <span class="text-base-content/60">"ID: #" {item.ticket.id}</span>
                                        </div>
                                        <footer class="text-sm border-t border-base-300 pt-4">
                                            <p><strong>"Criado por: "</strong>{item.email.clone()}</p>
                                            <p><strong>"Criado em: "</strong>{item.ticket.created_at.formatted()}</p>
                                        </footer>
                                    </div>
                                </article>
                            }
                        }
                    />
                </div>
            </Show>

            {move || modal_ticket.get().map(|ticket| view! {
                <TicketModal
                    ticket=ticket
                    on_close=on_close
                    on_status_change=on_status_change
                />
            })}
        </section>
    }
}
