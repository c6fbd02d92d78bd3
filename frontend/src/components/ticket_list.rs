use crate::components::indicators::{PriorityIndicator, StatusIndicator};
use helpdesk_shared::{DESCRIPTION_PREVIEW_CHARS, Ticket};
use leptos::prelude::*;

/// 当前用户自己的工单（只读）
#[component]
pub fn TicketList(#[prop(into)] tickets: Signal<Vec<Ticket>>) -> impl IntoView {
    let (selected, set_selected) = signal(Option::<Ticket>::None);

    view! {
        <Show
            when=move || tickets.with(|t| !t.is_empty())
            fallback=|| view! {
                <div class="text-center text-base-content/70 p-6">
                    <p class="text-xl font-semibold mb-2">"Nenhum chamado seu foi encontrado."</p>
                    <p>"Abra um novo chamado para vê-lo aqui."</p>
                </div>
            }
        >
            <h2 class="text-2xl font-bold text-center mb-6">"Meus Chamados"</h2>
            <div class="overflow-x-auto">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            <th>"Descrição"</th>
                            <th>"Prioridade"</th>
                            <th>"Status"</th>
                            <th>"Criado em"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || tickets.get()
                            key=|t| (t.id, t.status.clone())
                            children=move |ticket| {
                                let preview = ticket.preview(DESCRIPTION_PREVIEW_CHARS);
                                let created = ticket.created_at.formatted();
                                let priority = ticket.priority.as_str().to_string();
                                let status = ticket.status.as_str().to_string();
                                view! {
                                    <tr
                                        class="hover cursor-pointer"
                                        title="Ver detalhes"
                                        on:click=move |_| set_selected.set(Some(ticket.clone()))
                                    >
                                        <td class="whitespace-normal font-medium">{preview}</td>
                                        <td><PriorityIndicator priority=priority /></td>
                                        <td><StatusIndicator status=status /></td>
                                        <td class="whitespace-nowrap text-sm">{created}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>

        {move || selected.get().map(|ticket| view! {
            <div
                class="fixed inset-0 bg-black/20 flex items-center justify-center z-50"
                role="dialog"
                aria-modal="true"
                on:click=move |_| set_selected.set(None)
            >
                <div
                    class="card bg-base-100 max-w-2xl w-full shadow-xl"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="card-body">
                        <h2 class="card-title">"Chamado #" {ticket.id}</h2>
                        <p class="whitespace-pre-line">{ticket.description.clone()}</p>
                        <div class="flex gap-4">
                            <PriorityIndicator priority=ticket.priority.as_str().to_string() />
                            <StatusIndicator status=ticket.status.as_str().to_string() />
                        </div>
                        <p class="text-sm">"Criado em " {ticket.created_at.formatted()}</p>
                        <div class="card-actions justify-end">
                            <button class="btn" on:click=move |_| set_selected.set(None)>"Fechar"</button>
                        </div>
                    </div>
                </div>
            </div>
        })}
    }
}
