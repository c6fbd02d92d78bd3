use crate::components::indicators::{PriorityIndicator, StatusIndicator};
use helpdesk::labels::toggle_label;
use helpdesk_shared::{AdminTicket, TicketStatus};
use leptos::prelude::*;

/// 管理员工单详情弹窗
///
/// 主操作把当前状态交给 `on_status_change`（由页面请求其反向状态），然后关闭。
#[component]
pub fn TicketModal(
    ticket: AdminTicket,
    on_close: Callback<()>,
    on_status_change: Callback<(i64, TicketStatus)>,
) -> impl IntoView {
    let AdminTicket { ticket, email } = ticket;
    let id = ticket.id;
    let status = ticket.status.clone();
    let status_text = status.as_str().to_string();
    let action_label = toggle_label(&status);
    let action_class = match status.toggled() {
        TicketStatus::Resolved => "btn btn-success",
        _ => "btn btn-warning",
    };

    view! {
        <div
            class="fixed inset-0 bg-black/20 flex items-center justify-center z-50"
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-title"
            on:click=move |_| on_close.run(())
        >
            <div
                class="card bg-base-100 max-w-2xl w-full max-h-[90vh] overflow-y-auto shadow-xl"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="card-body">
                    <button
                        class="btn btn-sm btn-circle btn-ghost absolute right-4 top-4"
                        aria-label="Fechar modal"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>

                    <h2 id="modal-title" class="card-title text-2xl">"Detalhes do Chamado #" {id}</h2>

                    <section class="space-y-4">
                        <div>
                            <h3 class="font-semibold mb-1">"Descrição"</h3>
                            <p class="whitespace-pre-line">{ticket.description.clone()}</p>
                        </div>
                        <div class="flex flex-wrap gap-4">
                            <div>
                                <h3 class="font-semibold mb-1">"Prioridade"</h3>
                                <PriorityIndicator priority=ticket.priority.as_str().to_string() />
                            </div>
                            <div>
                                <h3 class="font-semibold mb-1">"Status"</h3>
                                <StatusIndicator status=status_text />
                            </div>
                        </div>
                        <div>
                            <h3 class="font-semibold mb-1">"Criado por"</h3>
                            <p>{email}</p>
                        </div>
                        <div>
                            <h3 class="font-semibold mb-1">"Criado em"</h3>
                            <p>{ticket.created_at.formatted()}</p>
                        </div>
                    </section>

                    <div class="card-actions justify-end mt-8">
                        <button
                            class=action_class
                            on:click=move |_| {
                                on_status_change.run((id, status.clone()));
                                on_close.run(());
                            }
                        >
                            {action_label}
                        </button>
                        <button class="btn btn-outline" on:click=move |_| on_close.run(())>
                            "Fechar"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
