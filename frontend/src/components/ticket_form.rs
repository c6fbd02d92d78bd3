use crate::auth::{use_api, use_auth};
use helpdesk::form::{TicketDraft, submit_failure_message, submit_ticket};
use helpdesk::labels::priority_badge;
use helpdesk_shared::Priority;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TicketForm(on_create: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let api = use_api();

    let (draft, set_draft) = signal(TicketDraft::default());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = auth.session.with_untracked(|s| s.token().map(str::to_string)) else {
            return;
        };

        let api = api.clone();
        set_submitting.set(true);
        spawn_local(async move {
            let mut current = draft.get_untracked();
            match submit_ticket(&api, &token, &mut current, || on_create.run(())).await {
                Ok(_) => {
                    set_draft.set(current);
                    set_error_msg.set(None);
                }
                Err(e) => {
                    log::warn!("{}", e);
                    set_error_msg.set(Some(submit_failure_message(&e).to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="card-body" on:submit=on_submit>
            <h2 class="card-title text-2xl justify-center mb-4">"Abrir Novo Chamado"</h2>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error text-sm py-2">
                    <strong>"Ops!"</strong>
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="form-control">
                <label class="label" for="description">
                    <span class="label-text font-semibold">"Descrição do Chamado:"</span>
                </label>
                <textarea
                    id="description"
                    rows="4"
                    placeholder="Descreva seu problema ou solicitação em detalhes..."
                    class="textarea textarea-bordered resize-y"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.description = value);
                    }
                    required
                ></textarea>
            </div>

            <div class="form-control">
                <label class="label" for="priority">
                    <span class="label-text font-semibold">"Prioridade:"</span>
                </label>
                <select
                    id="priority"
                    class="select select-bordered"
                    prop:value=move || draft.with(|d| d.priority.as_str().to_string())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.priority = Priority::parse(&value));
                    }
                >
                    {Priority::ALL
                        .iter()
                        .map(|p| {
                            let value = p.as_str().to_string();
                            let label = priority_badge(&value).text;
                            view! { <option value=value>{label}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-control mt-4">
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    "Abrir Chamado"
                </button>
            </div>
        </form>
    }
}
