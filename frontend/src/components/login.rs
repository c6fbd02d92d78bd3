use crate::auth::{use_api, use_auth};
use helpdesk::AppRoute;
use helpdesk::auth::{login, login_failure_message};
use helpdesk::tickets::{EXPIRED_PARAM, SESSION_EXPIRED};
use helpdesk::validation::validate_credentials;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let navigate = use_navigate();
    let query = use_query_map();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // `?expired=1` after a forced logout
    let expired = move || query.with(|q| q.get(EXPIRED_PARAM).is_some());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(e) => {
                set_error_msg.set(Some(login_failure_message(&e)));
                return;
            }
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        let store = auth.store();
        let navigate = navigate.clone();
        spawn_local(async move {
            match login(&api, &store, &credentials).await {
                Ok(_) => navigate(AppRoute::Tickets.to_path(), Default::default()),
                Err(e) => {
                    log::warn!("{}", e);
                    set_error_msg.set(Some(login_failure_message(&e)));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Helpdesk"</h1>
                    <p class="text-base-content/70">"Entre para acompanhar seus chamados"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || expired() && error_msg.get().is_none()>
                            <div role="status" class="alert alert-warning text-sm py-2">
                                <span>{SESSION_EXPIRED}</span>
                            </div>
                        </Show>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"E-mail"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="voce@empresa.com"
                                autocomplete="username"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                prop:disabled=is_submitting
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Senha"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="Sua senha"
                                autocomplete="current-password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                prop:disabled=is_submitting
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Entrando..." }.into_any()
                                } else {
                                    "Entrar".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "Não tem conta? "
                            <a class="link link-primary" href=AppRoute::Register.to_path()>"Cadastre-se"</a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
