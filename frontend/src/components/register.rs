use crate::auth::use_api;
use gloo_timers::future::TimeoutFuture;
use helpdesk::AppRoute;
use helpdesk::auth::{REGISTER_REDIRECT_DELAY, REGISTER_SUCCEEDED, register, register_failure_message};
use helpdesk::validation::{FieldHints, validate_credentials};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<&'static str>::None);

    // 字段提示只在输入后显示
    let hints = Memo::new(move |_| FieldHints::check(&email.get(), &password.get()));
    let email_hint = move || hints.get().email.filter(|_| !email.with(String::is_empty));
    let password_hint = move || hints.get().password.filter(|_| !password.with(String::is_empty));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_success_msg.set(None);

        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(e) => {
                set_error_msg.set(Some(register_failure_message(&e)));
                return;
            }
        };

        set_loading.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = register(&api, &credentials).await;
            set_loading.set(false);
            match result {
                Ok(()) => {
                    log::info!("account created for {}", credentials.email);
                    set_success_msg.set(Some(REGISTER_SUCCEEDED));
                    set_email.set(String::new());
                    set_password.set(String::new());
                    TimeoutFuture::new(REGISTER_REDIRECT_DELAY.as_millis() as u32).await;
                    navigate(AppRoute::Login.to_path(), Default::default());
                }
                Err(e) => {
                    log::warn!("{}", e);
                    set_error_msg.set(Some(register_failure_message(&e)));
                }
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold text-center mb-4">"Crie sua conta"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <Show when=move || success_msg.get().is_some()>
                            <div role="alert" class="alert alert-success text-sm py-2">
                                <span>{move || success_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="exemplo@seuemail.com"
                                autocomplete="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                prop:disabled=loading
                                class=move || if email_hint().is_some() {
                                    "input input-bordered input-error"
                                } else {
                                    "input input-bordered"
                                }
                                required
                            />
                            {move || email_hint().map(|hint| view! {
                                <p class="mt-1 text-error text-xs">{hint}</p>
                            })}
                        </div>

                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Senha"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                autocomplete="new-password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                prop:disabled=loading
                                class=move || if password_hint().is_some() {
                                    "input input-bordered input-error"
                                } else {
                                    "input input-bordered"
                                }
                                required
                            />
                            {move || password_hint().map(|hint| view! {
                                <p class="mt-1 text-error text-xs">{hint}</p>
                            })}
                        </div>

                        <div class="form-control mt-6">
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled=move || loading.get() || !hints.get().is_clean()
                            >
                                {move || if loading.get() { "Registrando..." } else { "Registrar" }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "Já tem conta? "
                            <a class="link link-primary" href=AppRoute::Login.to_path()>"Faça login"</a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
