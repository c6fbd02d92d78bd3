use crate::auth::{Store, use_api, use_auth};
use crate::components::ticket_admin_list::TicketAdminList;
use crate::components::ticket_form::TicketForm;
use crate::components::ticket_list::TicketList;
use crate::web::{BrowserStorage, GlooHttpClient};
use helpdesk::Session;
use helpdesk::tickets::{PageOutcome, TicketBoard, TicketsController, TicketsView};
use helpdesk_shared::TicketStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use std::rc::Rc;
use std::time::Duration;

type Controller = TicketsController<GlooHttpClient, BrowserStorage>;

/// 非重试类提示在此时长后自动消失
const BANNER_TIMEOUT: Duration = Duration::from_secs(3);

#[component]
pub fn TicketsPage() -> impl IntoView {
    let auth = use_auth();
    let store: Store = auth.store();
    let controller = StoredValue::new_local(Rc::new(Controller::new(use_api(), store)));
    let (view_state, set_view_state) = signal(TicketsView::default());

    // 跳转统一经由信号，回调里只持有可复制的句柄
    let (redirect, set_redirect) = signal(Option::<String>::None);
    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(path) = redirect.get() {
            navigate(&path, NavigateOptions::default());
        }
    });

    // 同步控制器视图，必要时跳转
    let settle = move |outcome: PageOutcome| {
        set_view_state.set(controller.with_value(|c| c.view()));
        if let Some(path) = outcome.redirect_path() {
            set_redirect.set(Some(path));
        }
    };

    // 挂载时及会话变化时重新加载；会话清空后的跳转交给路由守卫
    Effect::new(move |_| {
        if !auth.session.with(Session::is_authenticated) {
            return;
        }
        let c = controller.get_value();
        set_view_state.update(|v| v.loading = true);
        spawn_local(async move {
            settle(c.mount().await);
        });
    });

    let refresh = move || {
        let c = controller.get_value();
        spawn_local(async move {
            settle(c.refresh().await);
        });
    };

    let on_status_change = Callback::new(move |(id, current): (i64, TicketStatus)| {
        let c = controller.get_value();
        spawn_local(async move {
            settle(c.change_status(id, &current).await);
        });
    });

    let on_create = Callback::new(move |()| refresh());

    let on_logout = move |_| settle(controller.with_value(|c| c.logout()));

    // 只清除计时开始时的那条提示；期间被替换则保留新提示
    let dismiss = move |id: u64| {
        let removed = controller
            .try_with_value(|c| c.dismiss_banner(id))
            .unwrap_or(false);
        if removed {
            set_view_state.try_update(|v| v.banner = None);
        }
    };

    // 3 秒后清除非重试提示
    Effect::new(move |_| {
        let transient = view_state.with(|v| v.banner.as_ref().filter(|b| !b.retry).map(|b| b.id));
        if let Some(id) = transient {
            set_timeout(move || dismiss(id), BANNER_TIMEOUT);
        }
    });

    let is_admin = move || view_state.with(|v| v.is_admin);
    let user_tickets = Signal::derive(move || match view_state.with(|v| v.board.clone()) {
        TicketBoard::User(tickets) => tickets,
        TicketBoard::Admin(_) => Vec::new(),
    });
    let admin_tickets = Signal::derive(move || match view_state.with(|v| v.board.clone()) {
        TicketBoard::Admin(tickets) => tickets,
        TicketBoard::User(_) => Vec::new(),
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <header class="max-w-7xl mx-auto w-full flex flex-col sm:flex-row justify-between items-center gap-4 mb-10">
                <h1 class="text-4xl font-extrabold select-none">"Chamados"</h1>
                <div class="flex flex-col sm:flex-row sm:items-center gap-3 sm:gap-6">
                    {move || view_state.with(|v| v.display_name.clone()).map(|name| view! {
                        <p class="font-semibold whitespace-nowrap">
                            "Logado como "
                            <span class="text-primary underline">{name}</span>
                            <Show when=is_admin>
                                <span class="badge badge-primary ml-3 uppercase">"Admin"</span>
                            </Show>
                        </p>
                    })}
                    <button class="btn btn-error" aria-label="Sair do sistema" on:click=on_logout>
                        "Sair"
                    </button>
                </div>
            </header>

            <main class="max-w-7xl mx-auto w-full flex flex-col lg:grid lg:grid-cols-3 gap-8">
                {move || view_state.with(|v| v.banner.clone()).map(|banner| view! {
                    <div role="alert" class="alert alert-error lg:col-span-3">
                        <span>{banner.message}</span>
                        {banner.retry.then(|| view! {
                            <button class="btn btn-sm" on:click=move |_| refresh()>
                                "Tentar novamente"
                            </button>
                        })}
                    </div>
                })}

                <Show when=move || view_state.with(|v| v.loading)>
                    <div class="lg:col-span-3 flex justify-center">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                </Show>

                <Show
                    when=is_admin
                    fallback=move || view! {
                        <section class="lg:col-span-1 card bg-base-100 shadow-md">
                            <TicketForm on_create=on_create />
                        </section>
                        <section class="lg:col-span-2 card bg-base-100 shadow-md p-6">
                            <TicketList tickets=user_tickets />
                        </section>
                    }
                >
                    <section class="lg:col-span-3 card bg-base-100 shadow-md p-6">
                        <TicketAdminList tickets=admin_tickets on_status_change=on_status_change />
                    </section>
                </Show>
            </main>
        </div>
    }
}
