//! Helpdesk 前端应用
//!
//! Leptos CSR 应用，业务逻辑全部在 `helpdesk` 核心 crate 中：
//! - `web`: 浏览器实现（gloo-net 传输、gloo-storage 持久化）与路由守卫
//! - `auth`: 会话上下文
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod login;
    pub mod register;
    pub mod tickets;

    mod indicators;
    mod ticket_admin_list;
    mod ticket_form;
    mod ticket_list;
    mod ticket_modal;
}

pub(crate) mod web {
    pub mod guard;
    mod http;
    mod storage;

    pub use http::GlooHttpClient;
    pub use storage::BrowserStorage;
}

use crate::auth::AuthContext;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;
use crate::components::tickets::TicketsPage;
use crate::web::guard::{PrivateRoute, PublicRoute};
use crate::web::{BrowserStorage, GlooHttpClient};

use helpdesk::{AppRoute, ClientConfig, SessionStore, TicketApi};
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    // 1. 会话存储：启动时从 localStorage 恢复
    let auth_ctx = AuthContext::new(SessionStore::new(BrowserStorage));
    provide_context(auth_ctx);

    // 2. API 客户端
    let config = ClientConfig::from_env();
    log::debug!("api base: {}", config.api_url);
    provide_context(TicketApi::new(&config, GlooHttpClient));

    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path=AppRoute::fallback().to_path() /> }>
                <Route
                    path=path!("/login")
                    view=|| view! { <PublicRoute><LoginPage /></PublicRoute> }
                />
                <Route
                    path=path!("/register")
                    view=|| view! { <PublicRoute><RegisterPage /></PublicRoute> }
                />
                <Route
                    path=path!("/tickets")
                    view=|| view! { <PrivateRoute><TicketsPage /></PrivateRoute> }
                />
            </Routes>
        </Router>
    }
}
