//! 路由守卫
//!
//! 只改善导航体验：API 仍会拒绝没有有效令牌的请求。

use crate::auth::use_auth;
use helpdesk::RouteGuard;
use leptos::prelude::*;
use leptos_router::components::Redirect;

fn guarded(guard: RouteGuard, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated();

    // 目标在切换到 fallback 时才计算：被强制登出的会话带 `?expired=1`
    view! {
        <Show
            when=move || guard.admits(is_authenticated.get())
            fallback=move || {
                let path = auth.session.with_untracked(|s| guard.redirect_path(s));
                view! { <Redirect path=path /> }
            }
        >
            {children()}
        </Show>
    }
}

/// 仅未登录访问（登录、注册页），已登录则跳转到 `/tickets`
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    guarded(RouteGuard::Public, children)
}

/// 仅已登录访问，未登录则跳转到 `/login`
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    guarded(RouteGuard::Private, children)
}
