//! 认证模块
//!
//! 把核心的 `SessionStore` 接入响应式系统：存储的每次变更都同步到一个
//! 信号，守卫和页面头部只读这个信号。

use crate::web::{BrowserStorage, GlooHttpClient};
use helpdesk::{Session, SessionStore, TicketApi};
use leptos::prelude::*;

pub type Store = SessionStore<BrowserStorage>;
pub type Api = TicketApi<GlooHttpClient>;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 当前会话（只读）
    pub session: ReadSignal<Session>,
    store: StoredValue<Store, LocalStorage>,
}

impl AuthContext {
    pub fn new(store: Store) -> Self {
        let (session, set_session) = signal(store.get());
        store.subscribe(move |s| set_session.set(s.clone()));
        Self {
            session,
            store: StoredValue::new_local(store),
        }
    }

    /// 会话存储句柄（克隆共享同一份状态）
    pub fn store(&self) -> Store {
        self.store.get_value()
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Session::is_authenticated))
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> Api {
    use_context::<Api>().expect("TicketApi should be provided")
}
