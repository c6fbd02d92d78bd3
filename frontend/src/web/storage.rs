//! localStorage 持久化
//!
//! 通过 `gloo-storage` 的原始 `Storage` 句柄读写，值按原样保存
//! （不做 JSON 编码），与既有的 `token` / `is_admin` / `User` 键格式一致。

use gloo_storage::{LocalStorage, Storage};
use helpdesk::error::{HelpdeskError, HelpdeskResult};
use helpdesk::storage::SessionStorage;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> HelpdeskResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| HelpdeskError::storage(format!("{:?}", e)).in_op_with("storage.set", key))
    }

    fn delete(&self, key: &str) -> HelpdeskResult<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| {
                HelpdeskError::storage(format!("{:?}", e)).in_op_with("storage.delete", key)
            })
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use helpdesk::SessionStore;
    use helpdesk::session::{IS_ADMIN_KEY, TOKEN_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn values_are_stored_verbatim() {
        let storage = BrowserStorage;
        storage.set("helpdesk_test_key", "true").unwrap();
        assert_eq!(storage.get("helpdesk_test_key").as_deref(), Some("true"));
        storage.delete("helpdesk_test_key").unwrap();
        assert_eq!(storage.get("helpdesk_test_key"), None);
    }

    #[wasm_bindgen_test]
    fn session_survives_a_new_store() {
        SessionStore::new(BrowserStorage).set("T", true);

        let restored = SessionStore::new(BrowserStorage);
        assert_eq!(restored.get().token(), Some("T"));
        assert!(restored.get().is_admin());
        assert_eq!(BrowserStorage.get(IS_ADMIN_KEY).as_deref(), Some("true"));

        restored.clear();
        assert_eq!(BrowserStorage.get(TOKEN_KEY), None);
    }
}
