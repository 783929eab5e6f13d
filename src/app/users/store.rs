//! 内存用户存储
//!
//! 所有记录保存在一个按插入顺序排列的 `Vec` 中，由读写锁保护。
//! id 来自单调递增的计数器，删除记录后不会复用。

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::model::{User, UserPayload};

/// 存储层错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("用户 {0} 不存在")]
    NotFound(i64),
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    last_id: i64,
}

impl Inner {
    fn position(&self, id: i64) -> Result<usize, StoreError> {
        self.users
            .iter()
            .position(|user| user.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

/// 共享的用户集合句柄，克隆后指向同一份数据
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<Inner>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 分配下一个 id 并追加记录
    pub fn create(&self, payload: UserPayload) -> User {
        let mut inner = self.inner.write();
        inner.last_id += 1;
        let user = User::from_payload(inner.last_id, payload);
        inner.users.push(user.clone());
        debug!("创建用户 {}，当前共 {} 个", user.id, inner.users.len());
        user
    }

    /// 按插入顺序返回全部记录
    pub fn list(&self) -> Vec<User> {
        self.inner.read().users.clone()
    }

    pub fn get(&self, id: i64) -> Result<User, StoreError> {
        let inner = self.inner.read();
        let index = inner.position(id)?;
        Ok(inner.users[index].clone())
    }

    /// 覆盖除 id 外的全部字段
    pub fn update(&self, id: i64, payload: UserPayload) -> Result<User, StoreError> {
        let mut inner = self.inner.write();
        let index = inner.position(id)?;
        let user = &mut inner.users[index];
        user.apply(payload);
        debug!("更新用户 {}", id);
        Ok(user.clone())
    }

    pub fn delete(&self, id: i64) -> Result<User, StoreError> {
        let mut inner = self.inner.write();
        let index = inner.position(id)?;
        let removed = inner.users.remove(index);
        debug!("删除用户 {}，剩余 {} 个", id, inner.users.len());
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.inner.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
