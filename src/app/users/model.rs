//! 用户数据模型

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 存储中的用户记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub is_active: bool,
}

/// 创建/更新用户的请求体
///
/// 字段名不区分大小写；缺失或为 `null` 的字段取零值，
/// 未知字段（包括 `id`）被忽略。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub age: i64,
    pub is_active: bool,
}

impl<'de> Deserialize<'de> for UserPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PayloadVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = UserPayload;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a user object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<UserPayload, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut payload = UserPayload::default();

        // null 保留字段当前值
        while let Some(key) = map.next_key::<String>()? {
            match key.to_ascii_lowercase().as_str() {
                "name" => {
                    if let Some(name) = map.next_value::<Option<String>>()? {
                        payload.name = name;
                    }
                }
                "email" => {
                    if let Some(email) = map.next_value::<Option<String>>()? {
                        payload.email = email;
                    }
                }
                "age" => {
                    if let Some(age) = map.next_value::<Option<i64>>()? {
                        payload.age = age;
                    }
                }
                "isactive" => {
                    if let Some(is_active) = map.next_value::<Option<bool>>()? {
                        payload.is_active = is_active;
                    }
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(payload)
    }
}

impl User {
    pub(crate) fn from_payload(id: i64, payload: UserPayload) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
            age: payload.age,
            is_active: payload.is_active,
        }
    }

    /// 用请求体覆盖除 id 外的全部字段
    pub(crate) fn apply(&mut self, payload: UserPayload) {
        self.name = payload.name;
        self.email = payload.email;
        self.age = payload.age;
        self.is_active = payload.is_active;
    }
}
