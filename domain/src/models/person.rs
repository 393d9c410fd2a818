use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 人
///
/// CPFで検索される。検索以外の用途で使用する属性は`attributes`に格納する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// 名前
    pub name: String,
    /// CPF（ブラジルの個人納税者番号）
    pub cpf: String,
    /// 職業
    pub profession: String,
    /// 年齢
    pub age: u8,
    /// その他の属性
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        cpf: impl Into<String>,
        profession: impl Into<String>,
        age: u8,
    ) -> Self {
        Self {
            name: name.into(),
            cpf: cpf.into(),
            profession: profession.into(),
            age,
            attributes: BTreeMap::new(),
        }
    }

    /// 属性を追加した人を返す。
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
