use std::borrow::Cow;

pub mod models;
pub mod repositories;

/// CPFが指定されていないときのメッセージ
pub const CPF_REQUIRED: &str = "Cpf é obrigatório!";

/// ドメインエラーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainErrorKind {
    /// 検証エラー
    Validation,
    /// ビジネスエラー
    ///
    /// ユースケースが呼び出し元に返すエラーは、すべてこの種類になる。
    Business,
}

/// ドメインエラー
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct DomainError {
    /// エラーの種類
    pub kind: DomainErrorKind,
    /// メッセージ
    pub message: Cow<'static, str>,
    /// 原因となったエラー
    #[source]
    pub source: anyhow::Error,
}

impl DomainError {
    /// 原因となったエラーを保持したドメインエラーを作成する。
    ///
    /// 原因となったエラーの型とメッセージは、そのまま保持される。
    pub fn with_source<M, E>(kind: DomainErrorKind, message: M, source: E) -> Self
    where
        M: Into<Cow<'static, str>>,
        E: Into<anyhow::Error>,
    {
        Self {
            kind,
            message: message.into(),
            source: source.into(),
        }
    }
}

/// ドメイン結果
pub type DomainResult<T> = Result<T, DomainError>;

/// メッセージと同じ内容を原因に持つドメインエラーを作成する。
pub fn domain_error<M>(kind: DomainErrorKind, message: M) -> DomainError
where
    M: Into<Cow<'static, str>>,
{
    let message = message.into();
    DomainError {
        kind,
        source: anyhow::anyhow!(message.clone()),
        message,
    }
}

/// CPFで人を検索できなかったときのメッセージを返す。
///
/// CPFが指定されていない場合は`null`と表示する。
pub fn find_by_cpf_failed_message(cpf: Option<&str>) -> String {
    format!("Erro ao buscar pessoas por cpf = {}", cpf.unwrap_or("null"))
}
