use domain::{
    CPF_REQUIRED, DomainError, DomainErrorKind, DomainResult, domain_error,
    find_by_cpf_failed_message, models::Person, repositories::PersonRepository,
};

/// 人ユースケース
pub struct PersonUseCase<R>
where
    R: PersonRepository,
{
    /// 人リポジトリ
    pub person_repository: R,
}

impl<R> PersonUseCase<R>
where
    R: PersonRepository,
{
    /// 人ユースケースを作成する。
    pub fn new(person_repository: R) -> Self {
        Self { person_repository }
    }

    /// CPFで人を検索する。
    ///
    /// CPFが指定されていない場合は、リポジトリを呼び出さずにエラーを返す。
    /// 検証エラーとリポジトリのエラーは、どちらも`DomainErrorKind::Business`の
    /// エラーに包んで返す。
    ///
    /// # 引数
    ///
    /// * `cpf` - CPF
    ///
    /// # 戻り値
    ///
    /// リポジトリが返した人のリスト
    #[tracing::instrument(skip(self))]
    pub async fn find_by_cpf(&self, cpf: Option<&str>) -> DomainResult<Vec<Person>> {
        let Some(cpf) = cpf else {
            let e = domain_error(DomainErrorKind::Validation, CPF_REQUIRED);
            tracing::error!(error = %e, "cpf is missing");
            return Err(DomainError::with_source(
                DomainErrorKind::Business,
                find_by_cpf_failed_message(None),
                e,
            ));
        };

        match self.person_repository.find_by_cpf(cpf).await {
            Ok(people) => {
                tracing::debug!(count = people.len(), "people found");
                Ok(people)
            }
            Err(e) => {
                tracing::error!(cpf, error = %e, "failed to find people by cpf");
                Err(DomainError::with_source(
                    DomainErrorKind::Business,
                    find_by_cpf_failed_message(Some(cpf)),
                    e,
                ))
            }
        }
    }
}
