use crate::models::Person;

/// 人リポジトリ
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait PersonRepository: Send + Sync {
    /// CPFで人を検索する。
    ///
    /// # 引数
    ///
    /// * `cpf` - CPF
    ///
    /// # 戻り値
    ///
    /// CPFに一致する人のリスト。リポジトリが返した順序を保つ。
    /// 該当する人が存在しない場合は空のリストを返す。
    async fn find_by_cpf(&self, cpf: &str) -> anyhow::Result<Vec<Person>>;
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;

    #[tokio::test]
    async fn mock_person_repository_returns_configured_people() {
        let person = Person::new("jean", "123456789", "dev", 20);
        let expected = vec![person.clone()];
        let mut repository = MockPersonRepository::new();
        repository
            .expect_find_by_cpf()
            .with(eq("123456789"))
            .times(1)
            .returning(move |_| Ok(vec![person.clone()]));

        let people = repository.find_by_cpf("123456789").await.unwrap();
        assert_eq!(people, expected);
    }
}
