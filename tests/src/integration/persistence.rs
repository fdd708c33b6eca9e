//! # Restarts
//!
//! Fund records and the id counter live in the store, so a new service over
//! the same file continues where the last one stopped.

#[cfg(test)]
mod tests {
    use crate::integration::support::*;
    use fr_01_fund_registry::{FileBackedKVStore, FundRegistry, KVStoreError};
    use fr_03_fund_treasury::FundraiserApi;
    use std::path::Path;

    fn open(path: &Path) -> FundRegistry<FileBackedKVStore> {
        FundRegistry::new(FileBackedKVStore::open(path).unwrap())
    }

    #[tokio::test]
    async fn test_ids_are_never_reused_across_restarts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("funds.db");

        {
            let f = local_fixture(open(&path), false).await;
            for target in [10, 20, 30] {
                f.service
                    .create_new_fund(&raiser(), target, recipient(), 1_000)
                    .await
                    .unwrap();
            }
            let d = donor("d");
            f.prefund(&d, 15).await;
            f.service.donate(&d, 1, 15).await.unwrap();
        }

        let f = local_fixture(open(&path), false).await;
        assert_eq!(f.service.config().await.unwrap().next_id, 3);

        let funds = f.service.list_funds().await.unwrap();
        let targets: Vec<_> = funds.iter().map(|fund| fund.amount).collect();
        assert_eq!(targets, vec![10, 20, 30]);
        assert_eq!(funds[1].total_amount_funded, 15);

        let next = f
            .service
            .create_new_fund(&raiser(), 40, recipient(), 1_000)
            .await
            .unwrap();
        assert_eq!(next.id, 3);
    }

    #[test]
    fn test_store_is_exclusive_while_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("funds.db");

        let _held = FileBackedKVStore::open(&path).unwrap();
        assert!(matches!(
            FileBackedKVStore::open(&path),
            Err(KVStoreError::Locked { .. })
        ));
    }
}
