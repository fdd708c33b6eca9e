//! # End-to-End Treasury Flows
//!
//! Donate/withdraw flows across the registry, the ledger and the treasury:
//!
//! 1. **Worked example**: 100 target, 60 + 40 donations, boundary withdrawal
//! 2. **Authorization**: lifecycle and withdrawal roles
//! 3. **Addressing**: escrow and collecting accounts are stable and distinct

#[cfg(test)]
mod tests {
    use crate::integration::support::*;
    use fr_02_treasury_ledger::TreasuryLedgerClient;
    use fr_03_fund_treasury::{FundraiserApi, FundraiserError, ReconciliationStatus};
    use shared_types::{AccountAddress, Identity};

    // =============================================================================
    // WORKED EXAMPLE
    // =============================================================================

    #[tokio::test]
    async fn test_worked_example() {
        let f = memory_fixture(false).await;
        let (d1, d2) = (donor("donor-D"), donor("donor-E"));
        let dest = Identity::from_text("payout").account();

        let fund = f
            .service
            .create_new_fund(&raiser(), 100, recipient(), 1_000)
            .await
            .unwrap();
        assert_eq!(fund.id, 0);
        assert_eq!(fund.amount, 100);
        assert_eq!(fund.total_amount_funded, 0);
        assert!(fund.active);

        f.prefund(&d1, 60).await;
        let receipt = f.service.donate(&d1, 0, 60).await.unwrap();
        assert_eq!(receipt.fund.total_amount_funded, 60);

        assert_eq!(
            f.service.withdraw_fund(&recipient(), 0, dest.into()).await,
            Err(FundraiserError::TargetNotReached {
                id: 0,
                target: 100,
                raised: 60,
            })
        );

        f.prefund(&d2, 40).await;
        f.service.donate(&d2, 0, 40).await.unwrap();
        assert_eq!(f.service.check_raised(0).await.unwrap(), 100);

        let payout = f
            .service
            .withdraw_fund(&recipient(), 0, dest.into())
            .await
            .unwrap();
        assert_eq!(payout.transfer.amount, 100);
        assert_eq!(payout.fund.available, 0);
        assert_eq!(f.balance(dest).await, 100);

        // History survives the payout
        assert_eq!(f.service.check_raised(0).await.unwrap(), 100);
        let collecting = f.service.fund_account(0).await.unwrap();
        assert_eq!(f.balance(collecting).await, 0);
        assert!(f.service.reconcile(0).await.unwrap().is_balanced());
    }

    #[tokio::test]
    async fn test_expired_fund_refuses_donations() {
        let f = memory_fixture(false).await;
        let d = donor("late");
        f.prefund(&d, 10).await;
        let fund = f
            .service
            .create_new_fund(&raiser(), 100, recipient(), 500)
            .await
            .unwrap();

        f.clock.advance(501);
        assert!(matches!(
            f.service.donate(&d, fund.id, 10).await,
            Err(FundraiserError::InvalidState { .. })
        ));

        // Extending the duration measures from creation, not from now
        f.service
            .update_duration(&raiser(), fund.id, 1_000)
            .await
            .unwrap();
        assert!(f.service.donate(&d, fund.id, 10).await.is_ok());
        assert_eq!(f.service.check_raised(fund.id).await.unwrap(), 10);
    }

    // =============================================================================
    // AUTHORIZATION
    // =============================================================================

    #[tokio::test]
    async fn test_roles_are_enforced_before_side_effects() {
        let f = memory_fixture(false).await;
        let fund = f
            .service
            .create_new_fund(&raiser(), 10, recipient(), 1_000)
            .await
            .unwrap();
        let d = donor("d");
        f.prefund(&d, 10).await;
        f.service.donate(&d, fund.id, 10).await.unwrap();
        let collecting = f.service.fund_account(fund.id).await.unwrap();

        for intruder in [owner(), d.clone(), recipient()] {
            assert!(matches!(
                f.service.pause_fund(&intruder, fund.id).await,
                Err(FundraiserError::Unauthorized { .. })
            ));
        }
        for intruder in [owner(), d.clone(), raiser()] {
            assert!(matches!(
                f.service
                    .withdraw_fund(&intruder, fund.id, intruder.account().into())
                    .await,
                Err(FundraiserError::Unauthorized { .. })
            ));
        }

        assert_eq!(f.balance(collecting).await, 10);
        assert!(f.service.get_fund(fund.id).await.unwrap().active);
    }

    #[tokio::test]
    async fn test_paused_fund_still_pays_out() {
        let f = memory_fixture(false).await;
        let fund = f
            .service
            .create_new_fund(&raiser(), 5, recipient(), 1_000)
            .await
            .unwrap();
        let d = donor("d");
        f.prefund(&d, 5).await;
        f.service.donate(&d, fund.id, 5).await.unwrap();

        f.service.pause_fund(&raiser(), fund.id).await.unwrap();
        let receipt = f
            .service
            .withdraw_fund(&recipient(), fund.id, recipient().account().into())
            .await
            .unwrap();
        assert_eq!(receipt.transfer.amount, 5);
    }

    // =============================================================================
    // ADDRESSING
    // =============================================================================

    #[tokio::test]
    async fn test_escrow_and_collecting_accounts() {
        let f = memory_fixture(false).await;
        let a = f.service.get_address_to_deposit(&donor("a")).await.unwrap();
        let a_again = f.service.get_address_to_deposit(&donor("a")).await.unwrap();
        let b = f.service.get_address_to_deposit(&donor("b")).await.unwrap();
        assert_eq!(a, a_again);
        assert_ne!(a, b);

        for _ in 0..2 {
            f.service
                .create_new_fund(&raiser(), 1, recipient(), 1)
                .await
                .unwrap();
        }
        let f0 = f.service.fund_account(0).await.unwrap();
        let f1 = f.service.fund_account(1).await.unwrap();
        assert_ne!(f0, f1);
        assert_ne!(f0, a);
        assert_eq!(AccountAddress::from_hex(&f0.to_hex()).unwrap(), f0);
    }

    #[tokio::test]
    async fn test_stray_deposit_shows_in_reconciliation() {
        let f = memory_fixture(false).await;
        let fund = f
            .service
            .create_new_fund(&raiser(), 50, recipient(), 1_000)
            .await
            .unwrap();
        let collecting = f.service.fund_account(fund.id).await.unwrap();

        // Value sent straight to the collecting account bypasses accounting
        f.token
            .transfer(f.service.deriver().treasury_account(), collecting, 7)
            .await
            .unwrap();

        let report = f.service.reconcile(fund.id).await.unwrap();
        assert_eq!(report.status, ReconciliationStatus::LedgerSurplus(7));
        assert_eq!(f.service.check_raised(fund.id).await.unwrap(), 0);
    }
}
