mod common;

use anyhow::Result;
use common::{TestAccount, add_account, test_service};
use wallet::WalletError;

#[test]
fn test_account_history() -> Result<()> {
    let mut service = test_service();
    let data = TestAccount {
        phone: "992000000001",
        balance: 10_000,
        payments: vec![(1000, "auto"), (2000, "food"), (500, "auto")],
    };
    let (account, payments) = add_account(&mut service, &data)?;
    let (other, _) = add_account(&mut service, &TestAccount::standard())?;

    let history = service.account_history(account.id)?;
    assert_eq!(history, payments);

    assert_eq!(service.account_history(other.id)?.len(), 1);
    assert_eq!(
        service.account_history(545).unwrap_err(),
        WalletError::AccountNotFound(545)
    );

    Ok(())
}

#[test]
fn test_account_history_empty() -> Result<()> {
    let mut service = test_service();
    let account = service.register_account("992000000001")?;

    assert!(service.account_history(account.id)?.is_empty());
    assert_eq!(service.total_spent(account.id)?, 0);

    Ok(())
}

#[test]
fn test_total_spent_ignores_rejected() -> Result<()> {
    let mut service = test_service();
    let data = TestAccount {
        phone: "992000000001",
        balance: 10_000,
        payments: vec![(1000, "auto"), (2000, "food"), (500, "auto")],
    };
    let (account, payments) = add_account(&mut service, &data)?;

    assert_eq!(service.total_spent(account.id)?, 3500);

    service.reject(&payments[1].id)?;
    assert_eq!(service.total_spent(account.id)?, 1500);

    Ok(())
}

#[test]
fn test_category_report_for_account() -> Result<()> {
    let mut service = test_service();
    let data = TestAccount {
        phone: "992000000001",
        balance: 10_000,
        payments: vec![(1000, "auto"), (1000, "food"), (2000, "auto")],
    };
    let (account, _) = add_account(&mut service, &data)?;
    add_account(&mut service, &TestAccount::standard())?;

    let report = service.category_report(Some(account.id))?;

    assert_eq!(report.total, 4000);
    assert_eq!(report.categories.len(), 2);
    assert_eq!(report.categories[0].category, "auto");
    assert_eq!(report.categories[0].total, 3000);
    assert_eq!(report.categories[0].count, 2);
    assert_eq!(report.categories[0].average, 1500);
    assert!((report.categories[0].percentage - 75.0).abs() < 1e-9);
    assert_eq!(report.categories[1].category, "food");

    Ok(())
}

#[test]
fn test_category_report_for_ledger() -> Result<()> {
    let mut service = test_service();
    let data = TestAccount {
        phone: "992000000001",
        balance: 10_000,
        payments: vec![(1000, "auto"), (1000, "food")],
    };
    let (_, payments) = add_account(&mut service, &data)?;
    add_account(&mut service, &TestAccount::standard())?;

    service.reject(&payments[1].id)?;
    let report = service.category_report(None)?;

    assert_eq!(report.total, 1_000_00 + 1000);
    assert_eq!(report.categories.len(), 1, "Rejected food payment is excluded");
    assert_eq!(report.categories[0].category, "auto");
    assert_eq!(report.categories[0].count, 2);

    assert_eq!(
        service.category_report(Some(545)).unwrap_err(),
        WalletError::AccountNotFound(545)
    );

    Ok(())
}

#[test]
fn test_category_report_empty_ledger() -> Result<()> {
    let service = test_service();
    let report = service.category_report(None)?;

    assert!(report.categories.is_empty());
    assert_eq!(report.total, 0);

    Ok(())
}

#[test]
fn test_report_serializes() -> Result<()> {
    let mut service = test_service();
    add_account(&mut service, &TestAccount::standard())?;

    let json = serde_json::to_value(service.category_report(None)?)?;
    assert_eq!(json["total"], 1_000_00);
    assert_eq!(json["categories"][0]["category"], "auto");

    let payment = serde_json::to_value(&service.payments()[0])?;
    assert_eq!(payment["status"], "INPROGRESS");

    Ok(())
}

/// Two maximal payments whose sum does not fit in `Money`.
fn overflowing_service() -> Result<wallet::WalletService> {
    let mut service = test_service();
    let account = service.register_account("992000000001")?;
    for _ in 0..2 {
        service.deposit(account.id, i64::MAX)?;
        service.pay(account.id, i64::MAX, "auto")?;
    }
    Ok(service)
}

#[test]
fn test_total_spent_overflow() -> Result<()> {
    let service = overflowing_service()?;

    assert_eq!(service.total_spent(1), Err(WalletError::TotalOverflow));

    Ok(())
}

#[test]
fn test_category_report_overflow() -> Result<()> {
    let service = overflowing_service()?;

    assert_eq!(service.category_report(None), Err(WalletError::TotalOverflow));
    assert_eq!(service.category_report(Some(1)), Err(WalletError::TotalOverflow));

    Ok(())
}
