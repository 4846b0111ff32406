// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use wallet::application::WalletService;
use wallet::domain::{Account, Money, Payment, SequentialIdGenerator};

/// Install a test-friendly subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Helper to create an empty service with random ids
pub fn test_service() -> WalletService {
    init_tracing();
    WalletService::new()
}

/// Helper to create an empty service with predictable ids ("id-1", "id-2", ...)
pub fn sequential_service() -> WalletService {
    init_tracing();
    WalletService::with_id_generator(SequentialIdGenerator::new("id"))
}

/// Test fixture: an account with a starting balance and some payments
pub struct TestAccount {
    pub phone: &'static str,
    pub balance: Money,
    pub payments: Vec<(Money, &'static str)>,
}

impl TestAccount {
    /// 10 000.00 deposited, then one 1 000.00 payment for "auto"
    pub fn standard() -> Self {
        Self {
            phone: "+992932222272",
            balance: 10_000_00,
            payments: vec![(1_000_00, "auto")],
        }
    }
}

/// Register, fund and spend from an account according to the fixture.
/// Returns the account as it stands after all payments.
pub fn add_account(
    service: &mut WalletService,
    data: &TestAccount,
) -> Result<(Account, Vec<Payment>)> {
    let account = service.register_account(data.phone)?;
    service.deposit(account.id, data.balance)?;

    let mut payments = Vec::with_capacity(data.payments.len());
    for (amount, category) in &data.payments {
        payments.push(service.pay(account.id, *amount, *category)?);
    }

    let account = service.find_account_by_id(account.id)?.clone();
    Ok((account, payments))
}
