use thiserror::Error;

use crate::domain::{AccountId, FavoriteId, Money, PaymentId, Phone, format_money};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("phone already registered: {0}")]
    PhoneAlreadyRegistered(Phone),

    #[error("amount must be greater than zero, got {}", format_money(*.0))]
    AmountMustBePositive(Money),

    #[error("account not found: {0}")]
    AccountNotFound(AccountId),

    #[error(
        "not enough balance in account {account_id}: balance {}, required {}",
        format_money(*balance),
        format_money(*required)
    )]
    NotEnoughBalance {
        account_id: AccountId,
        balance: Money,
        required: Money,
    },

    #[error("payment not found: {0}")]
    PaymentNotFound(PaymentId),

    #[error("favorite payment not found: {0}")]
    FavoriteNotFound(FavoriteId),

    #[error("balance of account {0} would overflow")]
    BalanceOverflow(AccountId),

    #[error("payment total would overflow")]
    TotalOverflow,

    #[error("account id already in use: {0}")]
    AccountAlreadyExists(AccountId),

    #[error("payment id already in use: {0}")]
    PaymentAlreadyExists(PaymentId),

    #[error("favorite id already in use: {0}")]
    FavoriteAlreadyExists(FavoriteId),
}

/// Convenience `Result` type for ledger operations.
pub type Result<T> = std::result::Result<T, WalletError>;
