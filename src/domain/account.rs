use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Money;

pub type AccountId = i64;

/// Phone number identifying the owner of an account.
pub type Phone = String;

/// A registered wallet. Balances are never allowed to go negative through the
/// service; mutation happens only via deposits, payments and rejections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub phone: Phone,
    /// Current balance in minor units
    pub balance: Money,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create an empty account. The id is assigned by the repository.
    pub fn new(id: AccountId, phone: impl Into<Phone>) -> Self {
        Self {
            id,
            phone: phone.into(),
            balance: 0,
            created_at: Utc::now(),
        }
    }

    /// Returns true if the balance covers `amount` without going below zero.
    pub fn can_afford(&self, amount: Money) -> bool {
        self.balance >= amount
    }
}
