use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccountId, Money};

/// Opaque payment identifier produced by an [`IdGenerator`](super::IdGenerator).
pub type PaymentId = String;

/// Free-form tag describing what a payment was for (e.g. "auto", "food").
pub type PaymentCategory = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    /// Settled. No operation currently moves a payment here.
    Ok,
    /// Rejected; the amount was returned to the account
    Fail,
    /// Debited and awaiting settlement
    InProgress,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Ok => "OK",
            PaymentStatus::Fail => "FAIL",
            PaymentStatus::InProgress => "INPROGRESS",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "OK" => Some(PaymentStatus::Ok),
            "FAIL" => Some(PaymentStatus::Fail),
            "INPROGRESS" => Some(PaymentStatus::InProgress),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single debit against an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub account_id: AccountId,
    /// Amount debited, always positive
    pub amount: Money,
    pub category: PaymentCategory,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Create a new in-progress payment. Callers validate the amount first.
    pub fn new(
        id: impl Into<PaymentId>,
        account_id: AccountId,
        amount: Money,
        category: impl Into<PaymentCategory>,
    ) -> Self {
        Self {
            id: id.into(),
            account_id,
            amount,
            category: category.into(),
            status: PaymentStatus::InProgress,
            created_at: Utc::now(),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == PaymentStatus::Fail
    }
}
