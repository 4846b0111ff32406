use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccountId, Money, Payment, PaymentCategory};

pub type FavoriteId = String;

/// A named template captured from a past payment.
/// The account, amount and category are copied when the favorite is created
/// and never re-read from the original payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: FavoriteId,
    pub account_id: AccountId,
    pub name: String,
    pub amount: Money,
    pub category: PaymentCategory,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn from_payment(
        id: impl Into<FavoriteId>,
        payment: &Payment,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            account_id: payment.account_id,
            name: name.into(),
            amount: payment.amount,
            category: payment.category.clone(),
            created_at: Utc::now(),
        }
    }
}
