use std::collections::HashMap;

use tracing::{debug, info};

use crate::domain::{
    Account, AccountId, Favorite, IdGenerator, Money, Payment, PaymentCategory, PaymentStatus,
    UuidGenerator,
};
use crate::storage::Repository;

use super::{CategoryReport, Result, WalletError};

/// Application service owning the whole ledger state.
/// This is the primary interface for any client of the wallet.
///
/// The service is single-writer: every mutating operation takes `&mut self`,
/// so sharing it across threads requires an external lock.
pub struct WalletService {
    repo: Repository,
    ids: Box<dyn IdGenerator + Send>,
}

impl Default for WalletService {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletService {
    /// Create an empty ledger that identifies payments and favorites by UUID.
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }

    /// Create an empty ledger using the given id generator.
    pub fn with_id_generator(ids: impl IdGenerator + Send + 'static) -> Self {
        Self::with_repository(Repository::new(), ids)
    }

    /// Create a ledger on top of an existing repository.
    pub fn with_repository(repo: Repository, ids: impl IdGenerator + Send + 'static) -> Self {
        Self {
            repo,
            ids: Box::new(ids),
        }
    }

    // ========================
    // Account operations
    // ========================

    /// Register a new account with a zero balance.
    pub fn register_account(&mut self, phone: impl Into<String>) -> Result<Account> {
        let phone = phone.into();
        if self.repo.get_account_by_phone(&phone).is_some() {
            return Err(WalletError::PhoneAlreadyRegistered(phone));
        }

        let account = Account::new(self.repo.next_account_id(), phone);
        self.repo.save_account(account.clone())?;

        info!(account_id = account.id, phone = %account.phone, "account registered");
        Ok(account)
    }

    /// Add funds to an account.
    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> Result<()> {
        if amount <= 0 {
            return Err(WalletError::AmountMustBePositive(amount));
        }

        let account = self
            .repo
            .get_account_mut(account_id)
            .ok_or(WalletError::AccountNotFound(account_id))?;

        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or(WalletError::BalanceOverflow(account_id))?;

        debug!(account_id, amount, balance = account.balance, "deposit applied");
        Ok(())
    }

    pub fn find_account_by_id(&self, account_id: AccountId) -> Result<&Account> {
        self.repo
            .get_account(account_id)
            .ok_or(WalletError::AccountNotFound(account_id))
    }

    /// All accounts in registration order.
    pub fn accounts(&self) -> &[Account] {
        self.repo.list_accounts()
    }

    // ========================
    // Payment operations
    // ========================

    /// Debit an account and record an in-progress payment.
    /// Every spending path (repeat, favorites) goes through here.
    pub fn pay(
        &mut self,
        account_id: AccountId,
        amount: Money,
        category: impl Into<PaymentCategory>,
    ) -> Result<Payment> {
        if amount <= 0 {
            return Err(WalletError::AmountMustBePositive(amount));
        }

        let account = self.find_account_by_id(account_id)?;
        if !account.can_afford(amount) {
            return Err(WalletError::NotEnoughBalance {
                account_id,
                balance: account.balance,
                required: amount,
            });
        }

        let payment = Payment::new(self.ids.next_id(), account_id, amount, category);
        let balance = self.repo.record_payment(payment.clone())?;

        info!(
            payment_id = %payment.id,
            account_id,
            amount,
            category = %payment.category,
            balance,
            "payment created"
        );
        Ok(payment)
    }

    pub fn find_payment_by_id(&self, payment_id: &str) -> Result<&Payment> {
        self.repo
            .get_payment(payment_id)
            .ok_or_else(|| WalletError::PaymentNotFound(payment_id.to_string()))
    }

    /// All payments in creation order.
    pub fn payments(&self) -> &[Payment] {
        self.repo.list_payments()
    }

    /// Mark a payment as failed and return its amount to the account.
    ///
    /// Rejecting an already failed payment refunds it again; callers that
    /// need at-most-once refunds check `Payment::is_failed` first.
    pub fn reject(&mut self, payment_id: &str) -> Result<()> {
        let (payment, account) = self.repo.get_payment_with_account_mut(payment_id)?;

        let refunded = account
            .balance
            .checked_add(payment.amount)
            .ok_or(WalletError::BalanceOverflow(account.id))?;
        account.balance = refunded;
        payment.status = PaymentStatus::Fail;

        info!(
            payment_id,
            account_id = account.id,
            amount = payment.amount,
            balance = refunded,
            "payment rejected"
        );
        Ok(())
    }

    /// Pay again with the account, amount and category of an earlier payment.
    /// The original payment is left untouched.
    pub fn repeat(&mut self, payment_id: &str) -> Result<Payment> {
        let (account_id, amount, category) = {
            let payment = self.find_payment_by_id(payment_id)?;
            (payment.account_id, payment.amount, payment.category.clone())
        };

        let payment = self.pay(account_id, amount, category)?;
        debug!(original_id = payment_id, payment_id = %payment.id, "payment repeated");
        Ok(payment)
    }

    // ========================
    // Favorite operations
    // ========================

    pub fn find_favorite_by_id(&self, favorite_id: &str) -> Result<&Favorite> {
        self.repo
            .get_favorite(favorite_id)
            .ok_or_else(|| WalletError::FavoriteNotFound(favorite_id.to_string()))
    }

    /// All favorites in creation order.
    pub fn favorites(&self) -> &[Favorite] {
        self.repo.list_favorites()
    }

    /// Save a payment as a named favorite for later reuse.
    pub fn favorite_payment(
        &mut self,
        payment_id: &str,
        name: impl Into<String>,
    ) -> Result<Favorite> {
        let payment = self
            .find_payment_by_id(payment_id)
            .map_err(|_| WalletError::PaymentNotFound(payment_id.to_string()))?
            .clone();

        let favorite = Favorite::from_payment(self.ids.next_id(), &payment, name);
        self.repo.save_favorite(favorite.clone())?;

        info!(
            favorite_id = %favorite.id,
            payment_id,
            name = %favorite.name,
            "favorite created"
        );
        Ok(favorite)
    }

    /// Create a new payment from a favorite's stored account, amount and category.
    pub fn pay_from_favorite(&mut self, favorite_id: &str) -> Result<Payment> {
        let (account_id, amount, category) = {
            let favorite = self.find_favorite_by_id(favorite_id)?;
            (favorite.account_id, favorite.amount, favorite.category.clone())
        };

        let payment = self.pay(account_id, amount, category)?;
        debug!(favorite_id, payment_id = %payment.id, "paid from favorite");
        Ok(payment)
    }

    // ========================
    // Reporting
    // ========================

    /// Payments made from an account, oldest first.
    pub fn account_history(&self, account_id: AccountId) -> Result<Vec<Payment>> {
        self.find_account_by_id(account_id)?;
        Ok(self
            .repo
            .list_payments_for_account(account_id)
            .cloned()
            .collect())
    }

    /// Total amount spent by an account, ignoring failed payments.
    /// Fails with `TotalOverflow` if the sum does not fit in `Money`.
    pub fn total_spent(&self, account_id: AccountId) -> Result<Money> {
        self.find_account_by_id(account_id)?;
        self.repo
            .list_payments_for_account(account_id)
            .filter(|p| !p.is_failed())
            .try_fold(0, |total: Money, p| total.checked_add(p.amount))
            .ok_or(WalletError::TotalOverflow)
    }

    /// Spending per category for one account, or for the whole ledger when
    /// `account_id` is `None`. Failed payments are excluded.
    pub fn category_report(&self, account_id: Option<AccountId>) -> Result<CategoryReport> {
        if let Some(id) = account_id {
            self.find_account_by_id(id)?;
        }

        let mut aggregates: HashMap<&str, (Money, i64)> = HashMap::new();
        for payment in self.repo.list_payments() {
            if payment.is_failed() || account_id.is_some_and(|id| payment.account_id != id) {
                continue;
            }
            let entry = aggregates.entry(payment.category.as_str()).or_insert((0, 0));
            entry.0 = entry
                .0
                .checked_add(payment.amount)
                .ok_or(WalletError::TotalOverflow)?;
            entry.1 += 1;
        }

        CategoryReport::from_aggregates(aggregates.into_iter().map(
            |(category, (total, count))| (category.to_string(), total, count),
        ))
    }
}
