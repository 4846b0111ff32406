use crate::application::{Result, WalletError};
use crate::domain::{Account, AccountId, Favorite, Money, Payment};

/// In-memory store for accounts, payments and favorites.
///
/// Collections keep insertion order and are append-only; lookups scan
/// linearly and return the first match. Inserts reject duplicate ids (and
/// duplicate phones for accounts), so a pre-populated repository keeps the
/// same uniqueness guarantees as one filled through the service.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    last_account_id: AccountId,
    accounts: Vec<Account>,
    payments: Vec<Payment>,
    favorites: Vec<Favorite>,
}

impl Repository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next account id. The first id handed out is 1, and ids
    /// always stay above every account saved so far.
    pub fn next_account_id(&mut self) -> AccountId {
        self.last_account_id += 1;
        self.last_account_id
    }

    // ========================
    // Account operations
    // ========================

    pub fn save_account(&mut self, account: Account) -> Result<()> {
        if self.get_account(account.id).is_some() {
            return Err(WalletError::AccountAlreadyExists(account.id));
        }
        if self.get_account_by_phone(&account.phone).is_some() {
            return Err(WalletError::PhoneAlreadyRegistered(account.phone));
        }

        self.last_account_id = self.last_account_id.max(account.id);
        self.accounts.push(account);
        Ok(())
    }

    pub fn get_account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn get_account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }

    pub fn get_account_by_phone(&self, phone: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.phone == phone)
    }

    pub fn list_accounts(&self) -> &[Account] {
        &self.accounts
    }

    // ========================
    // Payment operations
    // ========================

    pub fn save_payment(&mut self, payment: Payment) -> Result<()> {
        if self.get_payment(&payment.id).is_some() {
            return Err(WalletError::PaymentAlreadyExists(payment.id));
        }
        self.payments.push(payment);
        Ok(())
    }

    /// Save a new payment and debit its account in one step.
    /// Nothing changes unless the id is unused, the account exists and its
    /// balance covers the amount. Returns the account's new balance.
    pub fn record_payment(&mut self, payment: Payment) -> Result<Money> {
        if self.get_payment(&payment.id).is_some() {
            return Err(WalletError::PaymentAlreadyExists(payment.id));
        }

        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.id == payment.account_id)
            .ok_or(WalletError::AccountNotFound(payment.account_id))?;

        if !account.can_afford(payment.amount) {
            return Err(WalletError::NotEnoughBalance {
                account_id: account.id,
                balance: account.balance,
                required: payment.amount,
            });
        }

        account.balance -= payment.amount;
        let balance = account.balance;
        self.payments.push(payment);
        Ok(balance)
    }

    pub fn get_payment(&self, id: &str) -> Option<&Payment> {
        self.payments.iter().find(|p| p.id == id)
    }

    /// Resolve a payment together with the account it was debited from.
    pub fn get_payment_with_account_mut(
        &mut self,
        payment_id: &str,
    ) -> Result<(&mut Payment, &mut Account)> {
        let payment = self
            .payments
            .iter_mut()
            .find(|p| p.id == payment_id)
            .ok_or_else(|| WalletError::PaymentNotFound(payment_id.to_string()))?;

        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.id == payment.account_id)
            .ok_or(WalletError::AccountNotFound(payment.account_id))?;

        Ok((payment, account))
    }

    pub fn list_payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Payments belonging to one account, in creation order.
    pub fn list_payments_for_account(
        &self,
        account_id: AccountId,
    ) -> impl Iterator<Item = &Payment> {
        self.payments
            .iter()
            .filter(move |p| p.account_id == account_id)
    }

    // ========================
    // Favorite operations
    // ========================

    pub fn save_favorite(&mut self, favorite: Favorite) -> Result<()> {
        if self.get_favorite(&favorite.id).is_some() {
            return Err(WalletError::FavoriteAlreadyExists(favorite.id));
        }
        self.favorites.push(favorite);
        Ok(())
    }

    pub fn get_favorite(&self, id: &str) -> Option<&Favorite> {
        self.favorites.iter().find(|f| f.id == id)
    }

    pub fn list_favorites(&self) -> &[Favorite] {
        &self.favorites
    }
}
