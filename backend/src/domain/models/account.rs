//! Single-balance account.
//!
//! An `Account` holds one `f64` balance. Deposits are unchecked. A withdrawal
//! larger than the balance is not an error: the account reports
//! [`INSUFFICIENT_FUNDS_MESSAGE`] on its error channel, pays out whatever is
//! left and drops to zero.

use log::{debug, warn};
use std::io::{self, Write};

/// Diagnostic line written when a withdrawal exceeds the balance
pub const INSUFFICIENT_FUNDS_MESSAGE: &str = "You are broke!";

/// Sink for an account's diagnostic lines
pub trait ErrorChannel {
    fn report(&mut self, message: &str);
}

/// Writes each diagnostic as one line on the process stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrChannel;

impl ErrorChannel for StderrChannel {
    fn report(&mut self, message: &str) {
        let mut stderr = io::stderr().lock();
        if let Err(e) = writeln!(stderr, "{}", message) {
            warn!("Failed to write diagnostic {:?}: {}", message, e);
        }
    }
}

/// Records diagnostics in memory
impl ErrorChannel for Vec<String> {
    fn report(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

impl<C: ErrorChannel + ?Sized> ErrorChannel for &mut C {
    fn report(&mut self, message: &str) {
        (**self).report(message);
    }
}

#[derive(Debug, Clone)]
pub struct Account<C = StderrChannel> {
    balance: f64,
    channel: C,
}

impl Account {
    /// Account with a zero balance
    pub fn new() -> Self {
        Self::with_balance(0.0)
    }

    /// Account with a starting balance. The sign is not checked.
    pub fn with_balance(start: f64) -> Self {
        Self::with_channel(start, StderrChannel)
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ErrorChannel> Account<C> {
    pub fn with_channel(start: f64, channel: C) -> Self {
        Self {
            balance: start,
            channel,
        }
    }

    /// Add `amount` to the balance. Negative amounts reduce it.
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Take `amount` out of the account and return what was actually paid.
    ///
    /// With enough funds this is `amount`. Otherwise the shortfall is
    /// reported once on the error channel, the remaining balance is paid
    /// out and the account is left at zero.
    pub fn withdraw(&mut self, amount: f64) -> f64 {
        if self.balance >= amount {
            self.balance -= amount;
            return amount;
        }

        debug!(
            "Withdrawal of {} exceeds balance {}, paying out remaining balance",
            amount, self.balance
        );
        self.channel.report(INSUFFICIENT_FUNDS_MESSAGE);
        let paid = self.balance;
        self.balance = 0.0;
        paid
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_account(start: f64) -> Account<Vec<String>> {
        Account::with_channel(start, Vec::new())
    }

    #[test]
    fn test_new_account_starts_at_zero() {
        assert_eq!(Account::new().balance(), 0.0);
        assert_eq!(Account::default().balance(), 0.0);
    }

    #[test]
    fn test_starting_balance_is_not_validated() {
        let account = Account::with_balance(-25.5);
        assert_eq!(account.balance(), -25.5);
    }

    #[test]
    fn test_deposit_adds_to_balance() {
        let mut account = recording_account(10.0);
        account.deposit(15.5);
        assert_eq!(account.balance(), 25.5);
    }

    #[test]
    fn test_negative_deposit_reduces_balance() {
        let mut account = recording_account(10.0);
        account.deposit(-30.0);
        assert_eq!(account.balance(), -20.0);
        assert!(account.channel().is_empty());
    }

    #[test]
    fn test_withdraw_within_balance() {
        for (start, amount) in [(100.0, 40.0), (100.0, 100.0), (5.0, 0.0), (7.5, -2.5)] {
            let mut account = recording_account(start);
            let paid = account.withdraw(amount);
            assert_eq!(paid, amount);
            assert_eq!(account.balance(), start - amount);
            assert!(account.channel().is_empty(), "no diagnostic for {} from {}", amount, start);
        }
    }

    #[test]
    fn test_overdraw_pays_out_remaining_balance() {
        let mut account = recording_account(30.0);
        let paid = account.withdraw(50.0);
        assert_eq!(paid, 30.0);
        assert_eq!(account.balance(), 0.0);
        assert_eq!(account.channel(), &vec![INSUFFICIENT_FUNDS_MESSAGE.to_string()]);
    }

    #[test]
    fn test_overdraw_from_negative_balance_returns_negative_amount() {
        let mut account = recording_account(-10.0);
        let paid = account.withdraw(1.0);
        assert_eq!(paid, -10.0);
        assert_eq!(account.balance(), 0.0);
        assert_eq!(account.channel().len(), 1);
    }

    #[test]
    fn test_each_overdraw_reports_once() {
        let mut account = recording_account(5.0);
        account.withdraw(10.0);
        account.withdraw(1.0);
        assert_eq!(account.channel().len(), 2);
        assert!(account.channel().iter().all(|line| line == "You are broke!"));
    }

    #[test]
    fn test_balance_reads_are_stable() {
        let mut account = recording_account(12.0);
        account.deposit(3.0);
        let first = account.balance();
        assert_eq!(account.balance(), first);
        assert_eq!(account.balance(), first);
    }

    #[test]
    fn test_borrowed_channel_receives_reports() {
        let mut lines = Vec::new();
        {
            let mut account = Account::with_channel(1.0, &mut lines);
            account.withdraw(2.0);
        }
        assert_eq!(lines, vec!["You are broke!".to_string()]);
    }
}
