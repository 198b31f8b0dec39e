use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::group::{Expense, TripMember};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseError {
    #[error("expense amount must be a positive finite number")]
    InvalidAmount,
}

/// Ordered collection of shared expenses for one group trip. Operations
/// return a new ledger; the caller owns the returned value and its
/// persistence.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from a request payload, validating every entry.
    pub fn from_expenses(expenses: Vec<Expense>) -> Result<Self, ExpenseError> {
        if expenses.iter().any(|e| !Self::valid_amount(e.amount)) {
            return Err(ExpenseError::InvalidAmount);
        }
        Ok(Self { expenses })
    }

    /// Append an expense. No dedup; the only gate is a positive finite
    /// amount.
    pub fn add(&self, expense: Expense) -> Result<Self, ExpenseError> {
        if !Self::valid_amount(expense.amount) {
            return Err(ExpenseError::InvalidAmount);
        }
        let mut expenses = self.expenses.clone();
        expenses.push(expense);
        Ok(Self { expenses })
    }

    /// Drop the expense with the given id, if present.
    pub fn remove(&self, expense_id: &str) -> Self {
        Self {
            expenses: self
                .expenses
                .iter()
                .filter(|e| e.id != expense_id)
                .cloned()
                .collect(),
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Even split of the running total. `member_count` counts added members;
    /// the organizer is always the +1, so zero added members yields the raw
    /// total and the divisor is never zero.
    pub fn per_person_share(&self, member_count: usize) -> f64 {
        self.total() / (member_count + 1) as f64
    }

    fn valid_amount(amount: f64) -> bool {
        amount.is_finite() && amount > 0.0
    }
}

/// Drop a member by id. Member balances are not recomputed; they are
/// caller-maintained data.
pub fn remove_member(members: Vec<TripMember>, member_id: &str) -> Vec<TripMember> {
    members.into_iter().filter(|m| m.id != member_id).collect()
}
