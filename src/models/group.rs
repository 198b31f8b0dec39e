use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Pending,
    Confirmed,
    Declined,
}

/// A participant in a group trip. `amount_paid` / `amount_owed` are
/// caller-maintained; the splitter reports shares but never rewrites
/// member balances.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TripMember {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub amount_paid: f64,
    pub amount_owed: f64,
    pub status: MemberStatus,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Flight,
    Hotel,
    Food,
    Activity,
    Transport,
    Other,
}

/// One shared-cost ledger entry. `split_between` carries participant ids;
/// duplicates and emptiness are not prevented here.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub description: String,
    pub amount: f64,
    pub paid_by: String,
    pub split_between: Vec<String>,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        paid_by: impl Into<String>,
        split_between: Vec<String>,
        category: ExpenseCategory,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: String::new(),
            amount,
            paid_by: paid_by.into(),
            split_between,
            category,
            date,
        }
    }
}
