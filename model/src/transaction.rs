use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "INCOME" => Some(TransactionType::Income),
            "EXPENSE" => Some(TransactionType::Expense),
            _ => None,
        }
    }

    /// Expenses are stored negative, incomes positive.
    pub fn normalize_amount(&self, amount: i64) -> i64 {
        match self {
            TransactionType::Income => amount.abs(),
            TransactionType::Expense => -amount.abs(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_by: String,
    pub project_id: Option<String>,
    pub project_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

/// Income/expense totals for the dashboard; `total_expense` is reported
/// as a positive magnitude.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: i64,
    pub total_expense: i64,
    pub net_profit: i64,
}

pub mod request {
    use super::*;

    /// `type` stays a plain string so an unknown value maps to the
    /// `TRANSACTION_INVALID_TYPE` validation error.
    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct CreateTransactionRequest {
        pub amount: Option<i64>,
        #[serde(rename = "type")]
        pub transaction_type: Option<String>,
        pub category: Option<String>,
        pub description: Option<String>,
        pub date: Option<NaiveDate>,
        pub project_id: Option<String>,
    }
}

pub mod response {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionListResponse {
        pub transactions: Vec<Transaction>,
        pub pagination: Pagination,
    }

    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct DashboardResponse {
        pub recent_transactions: Vec<Transaction>,
        pub summary: FinancialSummary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_amounts_are_stored_negative() {
        assert_eq!(TransactionType::Expense.normalize_amount(500), -500);
        assert_eq!(TransactionType::Expense.normalize_amount(-500), -500);
        assert_eq!(TransactionType::Income.normalize_amount(-500), 500);
    }
}
