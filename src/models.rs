// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            other => Err(Error::InvalidData(format!(
                "Unknown transaction type '{}', expected income|expense",
                other
            ))),
        }
    }
}

/// A recorded income or expense. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.r#type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.r#type == TransactionType::Expense
    }
}

/// Largest amount a single transaction may carry (10^15 đồng).
pub fn max_amount() -> Decimal {
    Decimal::new(1_000_000_000_000_000, 0)
}

/// Amounts are magnitudes in `0..=max_amount()`; direction lives in `type`.
pub fn validate_amount(amount: Decimal) -> Result<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(Error::InvalidData(format!(
            "Amount must not be negative, got {}",
            amount
        )));
    }
    if amount > max_amount() {
        return Err(Error::InvalidData(format!(
            "Amount {} exceeds the maximum of {}",
            amount,
            max_amount()
        )));
    }
    Ok(())
}

/// A transaction that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub r#type: TransactionType,
}

impl NewTransaction {
    /// Rejects amounts outside `validate_amount`'s range.
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
        r#type: TransactionType,
    ) -> Result<Self> {
        validate_amount(amount)?;
        Ok(Self {
            date,
            amount,
            category: category.into(),
            description: description.into(),
            r#type,
        })
    }

    pub fn with_id(self, id: String) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            category: self.category,
            description: self.description,
            r#type: self.r#type,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryData {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
}

/// One slice of the expense structure chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub total_amount: Decimal,
    pub color: &'static str,
}

pub type CategoryBreakdown = Vec<CategoryTotal>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    pub month: u32,
    pub year: i32,
    pub month_label: String,
    pub income_total: Decimal,
    pub expense_total: Decimal,
}

pub type MonthlyTrend = Vec<MonthlyBucket>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Label shown in the advisor view.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Tích cực",
            Sentiment::Neutral => "Ổn định",
            Sentiment::Negative => "Cần cải thiện",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceResult {
    pub summary: String,
    pub tips: Vec<String>,
    pub sentiment: Sentiment,
}
