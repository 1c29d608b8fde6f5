// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Canonical category lists and the chart palette.
//!
//! The analytics layer never consults these lists; grouping is by exact label.
//! They exist for input defaults, suggestion validation and `doctor`.

use crate::models::TransactionType;

pub const EXPENSE_CATEGORIES: [&str; 9] = [
    "Ăn uống",
    "Di chuyển",
    "Nhà cửa",
    "Mua sắm",
    "Giải trí",
    "Sức khỏe",
    "Giáo dục",
    "Hóa đơn & Tiện ích",
    "Khác",
];

pub const INCOME_CATEGORIES: [&str; 6] = [
    "Lương",
    "Thưởng",
    "Đầu tư",
    "Bán hàng",
    "Quà tặng",
    "Khác",
];

/// Returned by the suggestion service when it fails or has nothing to say.
pub const FALLBACK_CATEGORY: &str = "Khác";

pub const PALETTE: [&str; 8] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8", "#82ca9d", "#ffc658", "#ff7300",
];

pub fn default_category(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Expense => EXPENSE_CATEGORIES[0],
        TransactionType::Income => INCOME_CATEGORIES[0],
    }
}

pub fn is_known(label: &str) -> bool {
    EXPENSE_CATEGORIES.contains(&label) || INCOME_CATEGORIES.contains(&label)
}

/// Validates a suggested label. Unknown labels are rejected; known ones also
/// decide the transaction type, with expense winning for labels in both lists.
pub fn classify_suggestion(label: &str) -> Option<(&'static str, TransactionType)> {
    if let Some(c) = EXPENSE_CATEGORIES.iter().find(|c| **c == label) {
        return Some((*c, TransactionType::Expense));
    }
    INCOME_CATEGORIES
        .iter()
        .find(|c| **c == label)
        .map(|c| (*c, TransactionType::Income))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_label_resolves_to_expense() {
        assert_eq!(
            classify_suggestion("Khác"),
            Some(("Khác", TransactionType::Expense))
        );
        assert_eq!(
            classify_suggestion("Thưởng"),
            Some(("Thưởng", TransactionType::Income))
        );
    }

    #[test]
    fn unknown_or_unnormalized_labels_rejected() {
        assert_eq!(classify_suggestion("Groceries"), None);
        assert_eq!(classify_suggestion(" Ăn uống"), None);
        assert!(!is_known("ăn uống"));
    }

    #[test]
    fn default_category_is_first_of_each_list() {
        assert_eq!(default_category(TransactionType::Expense), "Ăn uống");
        assert_eq!(default_category(TransactionType::Income), "Lương");
    }
}
