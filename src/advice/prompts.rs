// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Prompt text and response schema sent to the advice service.

use serde_json::json;

use crate::categories::{EXPENSE_CATEGORIES, INCOME_CATEGORIES};
use crate::models::Transaction;

/// One line per record: `{date}: {TYPE} - {amount} VND ({category}) - {description}`.
pub fn render_transactions(transactions: &[Transaction]) -> String {
    transactions
        .iter()
        .map(|t| {
            format!(
                "{}: {} - {} VND ({}) - {}",
                t.date,
                t.r#type,
                t.amount.normalize(),
                t.category,
                t.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn advice_prompt(transactions: &[Transaction]) -> String {
    format!(
        "Bạn là chuyên gia tài chính cá nhân. Phân tích các giao dịch sau và nhận xét bằng tiếng Việt.\n\
         Dữ liệu:\n\
         {}\n\n\
         Trả về JSON đúng cấu trúc:\n\
         {{\n  \"summary\": \"tóm tắt tình hình tài chính, dưới 50 từ\",\n  \
         \"tips\": [\"lời khuyên 1\", \"lời khuyên 2\", \"lời khuyên 3\"],\n  \
         \"sentiment\": \"positive\" | \"neutral\" | \"negative\"\n}}",
        render_transactions(transactions)
    )
}

pub fn advice_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "tips": { "type": "ARRAY", "items": { "type": "STRING" } },
            "sentiment": { "type": "STRING", "enum": ["positive", "neutral", "negative"] }
        },
        "required": ["summary", "tips", "sentiment"]
    })
}

const CATEGORY_PROMPT_HEAD: &str = "Mô tả giao dịch: \"";

pub fn category_prompt(description: &str) -> String {
    let mut labels: Vec<&str> = EXPENSE_CATEGORIES.to_vec();
    labels.extend(INCOME_CATEGORIES.iter().filter(|c| !EXPENSE_CATEGORIES.contains(c)));
    format!(
        "{}{}\"\nChọn một danh mục phù hợp nhất trong danh sách: [{}].\n\
         Chỉ trả về đúng tên danh mục, không thêm gì khác.",
        CATEGORY_PROMPT_HEAD,
        description.replace('"', "'"),
        labels.join(", ")
    )
}

/// Recovers the description embedded by `category_prompt`.
pub fn description_from_category_prompt(prompt: &str) -> Option<&str> {
    let rest = prompt.strip_prefix(CATEGORY_PROMPT_HEAD)?;
    rest.find('"').map(|end| &rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn renders_one_line_per_transaction() {
        let txs = vec![
            Transaction {
                id: "1".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                amount: Decimal::new(1500000, 2),
                category: "Lương".into(),
                description: "Lương".into(),
                r#type: TransactionType::Income,
            },
            Transaction {
                id: "2".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
                amount: Decimal::new(30000, 0),
                category: "Ăn uống".into(),
                description: "Bún chả".into(),
                r#type: TransactionType::Expense,
            },
        ];
        assert_eq!(
            render_transactions(&txs),
            "2024-01-15: INCOME - 15000 VND (Lương) - Lương\n\
             2024-01-16: EXPENSE - 30000 VND (Ăn uống) - Bún chả"
        );
    }

    #[test]
    fn category_prompt_lists_each_label_once() {
        let p = category_prompt("Grab đi làm");
        assert_eq!(p.matches("Khác").count(), 1);
        assert!(p.contains("Hóa đơn & Tiện ích"));
        assert_eq!(description_from_category_prompt(&p), Some("Grab đi làm"));
    }

    #[test]
    fn quotes_in_description_do_not_break_extraction() {
        let p = category_prompt("mua \"áo\" mới");
        assert_eq!(description_from_category_prompt(&p), Some("mua 'áo' mới"));
    }
}
