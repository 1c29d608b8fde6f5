// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::{EXPENSE_CATEGORIES, INCOME_CATEGORIES};
use crate::utils::pretty_table;

pub fn handle() {
    let mut data = Vec::new();
    for c in EXPENSE_CATEGORIES {
        data.push(vec![c.to_string(), "EXPENSE".to_string()]);
    }
    for c in INCOME_CATEGORIES {
        data.push(vec![c.to_string(), "INCOME".to_string()]);
    }
    println!("{}", pretty_table(&["Category", "Type"], data));
}
