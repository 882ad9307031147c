//! Category display formatting

use crate::taxonomy::Taxonomy;

/// Format the category board: expense section, then income section
pub fn format_category_board(taxonomy: &Taxonomy) -> String {
    if taxonomy.is_empty() {
        return "No categories defined.".to_string();
    }

    let mut output = String::new();

    output.push_str("Expenses\n");
    output.push_str("--------\n");
    let expenses = taxonomy.expenses();
    if expenses.is_empty() {
        output.push_str("  (none)\n");
    }
    for category in expenses {
        output.push_str(&format!("  {}  [{}]\n", category.name, category.id));
    }

    output.push('\n');
    output.push_str("Income\n");
    output.push_str("------\n");
    let income = taxonomy.income();
    if income.is_empty() {
        output.push_str("  (none)\n");
    }
    for category in income {
        output.push_str(&format!("  {}  [{}]\n", category.name, category.id));
    }

    output
}
