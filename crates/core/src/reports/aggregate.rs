//! In-memory aggregation of ledger lines.
//!
//! These functions compute the same rows the SQL layer returns, directly
//! from [`LedgerEntryLine`]s. Voided lines never contribute.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::period::DateRange;
use super::types::{
    Account, AccountTotals, AccountType, EXPENSE_CODE_PREFIX, INCOME_CODE_PREFIX,
    IncomeGroupTotals, LedgerEntryLine,
};

/// Returns true if the code belongs to an income or expense account.
#[must_use]
pub fn is_result_account(code: &str) -> bool {
    code.starts_with(INCOME_CODE_PREFIX) || code.starts_with(EXPENSE_CODE_PREFIX)
}

/// Groups income and expense lines posted within `range` by
/// (account type, account name).
#[must_use]
pub fn income_statement_groups(
    lines: &[LedgerEntryLine],
    range: &DateRange,
) -> Vec<IncomeGroupTotals> {
    let mut groups: BTreeMap<(AccountType, &str), (Decimal, Decimal)> = BTreeMap::new();

    for line in lines.iter().filter(|l| {
        l.is_active() && range.contains(l.posting_date) && is_result_account(&l.account_code)
    }) {
        let totals = groups
            .entry((line.account_type, line.account_name.as_str()))
            .or_default();
        totals.0 += line.debit_amount;
        totals.1 += line.credit_amount;
    }

    groups
        .into_iter()
        .map(|((account_type, name), (total_debit, total_credit))| IncomeGroupTotals {
            account_type,
            name: name.to_string(),
            total_debit,
            total_credit,
        })
        .collect()
}

/// Sums income credits and expense debits posted within `range`.
///
/// Returns `(total_income, total_expenses)`.
#[must_use]
pub fn waterfall_totals(lines: &[LedgerEntryLine], range: &DateRange) -> (Decimal, Decimal) {
    lines
        .iter()
        .filter(|l| l.is_active() && range.contains(l.posting_date))
        .fold((Decimal::ZERO, Decimal::ZERO), |(income, expenses), line| {
            if line.account_code.starts_with(INCOME_CODE_PREFIX) {
                (income + line.credit_amount, expenses)
            } else if line.account_code.starts_with(EXPENSE_CODE_PREFIX) {
                (income, expenses + line.debit_amount)
            } else {
                (income, expenses)
            }
        })
}

/// Accumulates debits and credits up to `as_of` for every balance-sheet
/// account in `chart`, including accounts without activity.
#[must_use]
pub fn balance_sheet_totals(
    chart: &[Account],
    lines: &[LedgerEntryLine],
    as_of: NaiveDate,
) -> Vec<AccountTotals> {
    let mut sums: BTreeMap<&str, (Decimal, Decimal)> = BTreeMap::new();

    for line in lines
        .iter()
        .filter(|l| l.is_active() && l.posting_date <= as_of)
    {
        let totals = sums.entry(line.account_code.as_str()).or_default();
        totals.0 += line.debit_amount;
        totals.1 += line.credit_amount;
    }

    chart
        .iter()
        .filter(|account| account.account_type.is_balance_sheet())
        .map(|account| {
            let (total_debit, total_credit) =
                sums.get(account.code.as_str()).copied().unwrap_or_default();
            AccountTotals {
                code: account.code.clone(),
                name: account.name.clone(),
                account_type: account.account_type,
                balance_nature: account.balance_nature,
                total_debit,
                total_credit,
            }
        })
        .collect()
}
