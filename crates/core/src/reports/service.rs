//! Report generation service.

use rust_decimal::Decimal;

use super::types::{
    AccountTotals, AccountType, BalanceSheetLine, BalanceSheetReport, IncomeGroupTotals,
    IncomeStatementReport, ReportLine, WaterfallSummary,
};

/// Service for generating accounting reports.
pub struct ReportService;

impl ReportService {
    /// Generates an income statement from per-group debit/credit sums.
    ///
    /// Each group's raw balance is `credit - debit`. Income lines show it as
    /// is; expense lines show its negation so expenses read as positive
    /// amounts. Groups with a zero raw balance are left out, as are groups of
    /// any other account type.
    #[must_use]
    pub fn generate_income_statement(mut groups: Vec<IncomeGroupTotals>) -> IncomeStatementReport {
        groups.sort_by(|a, b| {
            a.account_type
                .cmp(&b.account_type)
                .then_with(|| a.name.cmp(&b.name))
        });

        let mut report = IncomeStatementReport::default();

        for group in groups {
            let raw = group.raw_balance();
            if raw.is_zero() {
                continue;
            }

            match group.account_type {
                AccountType::Income => {
                    report.total_income += raw;
                    report.income_lines.push(ReportLine {
                        description: group.name,
                        total: raw,
                    });
                }
                AccountType::Expense => {
                    report.total_expenses -= raw;
                    report.expense_lines.push(ReportLine {
                        description: group.name,
                        total: -raw,
                    });
                }
                _ => {}
            }
        }

        report.net_profit = report.total_income - report.total_expenses;
        report
    }

    /// Generates the single-row waterfall summary.
    #[must_use]
    pub fn generate_waterfall(total_income: Decimal, total_expenses: Decimal) -> WaterfallSummary {
        WaterfallSummary {
            total_income,
            total_expenses,
            net_profit: total_income - total_expenses,
        }
    }

    /// Generates a balance sheet from per-account debit/credit sums.
    ///
    /// Balances follow each account's nature. Zero balances are left out and
    /// the remaining accounts are bucketed by type in code order.
    /// `check_total` is liabilities plus equity; whether it matches total
    /// assets is not checked here (see [`BalanceSheetReport::equation_gap`]).
    #[must_use]
    pub fn generate_balance_sheet(mut accounts: Vec<AccountTotals>) -> BalanceSheetReport {
        accounts.sort_by(|a, b| a.code.cmp(&b.code));

        let mut report = BalanceSheetReport::default();

        for account in accounts {
            let balance = account.balance();
            if balance.is_zero() {
                continue;
            }

            let (lines, total) = match account.account_type {
                AccountType::Asset => (&mut report.assets, &mut report.total_assets),
                AccountType::Liability => (&mut report.liabilities, &mut report.total_liabilities),
                AccountType::Equity => (&mut report.equity, &mut report.total_equity),
                AccountType::Income | AccountType::Expense => continue,
            };

            *total += balance;
            lines.push(BalanceSheetLine {
                code: account.code,
                description: account.name,
                total: balance,
            });
        }

        report.check_total = report.total_liabilities + report.total_equity;
        report
    }
}
