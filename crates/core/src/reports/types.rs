//! Report data types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ReportError;

/// Code prefix of income accounts in the chart of accounts.
pub const INCOME_CODE_PREFIX: char = '7';

/// Code prefix of expense accounts in the chart of accounts.
pub const EXPENSE_CODE_PREFIX: char = '6';

/// Classification of an account in the chart of accounts.
///
/// The derived ordering follows the stored Spanish labels
/// (`Activo` < `Gasto` < `Ingreso` < `Pasivo` < `Patrimonio`), which is the
/// order the reports sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Activo.
    Asset,
    /// Gasto.
    Expense,
    /// Ingreso.
    Income,
    /// Pasivo.
    Liability,
    /// Patrimonio.
    Equity,
}

impl AccountType {
    /// Every account type, in report order.
    pub const ALL: [Self; 5] = [
        Self::Asset,
        Self::Expense,
        Self::Income,
        Self::Liability,
        Self::Equity,
    ];

    /// Returns the label used in the chart of accounts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Asset => "Activo",
            Self::Expense => "Gasto",
            Self::Income => "Ingreso",
            Self::Liability => "Pasivo",
            Self::Equity => "Patrimonio",
        }
    }

    /// Returns true for the account types shown in the balance sheet.
    #[must_use]
    pub const fn is_balance_sheet(self) -> bool {
        matches!(self, Self::Asset | Self::Liability | Self::Equity)
    }

    /// Lowercase labels accepted when reading a stored account type.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Asset => &["activo", "asset"],
            Self::Expense => &["gasto", "expense"],
            Self::Income => &["ingreso", "income"],
            Self::Liability => &["pasivo", "liability"],
            Self::Equity => &["patrimonio", "equity"],
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AccountType {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.aliases().contains(&label.as_str()))
            .ok_or_else(|| ReportError::UnknownAccountType(s.to_string()))
    }
}

/// Side on which an account's balance naturally grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceNature {
    /// Deudora: debits increase the balance.
    Debtor,
    /// Acreedora: credits increase the balance.
    Creditor,
}

impl BalanceNature {
    /// Returns the label used in the chart of accounts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debtor => "Deudora",
            Self::Creditor => "Acreedora",
        }
    }

    /// Signed balance of an account with this nature.
    ///
    /// - Debtor: debit - credit
    /// - Creditor: credit - debit
    #[must_use]
    pub fn balance(self, total_debit: Decimal, total_credit: Decimal) -> Decimal {
        match self {
            Self::Debtor => total_debit - total_credit,
            Self::Creditor => total_credit - total_debit,
        }
    }
}

impl FromStr for BalanceNature {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deudora" | "deudor" | "debtor" => Ok(Self::Debtor),
            "acreedora" | "acreedor" | "creditor" => Ok(Self::Creditor),
            _ => Err(ReportError::UnknownBalanceNature(s.to_string())),
        }
    }
}

/// An account in a company's chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Account code (e.g. "1011", "7011").
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Balance nature.
    pub balance_nature: BalanceNature,
}

/// A posted debit/credit line of a ledger entry, joined to its account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntryLine {
    /// Parent ledger entry.
    pub entry_id: i64,
    /// Posting date of the parent entry.
    pub posting_date: NaiveDate,
    /// Account code.
    pub account_code: String,
    /// Account name.
    pub account_name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Balance nature of the account.
    pub balance_nature: BalanceNature,
    /// Debit amount.
    pub debit_amount: Decimal,
    /// Credit amount.
    pub credit_amount: Decimal,
    /// Whether the parent entry has been voided.
    pub voided: bool,
}

impl LedgerEntryLine {
    /// Returns true if this line may contribute to any report.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.voided
    }
}

/// Debit and credit sums for one income-statement group.
///
/// Groups are keyed by (account type, account name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeGroupTotals {
    /// Account type.
    pub account_type: AccountType,
    /// Account name.
    pub name: String,
    /// Total debit amount.
    pub total_debit: Decimal,
    /// Total credit amount.
    pub total_credit: Decimal,
}

impl IncomeGroupTotals {
    /// Credit minus debit, the raw income-statement balance.
    #[must_use]
    pub fn raw_balance(&self) -> Decimal {
        self.total_credit - self.total_debit
    }
}

/// Debit and credit sums for one balance-sheet account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountTotals {
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Balance nature.
    pub balance_nature: BalanceNature,
    /// Total debit amount.
    pub total_debit: Decimal,
    /// Total credit amount.
    pub total_credit: Decimal,
}

impl AccountTotals {
    /// Signed balance according to the account's nature.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.balance_nature.balance(self.total_debit, self.total_credit)
    }
}

/// One aggregated row of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// Account name.
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Line total.
    pub total: Decimal,
}

/// Income statement report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatementReport {
    /// Income lines.
    #[serde(rename = "ingresos")]
    pub income_lines: Vec<ReportLine>,
    /// Sum of income lines.
    #[serde(rename = "totalIngresos")]
    pub total_income: Decimal,
    /// Expense lines, as positive amounts.
    #[serde(rename = "gastos")]
    pub expense_lines: Vec<ReportLine>,
    /// Sum of expense lines.
    #[serde(rename = "totalGastos")]
    pub total_expenses: Decimal,
    /// Income minus expenses.
    #[serde(rename = "utilidadNeta")]
    pub net_profit: Decimal,
}

/// Single-row summary for the waterfall chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterfallSummary {
    /// Credits posted to income accounts.
    #[serde(rename = "totalIngresos")]
    pub total_income: Decimal,
    /// Debits posted to expense accounts.
    #[serde(rename = "totalGastos")]
    pub total_expenses: Decimal,
    /// Income minus expenses.
    #[serde(rename = "utilidadNeta")]
    pub net_profit: Decimal,
}

/// A balance-sheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetLine {
    /// Account code.
    #[serde(rename = "codigo")]
    pub code: String,
    /// Account name.
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Account balance.
    pub total: Decimal,
}

/// Balance sheet report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// Asset accounts.
    #[serde(rename = "activos")]
    pub assets: Vec<BalanceSheetLine>,
    /// Sum of asset balances.
    #[serde(rename = "totalActivos")]
    pub total_assets: Decimal,
    /// Liability accounts.
    #[serde(rename = "pasivos")]
    pub liabilities: Vec<BalanceSheetLine>,
    /// Sum of liability balances.
    #[serde(rename = "totalPasivos")]
    pub total_liabilities: Decimal,
    /// Equity accounts.
    #[serde(rename = "patrimonio")]
    pub equity: Vec<BalanceSheetLine>,
    /// Sum of equity balances.
    #[serde(rename = "totalPatrimonio")]
    pub total_equity: Decimal,
    /// Liabilities plus equity.
    #[serde(rename = "totalPasivoPatrimonio")]
    pub check_total: Decimal,
}

impl BalanceSheetReport {
    /// Difference between total assets and liabilities plus equity.
    ///
    /// Zero when the accounting equation holds. The generator never checks
    /// this itself.
    #[must_use]
    pub fn equation_gap(&self) -> Decimal {
        self.total_assets - self.check_total
    }
}
