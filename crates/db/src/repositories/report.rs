//! Report repository for accounting report queries.
//!
//! Each report is one parameterized statement. Rows are decoded into typed
//! records and converted to `tesoreria_core` types at this boundary.

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbBackend, DbErr, FromQueryResult, Statement};
use tracing::debug;

use tesoreria_core::reports::{
    AccountTotals, AccountType, BalanceNature, DateRange, IncomeGroupTotals, ReportError,
};

/// Error types for report queries.
#[derive(Debug, thiserror::Error)]
pub enum ReportQueryError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// A stored row could not be mapped to a report type.
    #[error("Invalid report row: {0}")]
    InvalidRow(#[from] ReportError),
}

/// Income and expense sums grouped by (type, name) within a date range.
///
/// `$1` company, `$2` first day, `$3` last day.
pub(crate) const INCOME_STATEMENT_SQL: &str = r"
SELECT pc.tipo AS account_type,
       pc.nombre AS account_name,
       COALESCE(SUM(ad.debe), 0) AS total_debit,
       COALESCE(SUM(ad.haber), 0) AS total_credit
FROM asientos_detalle ad
JOIN asientos_contables ac ON ac.id = ad.asiento_id
JOIN plan_cuentas pc ON pc.id = ad.cuenta_id
WHERE ac.empresa_id = $1
  AND ac.fecha BETWEEN $2 AND $3
  AND ac.estado IS DISTINCT FROM 'ANULADO'
  AND (pc.codigo LIKE '7%' OR pc.codigo LIKE '6%')
GROUP BY pc.tipo, pc.nombre
ORDER BY pc.tipo, pc.nombre";

/// Income credits and expense debits within a date range.
///
/// `$1` company, `$2` first day, `$3` last day.
pub(crate) const WATERFALL_SQL: &str = r"
SELECT COALESCE(SUM(CASE WHEN pc.codigo LIKE '7%' THEN ad.haber ELSE 0 END), 0) AS total_income,
       COALESCE(SUM(CASE WHEN pc.codigo LIKE '6%' THEN ad.debe ELSE 0 END), 0) AS total_expenses
FROM asientos_detalle ad
JOIN asientos_contables ac ON ac.id = ad.asiento_id
JOIN plan_cuentas pc ON pc.id = ad.cuenta_id
WHERE ac.empresa_id = $1
  AND ac.fecha BETWEEN $2 AND $3
  AND ac.estado IS DISTINCT FROM 'ANULADO'";

/// Debit and credit sums up to a cutoff for every balance-sheet account.
///
/// The left join keeps accounts without movements. `$1` company, `$2` cutoff.
pub(crate) const BALANCE_SHEET_SQL: &str = r"
SELECT pc.codigo AS code,
       pc.nombre AS name,
       pc.tipo AS account_type,
       pc.naturaleza AS balance_nature,
       COALESCE(SUM(mov.debe), 0) AS total_debit,
       COALESCE(SUM(mov.haber), 0) AS total_credit
FROM plan_cuentas pc
LEFT JOIN (
    SELECT ad.cuenta_id, ad.debe, ad.haber
    FROM asientos_detalle ad
    JOIN asientos_contables ac ON ac.id = ad.asiento_id
    WHERE ac.empresa_id = $1
      AND ac.fecha <= $2
      AND ac.estado IS DISTINCT FROM 'ANULADO'
) mov ON mov.cuenta_id = pc.id
WHERE pc.empresa_id = $1
  AND LOWER(TRIM(pc.tipo)) IN ('activo', 'asset', 'pasivo', 'liability', 'patrimonio', 'equity')
GROUP BY pc.codigo, pc.nombre, pc.tipo, pc.naturaleza
ORDER BY pc.codigo";

#[derive(Debug, FromQueryResult)]
struct IncomeGroupRow {
    account_type: String,
    account_name: String,
    total_debit: Decimal,
    total_credit: Decimal,
}

impl TryFrom<IncomeGroupRow> for IncomeGroupTotals {
    type Error = ReportError;

    fn try_from(row: IncomeGroupRow) -> Result<Self, Self::Error> {
        Ok(Self {
            account_type: row.account_type.parse()?,
            name: row.account_name,
            total_debit: row.total_debit,
            total_credit: row.total_credit,
        })
    }
}

#[derive(Debug, FromQueryResult)]
struct WaterfallRow {
    total_income: Decimal,
    total_expenses: Decimal,
}

#[derive(Debug, FromQueryResult)]
struct BalanceAccountRow {
    code: String,
    name: String,
    account_type: String,
    balance_nature: String,
    total_debit: Decimal,
    total_credit: Decimal,
}

impl TryFrom<BalanceAccountRow> for AccountTotals {
    type Error = ReportError;

    fn try_from(row: BalanceAccountRow) -> Result<Self, Self::Error> {
        Ok(Self {
            code: row.code,
            name: row.name,
            account_type: row.account_type.parse::<AccountType>()?,
            balance_nature: row.balance_nature.parse::<BalanceNature>()?,
            total_debit: row.total_debit,
            total_credit: row.total_credit,
        })
    }
}

/// Report repository for accounting report queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Queries income and expense group totals for the income statement.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row carries an unknown
    /// account type.
    pub async fn query_income_statement(
        &self,
        company_id: i64,
        range: &DateRange,
    ) -> Result<Vec<IncomeGroupTotals>, ReportQueryError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            INCOME_STATEMENT_SQL,
            [company_id.into(), range.start().into(), range.end().into()],
        );

        let rows = IncomeGroupRow::find_by_statement(stmt).all(&self.db).await?;
        debug!(company_id, rows = rows.len(), "Fetched income statement groups");

        rows.into_iter()
            .map(|row| IncomeGroupTotals::try_from(row).map_err(ReportQueryError::from))
            .collect()
    }

    /// Queries income credits and expense debits for the waterfall summary.
    ///
    /// Returns `(total_income, total_expenses)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn query_waterfall(
        &self,
        company_id: i64,
        range: &DateRange,
    ) -> Result<(Decimal, Decimal), ReportQueryError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            WATERFALL_SQL,
            [company_id.into(), range.start().into(), range.end().into()],
        );

        let row = WaterfallRow::find_by_statement(stmt).one(&self.db).await?;

        Ok(row.map_or((Decimal::ZERO, Decimal::ZERO), |r| {
            (r.total_income, r.total_expenses)
        }))
    }

    /// Queries per-account totals up to `as_of` for the balance sheet.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row carries an unknown
    /// account type or balance nature.
    pub async fn query_balance_sheet(
        &self,
        company_id: i64,
        as_of: chrono::NaiveDate,
    ) -> Result<Vec<AccountTotals>, ReportQueryError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            BALANCE_SHEET_SQL,
            [company_id.into(), as_of.into()],
        );

        let rows = BalanceAccountRow::find_by_statement(stmt)
            .all(&self.db)
            .await?;
        debug!(company_id, %as_of, rows = rows.len(), "Fetched balance sheet accounts");

        let accounts = rows
            .into_iter()
            .map(|row| AccountTotals::try_from(row).map_err(ReportQueryError::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(accounts
            .into_iter()
            .filter(|a| a.account_type.is_balance_sheet())
            .collect())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
