//! Dashboard report command

use crate::error::LedgerResult;
use crate::reports::MonthlyReport;
use crate::storage::LedgerStore;

use super::parse_month;

/// Print the monthly dashboard
pub fn handle_report_command(store: &LedgerStore, month: Option<&str>) -> LedgerResult<()> {
    let month = parse_month(month)?;
    let report = MonthlyReport::generate(store.ledger(), month);
    print!("{}", report.format_terminal());
    Ok(())
}
