//! Dashboard statistics over the full record set.
//!
//! Counts and sums are unfiltered by completion state; the financial
//! report is the layer that restricts itself to completed services.

use chrono::{Datelike, NaiveDate};
use shared::{DashboardStats, PeriodStats};

use crate::domain::models::service_record::ServiceRecord;

/// Compute overall totals plus aggregates for the calendar month and year
/// containing `now`.
pub fn compute_stats(records: &[ServiceRecord], now: NaiveDate) -> DashboardStats {
    let total_revenue: f64 = records.iter().map(|record| record.cost).sum();
    let total_expenses: f64 = records.iter().map(|record| record.expenses).sum();

    DashboardStats {
        total_services: records.len(),
        total_revenue,
        total_expenses,
        profit: total_revenue - total_expenses,
        monthly_stats: period_stats(records, |date| {
            date.month() == now.month() && date.year() == now.year()
        }),
        yearly_stats: period_stats(records, |date| date.year() == now.year()),
    }
}

fn period_stats(records: &[ServiceRecord], in_period: impl Fn(NaiveDate) -> bool) -> PeriodStats {
    let mut revenue = 0.0;
    let mut expenses = 0.0;

    for record in records {
        // Records whose timestamp cannot be parsed fall outside every period.
        if let Some(date) = record.effective_date() {
            if in_period(date) {
                revenue += record.cost;
                expenses += record.expenses;
            }
        }
    }

    PeriodStats {
        revenue,
        expenses,
        profit: revenue - expenses,
    }
}
