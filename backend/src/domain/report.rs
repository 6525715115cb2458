//! Monthly and yearly financial reporting over completed services.
//!
//! Per-record figures deduct a fixed-percentage profit share from the net
//! profit; the remainder is what stays with the shop. Reports can be
//! narrowed with free-text filters and sorted by any table column.

use chrono::{DateTime, Datelike};
use std::cmp::Ordering;

use shared::{ReportSummary, ServiceFigures};

use crate::domain::format;
use crate::domain::models::service_record::{ServiceRecord, ServiceStatus};

/// Share of the net profit deducted as the partner cut.
pub const PROFIT_SHARE_RATE: f64 = 0.35;

/// Optional free-text constraints for the monthly service table. Empty
/// terms mean no constraint; both terms must match when present.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Matched against phone digits (exact substring) and the address
    /// (case-insensitive substring)
    pub search_term: String,
    /// Matched against several renderings of the effective date
    pub date_filter: String,
}

/// Sortable report table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Address,
    Phone,
    Revenue,
    Expenses,
    Profit,
    Remaining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Current sort selection. `key: None` preserves the filter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Select a sort column. Re-selecting the active ascending column
    /// flips to descending; any other selection starts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        self.direction = if self.key == Some(key) && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.key = Some(key);
    }
}

/// Completed services for the month plus the summary computed over them.
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub services: Vec<ServiceRecord>,
    pub summary: ReportSummary,
}

/// Completed services whose effective date falls in the given calendar
/// month.
pub fn completed_in_month(records: &[ServiceRecord], month: u32, year: i32) -> Vec<ServiceRecord> {
    records
        .iter()
        .filter(|record| record.status == ServiceStatus::Completed)
        .filter(|record| {
            matches!(record.effective_date(), Some(date) if date.month() == month && date.year() == year)
        })
        .cloned()
        .collect()
}

/// Completed services whose effective date falls in the given year.
pub fn completed_in_year(records: &[ServiceRecord], year: i32) -> Vec<ServiceRecord> {
    records
        .iter()
        .filter(|record| record.status == ServiceStatus::Completed)
        .filter(|record| matches!(record.effective_date(), Some(date) if date.year() == year))
        .cloned()
        .collect()
}

/// Narrow records by the free-text filters. A record passes when it
/// matches the search term and the date term, each of which is a no-op
/// when empty.
pub fn apply_text_filter(records: Vec<ServiceRecord>, filter: &ReportFilter) -> Vec<ServiceRecord> {
    if filter.search_term.is_empty() && filter.date_filter.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| {
            matches_search(record, &filter.search_term) && matches_date(record, &filter.date_filter)
        })
        .collect()
}

fn matches_search(record: &ServiceRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record.customer_phone.contains(term)
        || record
            .address
            .to_lowercase()
            .contains(&term.to_lowercase())
}

fn matches_date(record: &ServiceRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    if record.created_at.contains(term) || format::format_date(&record.created_at).contains(term) {
        return true;
    }
    match record.effective_date() {
        Some(date) => {
            date.year().to_string().contains(term)
                || format!("{:02}", date.month()).contains(term)
                || format!("{:02}", date.day()).contains(term)
        }
        None => false,
    }
}

/// Financial figures for one record row.
pub fn figures(record: &ServiceRecord) -> ServiceFigures {
    let revenue = record.cost;
    let net_profit = revenue - record.expenses;
    let profit_share = net_profit * PROFIT_SHARE_RATE;
    ServiceFigures {
        revenue,
        net_profit,
        profit_share,
        remaining: net_profit - profit_share,
    }
}

/// Aggregate figures over a set of (already filtered) records.
pub fn summarize(records: &[ServiceRecord]) -> ReportSummary {
    let revenue: f64 = records.iter().map(|record| record.cost).sum();
    let expenses: f64 = records.iter().map(|record| record.expenses).sum();
    let net_profit = revenue - expenses;
    let profit_share = net_profit * PROFIT_SHARE_RATE;
    ReportSummary {
        revenue,
        expenses,
        net_profit,
        profit_share,
        remaining: net_profit - profit_share,
        service_count: records.len(),
    }
}

/// Sort records in place. A `None` key preserves the incoming order.
pub fn sort_services(records: &mut [ServiceRecord], config: &SortConfig) {
    let Some(key) = config.key else {
        return;
    };
    records.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, key);
        match config.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_by_key(a: &ServiceRecord, b: &ServiceRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => date_sort_value(a).cmp(&date_sort_value(b)),
        SortKey::Address => format::turkish_cmp(&a.address, &b.address),
        SortKey::Phone => format::turkish_cmp(&a.customer_phone, &b.customer_phone),
        SortKey::Revenue => compare_amounts(a.cost, b.cost),
        SortKey::Expenses => compare_amounts(a.expenses, b.expenses),
        SortKey::Profit => compare_amounts(a.cost - a.expenses, b.cost - b.expenses),
        SortKey::Remaining => compare_amounts(figures(a).remaining, figures(b).remaining),
    }
}

fn compare_amounts(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn date_sort_value(record: &ServiceRecord) -> i64 {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&record.created_at) {
        return parsed.timestamp_millis();
    }
    record
        .effective_date()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc().timestamp_millis())
        .unwrap_or(i64::MIN)
}

/// Build the monthly report: period filter, then text filters, summary
/// over the filtered set, then sorting for display.
pub fn monthly_report(
    records: &[ServiceRecord],
    month: u32,
    year: i32,
    filter: &ReportFilter,
    sort: &SortConfig,
) -> MonthlyReport {
    let mut services = apply_text_filter(completed_in_month(records, month, year), filter);
    let summary = summarize(&services);
    sort_services(&mut services, sort);
    MonthlyReport { services, summary }
}

/// Yearly aggregate figures; the yearly view carries no text filter.
pub fn yearly_report(records: &[ServiceRecord], year: i32) -> ReportSummary {
    summarize(&completed_in_year(records, year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::service_record::ColorTag;

    fn completed(
        id: &str,
        created_at: &str,
        phone: &str,
        address: &str,
        cost: f64,
        expenses: f64,
    ) -> ServiceRecord {
        ServiceRecord {
            id: id.to_string(),
            customer_phone: phone.to_string(),
            raw_customer_phone_input: phone.to_string(),
            address: address.to_string(),
            color: ColorTag::White,
            cost,
            expenses,
            deposit: 0.0,
            status: ServiceStatus::Completed,
            created_at: created_at.to_string(),
            updated_at: created_at.to_string(),
            phone_number_note: String::new(),
        }
    }

    fn ids(records: &[ServiceRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_profit_share_figures() {
        let record = completed("a", "2024-06-01T09:00:00.000Z", "", "", 1000.0, 200.0);
        let figures = figures(&record);
        assert_eq!(figures.revenue, 1000.0);
        assert_eq!(figures.net_profit, 800.0);
        assert!((figures.profit_share - 280.0).abs() < 1e-9);
        assert!((figures.remaining - 520.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_over_period() {
        let records = vec![
            completed("a", "2024-06-01T09:00:00.000Z", "", "", 1000.0, 200.0),
            completed("b", "2024-06-10T09:00:00.000Z", "", "", 500.0, 100.0),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.revenue, 1500.0);
        assert_eq!(summary.expenses, 300.0);
        assert_eq!(summary.net_profit, 1200.0);
        assert!((summary.profit_share - 420.0).abs() < 1e-9);
        assert!((summary.remaining - 780.0).abs() < 1e-9);
        assert_eq!(summary.service_count, 2);
    }

    #[test]
    fn test_only_completed_records_enter_reports() {
        let mut ongoing = completed("a", "2024-06-01T09:00:00.000Z", "", "", 100.0, 0.0);
        ongoing.status = ServiceStatus::Ongoing;
        let records = vec![
            ongoing,
            completed("b", "2024-06-02T09:00:00.000Z", "", "", 50.0, 0.0),
        ];
        assert_eq!(ids(&completed_in_month(&records, 6, 2024)), ["b"]);
        assert_eq!(ids(&completed_in_year(&records, 2024)), ["b"]);
    }

    #[test]
    fn test_period_filter_uses_month_and_year() {
        let records = vec![
            completed("a", "2024-06-01T09:00:00.000Z", "", "", 1.0, 0.0),
            completed("b", "2024-07-01T09:00:00.000Z", "", "", 1.0, 0.0),
            completed("c", "2023-06-01T09:00:00.000Z", "", "", 1.0, 0.0),
        ];
        assert_eq!(ids(&completed_in_month(&records, 6, 2024)), ["a"]);
        assert_eq!(ids(&completed_in_year(&records, 2024)), ["a", "b"]);
    }

    #[test]
    fn test_search_matches_phone_or_address() {
        let records = vec![
            completed("a", "2024-06-01T09:00:00.000Z", "05346822282", "Kadıköy", 1.0, 0.0),
            completed("b", "2024-06-02T09:00:00.000Z", "05551234567", "Moda", 1.0, 0.0),
        ];
        let by_phone = apply_text_filter(
            records.clone(),
            &ReportFilter {
                search_term: "534".to_string(),
                date_filter: String::new(),
            },
        );
        assert_eq!(ids(&by_phone), ["a"]);

        let by_address = apply_text_filter(
            records,
            &ReportFilter {
                search_term: "moda".to_string(),
                date_filter: String::new(),
            },
        );
        assert_eq!(ids(&by_address), ["b"]);
    }

    #[test]
    fn test_date_filter_matches_localized_rendering() {
        let records = vec![
            completed("a", "2024-06-01T09:00:00.000Z", "", "", 1.0, 0.0),
            completed("b", "2024-06-15T09:00:00.000Z", "", "", 1.0, 0.0),
        ];
        let filtered = apply_text_filter(
            records,
            &ReportFilter {
                search_term: String::new(),
                date_filter: "15.06.2024".to_string(),
            },
        );
        assert_eq!(ids(&filtered), ["b"]);
    }

    #[test]
    fn test_both_filters_are_anded() {
        let records = vec![
            completed("a", "2024-06-01T09:00:00.000Z", "05346822282", "Kadıköy", 1.0, 0.0),
            completed("b", "2024-06-15T09:00:00.000Z", "05346822282", "Kadıköy", 1.0, 0.0),
        ];
        let filtered = apply_text_filter(
            records,
            &ReportFilter {
                search_term: "534".to_string(),
                date_filter: "15".to_string(),
            },
        );
        assert_eq!(ids(&filtered), ["b"]);
    }

    #[test]
    fn test_sort_toggle_flips_direction() {
        let mut config = SortConfig::default();
        config.toggle(SortKey::Phone);
        assert_eq!(config.key, Some(SortKey::Phone));
        assert_eq!(config.direction, SortDirection::Asc);
        config.toggle(SortKey::Phone);
        assert_eq!(config.direction, SortDirection::Desc);
        config.toggle(SortKey::Date);
        assert_eq!(config.key, Some(SortKey::Date));
        assert_eq!(config.direction, SortDirection::Asc);
    }

    #[test]
    fn test_sort_by_phone_descending_reverses_ascending() {
        let mut records = vec![
            completed("a", "2024-06-01T09:00:00.000Z", "05551234567", "", 1.0, 0.0),
            completed("b", "2024-06-02T09:00:00.000Z", "02161234567", "", 1.0, 0.0),
            completed("c", "2024-06-03T09:00:00.000Z", "05346822282", "", 1.0, 0.0),
        ];
        let mut config = SortConfig::default();
        config.toggle(SortKey::Phone);
        sort_services(&mut records, &config);
        let ascending = ids(&records).into_iter().map(String::from).collect::<Vec<_>>();

        config.toggle(SortKey::Phone);
        sort_services(&mut records, &config);
        let descending = ids(&records);

        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
        assert_eq!(ascending, ["b", "c", "a"]);
    }

    #[test]
    fn test_sort_by_address_uses_turkish_collation() {
        let mut records = vec![
            completed("a", "2024-06-01T09:00:00.000Z", "", "Üsküdar", 1.0, 0.0),
            completed("b", "2024-06-02T09:00:00.000Z", "", "Çengelköy", 1.0, 0.0),
            completed("c", "2024-06-03T09:00:00.000Z", "", "Istanbul", 1.0, 0.0),
        ];
        let mut config = SortConfig::default();
        config.toggle(SortKey::Address);
        sort_services(&mut records, &config);
        assert_eq!(ids(&records), ["b", "c", "a"]);
    }

    #[test]
    fn test_sort_by_remaining_uses_uniform_rate() {
        let mut records = vec![
            completed("low", "2024-06-01T09:00:00.000Z", "", "", 100.0, 50.0),
            completed("high", "2024-06-02T09:00:00.000Z", "", "", 1000.0, 100.0),
        ];
        let config = SortConfig {
            key: Some(SortKey::Remaining),
            direction: SortDirection::Desc,
        };
        sort_services(&mut records, &config);
        assert_eq!(ids(&records), ["high", "low"]);
    }

    #[test]
    fn test_no_sort_key_preserves_order() {
        let mut records = vec![
            completed("z", "2024-06-09T09:00:00.000Z", "", "", 1.0, 0.0),
            completed("a", "2024-06-01T09:00:00.000Z", "", "", 2.0, 0.0),
        ];
        sort_services(&mut records, &SortConfig::default());
        assert_eq!(ids(&records), ["z", "a"]);
    }

    #[test]
    fn test_monthly_report_summary_reflects_filtered_set() {
        let records = vec![
            completed("a", "2024-06-01T09:00:00.000Z", "0534", "Kadıköy", 1000.0, 200.0),
            completed("b", "2024-06-02T09:00:00.000Z", "0555", "Moda", 500.0, 100.0),
        ];
        let report = monthly_report(
            &records,
            6,
            2024,
            &ReportFilter {
                search_term: "kadı".to_string(),
                date_filter: String::new(),
            },
            &SortConfig::default(),
        );
        assert_eq!(report.summary.service_count, 1);
        assert_eq!(report.summary.revenue, 1000.0);
        assert_eq!(ids(&report.services), ["a"]);
    }
}
