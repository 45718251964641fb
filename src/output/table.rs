// 3rd party crates
use tabled::builder::Builder;
use tabled::settings::Style;

// Project imports
use crate::report::types::Report;

/// Renders a report as a text table. The column set is picked at runtime, so
/// rows go through the builder API rather than a derived layout. An empty
/// report still renders the header row.
pub fn render_table(report: &Report) -> String {
    let mut builder = Builder::default();
    builder.push_record(report.columns.labels().iter().copied());
    for row in &report.rows {
        builder.push_record(report.columns.project(row));
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::{ColumnSet, ZoneInfo};

    #[test]
    fn renders_header_for_empty_report() {
        let report = Report {
            columns: ColumnSet::Short,
            rows: Vec::new(),
        };
        let rendered = render_table(&report);
        assert!(rendered.contains("Zone Name"));
        assert!(rendered.contains("Zone Status"));
    }

    #[test]
    fn renders_one_line_per_row_plus_header() {
        let report = Report {
            columns: ColumnSet::Short,
            rows: vec![
                ZoneInfo {
                    zone_name: Some("nova".to_string()),
                    zone_status: Some("available".to_string()),
                    ..Default::default()
                },
                ZoneInfo {
                    zone_name: Some("internal".to_string()),
                    zone_status: Some("not available".to_string()),
                    ..Default::default()
                },
            ],
        };
        let rendered = render_table(&report);
        assert!(rendered.contains("nova"));
        assert!(rendered.contains("internal"));
        // Header, separator, two data rows.
        assert_eq!(rendered.lines().count(), 4);
    }

    #[test]
    fn long_layout_renders_service_columns() {
        let report = Report {
            columns: ColumnSet::Long,
            rows: vec![ZoneInfo {
                zone_name: Some("nova".to_string()),
                zone_status: Some("available".to_string()),
                host_name: Some("h1".to_string()),
                service_name: Some("svcA".to_string()),
                service_status: Some("enabled :-) t1".to_string()),
            }],
        };
        let rendered = render_table(&report);
        assert!(rendered.contains("Host Name"));
        assert!(rendered.contains("enabled :-) t1"));
    }
}
