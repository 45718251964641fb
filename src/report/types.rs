/// One row of the availability zone report.
///
/// Fields are filled in by the expanders; a `None` means the source zone did
/// not carry that attribute, and it renders as an empty cell. Rows are built
/// by cloning an immutable base record, so no two rows share storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ZoneInfo {
    pub zone_name: Option<String>,
    pub zone_status: Option<String>,
    pub host_name: Option<String>,
    pub service_name: Option<String>,
    pub service_status: Option<String>,
}

/// The fixed column layouts of the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSet {
    /// Zone name and status only.
    Short,
    /// Adds the per-host service breakdown columns.
    Long,
}

impl ColumnSet {
    /// Ordered column labels for this layout.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            ColumnSet::Short => &["Zone Name", "Zone Status"],
            ColumnSet::Long => &[
                "Zone Name",
                "Zone Status",
                "Host Name",
                "Service Name",
                "Service Status",
            ],
        }
    }

    /// Projects a row down to exactly this layout's columns, in label order.
    /// Absent values render as empty strings, never as placeholders.
    pub fn project(&self, info: &ZoneInfo) -> Vec<String> {
        let mut cells = vec![
            info.zone_name.clone().unwrap_or_default(),
            info.zone_status.clone().unwrap_or_default(),
        ];
        if let ColumnSet::Long = self {
            cells.push(info.host_name.clone().unwrap_or_default());
            cells.push(info.service_name.clone().unwrap_or_default());
            cells.push(info.service_status.clone().unwrap_or_default());
        }
        cells
    }
}

/// Which branches to query and at which detail level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRequest {
    /// Include compute availability zones.
    pub compute: bool,
    /// Include block storage availability zones.
    pub volume: bool,
    /// Emit the five-column report instead of the two-column one.
    pub long: bool,
}

/// A finished report: the selected columns plus all accumulated rows.
#[derive(Debug, Clone)]
pub struct Report {
    pub columns: ColumnSet,
    pub rows: Vec<ZoneInfo>,
}
