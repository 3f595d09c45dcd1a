use crate::tables::{Align, Column, ColumnFooter, Table};
use mailroom_lib::formatters::Formatter;
use mailroom_lib::reports::{grand_total, ReportRow};

const COLUMN_WIDTH: usize = 20;

pub struct Settings {
    // Whether to add a row with the sum of all donors
    pub totals: bool,
}

/// Which column of the report a cell belongs to
enum ReportColumn {
    Name,
    Total,
    Count,
    Average,
}

pub fn report_view(
    rows: &[ReportRow],
    format: &Formatter,
    table: &crate::tables::Settings,
    settings: &Settings,
) -> String {
    let image = |row: &ReportRow, col: &ReportColumn| match col {
        ReportColumn::Name => row.name.clone(),
        ReportColumn::Total => format.display_in_width(row.total, COLUMN_WIDTH),
        ReportColumn::Count => row.count.to_string(),
        ReportColumn::Average => {
            format.display_in_width(row.average, COLUMN_WIDTH)
        }
    };

    let columns = vec![
        Column::new(ReportColumn::Name, &image)
            .with_title("Donor Name")
            .with_width(COLUMN_WIDTH),
        Column::new(ReportColumn::Total, &image)
            .with_title("Total Given")
            .with_width(COLUMN_WIDTH)
            .with_align(Align::Right),
        Column::new(ReportColumn::Count, &image)
            .with_title("Num Gifts")
            .with_width(COLUMN_WIDTH)
            .with_align(Align::Right),
        Column::new(ReportColumn::Average, &image)
            .with_title("Average Gift")
            .with_width(COLUMN_WIDTH)
            .with_align(Align::Right)
            .with_footer(ColumnFooter::Hide),
    ];

    let mut output = Table::new(columns, table).with_col_headers();
    output.add_rows(rows);
    if settings.totals {
        match grand_total(rows) {
            Some(total) => output.add_footer(&total),
            None => log::warn!("Grand total too large, not shown in report"),
        }
    }
    output.to_string()
}
