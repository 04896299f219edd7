use crate::Result;
use crate::hosting::RepositoryRecord;
use core::fmt::Write;

const COLUMN_COUNT: usize = 8;
const COLUMN_SEPARATOR: &str = " | ";

pub const HEADER: [&str; COLUMN_COUNT] = [
    "Name",
    "IsFork",
    "Parent Repo",
    "Stargazers",
    "Watchers",
    "Open Issues",
    "License",
    "Default Branch",
];

/// Render the records as a right-aligned table, header first, one row per record.
///
/// Records are written in the order given; sorting happens before this is called.
pub fn generate<W: Write>(records: &[RepositoryRecord], writer: &mut W) -> Result<()> {
    let rows: Vec<[String; COLUMN_COUNT]> = records.iter().map(row_cells).collect();
    let header = HEADER.map(String::from);

    let mut widths = [0usize; COLUMN_COUNT];
    for cells in core::iter::once(&header).chain(&rows) {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(writer, &header, &widths)?;
    for cells in &rows {
        write_row(writer, cells, &widths)?;
    }

    Ok(())
}

fn row_cells(record: &RepositoryRecord) -> [String; COLUMN_COUNT] {
    [
        record.full_name.clone(),
        record.is_fork.to_string(),
        record.fork_parent().unwrap_or_default().to_string(),
        record.stargazers_count.to_string(),
        record.watchers_count.to_string(),
        record.open_issues_count.to_string(),
        record.license_name().unwrap_or_default().to_string(),
        record.default_branch.clone(),
    ]
}

fn write_row<W: Write>(writer: &mut W, cells: &[String; COLUMN_COUNT], widths: &[usize; COLUMN_COUNT]) -> Result<()> {
    for (index, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            writer.write_str(COLUMN_SEPARATOR)?;
        }
        write!(writer, "{cell:>width$}")?;
    }
    writeln!(writer)?;

    Ok(())
}
