//! Plain-text tables for the statistics report.
use converter::StatsReport;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Renders rows under a header, every column padded to its widest cell.
pub fn render(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.width());
            }
        }
    }

    let mut out = String::new();
    let header: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    write_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(&mut out, &rule, &widths);
    for row in rows {
        write_row(&mut out, row, &widths);
    }
    out
}

fn write_row(out: &mut String, row: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, width)) in row.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(" | ");
        }
        line.push_str(cell);
        line.extend(std::iter::repeat(' ').take(width.saturating_sub(cell.width())));
    }
    let _ = writeln!(out, "{}", line.trim_end());
}

pub fn categories(report: &StatsReport) -> String {
    let rows: Vec<Vec<String>> = report
        .categories
        .values()
        .map(|c| vec![c.title.to_string(), c.value.to_string(), c.description.to_string()])
        .collect();
    render(&["Category", "Files", "Description"], &rows)
}

pub fn buckets(report: &StatsReport) -> String {
    let mut rows: Vec<Vec<String>> = report
        .buckets
        .iter()
        .map(|(bucket, count)| vec![bucket.clone(), count.to_string()])
        .collect();
    rows.push(vec!["total".into(), report.bucket_total().to_string()]);
    render(&["Directory", "Files with types"], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pads_by_display_width() {
        let rows = vec![
            vec!["日本".to_string(), "1".to_string()],
            vec!["abc".to_string(), "22".to_string()],
        ];
        assert_eq!(
            render(&["name", "n"], &rows),
            "name | n\n---- | --\n日本 | 1\nabc  | 22\n"
        );
    }

    #[test]
    fn bucket_table_ends_with_total() {
        let mut report = StatsReport::default();
        report.buckets.insert("src/a".into(), 2);
        report.buckets.insert("lib".into(), 0);
        let table = buckets(&report);
        let last = table.lines().last().unwrap();
        assert!(last.starts_with("total ") && last.ends_with("| 2"), "{}", table);
    }
}
