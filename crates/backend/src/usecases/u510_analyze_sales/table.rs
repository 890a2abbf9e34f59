use contracts::usecases::u510_analyze_sales::SellerReport;

use crate::shared::format::{format_money, format_number};

/// Текстовая таблица отчёта для вывода в терминал
pub fn render_table(reports: &[SellerReport]) -> String {
    let headers = [
        "#", "Seller", "Name", "Revenue", "Profit", "Sales", "Bonus", "Top products",
    ];
    let rows: Vec<[String; 8]> = reports
        .iter()
        .enumerate()
        .map(|(index, report)| {
            [
                (index + 1).to_string(),
                report.seller_id.clone(),
                report.name.clone(),
                format_money(report.revenue),
                format_money(report.profit),
                format_number(report.sales_count),
                format_money(report.bonus),
                report
                    .top_products
                    .iter()
                    .map(|p| format!("{} x{}", p.sku, format_number(p.quantity)))
                    .collect::<Vec<_>>()
                    .join(", "),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().map(|h| h.to_string()), &widths);
    push_row(&mut out, widths.iter().map(|w| "-".repeat(*w)), &widths);
    for row in rows {
        push_row(&mut out, row.into_iter(), &widths);
    }
    out
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let line = cells
        .zip(widths.iter())
        .enumerate()
        .map(|(column, (cell, width))| {
            let pad = width.saturating_sub(cell.chars().count());
            // числовые колонки выравниваются вправо
            if (3..=6).contains(&column) {
                format!("{}{}", " ".repeat(pad), cell)
            } else {
                format!("{}{}", cell, " ".repeat(pad))
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u510_analyze_sales::TopProduct;

    #[test]
    fn test_render_table() {
        let reports = vec![SellerReport {
            seller_id: "seller_1".to_string(),
            name: "Ivan Petrov".to_string(),
            revenue: 12345.6,
            profit: 2000.0,
            sales_count: 1500,
            top_products: vec![
                TopProduct { sku: "A".into(), quantity: 3 },
                TopProduct { sku: "B".into(), quantity: 1 },
            ],
            bonus: 300.0,
        }];

        let table = render_table(&reports);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("# | Seller"));
        assert!(lines[2].contains("12.345,60"));
        assert!(lines[2].contains("1.500"));
        assert!(lines[2].ends_with("A x3, B x1"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&[]).lines().count(), 2);
    }
}
