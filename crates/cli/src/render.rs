//! Plain-text rendering of the filter panel and product table.

use std::io::{self, Write};

use prodcat_filter::{FilterPanel, ProductTable, Tone};

pub fn panel<W: Write>(out: &mut W, panel: &FilterPanel) -> io::Result<()> {
    let users: Vec<String> = panel
        .user_tabs
        .iter()
        .map(|tab| marked(&tab.label, tab.active))
        .collect();
    writeln!(out, "Users:      {}", users.join(" "))?;

    let clear = if panel.show_clear_button { "  (clear)" } else { "" };
    writeln!(out, "Search:     \"{}\"{clear}", panel.search_value)?;

    let categories: Vec<String> = panel
        .category_buttons
        .iter()
        .map(|button| marked(&button.label, button.selected))
        .collect();
    writeln!(out, "Categories: {}", categories.join(" "))
}

pub fn table<W: Write>(out: &mut W, table: &ProductTable) -> io::Result<()> {
    let rows = match table {
        ProductTable::Empty { message } => return writeln!(out, "{message}"),
        ProductTable::Rows { rows } => rows,
    };

    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            let user = row
                .user
                .as_ref()
                .map(|cell| format!("{} {}", cell.name, tone_marker(cell.tone)))
                .unwrap_or_default();
            [row.id.to_string(), row.name.clone(), row.category.clone(), user]
        })
        .collect();

    let headers = table.headers();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_line(out, headers.iter().copied(), &widths)?;
    for line in &cells {
        write_line(out, line.iter().map(String::as_str), &widths)?;
    }
    Ok(())
}

fn write_line<'a, W: Write>(
    out: &mut W,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> io::Result<()> {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(out, "{}", padded.join(" | ").trim_end())
}

fn marked(label: &str, active: bool) -> String {
    if active {
        format!("[{label}]")
    } else {
        label.to_string()
    }
}

fn tone_marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Link => "[link]",
        Tone::Danger => "[danger]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodcat_catalog::{Catalog, Category, Product, Sex, User};
    use prodcat_filter::{CatalogView, Selection};

    fn view() -> CatalogView {
        let catalog = Catalog::new(
            vec![User::new(1, "Max", Sex::Male), User::new(2, "Eve", Sex::Female)],
            vec![Category::new(10, "Fruits", "F", 1), Category::new(20, "Toys", "T", 2)],
            vec![Product::new(1, "Banana", 10), Product::new(2, "Ball", 20)],
        )
        .unwrap();
        CatalogView::new(catalog)
    }

    fn render_table(view: &CatalogView) -> String {
        let mut out = Vec::new();
        table(&mut out, &view.table()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn panel_marks_active_controls() {
        let mut view = view();
        view.on_select_user(Selection::only("Eve"));
        view.on_name_query_change("ba");

        let mut out = Vec::new();
        panel(&mut out, &view.panel()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Users:      All Max [Eve]"));
        assert!(text.contains("Search:     \"ba\"  (clear)"));
        assert!(text.contains("Categories: [All] Fruits Toys"));
    }

    #[test]
    fn table_aligns_columns_and_marks_tone() {
        let text = render_table(&view());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ID | Product | Category   | User");
        assert_eq!(lines[1], "1  | Banana  | F - Fruits | Max [link]");
        assert_eq!(lines[2], "2  | Ball    | T - Toys   | Eve [danger]");
    }

    #[test]
    fn empty_table_prints_message_only() {
        let mut view = view();
        view.on_name_query_change("zzz");
        assert_eq!(render_table(&view), "No products matching selected criteria\n");
    }
}
