use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel, PageSummary};
use roster::i18n::Translator;
use roster::listing::{format_display_date, PageLink, ViewMode};
use roster::model::Employee;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMN_GAP: &str = "  ";
const MAX_COLUMN_WIDTH: usize = 28;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(crate) fn print_employees(employees: &[Employee], view: ViewMode, tr: &Translator) {
    if employees.is_empty() {
        println!("{}", tr.translate("noRecords"));
        return;
    }
    match view {
        ViewMode::Table => print_table(employees, tr),
        ViewMode::List => {
            for (i, employee) in employees.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_card(employee, tr);
            }
        }
    }
}

pub(crate) fn print_employee(employee: &Employee, tr: &Translator) {
    print_card(employee, tr);
}

pub(crate) fn print_page_summary(page: &PageSummary, tr: &Translator) {
    let links: Vec<String> = page
        .links
        .iter()
        .map(|link| match link {
            PageLink::Page {
                number,
                active: true,
            } => format!("[{}]", number).bold().to_string(),
            PageLink::Page { number, .. } => number.to_string(),
            PageLink::Ellipsis => "…".to_string(),
        })
        .collect();
    println!(
        "{} {}/{}  {}",
        tr.translate("page").dimmed(),
        page.current_page,
        page.total_pages,
        links.join(" ")
    );
}

fn row(employee: &Employee, tr: &Translator) -> Vec<String> {
    let d = &employee.details;
    vec![
        employee.id.clone(),
        d.first_name.clone(),
        d.last_name.clone(),
        format_display_date(&d.date_of_employment),
        format_display_date(&d.date_of_birth),
        d.phone.clone(),
        d.email.clone(),
        tr.translate(d.department.label_key()).to_string(),
        tr.translate(d.position.label_key()).to_string(),
    ]
}

fn print_table(employees: &[Employee], tr: &Translator) {
    let header: Vec<String> = [
        "id",
        "firstName",
        "lastName",
        "dateOfEmployment",
        "dateOfBirth",
        "phone",
        "email",
        "department",
        "position",
    ]
    .iter()
    .map(|key| tr.translate(key).to_string())
    .collect();
    let rows: Vec<Vec<String>> = employees.iter().map(|e| row(e, tr)).collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|r| r[col].width())
                .chain(std::iter::once(header[col].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    println!("{}", format_row(&header, &widths).bold());
    for r in &rows {
        println!("{}", format_row(r, &widths));
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(col, (cell, width))| {
            // ids are never truncated; they are what edit and delete take
            let limit = if col == 0 { *width } else { (*width).min(MAX_COLUMN_WIDTH) };
            let text = truncate_to_width(cell, limit);
            let padding = limit.saturating_sub(text.width());
            format!("{}{}", text, " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

fn print_card(employee: &Employee, tr: &Translator) {
    let d = &employee.details;
    println!(
        "{} {}",
        employee.full_name().bold(),
        employee.id.dimmed()
    );
    let lines = [
        ("dateOfEmployment", format_display_date(&d.date_of_employment)),
        ("dateOfBirth", format_display_date(&d.date_of_birth)),
        ("phone", d.phone.clone()),
        ("email", d.email.clone()),
        ("department", tr.translate(d.department.label_key()).to_string()),
        ("position", tr.translate(d.position.label_key()).to_string()),
    ];
    let label_width = lines
        .iter()
        .map(|(key, _)| tr.translate(key).width())
        .max()
        .unwrap_or(0);
    for (key, value) in &lines {
        let label = tr.translate(key);
        let padding = label_width.saturating_sub(label.width());
        println!(
            "  {}{}  {}",
            label.dimmed(),
            " ".repeat(padding),
            value
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
