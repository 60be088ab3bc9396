//! # Rendering
//!
//! Messages are printed with `colored`, one line each, colored by level.
//! Listings are drawn as rounded-box tables and returned as strings so the
//! layout can be tested without a terminal.
//!
//! ```text
//! ╭──────┬──────────────┬────────────╮
//! │ Name │ Phone number │ Birthday   │
//! ├──────┼──────────────┼────────────┤
//! │ John │ 5551234567   │ 01-01-2000 │
//! ╰──────┴──────────────┴────────────╯
//! ```
//!
//! Column widths are measured with `unicode-width`, so wide characters in names
//! keep the borders aligned.

use abook::api::{CmdMessage, Listing, MessageLevel};
use abook::record::Record;
use colored::Colorize;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

const NAME_HEADER: &str = "Name";
const PHONE_HEADER: &str = "Phone number";
const BIRTHDAY_HEADER: &str = "Birthday";
const NO_BIRTHDAY: &str = "N/A";
const PHONE_SEPARATOR: &str = ", ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Text for a listing; empty for [`Listing::None`].
pub(super) fn render_listing(listing: &Listing) -> String {
    match listing {
        Listing::None => String::new(),
        Listing::Matches(records) => render_matches(records),
        Listing::All(records) => render_contacts(records),
        Listing::Pages(pages) => {
            let mut out = String::new();
            for (i, page) in pages.iter().enumerate() {
                let _ = writeln!(out, "Page {}:", i + 1);
                out.push_str(&render_contacts(page));
            }
            out
        }
    }
}

/// Search hits: name and phones only.
fn render_matches(records: &[Record]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| vec![r.name().to_string(), joined_phones(r)])
        .collect();
    draw_table(&[NAME_HEADER, PHONE_HEADER], &rows)
}

fn render_contacts(records: &[Record]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.name().to_string(),
                joined_phones(r),
                r.birthday()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| NO_BIRTHDAY.to_string()),
            ]
        })
        .collect();
    draw_table(&[NAME_HEADER, PHONE_HEADER, BIRTHDAY_HEADER], &rows)
}

fn joined_phones(record: &Record) -> String {
    record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(PHONE_SEPARATOR)
}

fn draw_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    border(&mut out, &widths, '╭', '┬', '╮');
    cells(&mut out, &widths, headers.iter().copied());
    border(&mut out, &widths, '├', '┼', '┤');
    for row in rows {
        cells(&mut out, &widths, row.iter().map(String::as_str));
    }
    border(&mut out, &widths, '╰', '┴', '╯');
    out
}

fn border(out: &mut String, widths: &[usize], left: char, mid: char, right: char) {
    out.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(mid);
        }
        out.push_str(&"─".repeat(width + 2));
    }
    out.push(right);
    out.push('\n');
}

fn cells<'a>(out: &mut String, widths: &[usize], values: impl Iterator<Item = &'a str>) {
    out.push('│');
    for (value, width) in values.zip(widths) {
        let padding = width.saturating_sub(value.width());
        let _ = write!(out, " {}{} │", value, " ".repeat(padding));
    }
    out.push('\n');
}
