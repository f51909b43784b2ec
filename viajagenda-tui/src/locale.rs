//! pt-BR calendar helpers. The API speaks `yyyy-MM-dd`; the screens speak
//! Portuguese.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month, Weekday};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const BR_DATE: &[BorrowedFormatItem<'static>] = format_description!("[day]/[month]/[year]");

fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "janeiro",
        Month::February => "fevereiro",
        Month::March => "março",
        Month::April => "abril",
        Month::May => "maio",
        Month::June => "junho",
        Month::July => "julho",
        Month::August => "agosto",
        Month::September => "setembro",
        Month::October => "outubro",
        Month::November => "novembro",
        Month::December => "dezembro",
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "domingo",
        Weekday::Monday => "segunda-feira",
        Weekday::Tuesday => "terça-feira",
        Weekday::Wednesday => "quarta-feira",
        Weekday::Thursday => "quinta-feira",
        Weekday::Friday => "sexta-feira",
        Weekday::Saturday => "sábado",
    }
}

/// Parse a `yyyy-MM-dd` string into a calendar date.
///
/// Every part must be made of ASCII digits and the result must be a real
/// date: `2024-02-30` is rejected rather than rolled over into March.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    let mut parts = raw.trim().split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !(numeric(year) && numeric(month) && numeric(day)) {
        return None;
    }

    let year: i32 = year.parse().ok()?;
    let month = Month::try_from(month.parse::<u8>().ok()?).ok()?;
    let day: u8 = day.parse().ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

// A date-only description never lacks a component, so formatting cannot fail.
pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_default()
}

/// "março de 2024"
pub fn month_label(date: Date) -> String {
    format!("{} de {}", month_name(date.month()), date.year())
}

/// "terça-feira, 5 de março"
pub fn day_label(date: Date) -> String {
    format!(
        "{}, {} de {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date.month())
    )
}

/// `yyyy-MM-dd` to `dd/MM/yyyy`. Values that do not parse are returned as-is.
pub fn format_date_br(raw: &str) -> String {
    parse_iso_date(raw)
        .and_then(|date| date.format(BR_DATE).ok())
        .unwrap_or_else(|| raw.to_string())
}

/// Uppercase the first character, for headings such as "Março de 2024".
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_valid_iso_dates() {
        assert_eq!(parse_iso_date("2024-03-05"), Some(date!(2024 - 03 - 05)));
        assert_eq!(parse_iso_date("2024-2-9"), Some(date!(2024 - 02 - 09)));
    }

    #[test]
    fn rejects_malformed_or_impossible_dates() {
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("2024-03"), None);
        assert_eq!(parse_iso_date("2024-03-05-01"), None);
        assert_eq!(parse_iso_date("2024-xx-05"), None);
        assert_eq!(parse_iso_date("2024--05"), None);
        assert_eq!(parse_iso_date("2024-13-01"), None);
        assert_eq!(parse_iso_date("2024-02-30"), None);
        assert_eq!(parse_iso_date("05/03/2024"), None);
    }

    #[test]
    fn labels_in_portuguese() {
        let d = date!(2024 - 03 - 05);
        assert_eq!(month_label(d), "março de 2024");
        assert_eq!(day_label(d), "terça-feira, 5 de março");
        assert_eq!(capitalize(&month_label(d)), "Março de 2024");
    }

    #[test]
    fn formats_brazilian_dates() {
        assert_eq!(format_date_br("2024-03-05"), "05/03/2024");
        assert_eq!(format_date_br("amanhã"), "amanhã");
        assert_eq!(format_date_br("2024-2-9"), "09/02/2024");
        assert_eq!(format_iso_date(date!(2025 - 12 - 01)), "2025-12-01");
        assert_eq!(format_iso_date(date!(0987 - 01 - 31)), "0987-01-31");
    }
}
