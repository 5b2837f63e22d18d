use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Sheet names carry the submission day, e.g. "21-08-2026".
pub fn sheet_name_for(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Date cells and memo filenames use the short month form, e.g. "01-May-2024".
pub fn cell_date(date: NaiveDate) -> String {
    date.format("%d-%b-%Y").to_string()
}

/// Memo date line, e.g. "21 August, 2026".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%d %B, %Y").to_string()
}

/// Default repair date on submission: the first day of the previous month.
pub fn first_day_of_previous_month(today: NaiveDate) -> NaiveDate {
    let first_of_current = today.with_day(1).unwrap();
    let last_of_previous = first_of_current.pred_opt().unwrap();
    last_of_previous.with_day(1).unwrap()
}
