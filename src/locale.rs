//! Locale tables for labels and amount formatting
//!
//! Range labels and day section headers are locale-sensitive, so the tables
//! are passed in explicitly rather than read from the environment. Italian
//! and English tables are built in; hosts can construct others.

use chrono::{Datelike, NaiveDate};

/// Month and weekday name tables used when rendering range labels
#[derive(Debug, Clone)]
pub struct RangeLocale {
    months: [&'static str; 12],
    months_short: [&'static str; 12],
    weekdays: [&'static str; 7],
    today: &'static str,
    yesterday: &'static str,
}

impl RangeLocale {
    /// Build a locale from explicit tables
    ///
    /// Months and weekdays are 1-based January-first and Monday-first.
    pub fn new(
        months: [&'static str; 12],
        months_short: [&'static str; 12],
        weekdays: [&'static str; 7],
        today: &'static str,
        yesterday: &'static str,
    ) -> Self {
        Self {
            months,
            months_short,
            weekdays,
            today,
            yesterday,
        }
    }

    /// Italian tables ("maggio", "mag", "lunedì")
    pub fn italian() -> Self {
        Self {
            months: [
                "gennaio",
                "febbraio",
                "marzo",
                "aprile",
                "maggio",
                "giugno",
                "luglio",
                "agosto",
                "settembre",
                "ottobre",
                "novembre",
                "dicembre",
            ],
            months_short: [
                "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
            ],
            weekdays: [
                "lunedì",
                "martedì",
                "mercoledì",
                "giovedì",
                "venerdì",
                "sabato",
                "domenica",
            ],
            today: "oggi",
            yesterday: "ieri",
        }
    }

    /// English tables ("May", "May", "Monday")
    pub fn english() -> Self {
        Self {
            months: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            months_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            weekdays: [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ],
            today: "today",
            yesterday: "yesterday",
        }
    }

    /// Full month name with the first letter capitalized (1-based month)
    pub fn month_name(&self, month: u32) -> String {
        capitalize(self.months[month_index(month)])
    }

    /// Abbreviated month name, as the locale writes it (1-based month)
    pub fn month_abbrev(&self, month: u32) -> &'static str {
        self.months_short[month_index(month)]
    }

    /// Weekday name for a date
    pub fn weekday_name(&self, date: NaiveDate) -> &'static str {
        self.weekdays[date.weekday().num_days_from_monday() as usize]
    }

    /// Uppercased section header for a calendar day in a grouped history list
    ///
    /// Today and yesterday get their dedicated words; any other day renders
    /// as "WEEKDAY, D MONTH".
    pub fn day_section_label(&self, day: NaiveDate, today: NaiveDate) -> String {
        if day == today {
            return self.today.to_uppercase();
        }
        if today.pred_opt() == Some(day) {
            return self.yesterday.to_uppercase();
        }
        format!(
            "{}, {} {}",
            self.weekday_name(day),
            day.day(),
            self.months[month_index(day.month())]
        )
        .to_uppercase()
    }
}

fn month_index(month: u32) -> usize {
    (month.clamp(1, 12) - 1) as usize
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Decimal and grouping separators for rendering amounts
///
/// Always renders two fraction digits, e.g. `1.234,56` with the Italian
/// separators.
#[derive(Debug, Clone, Copy)]
pub struct AmountFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl AmountFormat {
    /// Italian style: comma decimals, dot grouping
    pub fn italian() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }

    /// English style: dot decimals, comma grouping
    pub fn english() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }

    /// Render an amount with two fraction digits and grouped thousands
    pub fn format(&self, amount: f64) -> String {
        let cents = (amount.abs() * 100.0).round() as i64;
        let int_str = (cents / 100).to_string();

        let mut out = String::new();
        if amount < 0.0 && cents > 0 {
            out.push('-');
        }
        for (i, ch) in int_str.chars().enumerate() {
            if i > 0 && (int_str.len() - i) % 3 == 0 {
                out.push(self.grouping_separator);
            }
            out.push(ch);
        }
        out.push(self.decimal_separator);
        out.push_str(&format!("{:02}", cents % 100));
        out
    }
}
