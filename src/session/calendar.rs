use chrono::{Datelike, Local, NaiveDate};

/// Days from `today` until the next 25 December (0 on Christmas Day).
pub fn days_until_christmas(today: NaiveDate) -> i64 {
    let christmas = |year| NaiveDate::from_ymd_opt(year, 12, 25);
    let target = match christmas(today.year()) {
        Some(day) if day >= today => Some(day),
        _ => christmas(today.year() + 1),
    };
    target.map(|day| (day - today).num_days()).unwrap_or(0)
}

pub fn days_until_christmas_from_now() -> i64 {
    days_until_christmas(Local::now().date_naive())
}
