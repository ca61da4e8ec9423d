//! `If-Match` values from the timestamps the backend sends.
//!
//! Timestamps arrive either as RFC 3339 strings or as tuples:
//! `[year, month, day, hour, minute, second, nanos]` or the ordinal form
//! `[year, day_of_year, hour, minute, second, nanos]`. All of them are turned
//! into `YYYY-MM-DDTHH:MM:SS[.fraction]Z`.

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat};
use serde_json::Value;

use super::client::normalize_if_match;

/// `If-Match` value for `updated_at`, or an empty string when it can't be
/// read.
pub fn timestamp_to_if_match(value: &Value) -> String {
	match value {
		Value::String(s) => normalize_if_match(s).to_string(),
		Value::Array(parts) => {
			let parts: Vec<i64> = parts.iter().map(|p| p.as_i64().unwrap_or(0)).collect();
			from_tuple(&parts).unwrap_or_default()
		}
		Value::Number(n) => n
			.as_i64()
			.filter(|ms| *ms != 0)
			.and_then(DateTime::from_timestamp_millis)
			.map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true))
			.unwrap_or_default(),
		_ => String::new(),
	}
}

fn from_tuple(parts: &[i64]) -> Option<String> {
	let at = |i: usize| parts.get(i).copied().unwrap_or(0);

	if parts.len() >= 3 && (1..=12).contains(&at(1)) && (1..=31).contains(&at(2)) {
		let (year, month, day) = (at(0), at(1), at(2));
		if year == 0 {
			return None;
		}
		return Some(format_utc(year, month, day, at(3), at(4), at(5), at(6)));
	}

	if parts.len() >= 6 {
		let (year, ordinal) = (at(0), at(1));
		if year == 0 || ordinal <= 0 {
			return None;
		}
		let date = NaiveDate::from_yo_opt(i32::try_from(year).ok()?, u32::try_from(ordinal).ok()?)?;
		return Some(format_utc(
			year,
			i64::from(date.month()),
			i64::from(date.day()),
			at(2),
			at(3),
			at(4),
			at(5),
		));
	}

	None
}

fn format_utc(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64, nanos: i64) -> String {
	let base = format!("{year}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}");
	if nanos > 0 {
		let fraction = format!("{nanos:09}");
		format!("{base}.{}Z", fraction.trim_end_matches('0'))
	} else {
		format!("{base}Z")
	}
}
