//! Composite Date-Time Parser
//!
//! 日付セルと時刻セルのテキストを結合し、固定の書式リストを順に試して
//! タイムゾーンなしの日時へ変換するモジュール。

use chrono::{NaiveDateTime, Timelike};

use crate::error::XlsxToIcsError;

/// 受け付ける日時書式（試行順）
///
/// 複数の書式に一致しうる文字列は、先に一致した書式で解釈されます。
pub const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// iCalendarのタイムスタンプ書式
///
/// 末尾の`Z`はリテラルとして出力され、UTCへの変換は行いません。
pub const ICAL_STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// 日付と時刻のテキストを1つの日時として解析する
///
/// 2つのフィールドを半角スペース1つで結合し、[`DATE_TIME_FORMATS`]を
/// 先頭から順に試します。各フィールドは固定桁数（年4桁、その他2桁）で、
/// 区切りの空白は1つだけです。うるう秒（`:60`）は受け付けません。
///
/// # 戻り値
///
/// * `Ok(NaiveDateTime)` - 秒精度の日時
/// * `Err(XlsxToIcsError::InvalidDateTime)` - どの書式にも一致しない場合（元のテキストをそのまま保持）
///
/// # 使用例
///
/// ```rust
/// use xlsx2ics::parse_date_time;
///
/// let a = parse_date_time("2024-01-10", "09:00:00").unwrap();
/// let b = parse_date_time("10/01/2024", "09:00:00").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_date_time(date: &str, time: &str) -> Result<NaiveDateTime, XlsxToIcsError> {
    let candidate = format!("{} {}", date, time);

    DATE_TIME_FORMATS
        .iter()
        .find_map(|pattern| parse_exact(&candidate, pattern))
        .ok_or_else(|| XlsxToIcsError::InvalidDateTime {
            date: date.to_string(),
            time: time.to_string(),
        })
}

/// 書式どおりの表記に限って解析する
///
/// chronoは桁数の不足や連続した空白を許容するため、解析結果を同じ書式で
/// 再出力し、入力と一致するものだけを採用する。
fn parse_exact(candidate: &str, pattern: &str) -> Option<NaiveDateTime> {
    let parsed = NaiveDateTime::parse_from_str(candidate, pattern).ok()?;
    let canonical = parsed.nanosecond() < 1_000_000_000
        && parsed.format(pattern).to_string() == candidate;
    canonical.then_some(parsed)
}

/// 日時をiCalendarのタイムスタンプ（`YYYYMMDDTHHMMSSZ`）に変換する
pub fn format_ical_stamp(instant: &NaiveDateTime) -> String {
    instant.format(ICAL_STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_iso_with_seconds() {
        let parsed = parse_date_time("2024-01-10", "09:15:30").unwrap();
        assert_eq!(parsed, instant(2024, 1, 10, 9, 15, 30));
    }

    #[test]
    fn test_iso_without_seconds() {
        let parsed = parse_date_time("2024-01-10", "09:15").unwrap();
        assert_eq!(parsed, instant(2024, 1, 10, 9, 15, 0));
    }

    #[test]
    fn test_day_first_with_seconds() {
        let parsed = parse_date_time("10/01/2024", "09:00:00").unwrap();
        assert_eq!(parsed, instant(2024, 1, 10, 9, 0, 0));
    }

    #[test]
    fn test_day_first_without_seconds() {
        let parsed = parse_date_time("31/12/2023", "23:59").unwrap();
        assert_eq!(parsed, instant(2023, 12, 31, 23, 59, 0));
    }

    #[test]
    fn test_day_first_is_not_month_first() {
        // 13番目の月は存在しないため、DD/MM/YYYYでは解釈できない
        assert!(parse_date_time("01/13/2024", "09:00").is_err());
    }

    #[test]
    fn test_equivalent_instants_across_formats() {
        let iso = parse_date_time("2024-01-10", "09:00:00").unwrap();
        let day_first = parse_date_time("10/01/2024", "09:00:00").unwrap();
        assert_eq!(iso, day_first);
    }

    #[test]
    fn test_invalid_keeps_original_text() {
        let result = parse_date_time("Jan 10 2024", "9am");
        match result {
            Err(XlsxToIcsError::InvalidDateTime { date, time }) => {
                assert_eq!(date, "Jan 10 2024");
                assert_eq!(time, "9am");
            }
            other => panic!("Expected InvalidDateTime error, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_text_is_rejected() {
        assert!(parse_date_time("2024-01-10", "09:00:00 PM").is_err());
        assert!(parse_date_time("2024-01-10T", "09:00").is_err());
    }

    #[test]
    fn test_out_of_range_components_are_rejected() {
        assert!(parse_date_time("2024-02-30", "09:00").is_err());
        assert!(parse_date_time("2024-01-10", "24:00").is_err());
    }

    #[test]
    fn test_unpadded_fields_are_rejected() {
        assert!(parse_date_time("2024-1-5", "9:5").is_err());
        assert!(parse_date_time("2024-01-10", "9:00").is_err());
        assert!(parse_date_time("1/1/2024", "09:00").is_err());
        assert!(parse_date_time("24-01-10", "09:00").is_err());
        assert!(parse_date_time("10/01/24", "09:00").is_err());
    }

    #[test]
    fn test_extra_whitespace_is_rejected() {
        assert!(parse_date_time("2024-01-10", " 09:00").is_err());
        assert!(parse_date_time("2024-01-10 ", "09:00").is_err());
        assert!(parse_date_time(" 2024-01-10", "09:00").is_err());
    }

    #[test]
    fn test_leap_second_is_rejected() {
        match parse_date_time("2024-01-10", "23:59:60") {
            Err(XlsxToIcsError::InvalidDateTime { date, time }) => {
                assert_eq!(date, "2024-01-10");
                assert_eq!(time, "23:59:60");
            }
            other => panic!("Expected InvalidDateTime error, got {:?}", other),
        }
        assert!(parse_date_time("31/12/2016", "23:59:60").is_err());
    }

    #[test]
    fn test_format_ical_stamp_appends_literal_z() {
        let stamp = format_ical_stamp(&instant(2024, 1, 10, 9, 0, 0));
        assert_eq!(stamp, "20240110T090000Z");
    }
}
