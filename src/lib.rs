//! xlsx2ics - Pure-Rust Excel event sheet to iCalendar converter
//!
//! このクレートは、スプレッドシートの表形式イベントデータ（日付、開始時刻、終了時刻、件名）を
//! 読み込み、iCalendar形式のカレンダーファイルを出力します。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xlsx2ics::convert_excel_to_ical;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // `Sheet1` のヘッダー行に Date, Start Time, End Time, Subject が必要
//!     let message = convert_excel_to_ical("events.xlsx", "events.ics")?;
//!     println!("{}", message);
//!     Ok(())
//! }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use xlsx2ics::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new()
//!         .with_sheet_name("Schedule")
//!         .with_product_id("-//Acme//Planner//EN")
//!         .build()?;
//!
//!     let report = converter.convert_file("schedule.xlsx", "schedule.ics")?;
//!     println!("{} events written, {} rows skipped", report.events_written, report.rows_skipped);
//!     Ok(())
//! }
//! ```
//!
//! # Convert to String
//!
//! ```rust,no_run
//! use std::fs::File;
//! use xlsx2ics::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new().build()?;
//!     let input = File::open("events.xlsx")?;
//!     let calendar = converter.convert_to_string(input)?;
//!     println!("{}", calendar);
//!     Ok(())
//! }
//! ```
//!
//! # 出力形式
//!
//! ```text
//! BEGIN:VCALENDAR
//! VERSION:2.0
//! PRODID:-//Excel to iCal Conversion//example.com//
//! BEGIN:VEVENT
//! SUMMARY:Standup
//! DTSTART:20240110T090000Z
//! DTEND:20240110T100000Z
//! END:VEVENT
//! END:VCALENDAR
//! ```
//!
//! `DTSTART`/`DTEND`末尾の`Z`はリテラルです。日時はタイムゾーン変換されずに出力されます。

mod api;
mod builder;
mod datetime;
mod error;
mod event;
mod formatter;
mod mapping;
mod output;
mod parser;
mod security;
mod types;

use std::path::Path;

// 公開API
pub use api::{
    LogicalColumn, TimeBoundary, DEFAULT_PRODUCT_ID, DEFAULT_SHEET_NAME, SUCCESS_MESSAGE,
};
pub use builder::{ConversionReport, Converter, ConverterBuilder};
pub use datetime::{format_ical_stamp, parse_date_time, DATE_TIME_FORMATS, ICAL_STAMP_FORMAT};
pub use error::XlsxToIcsError;
pub use event::event_from_row;
pub use mapping::ColumnMapping;
pub use output::CalendarWriter;
pub use types::{Event, Row};

/// 既定設定（シート`Sheet1`）でスプレッドシートをカレンダーファイルへ変換する
///
/// # 戻り値
///
/// * `Ok(String)` - 成功メッセージ（`Conversion successful!`）
/// * `Err(XlsxToIcsError)` - 変換に失敗した場合
pub fn convert_excel_to_ical<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
) -> Result<String, XlsxToIcsError> {
    let report = ConverterBuilder::new()
        .build()?
        .convert_file(source, destination)?;
    Ok(report.message().to_string())
}
