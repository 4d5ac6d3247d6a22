//! Row-to-Event Parser
//!
//! マッピング済みの行を`Event`へ変換するモジュール。

use tracing::debug;

use crate::api::{LogicalColumn, TimeBoundary};
use crate::datetime::parse_date_time;
use crate::error::XlsxToIcsError;
use crate::mapping::ColumnMapping;
use crate::types::{Event, Row};

/// 行をイベントへ変換する
///
/// # 戻り値
///
/// * `Ok(Some(Event))` - 4フィールドがすべて揃い、日時を解析できた場合
/// * `Ok(None)` - いずれかのフィールドが空文字列の場合（通常のデータとしてスキップ）
/// * `Err(XlsxToIcsError::ShortRow)` - 行がマッピングされた列より短い場合
/// * `Err(XlsxToIcsError::InvalidRow)` - 開始または終了日時を解析できない場合
pub fn event_from_row(row: &Row, mapping: &ColumnMapping) -> Result<Option<Event>, XlsxToIcsError> {
    let date = mapping.field(row, LogicalColumn::Date)?;
    let start_time = mapping.field(row, LogicalColumn::StartTime)?;
    let end_time = mapping.field(row, LogicalColumn::EndTime)?;
    let subject = mapping.field(row, LogicalColumn::Subject)?;

    if [date, start_time, end_time, subject]
        .iter()
        .any(|field| field.is_empty())
    {
        debug!(row = row.number, "skipping row with empty fields");
        return Ok(None);
    }

    let start = parse_date_time(date, start_time)
        .map_err(|e| invalid_row(row, TimeBoundary::Start, e))?;
    let end =
        parse_date_time(date, end_time).map_err(|e| invalid_row(row, TimeBoundary::End, e))?;

    Ok(Some(Event {
        subject: subject.to_string(),
        start,
        end,
    }))
}

fn invalid_row(row: &Row, boundary: TimeBoundary, source: XlsxToIcsError) -> XlsxToIcsError {
    XlsxToIcsError::InvalidRow {
        row_number: row.number,
        boundary,
        cells: row.cells.clone(),
        source: Box::new(source),
    }
}
