//! Calendar Writer
//!
//! 固定のプロローグ、イベントブロック、固定のエピローグを順に書き出す。

use std::io::{BufWriter, Write};

use crate::api::DEFAULT_PRODUCT_ID;
use crate::datetime::format_ical_stamp;
use crate::error::XlsxToIcsError;
use crate::types::Event;

/// カレンダー文書のライター
///
/// 状態は「プロローグ書き込み済み → N件のイベント書き込み済み → エピローグ書き込み済み」
/// の順にのみ遷移します。`begin`でプロローグを書き、`write_event`でイベントを追記し、
/// `finish`でエピローグを書いてフラッシュします。`finish`はライターを消費するため、
/// 終了後にイベントを追記することはできません。
///
/// 書き込みに失敗した時点で変換は終了し、それまでに書き込まれた内容は出力先に残ります。
///
/// # 使用例
///
/// ```rust
/// use xlsx2ics::{CalendarWriter, Event};
/// use chrono::NaiveDate;
///
/// # fn main() -> Result<(), xlsx2ics::XlsxToIcsError> {
/// let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let event = Event {
///     subject: "Standup".to_string(),
///     start: day.and_hms_opt(9, 0, 0).unwrap(),
///     end: day.and_hms_opt(10, 0, 0).unwrap(),
/// };
///
/// let mut output = Vec::new();
/// let mut writer = CalendarWriter::begin(&mut output)?;
/// writer.write_event(&event)?;
/// writer.finish()?;
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("DTSTART:20240110T090000Z\n"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CalendarWriter<W: Write> {
    writer: BufWriter<W>,
    events_written: usize,
}

impl<W: Write> CalendarWriter<W> {
    /// 既定のPRODIDでプロローグを書き出す
    pub fn begin(output: W) -> Result<Self, XlsxToIcsError> {
        Self::begin_with_product_id(output, DEFAULT_PRODUCT_ID)
    }

    /// 指定したPRODIDでプロローグを書き出す
    pub fn begin_with_product_id(output: W, product_id: &str) -> Result<Self, XlsxToIcsError> {
        let mut writer = BufWriter::new(output);
        write!(
            writer,
            "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:{}\n",
            product_id
        )
        .map_err(XlsxToIcsError::Write)?;

        Ok(Self {
            writer,
            events_written: 0,
        })
    }

    /// イベントブロックを1件書き出す
    ///
    /// 件名はエスケープせずにそのまま書き出します。
    pub fn write_event(&mut self, event: &Event) -> Result<(), XlsxToIcsError> {
        write!(
            self.writer,
            "BEGIN:VEVENT\nSUMMARY:{}\nDTSTART:{}\nDTEND:{}\nEND:VEVENT\n",
            event.subject,
            format_ical_stamp(&event.start),
            format_ical_stamp(&event.end),
        )
        .map_err(XlsxToIcsError::Write)?;

        self.events_written += 1;
        Ok(())
    }

    /// これまでに書き出したイベント数
    pub fn events_written(&self) -> usize {
        self.events_written
    }

    /// エピローグを書き出し、出力をフラッシュする
    ///
    /// # 戻り値
    ///
    /// * `Ok(usize)` - 書き出したイベント数
    /// * `Err(XlsxToIcsError::Write)` - 書き込みまたはフラッシュに失敗した場合
    pub fn finish(mut self) -> Result<usize, XlsxToIcsError> {
        self.writer
            .write_all(b"END:VCALENDAR\n")
            .map_err(XlsxToIcsError::Write)?;
        self.writer.flush().map_err(XlsxToIcsError::Write)?;
        Ok(self.events_written)
    }
}
