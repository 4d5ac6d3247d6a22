//! Formatter Module
//!
//! calamineのセル値をテキストへ変換するモジュール。
//! 日付・時刻書式のセルは、日時パーサーが受け付けるテキストへ変換します。

use calamine::{Data, ExcelDateTime};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// セルフォーマッター
///
/// セル値の型ごとに、抽出器へ渡すテキスト表現を決定します。
#[derive(Debug, Default)]
pub(crate) struct CellFormatter;

impl CellFormatter {
    /// 新しいCellFormatterインスタンスを生成
    pub fn new() -> Self {
        Self
    }

    /// セル値をテキストに変換
    ///
    /// | セル値 | 出力 |
    /// | --- | --- |
    /// | 文字列 | そのまま |
    /// | 整数・浮動小数点数 | 最短の10進表記（`1`, `2.5`） |
    /// | 論理値 | `TRUE` / `FALSE` |
    /// | 日付・時刻 | `HH:MM:SS`、`YYYY-MM-DD`、または`YYYY-MM-DD HH:MM:SS` |
    /// | エラー値 | エラーコード |
    /// | 空セル | 空文字列 |
    pub fn format_cell(&self, cell: &Data) -> String {
        match cell {
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => f.to_string(),
            Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            Data::DateTime(dt) => self.format_excel_datetime(dt),
            Data::DateTimeIso(s) => self.format_iso_datetime(s),
            Data::DurationIso(s) => s.clone(),
            Data::Error(e) => format!("{:?}", e),
            _ => String::new(),
        }
    }

    /// Excelのシリアル日時をテキストに変換
    ///
    /// シリアル値が1未満のセルは時刻のみ、時刻部分が0時ちょうどのセルは
    /// 日付のみとして扱います。1900年・1904年エポックの判定はcalamineに委ねます。
    fn format_excel_datetime(&self, dt: &ExcelDateTime) -> String {
        let Some(datetime) = dt.as_datetime() else {
            return dt.as_f64().to_string();
        };

        if dt.is_datetime() && dt.as_f64() < 1.0 {
            datetime.time().format("%H:%M:%S").to_string()
        } else {
            render_datetime(&datetime)
        }
    }

    /// OpenDocument形式のISO日時文字列をテキストに変換
    ///
    /// 解釈できない場合は元の文字列を返します。
    fn format_iso_datetime(&self, s: &str) -> String {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return render_datetime(&datetime);
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return date.format("%Y-%m-%d").to_string();
        }
        if let Ok(time) = NaiveTime::parse_from_str(s, "%H:%M:%S%.f") {
            return time.format("%H:%M:%S").to_string();
        }
        s.to_string()
    }
}

fn render_datetime(datetime: &NaiveDateTime) -> String {
    if datetime.time() == NaiveTime::MIN {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
