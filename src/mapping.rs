//! Column Mapping Module
//!
//! ヘッダー行のテキストから、論理列（Date, Start Time, End Time, Subject）の
//! 列位置を解決するモジュール。

use crate::api::LogicalColumn;
use crate::error::XlsxToIcsError;
use crate::types::Row;

/// 論理列から列位置へのマッピング
///
/// 4つの論理列すべてが解決済みであることが、構築時に保証されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    date: usize,
    start_time: usize,
    end_time: usize,
    subject: usize,
}

impl ColumnMapping {
    /// ヘッダー行から列位置を解決する
    ///
    /// ヘッダーセルを左から右へ走査し、論理列名と完全一致（大文字小文字の
    /// 同一視やトリムなし）したセルの位置を記録します。同じヘッダーが
    /// 複数ある場合は、最も右の位置が残ります。
    ///
    /// # 引数
    ///
    /// * `sheet` - エラーメッセージに含めるシート名
    /// * `headers` - ヘッダー行のセル
    ///
    /// # 戻り値
    ///
    /// * `Ok(ColumnMapping)` - 4列すべてが見つかった場合
    /// * `Err(XlsxToIcsError::MissingColumns)` - 1列でも欠けている場合（まとめて1つのエラー）
    pub fn resolve<S: AsRef<str>>(sheet: &str, headers: &[S]) -> Result<Self, XlsxToIcsError> {
        let mut positions: [Option<usize>; 4] = [None; 4];

        for (index, header) in headers.iter().enumerate() {
            if let Some(column) = LogicalColumn::from_header(header.as_ref()) {
                positions[Self::slot(column)] = Some(index);
            }
        }

        match positions {
            [Some(date), Some(start_time), Some(end_time), Some(subject)] => Ok(Self {
                date,
                start_time,
                end_time,
                subject,
            }),
            _ => Err(XlsxToIcsError::MissingColumns {
                sheet: sheet.to_string(),
            }),
        }
    }

    /// 論理列の列位置（0始まり）
    pub fn index_of(&self, column: LogicalColumn) -> usize {
        match column {
            LogicalColumn::Date => self.date,
            LogicalColumn::StartTime => self.start_time,
            LogicalColumn::EndTime => self.end_time,
            LogicalColumn::Subject => self.subject,
        }
    }

    /// 行から論理列のセルを取り出す
    ///
    /// 行が短すぎる場合は`ShortRow`エラー（変換全体の失敗）となります。
    pub fn field<'r>(&self, row: &'r Row, column: LogicalColumn) -> Result<&'r str, XlsxToIcsError> {
        let index = self.index_of(column);
        row.cell(index).ok_or_else(|| XlsxToIcsError::ShortRow {
            row_number: row.number,
            column,
            index,
            len: row.len(),
        })
    }

    fn slot(column: LogicalColumn) -> usize {
        match column {
            LogicalColumn::Date => 0,
            LogicalColumn::StartTime => 1,
            LogicalColumn::EndTime => 2,
            LogicalColumn::Subject => 3,
        }
    }
}
