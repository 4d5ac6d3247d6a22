//! Public API Types
//!
//! 公開APIで使用する列挙型と既定値を定義するモジュール。

use std::fmt;

/// 既定で読み込むシート名
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// 既定のPRODID（カレンダーの製品識別子）
pub const DEFAULT_PRODUCT_ID: &str = "-//Excel to iCal Conversion//example.com//";

/// 変換成功時に呼び出し元へ返すメッセージ
pub const SUCCESS_MESSAGE: &str = "Conversion successful!";

/// 論理列
///
/// スプレッドシートの列が担うべき役割です。列は位置ではなく、
/// ヘッダー行のテキストで識別されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalColumn {
    /// 日付（ヘッダー: `Date`）
    Date,
    /// 開始時刻（ヘッダー: `Start Time`）
    StartTime,
    /// 終了時刻（ヘッダー: `End Time`）
    EndTime,
    /// 件名（ヘッダー: `Subject`）
    Subject,
}

impl LogicalColumn {
    /// すべての論理列（マッピングの解決順）
    pub const ALL: [LogicalColumn; 4] = [
        LogicalColumn::Date,
        LogicalColumn::StartTime,
        LogicalColumn::EndTime,
        LogicalColumn::Subject,
    ];

    /// ヘッダー行で一致させるテキスト（大文字小文字・空白を区別）
    pub const fn header(self) -> &'static str {
        match self {
            LogicalColumn::Date => "Date",
            LogicalColumn::StartTime => "Start Time",
            LogicalColumn::EndTime => "End Time",
            LogicalColumn::Subject => "Subject",
        }
    }

    /// ヘッダーテキストから論理列を引く（完全一致のみ）
    pub fn from_header(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.header() == text)
    }
}

impl fmt::Display for LogicalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// イベントの開始・終了のどちらかを表す
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBoundary {
    /// 開始日時（`Date` + `Start Time`）
    Start,
    /// 終了日時（`Date` + `End Time`）
    End,
}

impl fmt::Display for TimeBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeBoundary::Start => f.write_str("start"),
            TimeBoundary::End => f.write_str("end"),
        }
    }
}
