//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、原因エラーの保持とメッセージフォーマットを実現する。

use thiserror::Error;

use crate::api::{LogicalColumn, TimeBoundary};

/// xlsx2icsクレート全体で使用するエラー型
///
/// 変換処理は「全か無か」で、どのエラーも変換全体を終了させます。
/// ただし、すでに出力先へ書き込まれたバイトはロールバックされません。
///
/// # エラーの種類
///
/// - `Open`: 入力ファイルを開けない
/// - `Read`: 指定シートを行として取得できない
/// - `EmptySheet` / `MissingColumns`: シート構造の不備
/// - `ShortRow` / `InvalidRow` / `InvalidDateTime`: 行レベルのエラー
/// - `Create` / `Write`: 出力先への書き込み失敗
/// - `Config`: 設定の検証に失敗
/// - `SecurityViolation`: 入力サイズ制限違反
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsx2ics::{convert_excel_to_ical, XlsxToIcsError};
///
/// match convert_excel_to_ical("events.xlsx", "events.ics") {
///     Ok(message) => println!("{}", message),
///     Err(XlsxToIcsError::MissingColumns { sheet }) => {
///         eprintln!("シート '{}' のヘッダーを確認してください", sheet);
///     }
///     Err(e) => eprintln!("{}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum XlsxToIcsError {
    /// 入力ワークブックを開けなかったエラー
    ///
    /// ファイルが存在しない、読み込み権限がない、またはcalamineが
    /// 形式を認識できない場合に発生します。
    #[error("failed to open Excel file '{path}': {source}")]
    Open {
        /// 入力ファイルのパス（リーダーからの場合は`<reader>`）
        path: String,
        #[source]
        source: calamine::Error,
    },

    /// 指定シートを読み込めなかったエラー（シートが存在しない場合を含む）
    #[error("failed to read sheet '{sheet}': {source}")]
    Read {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    /// シートに行が1つもない（ヘッダー行が存在しない）
    #[error("sheet {sheet} is empty")]
    EmptySheet { sheet: String },

    /// 必須列のいずれかがヘッダー行に存在しない
    ///
    /// 不足している列を個別に報告せず、常にひとつのエラーとして返します。
    #[error(
        "sheet '{sheet}' must contain 'Date', 'Start Time', 'End Time', and 'Subject' columns"
    )]
    MissingColumns { sheet: String },

    /// 行のセル数が、マッピングされた列インデックスに満たない
    #[error("row {row_number} has {len} cells but column '{column}' is at index {index}")]
    ShortRow {
        row_number: usize,
        column: LogicalColumn,
        index: usize,
        len: usize,
    },

    /// 日付と時刻の組み合わせがどの書式にも一致しない
    #[error("invalid date/time format: {date} {time}")]
    InvalidDateTime { date: String, time: String },

    /// 行の日付・時刻を解析できなかったエラー
    ///
    /// 診断のため、行番号と行の生のセル値をすべて含みます。
    #[error("invalid date or {boundary} time format in row {row_number} {cells:?}: {source}")]
    InvalidRow {
        row_number: usize,
        boundary: TimeBoundary,
        cells: Vec<String>,
        #[source]
        source: Box<XlsxToIcsError>,
    },

    /// 出力ファイルを作成できなかったエラー
    #[error("failed to create iCal file '{path}': {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 出力への書き込みに失敗したエラー
    #[error("failed to write to iCal file: {0}")]
    Write(#[source] std::io::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時に無効な設定が検出された場合に発生します。
    ///
    /// ```rust,no_run
    /// use xlsx2ics::{ConverterBuilder, XlsxToIcsError};
    ///
    /// let result = ConverterBuilder::new().with_sheet_name("").build();
    /// if let Err(XlsxToIcsError::Config(msg)) = result {
    ///     println!("設定エラー: {}", msg);
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// 入力サイズの上限を超えた
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}
