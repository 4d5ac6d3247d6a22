//! Workbook Parser
//!
//! calamineのラッパーとして、ワークブックを開き、指定シートのヘッダー行を
//! 解決してデータ行を抽出します。

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Reader, Sheets};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use tracing::debug;

use crate::error::XlsxToIcsError;
use crate::formatter::CellFormatter;
use crate::mapping::ColumnMapping;
use crate::security::SecurityConfig;
use crate::types::Row;

/// リーダーから開いた場合にエラーメッセージで使うパス表記
const READER_PATH: &str = "<reader>";

/// シート抽出結果
///
/// 解決済みの列マッピングと、ヘッダー行を除いたデータ行を保持します。
#[derive(Debug, Clone)]
pub(crate) struct SheetExtraction {
    /// 抽出したシート名
    pub sheet: String,

    /// 論理列のマッピング
    pub mapping: ColumnMapping,

    /// ヘッダー行以降の行
    pub rows: Vec<Row>,
}

/// ワークブックパーサー
///
/// calamineが対応する形式（xlsx, xlsm, xlsb, xls, ods）を拡張子または内容から判定します。
pub(crate) struct WorkbookParser<RS: Read + Seek> {
    workbook: Sheets<RS>,
    formatter: CellFormatter,
}

impl WorkbookParser<BufReader<File>> {
    /// パスからワークブックを開く
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - 読み込みに成功した場合
    /// * `Err(XlsxToIcsError::Open)` - ファイルが読めない、または形式を判定できない場合
    /// * `Err(XlsxToIcsError::SecurityViolation)` - ファイルサイズが上限を超えた場合
    pub fn open_path(path: &Path, security: &SecurityConfig) -> Result<Self, XlsxToIcsError> {
        // メタデータが取れない場合は、続くopenでOpenエラーとして報告される
        if let Ok(metadata) = std::fs::metadata(path) {
            security.check_input_size(metadata.len())?;
        }

        let workbook = open_workbook_auto(path).map_err(|source| XlsxToIcsError::Open {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Self {
            workbook,
            formatter: CellFormatter::new(),
        })
    }
}

impl WorkbookParser<Cursor<Vec<u8>>> {
    /// リーダーからワークブックを開く
    ///
    /// 入力全体をメモリに読み込んでから、内容で形式を判定します。
    pub fn open_reader<R: Read>(
        mut reader: R,
        security: &SecurityConfig,
    ) -> Result<Self, XlsxToIcsError> {
        let mut buffer = Vec::new();
        reader
            .read_to_end(&mut buffer)
            .map_err(|e| XlsxToIcsError::Open {
                path: READER_PATH.to_string(),
                source: calamine::Error::Io(e),
            })?;

        security.check_input_size(buffer.len() as u64)?;

        let workbook =
            open_workbook_auto_from_rs(Cursor::new(buffer)).map_err(|source| XlsxToIcsError::Open {
                path: READER_PATH.to_string(),
                source,
            })?;

        Ok(Self {
            workbook,
            formatter: CellFormatter::new(),
        })
    }
}

impl<RS: Read + Seek> WorkbookParser<RS> {
    /// 指定シートを読み込み、列マッピングを解決する
    ///
    /// # 処理フロー
    ///
    /// 1. シートの取得（失敗時は`Read`エラー）
    /// 2. 全セルのテキスト化
    /// 3. シート1行目をヘッダーとして列マッピングを解決（行がなければ`EmptySheet`、
    ///    列不足や1行目が空の場合は`MissingColumns`）
    /// 4. 残りの行をデータ行として返す
    pub fn extract(&mut self, sheet_name: &str) -> Result<SheetExtraction, XlsxToIcsError> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|source| XlsxToIcsError::Read {
                sheet: sheet_name.to_string(),
                source,
            })?;

        // calamineの範囲は使用セルの左上から始まる
        let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);

        let mut rows = range.rows().enumerate().map(|(offset, cells)| {
            Row::new(
                first_row + offset + 1,
                cells
                    .iter()
                    .map(|cell| self.formatter.format_cell(cell))
                    .collect(),
            )
        });

        let header = rows.next().ok_or_else(|| XlsxToIcsError::EmptySheet {
            sheet: sheet_name.to_string(),
        })?;

        // シート1行目が空の場合、範囲の先頭行はヘッダーとして扱わない
        let header_cells: &[String] = if first_row == 0 { &header.cells } else { &[] };
        let mapping = ColumnMapping::resolve(sheet_name, header_cells)?;
        debug!(sheet = sheet_name, header_row = header.number, ?mapping, "resolved columns");

        Ok(SheetExtraction {
            sheet: sheet_name.to_string(),
            mapping,
            rows: rows.collect(),
        })
    }
}

// ワークブックを用いたテストは統合テスト（tests/）で実装します。
