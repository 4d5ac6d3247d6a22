//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。

use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::api::{DEFAULT_PRODUCT_ID, DEFAULT_SHEET_NAME, SUCCESS_MESSAGE};
use crate::error::XlsxToIcsError;
use crate::event::event_from_row;
use crate::output::CalendarWriter;
use crate::parser::{SheetExtraction, WorkbookParser};
use crate::security::SecurityConfig;

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ConversionConfig {
    /// 読み込むシート名
    pub sheet_name: String,

    /// カレンダーのPRODID
    pub product_id: String,

    /// 入力制限
    pub security: SecurityConfig,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            security: SecurityConfig::default(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsx2ics::ConverterBuilder;
///
/// # fn main() -> Result<(), xlsx2ics::XlsxToIcsError> {
/// let converter = ConverterBuilder::new()
///     .with_sheet_name("Events")
///     .build()?;
/// converter.convert_file("events.xlsx", "events.ics")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート名: `Sheet1`
    /// - PRODID: `-//Excel to iCal Conversion//example.com//`
    /// - 入力ファイルの最大サイズ: 2GB
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
        }
    }

    /// 読み込むシート名を指定する
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.config.sheet_name = name.into();
        self
    }

    /// 出力カレンダーのPRODIDを指定する
    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.config.product_id = product_id.into();
        self
    }

    /// 入力ファイルの最大サイズ（バイト）を指定する
    pub fn with_max_input_file_size(mut self, bytes: u64) -> Self {
        self.config.security.max_input_file_size = bytes;
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `XlsxToIcsError::Config(String)`: 設定の検証に失敗した場合
    ///   * シート名が空
    ///   * PRODIDが空、または改行を含む
    ///   * 入力サイズ上限が0
    pub fn build(self) -> Result<Converter, XlsxToIcsError> {
        if self.config.sheet_name.is_empty() {
            return Err(XlsxToIcsError::Config(
                "Sheet name must not be empty".to_string(),
            ));
        }

        if self.config.product_id.is_empty() {
            return Err(XlsxToIcsError::Config(
                "Product identifier must not be empty".to_string(),
            ));
        }

        if self.config.product_id.contains(['\r', '\n']) {
            return Err(XlsxToIcsError::Config(format!(
                "Product identifier must be a single line: {:?}",
                self.config.product_id
            )));
        }

        if self.config.security.max_input_file_size == 0 {
            return Err(XlsxToIcsError::Config(
                "Maximum input file size must be greater than zero".to_string(),
            ));
        }

        Ok(Converter::new(self.config))
    }
}

/// 変換結果のサマリー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// 読み込んだシート名
    pub sheet: String,

    /// ヘッダー行を除いたデータ行の数
    pub rows_read: usize,

    /// 書き出したイベント数
    pub events_written: usize,

    /// 空フィールドによりスキップした行数
    pub rows_skipped: usize,
}

impl ConversionReport {
    /// 呼び出し元へ返す成功メッセージ
    pub fn message(&self) -> &'static str {
        SUCCESS_MESSAGE
    }
}

/// 変換処理のファサード
///
/// ワークブックの読み込み、行の解析、カレンダーの書き出しを1パスで実行します。
#[derive(Debug)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// ファイルからファイルへ変換する
    ///
    /// # 処理フロー
    ///
    /// 1. ワークブックを開く（`Open`エラー）
    /// 2. シートを読み込み、列マッピングを解決（`Read` / `EmptySheet` / `MissingColumns`エラー）
    /// 3. 出力ファイルを作成（`Create`エラー）
    /// 4. 各行をイベントへ変換して書き出す
    ///
    /// 列の解決に失敗した場合、出力ファイルは作成されません。
    /// 行の解析や書き込みに失敗した場合、途中まで書き出した内容はファイルに残ります。
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source: P,
        destination: Q,
    ) -> Result<ConversionReport, XlsxToIcsError> {
        let source = source.as_ref();
        let destination = destination.as_ref();
        info!(
            source = %source.display(),
            destination = %destination.display(),
            sheet = %self.config.sheet_name,
            "starting conversion"
        );

        let mut parser = WorkbookParser::open_path(source, &self.config.security)?;
        let extraction = parser.extract(&self.config.sheet_name)?;

        let output = File::create(destination).map_err(|source| XlsxToIcsError::Create {
            path: destination.display().to_string(),
            source,
        })?;

        self.write_calendar(extraction, output)
    }

    /// リーダーからライターへ変換する
    ///
    /// 入力はメモリに読み込まれ、内容から形式を判定します。
    ///
    /// ```rust,no_run
    /// use std::fs::File;
    /// use xlsx2ics::ConverterBuilder;
    ///
    /// # fn main() -> Result<(), xlsx2ics::XlsxToIcsError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let input = File::open("events.xlsx").expect("open");
    /// let mut output = Vec::new();
    /// let report = converter.convert(input, &mut output)?;
    /// println!("{} events", report.events_written);
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<ConversionReport, XlsxToIcsError> {
        info!(sheet = %self.config.sheet_name, "starting conversion from reader");

        let mut parser = WorkbookParser::open_reader(input, &self.config.security)?;
        let extraction = parser.extract(&self.config.sheet_name)?;

        self.write_calendar(extraction, output)
    }

    /// リーダーから変換し、カレンダー文書を文字列として返す
    pub fn convert_to_string<R: Read>(&self, input: R) -> Result<String, XlsxToIcsError> {
        let mut buffer = Vec::new();
        self.convert(input, &mut buffer)?;

        let result = String::from_utf8(buffer).map_err(|e| {
            XlsxToIcsError::Write(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        Ok(result)
    }

    fn write_calendar<W: Write>(
        &self,
        extraction: SheetExtraction,
        output: W,
    ) -> Result<ConversionReport, XlsxToIcsError> {
        let SheetExtraction {
            sheet,
            mapping,
            rows,
        } = extraction;
        let rows_read = rows.len();

        let mut writer = CalendarWriter::begin_with_product_id(output, &self.config.product_id)?;
        let mut rows_skipped = 0;

        for row in rows {
            match event_from_row(&row, &mapping)? {
                Some(event) => writer.write_event(&event)?,
                None => rows_skipped += 1,
            }
        }

        let events_written = writer.finish()?;
        debug!(rows_read, rows_skipped, "all rows processed");
        info!(sheet = %sheet, events_written, rows_skipped, "conversion finished");

        Ok(ConversionReport {
            sheet,
            rows_read,
            events_written,
            rows_skipped,
        })
    }
}
