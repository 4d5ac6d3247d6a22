//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use chrono::NaiveDateTime;

/// シートの1行分のテキストセル
///
/// 抽出器が1行につき1回生成し、イベントパーサーが1回だけ消費します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// スプレッドシート上の行番号（1始まり）
    pub number: usize,

    /// セルのテキスト（列順）
    pub cells: Vec<String>,
}

impl Row {
    /// 新しい行を生成
    pub fn new(number: usize, cells: Vec<String>) -> Self {
        Self { number, cells }
    }

    /// 指定列のセル（範囲外の場合は`None`）
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// セル数
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// セルが1つもないかどうか
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// カレンダーイベント
///
/// 開始・終了はタイムゾーンを持たない（naive）日時です。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// 件名
    pub subject: String,

    /// 開始日時
    pub start: NaiveDateTime,

    /// 終了日時
    pub end: NaiveDateTime,
}
