//! Parser Module
//!
//! calamineを使用したワークブック読み込みと、イベントシートの抽出。

mod workbook;

pub(crate) use workbook::{SheetExtraction, WorkbookParser};
