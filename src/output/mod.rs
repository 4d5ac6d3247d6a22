//! Output Module
//!
//! カレンダー文書（iCalendar形式のテキスト）の書き出しを提供するモジュール。

mod calendar;

pub use calendar::CalendarWriter;
