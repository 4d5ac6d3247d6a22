//! Security Module
//!
//! 入力ファイルに対するサイズ制限を実装するモジュール。

use crate::error::XlsxToIcsError;

/// 入力ファイルの既定の最大サイズ（バイト）
/// デフォルト: 2GB (2_147_483_648 bytes)
pub(crate) const DEFAULT_MAX_INPUT_FILE_SIZE: u64 = 2_147_483_648;

/// セキュリティ設定
///
/// ファイル処理時の制限を定義します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: DEFAULT_MAX_INPUT_FILE_SIZE,
        }
    }
}

impl SecurityConfig {
    /// 入力サイズが上限以内かを検証
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 上限以内の場合
    /// * `Err(XlsxToIcsError::SecurityViolation)` - 上限を超えた場合
    pub fn check_input_size(&self, size: u64) -> Result<(), XlsxToIcsError> {
        if size > self.max_input_file_size {
            return Err(XlsxToIcsError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                size, self.max_input_file_size
            )));
        }
        Ok(())
    }
}
