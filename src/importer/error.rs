// ==========================================
// AOP培训目标分解系统 - 导入层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::engine::error::EngineError;
use thiserror::Error;

/// 导入层错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件/格式错误 =====
    #[error("文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV解析失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("行解析失败 (line={line}): {message}")]
    Parse { line: u64, message: String },

    // ===== 数据质量错误 =====
    #[error(transparent)]
    Validation(#[from] EngineError),
}
