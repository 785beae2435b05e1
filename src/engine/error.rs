// ==========================================
// AOP培训目标分解系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================
// 错误分级:
// - Validation/WeightTable: 数据或配置违规,阻断本次运行
// - Contract: 上游阶段输出不满足下游契约,属编程错误
// 缺数据(能力域无活动/空计划)不是错误,以 tracing::warn 记录并取默认值
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 数据质量错误 =====
    #[error("数据验证失败 (field={field}): {message}")]
    Validation { field: String, message: String },

    // ===== 配置错误 =====
    #[error("权重表校验失败 (table={table}): {message}")]
    WeightTable { table: String, message: String },

    // ===== 阶段契约错误 =====
    #[error("阶段契约违规: {0}")]
    Contract(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
