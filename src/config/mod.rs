// ==========================================
// AOP培训目标分解系统 - 配置层
// ==========================================
// 职责: 分解权重等可配置参数
// ==========================================

pub mod weights;

// 重导出核心配置
pub use weights::{
    WeightProfile, DEFAULT_SAMPLE_WEEK_COUNT, FULL_YEAR_WEEK_COUNT, WEIGHT_SUM_TOLERANCE,
};
