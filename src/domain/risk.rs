// ==========================================
// AOP培训目标分解系统 - 风险领域模型
// ==========================================
// 职责: 定义风险判定结果
// 红线: 所有判定必须输出 impact/mitigation (可解释性)
// ==========================================

use crate::domain::types::RiskLevel;
use serde::{Deserialize, Serialize};

// ==========================================
// RiskFinding - 风险判定
// ==========================================
// 每次运行整体重新生成,无持久身份
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFinding {
    pub area: String,          // 风险领域 (如 "VILT Session Count")
    pub current_value: String, // 当前值 (展示用字符串)
    pub target_value: String,  // 目标值 (展示用字符串)
    pub severity: RiskLevel,   // 风险等级
    pub impact: String,        // 潜在影响
    pub mitigation: String,    // 缓解措施
}

impl RiskFinding {
    /// 是否高风险
    pub fn is_high(&self) -> bool {
        self.severity == RiskLevel::High
    }
}
