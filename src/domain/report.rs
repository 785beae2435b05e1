// ==========================================
// AOP培训目标分解系统 - 机会与诊断报告领域模型
// ==========================================
// 职责: 定义建议输出与叙事性诊断报告
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Opportunity - 改进机会
// ==========================================
// 建议性输出,不构成持久状态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub description: String,      // 机会描述
    pub impact: String,           // 预期影响
    pub resources_needed: String, // 所需资源
    pub timeframe: String,        // 实施时间窗口
}

// ==========================================
// DiagnosticReport - 诊断报告
// ==========================================
// 强弱项/未来风险/建议/结论的叙事汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub date: NaiveDate,               // 报告日期
    pub strengths: Vec<String>,        // 强项
    pub weaknesses: Vec<String>,       // 弱项
    pub future_risks: Vec<String>,     // 未来风险 (至少3条)
    pub recommendations: Vec<String>,  // 行动建议
    pub summary: String,               // 结论 (on track / at risk 单分支)
}
