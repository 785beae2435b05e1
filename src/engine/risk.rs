// ==========================================
// AOP培训目标分解系统 - 风险判定引擎
// ==========================================
// 职责: 扫描差距分析与聚合比率,按阈值产出风险判定
// 输入: GapAnalysis + PlanAggregate
// 输出: Vec<RiskFinding>
// ==========================================
// 红线: 规则独立判定,未触发的规则不产出占位记录
// 红线: 阈值为严格大于/小于 (边界值取低档)
// ==========================================

use crate::domain::aggregate::PlanAggregate;
use crate::domain::gap::{GapAnalysis, GapRecord};
use crate::domain::risk::RiskFinding;
use crate::domain::types::RiskLevel;
use tracing::debug;

// ===== 场次/小时缺口阈值 =====
const VILT_GAP_HIGH: f64 = 50.0;
const VILT_GAP_MEDIUM: f64 = 20.0;
const ILT_GAP_HIGH: f64 = 20.0;
const ILT_GAP_MEDIUM: f64 = 10.0;
const HOURS_GAP_HIGH: f64 = 1000.0;
const HOURS_GAP_MEDIUM: f64 = 500.0;
const COMPETENCY_GAP_HIGH: f64 = 500.0;
const COMPETENCY_GAP_MEDIUM: f64 = 200.0;

// ===== 比率阈值 =====
const REGISTRATION_RATE_FLOOR: f64 = 0.80;
const REGISTRATION_RATE_HIGH: f64 = 0.60;
const COMPLETION_RATE_FLOOR: f64 = 0.85;
const COMPLETION_RATE_HIGH: f64 = 0.70;

// ==========================================
// RiskClassifier - 风险判定引擎
// ==========================================
// 无状态引擎,所有方法都是纯函数
pub struct RiskClassifier;

impl RiskClassifier {
    /// 构造函数
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 判定风险
    ///
    /// # 参数
    /// - `gaps`: 差距分析结果
    /// - `aggregate`: 聚合指标 (提供报名率/完课率)
    ///
    /// # 返回
    /// 风险判定列表 (0条或多条, 每条附带影响与缓解措施)
    pub fn classify(&self, gaps: &GapAnalysis, aggregate: &PlanAggregate) -> Vec<RiskFinding> {
        let mut findings = Vec::new();

        if let Some(finding) = Self::check_vilt_gap(&gaps.vilt) {
            findings.push(finding);
        }
        if let Some(finding) = Self::check_ilt_gap(&gaps.ilt) {
            findings.push(finding);
        }
        if let Some(finding) = Self::check_hours_gap(&gaps.learning_hours) {
            findings.push(finding);
        }
        for (competency, record) in &gaps.competency {
            if let Some(finding) = Self::check_competency_gap(competency, record) {
                findings.push(finding);
            }
        }
        if let Some(finding) = Self::check_registration_rate(aggregate.avg_registration_rate) {
            findings.push(finding);
        }
        if let Some(finding) = Self::check_completion_rate(aggregate.avg_completion_rate) {
            findings.push(finding);
        }

        debug!(findings = findings.len(), "风险判定完成");
        findings
    }

    // ==========================================
    // 缺口规则
    // ==========================================

    /// VILT 场次缺口: High>50 / Medium>20 / Low
    fn check_vilt_gap(record: &GapRecord) -> Option<RiskFinding> {
        if record.gap <= 0.0 {
            return None;
        }
        Some(RiskFinding {
            area: "VILT Session Count".to_string(),
            current_value: format!("{}", record.scheduled as i64),
            target_value: format!("{}", record.target as i64),
            severity: Self::gap_severity(record.gap, VILT_GAP_HIGH, VILT_GAP_MEDIUM),
            impact: format!("May miss VILT target by {} sessions", record.gap as i64),
            mitigation: "Schedule additional VILT sessions, prioritizing high-impact courses"
                .to_string(),
        })
    }

    /// ILT 场次缺口: High>20 / Medium>10 / Low
    fn check_ilt_gap(record: &GapRecord) -> Option<RiskFinding> {
        if record.gap <= 0.0 {
            return None;
        }
        Some(RiskFinding {
            area: "ILT Session Count".to_string(),
            current_value: format!("{}", record.scheduled as i64),
            target_value: format!("{}", record.target as i64),
            severity: Self::gap_severity(record.gap, ILT_GAP_HIGH, ILT_GAP_MEDIUM),
            impact: format!("May miss ILT target by {} sessions", record.gap as i64),
            mitigation: "Schedule additional ILT sessions, consider converting some to VILT format"
                .to_string(),
        })
    }

    /// 学习小时缺口: High>1000 / Medium>500 / Low
    fn check_hours_gap(record: &GapRecord) -> Option<RiskFinding> {
        if record.gap <= 0.0 {
            return None;
        }
        Some(RiskFinding {
            area: "Learning Hours".to_string(),
            current_value: format!("{}", record.scheduled as i64),
            target_value: format!("{}", record.target as i64),
            severity: Self::gap_severity(record.gap, HOURS_GAP_HIGH, HOURS_GAP_MEDIUM),
            impact: format!(
                "May miss learning hours target by {} hours",
                record.gap as i64
            ),
            mitigation: "Increase session capacity and promote registration".to_string(),
        })
    }

    /// 能力域缺口 (逐域): High>500 / Medium>200 / Low
    fn check_competency_gap(competency: &str, record: &GapRecord) -> Option<RiskFinding> {
        if record.gap <= 0.0 {
            return None;
        }
        Some(RiskFinding {
            area: format!("{competency} Competency"),
            current_value: format!("{}", record.scheduled as i64),
            target_value: format!("{}", record.target as i64),
            severity: Self::gap_severity(record.gap, COMPETENCY_GAP_HIGH, COMPETENCY_GAP_MEDIUM),
            impact: format!(
                "May miss {competency} competency target by {} hours",
                record.gap as i64
            ),
            mitigation: format!("Prioritize {competency} courses in upcoming schedule"),
        })
    }

    // ==========================================
    // 比率规则
    // ==========================================

    /// 报名率低于80%: <60% High, 否则 Medium
    fn check_registration_rate(rate: f64) -> Option<RiskFinding> {
        if rate >= REGISTRATION_RATE_FLOOR {
            return None;
        }
        Some(RiskFinding {
            area: "Registration Rate".to_string(),
            current_value: format!("{}%", (rate * 100.0) as i64),
            target_value: "80%".to_string(),
            severity: if rate < REGISTRATION_RATE_HIGH {
                RiskLevel::High
            } else {
                RiskLevel::Medium
            },
            impact: "Low registration rates may lead to session cancellations and inefficient resource use"
                .to_string(),
            mitigation: "Improve communication and marketing of learning opportunities".to_string(),
        })
    }

    /// 完课率低于85%: <70% High, 否则 Medium
    fn check_completion_rate(rate: f64) -> Option<RiskFinding> {
        if rate >= COMPLETION_RATE_FLOOR {
            return None;
        }
        Some(RiskFinding {
            area: "Completion Rate".to_string(),
            current_value: format!("{}%", (rate * 100.0) as i64),
            target_value: "85%".to_string(),
            severity: if rate < COMPLETION_RATE_HIGH {
                RiskLevel::High
            } else {
                RiskLevel::Medium
            },
            impact: "Low completion rates reduce effective learning hours and competency development"
                .to_string(),
            mitigation: "Implement pre-session preparation and post-session follow-up".to_string(),
        })
    }

    /// 按缺口幅度分级 (严格大于)
    fn gap_severity(gap: f64, high: f64, medium: f64) -> RiskLevel {
        if gap > high {
            RiskLevel::High
        } else if gap > medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for RiskClassifier {
    fn default() -> Self {
        Self::new()
    }
}
