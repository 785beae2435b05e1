// ==========================================
// AOP培训目标分解系统 - 诊断综合引擎
// ==========================================
// 职责: 将差距/风险/机会折叠为叙事性诊断报告
// 输入: GapAnalysis + Vec<RiskFinding> + Vec<Opportunity>
// 输出: DiagnosticReport
// ==========================================
// 红线: 结论只有一个分支判定, weaknesses 为空即 on track;
//       on track 要求零弱项,而不是零风险
// 红线: 通用强项只在无真实强项时兜底,绝不覆盖真实强项
// ==========================================

use crate::domain::gap::GapAnalysis;
use crate::domain::report::{DiagnosticReport, Opportunity};
use crate::domain::risk::RiskFinding;
use chrono::NaiveDate;
use tracing::debug;

// ===== 弱项判定阈值 (与风险判定的 High 档一致) =====
const VILT_WEAKNESS_THRESHOLD: f64 = 50.0;
const ILT_WEAKNESS_THRESHOLD: f64 = 20.0;
const HOURS_WEAKNESS_THRESHOLD: f64 = 1000.0;
const COMPETENCY_WEAKNESS_THRESHOLD: f64 = 500.0;

/// 未来风险条目下限 (不足时以通用条目补齐)
const MIN_FUTURE_RISKS: usize = 3;

/// 纳入建议的机会条数上限
const MAX_OPPORTUNITY_RECOMMENDATIONS: usize = 3;

/// 纳入建议的高风险条数上限
const MAX_RISK_RECOMMENDATIONS: usize = 2;

// ==========================================
// DiagnosticSynthesizer - 诊断综合引擎
// ==========================================
// 无状态引擎,所有方法都是纯函数
pub struct DiagnosticSynthesizer;

impl DiagnosticSynthesizer {
    /// 构造函数
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成诊断报告
    ///
    /// # 参数
    /// - `gaps`: 差距分析结果
    /// - `risks`: 风险判定列表
    /// - `opportunities`: 机会建议列表
    /// - `date`: 报告日期
    ///
    /// # 返回
    /// 强弱项/未来风险/建议/结论的叙事报告
    pub fn synthesize(
        &self,
        gaps: &GapAnalysis,
        risks: &[RiskFinding],
        opportunities: &[Opportunity],
        date: NaiveDate,
    ) -> DiagnosticReport {
        let strengths = Self::derive_strengths(gaps);
        let weaknesses = Self::derive_weaknesses(gaps);
        let future_risks = Self::derive_future_risks(risks);
        let recommendations = Self::derive_recommendations(opportunities, risks);
        let summary = Self::build_summary(&weaknesses);

        debug!(
            strengths = strengths.len(),
            weaknesses = weaknesses.len(),
            "诊断报告生成完成"
        );

        DiagnosticReport {
            date,
            strengths,
            weaknesses,
            future_risks,
            recommendations,
            summary,
        }
    }

    // ==========================================
    // 强项 (缺口指示为0的指标)
    // ==========================================

    fn derive_strengths(gaps: &GapAnalysis) -> Vec<String> {
        let mut strengths = Vec::new();

        if gaps.vilt.is_on_track() {
            strengths.push("VILT delivery is on track to meet or exceed targets".to_string());
        }
        if gaps.ilt.is_on_track() {
            strengths.push("ILT delivery is on track to meet or exceed targets".to_string());
        }
        if gaps.learning_hours.is_on_track() {
            strengths
                .push("Learning hours delivery is on track to meet or exceed targets".to_string());
        }
        for (competency, record) in &gaps.competency {
            if record.is_on_track() {
                strengths.push(format!(
                    "{competency} competency development is on track to meet or exceed targets"
                ));
            }
        }

        // 无真实强项时兜底 (仅补缺,不覆盖)
        if strengths.is_empty() {
            strengths = vec![
                "Strong foundation in technical training delivery".to_string(),
                "Effective learning content development capabilities".to_string(),
                "Established learning delivery infrastructure".to_string(),
            ];
        }

        strengths
    }

    // ==========================================
    // 弱项 (缺口指示超过高危阈值的指标)
    // ==========================================

    fn derive_weaknesses(gaps: &GapAnalysis) -> Vec<String> {
        let mut weaknesses = Vec::new();

        if gaps.vilt.gap_indicator > VILT_WEAKNESS_THRESHOLD {
            weaknesses.push(format!(
                "Significant gap in VILT delivery ({} sessions below target)",
                gaps.vilt.gap as i64
            ));
        }
        if gaps.ilt.gap_indicator > ILT_WEAKNESS_THRESHOLD {
            weaknesses.push(format!(
                "Significant gap in ILT delivery ({} sessions below target)",
                gaps.ilt.gap as i64
            ));
        }
        if gaps.learning_hours.gap_indicator > HOURS_WEAKNESS_THRESHOLD {
            weaknesses.push(format!(
                "Significant gap in learning hours delivery ({} hours below target)",
                gaps.learning_hours.gap as i64
            ));
        }
        for (competency, record) in &gaps.competency {
            if record.gap_indicator > COMPETENCY_WEAKNESS_THRESHOLD {
                weaknesses.push(format!(
                    "Significant gap in {competency} competency development ({} hours below target)",
                    record.gap as i64
                ));
            }
        }

        weaknesses
    }

    // ==========================================
    // 未来风险 (高风险判定, 不足3条补通用)
    // ==========================================

    fn derive_future_risks(risks: &[RiskFinding]) -> Vec<String> {
        let mut future_risks: Vec<String> = risks
            .iter()
            .filter(|risk| risk.is_high())
            .map(|risk| format!("{}: {}", risk.area, risk.impact))
            .collect();

        if future_risks.len() < MIN_FUTURE_RISKS {
            let generic_risks = [
                "Increasing demand for specialized technical skills may outpace current learning delivery capacity",
                "Evolving learning modalities may require significant updates to current delivery methods",
                "Competition for learning time may reduce participation and completion rates",
            ];
            let missing = MIN_FUTURE_RISKS - future_risks.len();
            future_risks.extend(generic_risks.iter().take(missing).map(|s| s.to_string()));
        }

        future_risks
    }

    // ==========================================
    // 建议 (前3条机会 + 前2条高风险缓解)
    // ==========================================

    fn derive_recommendations(
        opportunities: &[Opportunity],
        risks: &[RiskFinding],
    ) -> Vec<String> {
        let mut recommendations: Vec<String> = opportunities
            .iter()
            .take(MAX_OPPORTUNITY_RECOMMENDATIONS)
            .map(|o| format!("{} - {}", o.description, o.impact))
            .collect();

        recommendations.extend(
            risks
                .iter()
                .filter(|risk| risk.is_high())
                .take(MAX_RISK_RECOMMENDATIONS)
                .map(|risk| format!("Address {} risk through {}", risk.area, risk.mitigation)),
        );

        recommendations
    }

    // ==========================================
    // 结论 (单分支: 零弱项 = on track)
    // ==========================================

    fn build_summary(weaknesses: &[String]) -> String {
        if weaknesses.is_empty() {
            "The learning plan is currently on track for meeting AOP targets. \
             Continue monitoring progress and implementing identified opportunities."
                .to_string()
        } else {
            "The learning plan is currently at risk for meeting AOP targets. \
             Immediate action is required in the identified risk areas."
                .to_string()
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for DiagnosticSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}
