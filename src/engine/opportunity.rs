// ==========================================
// AOP培训目标分解系统 - 机会建议引擎
// ==========================================
// 职责: 基于差距与风险派生可执行的改进机会
// 输入: GapAnalysis + Vec<RiskFinding> + 补充数据
// 输出: Vec<Opportunity>
// ==========================================
// 红线: 规则独立追加,互不排斥,除文本顺序外不排名
// 红线: 补充数据只用于描述文案,绝不参与数值判定
// 红线: 两条常备建议无条件追加,保证输出非空
// ==========================================

use crate::domain::gap::GapAnalysis;
use crate::domain::report::Opportunity;
use crate::domain::risk::RiskFinding;
use crate::domain::types::RiskLevel;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// 能力域集训建议的触发阈值 (小时)
const BOOTCAMP_GAP_THRESHOLD: f64 = 200.0;

/// ILT→VILT 转换建议的单批场次上限
const MAX_CONVERSION_SESSIONS: i64 = 5;

// ==========================================
// OpportunityAdvisor - 机会建议引擎
// ==========================================
// 无状态引擎,所有方法都是纯函数
pub struct OpportunityAdvisor;

impl OpportunityAdvisor {
    /// 构造函数
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 派生改进机会
    ///
    /// # 参数
    /// - `gaps`: 差距分析结果
    /// - `risks`: 风险判定列表
    /// - `supplementary`: 补充数据 (能力框架/部门指标等, 仅供文案)
    ///
    /// # 返回
    /// 机会列表 (至少包含两条常备建议)
    pub fn advise(
        &self,
        gaps: &GapAnalysis,
        risks: &[RiskFinding],
        supplementary: &HashMap<String, Value>,
    ) -> Vec<Opportunity> {
        let mut opportunities = Vec::new();

        // 规则1: ILT 与 VILT 同时有缺口时建议格式转换
        if gaps.ilt.gap > 0.0 && gaps.vilt.gap > 0.0 {
            let sessions = (gaps.ilt.gap as i64).min(MAX_CONVERSION_SESSIONS);
            opportunities.push(Opportunity {
                description: format!("Convert {sessions} ILT sessions to VILT format"),
                impact: format!(
                    "Increase capacity by approximately {} participants and reduce delivery costs",
                    sessions * 15
                ),
                resources_needed: "Updated materials, virtual platform setup, trainer preparation"
                    .to_string(),
                timeframe: "Next 4-6 weeks".to_string(),
            });
        }

        // 规则2: 最大能力域缺口超阈值时建议集训营
        if let Some((competency, gap)) = Self::largest_competency_shortfall(gaps) {
            opportunities.push(Opportunity {
                description: format!("Schedule 3 additional {competency} bootcamps"),
                impact: format!(
                    "Will address approximately {} learning hours of the {competency} competency gap",
                    gap.min(300.0) as i64
                ),
                resources_needed: format!(
                    "Specialized {competency} trainers, dedicated learning environments"
                ),
                timeframe: "Next quarter".to_string(),
            });
        }

        // 规则3: 完课率高风险时建议结构化跟进
        let has_high_completion_risk = risks
            .iter()
            .any(|risk| risk.severity == RiskLevel::High && risk.area == "Completion Rate");
        if has_high_completion_risk {
            opportunities.push(Opportunity {
                description: "Implement a structured follow-up program for all courses".to_string(),
                impact:
                    "Could improve completion rates by 15-20%, adding approximately 500-1000 learning hours"
                        .to_string(),
                resources_needed: "Learning experience team, automated reminder system".to_string(),
                timeframe: "Immediate implementation".to_string(),
            });
        }

        // 规则4/5: 常备建议 (无条件追加, 保证非空输出)
        opportunities.push(Opportunity {
            description: "Integrate learning objectives into internal internship programs"
                .to_string(),
            impact:
                "Can generate 200-300 additional learning hours while providing practical experience"
                    .to_string(),
            resources_needed:
                "Coordination with internship program managers, learning objective alignment"
                    .to_string(),
            timeframe: Self::text_hint(supplementary, "internship_cycle", "Next internship cycle"),
        });
        opportunities.push(Opportunity {
            description: "Create learning paths with batch scheduling of related courses"
                .to_string(),
            impact: "Can increase registration rates by 25% through clear progression paths"
                .to_string(),
            resources_needed: "Learning path design, coordinated scheduling".to_string(),
            timeframe: Self::text_hint(supplementary, "planning_cycle", "Next planning cycle"),
        });

        debug!(opportunities = opportunities.len(), "机会建议生成完成");
        opportunities
    }

    // ==========================================
    // 规则辅助
    // ==========================================

    /// 最大能力域缺口 (超过阈值时返回)
    ///
    /// 同值时取名称序靠前的能力域 (确定性)
    fn largest_competency_shortfall(gaps: &GapAnalysis) -> Option<(String, f64)> {
        let mut top: Option<(String, f64)> = None;
        for (competency, record) in &gaps.competency {
            if record.gap > BOOTCAMP_GAP_THRESHOLD {
                let replace = match &top {
                    Some((_, best)) => record.gap > *best,
                    None => true,
                };
                if replace {
                    top = Some((competency.clone(), record.gap));
                }
            }
        }
        top
    }

    /// 从补充数据读取描述性文案 (缺省回退固定文案)
    fn text_hint(supplementary: &HashMap<String, Value>, key: &str, default: &str) -> String {
        supplementary
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for OpportunityAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gap::GapRecord;
    use std::collections::BTreeMap;

    fn create_test_gaps(vilt_gap: f64, ilt_gap: f64) -> GapAnalysis {
        GapAnalysis {
            vilt: GapRecord::new(100.0 + vilt_gap, 100.0),
            ilt: GapRecord::new(50.0 + ilt_gap, 50.0),
            learning_hours: GapRecord::new(1000.0, 1000.0),
            competency: BTreeMap::new(),
        }
    }

    #[test]
    fn test_always_on_suggestions_guarantee_nonempty() {
        let advisor = OpportunityAdvisor::new();
        let opportunities =
            advisor.advise(&create_test_gaps(0.0, 0.0), &[], &HashMap::new());

        assert_eq!(opportunities.len(), 2);
        assert!(opportunities[0].description.contains("internship"));
        assert!(opportunities[1].description.contains("batch scheduling"));
    }

    #[test]
    fn test_conversion_requires_both_shortfalls() {
        let advisor = OpportunityAdvisor::new();

        // 仅 ILT 缺口: 不建议转换
        let opportunities =
            advisor.advise(&create_test_gaps(0.0, 10.0), &[], &HashMap::new());
        assert!(!opportunities
            .iter()
            .any(|o| o.description.contains("Convert")));

        // 双缺口: 建议转换, 场次取 min(5, ilt_gap)
        let opportunities =
            advisor.advise(&create_test_gaps(30.0, 3.0), &[], &HashMap::new());
        assert_eq!(
            opportunities[0].description,
            "Convert 3 ILT sessions to VILT format"
        );
        assert!(opportunities[0].impact.contains("45 participants"));

        let opportunities =
            advisor.advise(&create_test_gaps(30.0, 12.0), &[], &HashMap::new());
        assert_eq!(
            opportunities[0].description,
            "Convert 5 ILT sessions to VILT format"
        );
    }

    #[test]
    fn test_bootcamp_targets_largest_shortfall() {
        let advisor = OpportunityAdvisor::new();
        let mut gaps = create_test_gaps(0.0, 0.0);
        gaps.competency.insert(
            "Technical".to_string(),
            GapRecord::new(600.0, 250.0), // gap 350
        );
        gaps.competency.insert(
            "Leadership".to_string(),
            GapRecord::new(500.0, 220.0), // gap 280
        );
        gaps.competency.insert(
            "Process".to_string(),
            GapRecord::new(300.0, 150.0), // gap 150: 低于阈值
        );

        let opportunities = advisor.advise(&gaps, &[], &HashMap::new());
        let bootcamp = opportunities
            .iter()
            .find(|o| o.description.contains("bootcamps"))
            .unwrap();
        assert_eq!(
            bootcamp.description,
            "Schedule 3 additional Technical bootcamps"
        );
        // min(350, 300) = 300
        assert!(bootcamp.impact.contains("300 learning hours"));
    }

    #[test]
    fn test_completion_follow_up_on_high_risk() {
        let advisor = OpportunityAdvisor::new();
        let risks = vec![RiskFinding {
            area: "Completion Rate".to_string(),
            current_value: "65%".to_string(),
            target_value: "85%".to_string(),
            severity: RiskLevel::High,
            impact: "Low completion rates reduce effective learning hours and competency development"
                .to_string(),
            mitigation: "Implement pre-session preparation and post-session follow-up".to_string(),
        }];

        let opportunities =
            advisor.advise(&create_test_gaps(0.0, 0.0), &risks, &HashMap::new());
        assert!(opportunities
            .iter()
            .any(|o| o.description.contains("structured follow-up program")));
    }

    #[test]
    fn test_supplementary_feeds_text_only() {
        let advisor = OpportunityAdvisor::new();
        let supplementary = HashMap::from([(
            "planning_cycle".to_string(),
            Value::String("FY27 planning cycle".to_string()),
        )]);

        let opportunities =
            advisor.advise(&create_test_gaps(0.0, 0.0), &[], &supplementary);
        // 建议条数不受补充数据影响
        assert_eq!(opportunities.len(), 2);
        assert_eq!(opportunities[1].timeframe, "FY27 planning cycle");
    }
}
