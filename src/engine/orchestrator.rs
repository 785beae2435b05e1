// ==========================================
// AOP培训目标分解系统 - 管道编排器
// ==========================================
// 用途: 协调五个阶段引擎的执行顺序
// ==========================================
// 阶段链: 分解/聚合 -> 差距 -> 风险 -> 机会 -> 诊断
// 红线: 严格单向数据依赖,无共享可变状态,无阶段回调
// 红线: 校验失败即整体中止,不返回部分结果
// ==========================================

use crate::config::WeightProfile;
use crate::domain::aggregate::PlanAggregate;
use crate::domain::gap::GapAnalysis;
use crate::domain::plan::DirectorPlan;
use crate::domain::report::{DiagnosticReport, Opportunity};
use crate::domain::risk::RiskFinding;
use crate::domain::targets::{AnnualTargets, TargetBreakdown};
use crate::engine::breakdown::TargetDecomposer;
use crate::engine::diagnostic::DiagnosticSynthesizer;
use crate::engine::error::EngineError;
use crate::engine::gap::GapEvaluator;
use crate::engine::opportunity::OpportunityAdvisor;
use crate::engine::risk::RiskClassifier;
use crate::engine::ActivityAggregator;
use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

// ==========================================
// PipelineResult - 管道运行结果
// ==========================================
// 五个阶段输出 + 运行元数据; 只读交付给展示层
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    pub run_id: String,               // 本次运行ID
    pub generated_at: NaiveDateTime,  // 生成时间
    pub breakdown: TargetBreakdown,   // 目标分解
    pub aggregate: PlanAggregate,     // 计划聚合
    pub gaps: GapAnalysis,            // 差距分析
    pub risks: Vec<RiskFinding>,      // 风险判定
    pub opportunities: Vec<Opportunity>, // 机会建议
    pub report: DiagnosticReport,     // 诊断报告
}

// ==========================================
// PipelineOrchestrator - 管道编排器
// ==========================================
pub struct PipelineOrchestrator {
    decomposer: TargetDecomposer,
    aggregator: ActivityAggregator,
    evaluator: GapEvaluator,
    classifier: RiskClassifier,
    advisor: OpportunityAdvisor,
    synthesizer: DiagnosticSynthesizer,
}

impl PipelineOrchestrator {
    /// 使用默认权重配置构造
    pub fn new() -> Self {
        Self {
            decomposer: TargetDecomposer::new(),
            aggregator: ActivityAggregator::new(),
            evaluator: GapEvaluator::new(),
            classifier: RiskClassifier::new(),
            advisor: OpportunityAdvisor::new(),
            synthesizer: DiagnosticSynthesizer::new(),
        }
    }

    /// 使用自定义权重配置构造
    ///
    /// # 返回
    /// 权重表违规时返回配置错误 (快速失败)
    pub fn with_profile(profile: WeightProfile) -> Result<Self, EngineError> {
        Ok(Self {
            decomposer: TargetDecomposer::with_profile(profile)?,
            aggregator: ActivityAggregator::new(),
            evaluator: GapEvaluator::new(),
            classifier: RiskClassifier::new(),
            advisor: OpportunityAdvisor::new(),
            synthesizer: DiagnosticSynthesizer::new(),
        })
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行完整管道 (报告日期取当天)
    pub fn run(
        &self,
        annual: &AnnualTargets,
        plans: &[DirectorPlan],
        supplementary: &HashMap<String, Value>,
    ) -> Result<PipelineResult, EngineError> {
        self.run_with_date(annual, plans, supplementary, Local::now().date_naive())
    }

    /// 执行完整管道
    ///
    /// # 参数
    /// - `annual`: 年度目标
    /// - `plans`: 各总监学习计划
    /// - `supplementary`: 补充数据 (仅供机会建议的文案)
    /// - `report_date`: 报告日期
    ///
    /// # 返回
    /// 五个阶段的完整输出; 任一阶段校验失败则整体中止
    pub fn run_with_date(
        &self,
        annual: &AnnualTargets,
        plans: &[DirectorPlan],
        supplementary: &HashMap<String, Value>,
        report_date: NaiveDate,
    ) -> Result<PipelineResult, EngineError> {
        info!(
            vilt_target = annual.vilt_target,
            ilt_target = annual.ilt_target,
            plans = plans.len(),
            "管道运行开始"
        );

        // 1. 目标分解 (独立于计划数据)
        let breakdown = self.decomposer.decompose(annual)?;

        // 2. 活动聚合 (独立于目标分解)
        let aggregate = self.aggregator.aggregate(plans)?;

        // 3. 差距评估
        let gaps = self.evaluator.evaluate(&aggregate, annual);
        Self::check_gap_contract(annual, &gaps)?;

        // 4. 风险判定
        let risks = self.classifier.classify(&gaps, &aggregate);

        // 5. 机会建议 + 诊断报告
        let opportunities = self.advisor.advise(&gaps, &risks, supplementary);
        let report = self
            .synthesizer
            .synthesize(&gaps, &risks, &opportunities, report_date);

        info!(
            risks = risks.len(),
            opportunities = opportunities.len(),
            "管道运行完成"
        );

        Ok(PipelineResult {
            run_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now().naive_utc(),
            breakdown,
            aggregate,
            gaps,
            risks,
            opportunities,
            report,
        })
    }

    // ==========================================
    // 阶段契约检查
    // ==========================================

    /// 差距阶段输出契约: 每个目标能力域必须有差距记录
    ///
    /// 违反视为编程错误,快速失败 (区别于可恢复的缺数据)
    fn check_gap_contract(annual: &AnnualTargets, gaps: &GapAnalysis) -> Result<(), EngineError> {
        for name in annual.competency_targets.keys() {
            if gaps.competency_gap(name).is_none() {
                return Err(EngineError::Contract(format!(
                    "差距分析缺少能力域记录: {name}"
                )));
            }
        }
        Ok(())
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for PipelineOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
