// ==========================================
// AOP培训目标分解系统 - 核心库
// ==========================================
// 系统定位: 决策支持系统 (年度培训目标分解与差距诊断)
// 管道: 目标分解/活动聚合 -> 差距 -> 风险 -> 机会 -> 诊断
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 分解权重
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ActivityKind, RiskLevel};

// 领域实体
pub use domain::{
    AnnualTargets, DailyChecklist, DiagnosticReport, DirectorAggregate, DirectorPlan,
    GapAnalysis, GapRecord, LearningActivity, Opportunity, PlanAggregate, RiskFinding,
    TargetBreakdown, TimeframeTargets,
};

// 引擎
pub use engine::{
    ActivityAggregator, DiagnosticSynthesizer, EngineError, GapEvaluator, OpportunityAdvisor,
    PipelineOrchestrator, PipelineResult, RiskClassifier, TargetDecomposer,
};

// 配置
pub use config::WeightProfile;

// 导入
pub use importer::{ImportError, PlanImporter};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "AOP培训目标分解系统";

// ==========================================
// 预编译检查
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
