// ==========================================
// AOP培训目标分解系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、校验规则
// 红线: 不含引擎逻辑,不含 I/O
// ==========================================

pub mod aggregate;
pub mod gap;
pub mod plan;
pub mod report;
pub mod risk;
pub mod targets;
pub mod types;

// 重导出核心类型
pub use aggregate::{DirectorAggregate, PlanAggregate};
pub use gap::{GapAnalysis, GapRecord};
pub use plan::{DirectorPlan, LearningActivity};
pub use report::{DiagnosticReport, Opportunity};
pub use risk::RiskFinding;
pub use targets::{AnnualTargets, DailyChecklist, TargetBreakdown, TimeframeTargets};
pub use types::{ActivityKind, RiskLevel};
