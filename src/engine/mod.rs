// ==========================================
// AOP培训目标分解系统 - 引擎层
// ==========================================
// 职责: 实现目标分解与差距/风险/机会/诊断业务规则
// 红线: 引擎无状态,纯函数; 所有判定必须输出可解释文本
// ==========================================

pub mod aggregator;
pub mod breakdown;
pub mod diagnostic;
pub mod error;
pub mod gap;
pub mod opportunity;
pub mod orchestrator;
pub mod risk;

// 重导出核心引擎
pub use aggregator::ActivityAggregator;
pub use breakdown::TargetDecomposer;
pub use diagnostic::DiagnosticSynthesizer;
pub use error::EngineError;
pub use gap::GapEvaluator;
pub use opportunity::OpportunityAdvisor;
pub use orchestrator::{PipelineOrchestrator, PipelineResult};
pub use risk::RiskClassifier;
