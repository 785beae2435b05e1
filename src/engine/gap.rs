// ==========================================
// AOP培训目标分解系统 - 差距评估引擎
// ==========================================
// 职责: 对比年度目标与聚合实际,产出带符号差距与缺口指示
// 输入: PlanAggregate + AnnualTargets
// 输出: GapAnalysis
// ==========================================
// 红线: gap 带符号; gap_indicator 达标归零,只表达缺口幅度
// 红线: 相同输入必须产出相同数值 (无随机性)
// ==========================================

use crate::domain::aggregate::PlanAggregate;
use crate::domain::gap::{GapAnalysis, GapRecord};
use crate::domain::targets::AnnualTargets;
use std::collections::BTreeMap;
use tracing::warn;

// ==========================================
// GapEvaluator - 差距评估引擎
// ==========================================
// 无状态引擎,所有方法都是纯函数
pub struct GapEvaluator;

impl GapEvaluator {
    /// 构造函数
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 评估目标与实际的差距
    ///
    /// # 参数
    /// - `aggregate`: 聚合实际指标
    /// - `annual`: 年度目标
    ///
    /// # 返回
    /// 三个核心指标 + 每个目标能力域的差距记录
    pub fn evaluate(&self, aggregate: &PlanAggregate, annual: &AnnualTargets) -> GapAnalysis {
        let vilt = GapRecord::new(
            annual.vilt_target as f64,
            aggregate.total_vilt_count as f64,
        );
        let ilt = GapRecord::new(annual.ilt_target as f64, aggregate.total_ilt_count as f64);
        let learning_hours = GapRecord::new(
            annual.learning_hours_target as f64,
            aggregate.total_learning_hours,
        );

        let mut competency: BTreeMap<String, GapRecord> = BTreeMap::new();
        for (name, target) in &annual.competency_targets {
            let scheduled = match aggregate.competency_hours.get(name) {
                Some(hours) => *hours,
                None => {
                    // 缺数据: 目标能力域无活动排期,实际取0 (告警,非错误)
                    warn!(competency = %name, "缺数据: 能力域无排期活动,实际值取0");
                    0.0
                }
            };
            competency.insert(name.clone(), GapRecord::new(*target as f64, scheduled));
        }

        GapAnalysis {
            vilt,
            ilt,
            learning_hours,
            competency,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for GapEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
