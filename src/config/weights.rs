// ==========================================
// AOP培训目标分解系统 - 分解权重配置
// ==========================================
// 职责: 季度/月度权重表与示例周数配置
// 红线: 权重表之和必须为 1.0, 否则快速失败,不做归一化
// ==========================================

use crate::engine::error::EngineError;
use serde::{Deserialize, Serialize};

/// 权重和校验容差
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// 默认示例周数 (周度分解为示例抽样,非全年52周切分)
pub const DEFAULT_SAMPLE_WEEK_COUNT: usize = 4;

/// 全年周数 (需要全年周计划的调用方显式使用)
pub const FULL_YEAR_WEEK_COUNT: usize = 52;

// ==========================================
// WeightProfile - 分解权重配置
// ==========================================
// 月度权重向年中倾斜 (六月最高)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    /// 季度权重 Q1-Q4, 和为 1.0
    pub quarterly: [f64; 4],

    /// 月度权重 1-12月, 和为 1.0
    pub monthly: [f64; 12],

    /// 周度分解输出的示例周数
    #[serde(default = "default_sample_week_count")]
    pub sample_week_count: usize,
}

fn default_sample_week_count() -> usize {
    DEFAULT_SAMPLE_WEEK_COUNT
}

impl Default for WeightProfile {
    fn default() -> Self {
        Self {
            quarterly: [0.25, 0.30, 0.25, 0.20],
            monthly: [
                0.08, 0.08, 0.09, 0.09, 0.09, 0.12, // 1-6月
                0.08, 0.08, 0.09, 0.08, 0.06, 0.06, // 7-12月
            ],
            sample_week_count: DEFAULT_SAMPLE_WEEK_COUNT,
        }
    }
}

impl WeightProfile {
    /// 校验权重表
    ///
    /// # 规则
    /// - 季度/月度权重之和均为 1.0 (容差 1e-6)
    /// - 权重逐项非负
    ///
    /// # 返回
    /// 违规时返回配置错误 (阻断,不做静默归一化)
    pub fn validate(&self) -> Result<(), EngineError> {
        Self::check_table("quarterly", &self.quarterly)?;
        Self::check_table("monthly", &self.monthly)?;
        Ok(())
    }

    fn check_table(table: &str, weights: &[f64]) -> Result<(), EngineError> {
        if let Some(w) = weights.iter().find(|w| **w < 0.0) {
            return Err(EngineError::WeightTable {
                table: table.to_string(),
                message: format!("权重为负: {w}"),
            });
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(EngineError::WeightTable {
                table: table.to_string(),
                message: format!("权重和必须为1.0, 实际: {sum}"),
            });
        }
        Ok(())
    }

    /// 周度权重 (示例抽样: 以首月权重按月均4周折算,均匀套用)
    pub fn weekly_weight(&self) -> f64 {
        self.monthly[0] / 4.0
    }
}
