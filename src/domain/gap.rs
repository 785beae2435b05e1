// ==========================================
// AOP培训目标分解系统 - 差距分析领域模型
// ==========================================
// 职责: 定义目标与实际之间的差距记录
// 红线: gap_indicator 永不为负, 0 表示无差距
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// GapRecord - 单指标差距记录
// ==========================================
// gap 带符号 (可为负,表示超额);
// gap_indicator 只表达缺口幅度,达标时恒为 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapRecord {
    pub target: f64,        // 目标值
    pub scheduled: f64,     // 已排期值
    pub gap: f64,           // 差距 = target - scheduled
    pub gap_indicator: f64, // 缺口指示 (0 = 无缺口)
}

impl GapRecord {
    /// 由目标值与实际值构造差距记录
    pub fn new(target: f64, scheduled: f64) -> Self {
        let gap = target - scheduled;
        let gap_indicator = if scheduled >= target { 0.0 } else { gap };
        Self {
            target,
            scheduled,
            gap,
            gap_indicator,
        }
    }

    /// 是否达标 (缺口指示为 0)
    pub fn is_on_track(&self) -> bool {
        self.gap_indicator == 0.0
    }
}

// ==========================================
// GapAnalysis - 差距分析结果
// ==========================================
// 三个核心指标 + 每个目标能力域一条记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub vilt: GapRecord,                          // VILT 场次差距
    pub ilt: GapRecord,                           // ILT 场次差距
    pub learning_hours: GapRecord,                // 学习小时差距
    pub competency: BTreeMap<String, GapRecord>,  // 能力域差距
}

impl GapAnalysis {
    /// 按能力域名称取差距记录
    pub fn competency_gap(&self, name: &str) -> Option<&GapRecord> {
        self.competency.get(name)
    }
}
