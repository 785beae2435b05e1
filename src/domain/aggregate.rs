// ==========================================
// AOP培训目标分解系统 - 计划聚合领域模型
// ==========================================
// 职责: 定义聚合引擎的输出实体
// 红线: 每次运行整体重算,不做增量更新
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// DirectorAggregate - 单总监聚合
// ==========================================
// 只镜像场次数,不含小时与比率
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorAggregate {
    pub director_id: String,   // 总监ID
    pub director_name: String, // 总监姓名
    pub department: String,    // 部门
    pub vilt_count: i32,       // VILT 场次数
    pub ilt_count: i32,        // ILT 场次数
}

// ==========================================
// PlanAggregate - 计划全局聚合
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanAggregate {
    pub total_vilt_count: i32,                    // VILT 总场次 (按场次计,非小时)
    pub total_ilt_count: i32,                     // ILT 总场次
    pub total_learning_hours: f64,                // 总学习小时 (时长*完课人数)
    pub competency_hours: BTreeMap<String, f64>,  // 按能力域学习小时
    pub avg_registration_rate: f64,               // 平均报名率 [0,1]
    pub avg_completion_rate: f64,                 // 平均完课率 [0,1]
    pub per_director: Vec<DirectorAggregate>,     // 按总监分解
}

impl PlanAggregate {
    /// 空计划聚合 (全部指标归零)
    pub fn empty() -> Self {
        Self {
            total_vilt_count: 0,
            total_ilt_count: 0,
            total_learning_hours: 0.0,
            competency_hours: BTreeMap::new(),
            avg_registration_rate: 0.0,
            avg_completion_rate: 0.0,
            per_director: Vec::new(),
        }
    }
}
