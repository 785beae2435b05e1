// ==========================================
// AOP培训目标分解系统 - 年度目标领域模型
// ==========================================
// 职责: 定义年度目标与分解后的时间段目标
// 红线: 输入实体只读,分解结果不回写
// ==========================================

use crate::engine::error::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// AnnualTargets - 年度目标 (输入实体)
// ==========================================
// 用途: 管道输入,调用方构造后不再修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualTargets {
    pub vilt_target: i32,                       // VILT 年度场次目标
    pub ilt_target: i32,                        // ILT 年度场次目标
    pub learning_hours_target: i32,             // 年度学习小时目标
    pub competency_targets: BTreeMap<String, i32>, // 能力域小时目标
}

impl AnnualTargets {
    /// 校验年度目标字段
    ///
    /// # 规则
    /// - 所有数值字段必须 >= 0
    /// - 能力域目标逐项校验
    ///
    /// # 返回
    /// 校验通过返回 Ok, 否则返回带字段名的校验错误
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.vilt_target < 0 {
            return Err(EngineError::Validation {
                field: "vilt_target".to_string(),
                message: format!("负值非法: {}", self.vilt_target),
            });
        }
        if self.ilt_target < 0 {
            return Err(EngineError::Validation {
                field: "ilt_target".to_string(),
                message: format!("负值非法: {}", self.ilt_target),
            });
        }
        if self.learning_hours_target < 0 {
            return Err(EngineError::Validation {
                field: "learning_hours_target".to_string(),
                message: format!("负值非法: {}", self.learning_hours_target),
            });
        }
        for (competency, target) in &self.competency_targets {
            if *target < 0 {
                return Err(EngineError::Validation {
                    field: format!("competency_targets.{}", competency),
                    message: format!("负值非法: {}", target),
                });
            }
        }
        Ok(())
    }
}

// ==========================================
// TimeframeTargets - 时间段目标
// ==========================================
// 用途: 分解引擎输出,每个季度/月度/周度一条
// 红线: 分配值 = 年度值 * 权重, 不做取整
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeTargets {
    pub name: String,                              // 时间段名称 (Q1/January/Week 1)
    pub vilt_target: f64,                          // VILT 场次目标
    pub ilt_target: f64,                           // ILT 场次目标
    pub learning_hours_target: f64,                // 学习小时目标
    pub competency_targets: BTreeMap<String, f64>, // 能力域小时目标
    pub tasks: Vec<String>,                        // 本时间段执行任务清单
}

// ==========================================
// DailyChecklist - 每日任务清单
// ==========================================
// 用途: 日粒度仅提供任务清单,不携带数值目标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyChecklist {
    pub day: String,        // 工作日名称 (Monday..Friday)
    pub tasks: Vec<String>, // 固定任务清单
}

// ==========================================
// TargetBreakdown - 目标分解结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetBreakdown {
    pub annual: AnnualTargets,           // 年度目标 (原样保留)
    pub quarterly: Vec<TimeframeTargets>, // 季度分解 (4条)
    pub monthly: Vec<TimeframeTargets>,   // 月度分解 (12条)
    pub weekly: Vec<TimeframeTargets>,    // 周度分解 (默认4条示例周)
    pub daily: Vec<DailyChecklist>,       // 每日任务清单 (5条)
}
