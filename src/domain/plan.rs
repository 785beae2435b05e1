// ==========================================
// AOP培训目标分解系统 - 学习计划领域模型
// ==========================================
// 职责: 定义学习活动与学习总监(Director)计划
// 红线: 数据质量违规必须阻断,不做静默修正
// ==========================================

use crate::domain::types::ActivityKind;
use crate::engine::error::EngineError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// LearningActivity - 学习活动
// ==========================================
// 不变式: 0 <= completion_count <= registrations <= capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningActivity {
    pub id: String,                // 活动ID
    pub title: String,             // 活动标题
    pub kind: ActivityKind,        // 活动类型 (VILT/ILT)
    pub duration_hours: f64,       // 单场时长 (小时)
    pub competency_area: String,   // 所属能力域
    pub scheduled_date: NaiveDate, // 排期日期
    pub capacity: i32,             // 容量上限
    pub registrations: i32,        // 报名人数
    pub completion_count: i32,     // 完课人数
}

impl LearningActivity {
    /// 校验活动数据质量
    ///
    /// # 规则
    /// - duration_hours > 0
    /// - capacity / registrations / completion_count 均 >= 0
    /// - completion_count <= registrations <= capacity
    ///
    /// # 返回
    /// 违规时返回带字段名的校验错误 (阻断,不修正)
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.duration_hours <= 0.0 {
            return Err(EngineError::Validation {
                field: format!("activity[{}].duration_hours", self.id),
                message: format!("时长必须为正: {}", self.duration_hours),
            });
        }
        if self.capacity < 0 {
            return Err(EngineError::Validation {
                field: format!("activity[{}].capacity", self.id),
                message: format!("负值非法: {}", self.capacity),
            });
        }
        if self.registrations < 0 {
            return Err(EngineError::Validation {
                field: format!("activity[{}].registrations", self.id),
                message: format!("负值非法: {}", self.registrations),
            });
        }
        if self.completion_count < 0 {
            return Err(EngineError::Validation {
                field: format!("activity[{}].completion_count", self.id),
                message: format!("负值非法: {}", self.completion_count),
            });
        }
        if self.registrations > self.capacity {
            return Err(EngineError::Validation {
                field: format!("activity[{}].registrations", self.id),
                message: format!(
                    "报名人数超出容量: registrations={} capacity={}",
                    self.registrations, self.capacity
                ),
            });
        }
        if self.completion_count > self.registrations {
            return Err(EngineError::Validation {
                field: format!("activity[{}].completion_count", self.id),
                message: format!(
                    "完课人数超出报名人数: completion_count={} registrations={}",
                    self.completion_count, self.registrations
                ),
            });
        }
        Ok(())
    }

    /// 活动贡献的学习小时
    ///
    /// 公式: duration_hours * completion_count
    /// (按实际完课人数计,与容量/报名无关)
    pub fn delivered_hours(&self) -> f64 {
        self.duration_hours * self.completion_count as f64
    }
}

// ==========================================
// DirectorPlan - 学习总监计划
// ==========================================
// 用途: 一个汇报单元(区域学习总监)的排期活动集合
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorPlan {
    pub director_id: String,             // 总监ID
    pub director_name: String,           // 总监姓名
    pub department: String,              // 部门/业务单元
    pub activities: Vec<LearningActivity>, // 排期活动列表
}

impl DirectorPlan {
    /// 计划内 VILT 场次数
    pub fn vilt_count(&self) -> i32 {
        self.activities
            .iter()
            .filter(|a| a.kind == ActivityKind::Vilt)
            .count() as i32
    }

    /// 计划内 ILT 场次数
    pub fn ilt_count(&self) -> i32 {
        self.activities
            .iter()
            .filter(|a| a.kind == ActivityKind::Ilt)
            .count() as i32
    }

    /// 校验计划内全部活动
    pub fn validate(&self) -> Result<(), EngineError> {
        for activity in &self.activities {
            activity.validate()?;
        }
        Ok(())
    }
}
