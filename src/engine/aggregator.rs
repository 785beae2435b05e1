// ==========================================
// AOP培训目标分解系统 - 活动聚合引擎
// ==========================================
// 职责: 将各总监学习计划归并为全局聚合指标
// 输入: Vec<DirectorPlan>
// 输出: PlanAggregate
// ==========================================
// 红线: 纯归并,不修改输入计划
// 红线: 学习小时 = 时长 * 完课人数 (与容量/报名无关)
// 红线: 比率为参与活动的算术平均,不按体量加权
// ==========================================

use crate::domain::aggregate::{DirectorAggregate, PlanAggregate};
use crate::domain::plan::DirectorPlan;
use crate::domain::types::ActivityKind;
use crate::engine::error::EngineError;
use std::collections::BTreeMap;
use tracing::warn;

// ==========================================
// ActivityAggregator - 活动聚合引擎
// ==========================================
// 无状态引擎,所有方法都是纯函数
pub struct ActivityAggregator;

impl ActivityAggregator {
    /// 构造函数
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 聚合学习计划
    ///
    /// # 参数
    /// - `plans`: 各总监学习计划
    ///
    /// # 返回
    /// 全局聚合指标; 活动数据质量违规时返回校验错误 (阻断)
    pub fn aggregate(&self, plans: &[DirectorPlan]) -> Result<PlanAggregate, EngineError> {
        // 1. 数据质量校验 (违规阻断,不修正)
        for plan in plans {
            plan.validate()?;
        }

        // 2. 空计划: 指标整体归零 (缺数据告警,非错误)
        if plans.is_empty() {
            warn!("缺数据: 学习计划为空,聚合指标全部取0");
            return Ok(PlanAggregate::empty());
        }

        // 3. 场次与小时归并
        let mut total_vilt_count = 0;
        let mut total_ilt_count = 0;
        let mut total_learning_hours = 0.0;
        let mut competency_hours: BTreeMap<String, f64> = BTreeMap::new();

        for plan in plans {
            for activity in &plan.activities {
                match activity.kind {
                    ActivityKind::Vilt => total_vilt_count += 1,
                    ActivityKind::Ilt => total_ilt_count += 1,
                }

                let hours = activity.delivered_hours();
                total_learning_hours += hours;
                *competency_hours
                    .entry(activity.competency_area.clone())
                    .or_insert(0.0) += hours;
            }
        }

        // 4. 报名率/完课率 (分母为0的活动不参与均值)
        let (avg_registration_rate, avg_completion_rate) = Self::calculate_rates(plans);

        // 5. 按总监分解 (只镜像场次数)
        let per_director = plans
            .iter()
            .map(|plan| DirectorAggregate {
                director_id: plan.director_id.clone(),
                director_name: plan.director_name.clone(),
                department: plan.department.clone(),
                vilt_count: plan.vilt_count(),
                ilt_count: plan.ilt_count(),
            })
            .collect();

        Ok(PlanAggregate {
            total_vilt_count,
            total_ilt_count,
            total_learning_hours,
            competency_hours,
            avg_registration_rate,
            avg_completion_rate,
            per_director,
        })
    }

    // ==========================================
    // 比率计算
    // ==========================================

    /// 计算平均报名率与平均完课率
    ///
    /// # 规则
    /// - 报名率 = registrations / capacity, capacity=0 的活动跳过
    /// - 完课率 = completion_count / registrations, registrations=0 的活动跳过
    /// - 均值为参与活动的算术平均; 空集合均值定义为 0.0
    fn calculate_rates(plans: &[DirectorPlan]) -> (f64, f64) {
        let mut registration_rates = Vec::new();
        let mut completion_rates = Vec::new();

        for plan in plans {
            for activity in &plan.activities {
                if activity.capacity > 0 {
                    registration_rates
                        .push(activity.registrations as f64 / activity.capacity as f64);
                }
                if activity.registrations > 0 {
                    completion_rates
                        .push(activity.completion_count as f64 / activity.registrations as f64);
                }
            }
        }

        (Self::mean(&registration_rates), Self::mean(&completion_rates))
    }

    fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for ActivityAggregator {
    fn default() -> Self {
        Self::new()
    }
}
