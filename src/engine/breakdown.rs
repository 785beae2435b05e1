// ==========================================
// AOP培训目标分解系统 - 目标分解引擎
// ==========================================
// 职责: 年度目标按权重分解到季度/月度/周度/每日
// 输入: AnnualTargets + WeightProfile
// 输出: TargetBreakdown
// ==========================================
// 红线: 分配值 = 年度值 * 权重, 不取整存储
// 红线: 周度为示例抽样 (默认4周), 非全年切分;
//       需要全年粒度的调用方显式配置52个桶
// ==========================================

use crate::config::WeightProfile;
use crate::domain::targets::{AnnualTargets, DailyChecklist, TargetBreakdown, TimeframeTargets};
use crate::engine::error::EngineError;
use std::collections::BTreeMap;
use tracing::debug;

/// 月份名称 (1-12月)
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// 工作日名称
const WEEKDAY_NAMES: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

// ==========================================
// TargetDecomposer - 目标分解引擎
// ==========================================
// 无状态引擎,权重配置在构造时校验
#[derive(Debug)]
pub struct TargetDecomposer {
    profile: WeightProfile,
}

impl TargetDecomposer {
    /// 使用默认权重配置构造
    pub fn new() -> Self {
        Self {
            profile: WeightProfile::default(),
        }
    }

    /// 使用自定义权重配置构造
    ///
    /// # 参数
    /// - `profile`: 权重配置
    ///
    /// # 返回
    /// 权重表不满足和为1.0时返回配置错误 (快速失败)
    pub fn with_profile(profile: WeightProfile) -> Result<Self, EngineError> {
        profile.validate()?;
        Ok(Self { profile })
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 分解年度目标
    ///
    /// # 参数
    /// - `annual`: 年度目标
    ///
    /// # 返回
    /// 季度(4)/月度(12)/周度(示例)/每日(5) 四级分解结果
    pub fn decompose(&self, annual: &AnnualTargets) -> Result<TargetBreakdown, EngineError> {
        self.profile.validate()?;
        annual.validate()?;

        let breakdown = TargetBreakdown {
            annual: annual.clone(),
            quarterly: self.quarterly_breakdown(annual),
            monthly: self.monthly_breakdown(annual),
            weekly: self.weekly_breakdown(annual),
            daily: Self::daily_breakdown(),
        };

        debug!(
            quarters = breakdown.quarterly.len(),
            months = breakdown.monthly.len(),
            sample_weeks = breakdown.weekly.len(),
            "目标分解完成"
        );

        Ok(breakdown)
    }

    // ==========================================
    // 各级分解
    // ==========================================

    /// 季度分解 (Q1-Q4)
    fn quarterly_breakdown(&self, annual: &AnnualTargets) -> Vec<TimeframeTargets> {
        self.profile
            .quarterly
            .iter()
            .enumerate()
            .map(|(i, weight)| {
                let quarter = format!("Q{}", i + 1);
                let tasks = vec![
                    format!("Plan {quarter} VILT and ILT schedule"),
                    format!("Allocate resources for {quarter} training delivery"),
                    format!("Set up tracking for {quarter} learning metrics"),
                ];
                Self::scaled_targets(quarter, annual, *weight, tasks)
            })
            .collect()
    }

    /// 月度分解 (1-12月)
    ///
    /// 任务文案中的场次数仅做展示取整 (ceil),存储值保持浮点
    fn monthly_breakdown(&self, annual: &AnnualTargets) -> Vec<TimeframeTargets> {
        self.profile
            .monthly
            .iter()
            .zip(MONTH_NAMES)
            .map(|(weight, month)| {
                let vilt_sessions = (annual.vilt_target as f64 * weight).ceil() as i64;
                let ilt_sessions = (annual.ilt_target as f64 * weight).ceil() as i64;
                let tasks = vec![
                    format!("Schedule {vilt_sessions} VILT sessions"),
                    format!("Schedule {ilt_sessions} ILT sessions"),
                    "Monitor registration and completion rates".to_string(),
                    "Adjust schedule based on demand and feedback".to_string(),
                ];
                Self::scaled_targets(month.to_string(), annual, *weight, tasks)
            })
            .collect()
    }

    /// 周度分解 (示例抽样)
    ///
    /// 每周权重统一取首月权重/4, 周数由配置决定 (默认4);
    /// 这是抽样示意,不构成全年完整切分
    fn weekly_breakdown(&self, annual: &AnnualTargets) -> Vec<TimeframeTargets> {
        let weekly_weight = self.profile.weekly_weight();
        (1..=self.profile.sample_week_count)
            .map(|i| {
                let week = format!("Week {i}");
                let tasks = vec![
                    format!("Confirm trainers for {week} sessions"),
                    "Send reminders to registered participants".to_string(),
                    "Prepare training materials and environments".to_string(),
                    "Review feedback from previous week's sessions".to_string(),
                ];
                Self::scaled_targets(week, annual, weekly_weight, tasks)
            })
            .collect()
    }

    /// 每日任务清单 (周一至周五)
    ///
    /// 日粒度仅提供执行清单,不携带数值目标
    fn daily_breakdown() -> Vec<DailyChecklist> {
        WEEKDAY_NAMES
            .iter()
            .map(|day| DailyChecklist {
                day: day.to_string(),
                tasks: vec![
                    format!("Review {day}'s scheduled sessions"),
                    "Check registration numbers for upcoming sessions".to_string(),
                    "Follow up on participant feedback".to_string(),
                    "Update tracking dashboards".to_string(),
                    "Coordinate with trainers and support staff".to_string(),
                ],
            })
            .collect()
    }

    /// 按权重缩放年度目标
    fn scaled_targets(
        name: String,
        annual: &AnnualTargets,
        weight: f64,
        tasks: Vec<String>,
    ) -> TimeframeTargets {
        let competency_targets: BTreeMap<String, f64> = annual
            .competency_targets
            .iter()
            .map(|(k, v)| (k.clone(), *v as f64 * weight))
            .collect();

        TimeframeTargets {
            name,
            vilt_target: annual.vilt_target as f64 * weight,
            ilt_target: annual.ilt_target as f64 * weight,
            learning_hours_target: annual.learning_hours_target as f64 * weight,
            competency_targets,
            tasks,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for TargetDecomposer {
    fn default() -> Self {
        Self::new()
    }
}
