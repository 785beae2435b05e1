// ==========================================
// AOP培训目标分解系统 - 导入层
// ==========================================
// 职责: 从外部CSV读入各总监的学习计划
// 输入: CSV 活动明细 (一行一活动,按总监归组)
// 输出: Vec<DirectorPlan>
// ==========================================
// 红线: 数据质量违规逐行阻断,不做静默修正
// ==========================================

pub mod error;

pub use error::ImportError;

use crate::domain::plan::{DirectorPlan, LearningActivity};
use crate::domain::types::ActivityKind;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

// ==========================================
// RawActivityRecord - CSV 行记录
// ==========================================
#[derive(Debug, Clone, Deserialize)]
struct RawActivityRecord {
    director_id: String,
    director_name: String,
    department: String,
    activity_id: String,
    title: String,
    kind: String,
    duration_hours: f64,
    competency_area: String,
    scheduled_date: NaiveDate,
    capacity: i32,
    registrations: i32,
    completion_count: i32,
}

// ==========================================
// PlanImporter - 学习计划导入器
// ==========================================
pub struct PlanImporter;

impl PlanImporter {
    /// 构造函数
    pub fn new() -> Self {
        Self
    }

    /// 从CSV文件导入学习计划
    ///
    /// # 参数
    /// - `path`: CSV 文件路径
    ///
    /// # 返回
    /// 按总监归组的学习计划 (保持首次出现顺序);
    /// 活动数据质量违规时整体失败
    pub fn import_csv(&self, path: &Path) -> Result<Vec<DirectorPlan>, ImportError> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();
        let mut plans: Vec<DirectorPlan> = Vec::new();

        for result in reader.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            let record: RawActivityRecord = row.deserialize(Some(&headers))?;
            let activity = Self::convert_record(&record, line)?;

            // 违规阻断 (带字段定位)
            activity.validate()?;

            match plans
                .iter_mut()
                .find(|plan| plan.director_id == record.director_id)
            {
                Some(plan) => plan.activities.push(activity),
                None => plans.push(DirectorPlan {
                    director_id: record.director_id.clone(),
                    director_name: record.director_name.clone(),
                    department: record.department.clone(),
                    activities: vec![activity],
                }),
            }
        }

        info!(
            path = %path.display(),
            plans = plans.len(),
            activities = plans.iter().map(|p| p.activities.len()).sum::<usize>(),
            "学习计划导入完成"
        );

        Ok(plans)
    }

    /// CSV行转领域活动
    fn convert_record(
        record: &RawActivityRecord,
        line: u64,
    ) -> Result<LearningActivity, ImportError> {
        let kind = ActivityKind::parse(&record.kind).ok_or_else(|| ImportError::Parse {
            line,
            message: format!("未知活动类型: {}", record.kind),
        })?;

        Ok(LearningActivity {
            id: record.activity_id.clone(),
            title: record.title.clone(),
            kind,
            duration_hours: record.duration_hours,
            competency_area: record.competency_area.clone(),
            scheduled_date: record.scheduled_date,
            capacity: record.capacity,
            registrations: record.registrations,
            completion_count: record.completion_count,
        })
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for PlanImporter {
    fn default() -> Self {
        Self::new()
    }
}
