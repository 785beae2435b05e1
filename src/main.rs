// ==========================================
// AOP培训目标分解系统 - 演示主入口
// ==========================================
// 用途: 以示例年度目标与示例学习计划跑通完整管道,
//       输出差距/风险/诊断摘要
// ==========================================

use anyhow::Result;
use aop_planner::domain::plan::{DirectorPlan, LearningActivity};
use aop_planner::domain::targets::AnnualTargets;
use aop_planner::domain::types::ActivityKind;
use aop_planner::engine::PipelineOrchestrator;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

fn main() -> Result<()> {
    // 初始化日志系统
    aop_planner::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", aop_planner::APP_NAME);
    tracing::info!("系统版本: {}", aop_planner::VERSION);
    tracing::info!("==================================================");

    // 示例年度目标
    let annual = AnnualTargets {
        vilt_target: 500,
        ilt_target: 200,
        learning_hours_target: 10000,
        competency_targets: BTreeMap::from([
            ("Technical".to_string(), 6000),
            ("Soft Skills".to_string(), 2000),
            ("Leadership".to_string(), 2000),
        ]),
    };

    let plans = sample_plans();
    let supplementary = HashMap::from([(
        "planning_cycle".to_string(),
        serde_json::Value::String("Next planning cycle".to_string()),
    )]);

    let orchestrator = PipelineOrchestrator::new();
    let result = orchestrator.run(&annual, &plans, &supplementary)?;

    // 季度分解摘要
    for quarter in &result.breakdown.quarterly {
        tracing::info!(
            "{}: {:.0} VILTs, {:.0} ILTs, {:.0} learning hours",
            quarter.name,
            quarter.vilt_target,
            quarter.ilt_target,
            quarter.learning_hours_target
        );
    }

    // 差距摘要
    tracing::info!(
        "VILT: scheduled={} gap_indicator={}",
        result.gaps.vilt.scheduled,
        result.gaps.vilt.gap_indicator
    );
    tracing::info!(
        "ILT: scheduled={} gap_indicator={}",
        result.gaps.ilt.scheduled,
        result.gaps.ilt.gap_indicator
    );
    tracing::info!(
        "Learning hours: scheduled={:.1} gap_indicator={:.1}",
        result.gaps.learning_hours.scheduled,
        result.gaps.learning_hours.gap_indicator
    );

    // 风险摘要
    for risk in &result.risks {
        tracing::info!(
            "[{}] {}: {} -> {}",
            risk.severity,
            risk.area,
            risk.current_value,
            risk.target_value
        );
    }

    // 诊断报告 (完整JSON交给展示层)
    tracing::info!("诊断结论: {}", result.report.summary);
    println!("{}", serde_json::to_string_pretty(&result.report)?);

    Ok(())
}

/// 示例学习计划 (三个总监,确定性数据)
fn sample_plans() -> Vec<DirectorPlan> {
    let directors = [
        ("GLD001", "John Smith", "Technology"),
        ("GLD002", "Sarah Johnson", "Operations"),
        ("GLD003", "Michael Chen", "Finance"),
    ];
    let titles = [
        "Python Programming Fundamentals",
        "Cloud Architecture Principles",
        "Effective Communication",
        "Leadership Skills",
        "Data Science Basics",
        "Cybersecurity Essentials",
    ];
    let competencies = ["Technical", "Soft Skills", "Leadership"];

    directors
        .iter()
        .enumerate()
        .map(|(d, (id, name, department))| {
            let activities = (0..40)
                .map(|i| {
                    let kind = if i % 3 == 0 {
                        ActivityKind::Ilt
                    } else {
                        ActivityKind::Vilt
                    };
                    let (duration, capacity) = match kind {
                        ActivityKind::Vilt => (2.0 + (i % 3) as f64, 20 + (i % 4) * 5),
                        ActivityKind::Ilt => (8.0, 12 + (i % 3) * 4),
                    };
                    let registrations = capacity - (i % 5);
                    let completions = registrations - (i % 4);
                    LearningActivity {
                        id: format!("ACT-{}", 1000 + d * 100 + i as usize),
                        title: titles[(d + i as usize) % titles.len()].to_string(),
                        kind,
                        duration_hours: duration,
                        competency_area: competencies[(d + i as usize) % competencies.len()]
                            .to_string(),
                        scheduled_date: NaiveDate::from_ymd_opt(
                            2026,
                            1 + (i % 12) as u32,
                            1 + (i % 28) as u32,
                        )
                        .unwrap(),
                        capacity,
                        registrations,
                        completion_count: completions,
                    }
                })
                .collect();

            DirectorPlan {
                director_id: id.to_string(),
                director_name: name.to_string(),
                department: department.to_string(),
                activities,
            }
        })
        .collect()
}
