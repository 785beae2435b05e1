// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成学习计划活动明细CSV测试数据集
// 输出: tests/fixtures/datasets/*.csv
// ==========================================

use csv::Writer;
use std::error::Error;
use std::fs;
use std::path::Path;

// CSV 表头 (与导入层列名一致)
const CSV_HEADER: &[&str] = &[
    "director_id",
    "director_name",
    "department",
    "activity_id",
    "title",
    "kind",
    "duration_hours",
    "competency_area",
    "scheduled_date",
    "capacity",
    "registrations",
    "completion_count",
];

const DIRECTORS: &[(&str, &str, &str)] = &[
    ("GLD001", "John Smith", "Technology"),
    ("GLD002", "Sarah Johnson", "Operations"),
    ("GLD003", "Michael Chen", "Finance"),
];

const TITLES: &[&str] = &[
    "Python Programming Fundamentals",
    "Advanced Java Development",
    "Cloud Architecture Principles",
    "DevOps Essentials",
    "Effective Communication",
    "Leadership Skills",
    "Project Management",
    "Agile Methodologies",
    "Data Science Basics",
    "Machine Learning Fundamentals",
    "Cybersecurity Essentials",
    "Blockchain Technology",
];

const COMPETENCIES: &[&str] = &[
    "Technical",
    "Soft Skills",
    "Leadership",
    "Domain Knowledge",
    "Process",
];

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("tests/fixtures/datasets");
    fs::create_dir_all(out_dir)?;

    // 数据集1: 标准计划 (每总监40条活动)
    write_dataset(&out_dir.join("standard_plans.csv"), 40, false)?;

    // 数据集2: 稀疏计划 (每总监5条活动, 必然产生缺口)
    write_dataset(&out_dir.join("sparse_plans.csv"), 5, false)?;

    // 数据集3: 含数据质量违规的计划 (导入必须阻断)
    write_dataset(&out_dir.join("invalid_plans.csv"), 10, true)?;

    println!("测试数据集已生成: {}", out_dir.display());
    Ok(())
}

/// 写出一个CSV数据集 (确定性数据,便于断言)
fn write_dataset(
    path: &Path,
    activities_per_director: usize,
    inject_violation: bool,
) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;

    for (d, (id, name, department)) in DIRECTORS.iter().enumerate() {
        for i in 0..activities_per_director {
            let is_ilt = i % 3 == 0;
            let (kind, duration, capacity) = if is_ilt {
                ("ILT", 8.0, 12 + (i % 3) * 4)
            } else {
                ("VILT", 2.0 + (i % 3) as f64, 20 + (i % 4) * 5)
            };
            let mut registrations = capacity - (i % 5);
            let completions = registrations - (i % 4).min(registrations);

            // 末行注入报名超容量违规
            if inject_violation && d == DIRECTORS.len() - 1 && i == activities_per_director - 1 {
                registrations = capacity + 10;
            }

            writer.write_record([
                id.to_string(),
                name.to_string(),
                department.to_string(),
                format!("ACT-{}", 1000 + d * 100 + i),
                TITLES[(d + i) % TITLES.len()].to_string(),
                kind.to_string(),
                format!("{duration:.1}"),
                COMPETENCIES[(d + i) % COMPETENCIES.len()].to_string(),
                format!("2026-{:02}-{:02}", 1 + i % 12, 1 + i % 28),
                capacity.to_string(),
                registrations.to_string(),
                completions.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    println!("  {} 写出完成", path.display());
    Ok(())
}
