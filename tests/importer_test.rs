// ==========================================
// PlanImporter 导入层集成测试
// ==========================================
// 测试目标: 验证CSV导入的归组顺序与质量阻断
// 覆盖范围: 正常导入 / 未知类型 / 数据质量违规
// ==========================================

use aop_planner::importer::{ImportError, PlanImporter};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const CSV_HEADER: &str = "director_id,director_name,department,activity_id,title,kind,\
duration_hours,competency_area,scheduled_date,capacity,registrations,completion_count";

// ==========================================
// 测试辅助函数
// ==========================================

fn write_csv(dir: &TempDir, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let mut content = String::from(CSV_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    fs::write(&path, content).unwrap();
    path
}

// ==========================================
// 测试用例 1: 正常导入与归组
// ==========================================

#[test]
fn test_import_groups_by_director_in_first_seen_order() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "plans.csv",
        &[
            "D001,Alice Chen,Engineering,ACT-1,Rust Basics,VILT,2.0,Technical,2026-03-10,30,25,20",
            "D002,Bob Lee,Product,ACT-2,Roadmapping,ILT,4.0,Leadership,2026-04-02,20,18,15",
            "D001,Alice Chen,Engineering,ACT-3,Async Patterns,VILT,3.0,Technical,2026-05-21,30,28,24",
        ],
    );

    let importer = PlanImporter::new();
    let plans = importer.import_csv(&path).unwrap();

    assert_eq!(plans.len(), 2);
    // 归组保持首次出现顺序
    assert_eq!(plans[0].director_id, "D001");
    assert_eq!(plans[0].director_name, "Alice Chen");
    assert_eq!(plans[0].activities.len(), 2);
    assert_eq!(plans[1].director_id, "D002");
    assert_eq!(plans[1].activities.len(), 1);

    let activity = &plans[0].activities[1];
    assert_eq!(activity.id, "ACT-3");
    assert_eq!(activity.duration_hours, 3.0);
    assert_eq!(activity.completion_count, 24);
    // 已交付学时 = 时长 * 完成人数
    assert_eq!(activity.delivered_hours(), 72.0);
}

#[test]
fn test_import_empty_file_yields_no_plans() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "empty.csv", &[]);

    let plans = PlanImporter::new().import_csv(&path).unwrap();
    assert!(plans.is_empty());
}

// ==========================================
// 测试用例 2: 未知活动类型阻断
// ==========================================

#[test]
fn test_unknown_activity_kind_reports_line() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "bad_kind.csv",
        &[
            "D001,Alice Chen,Engineering,ACT-1,Rust Basics,VILT,2.0,Technical,2026-03-10,30,25,20",
            "D001,Alice Chen,Engineering,ACT-2,Workshop,HYBRID,2.0,Technical,2026-03-11,30,25,20",
        ],
    );

    let err = PlanImporter::new().import_csv(&path).unwrap_err();
    match err {
        ImportError::Parse { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("HYBRID"));
        }
        other => panic!("期望Parse错误, 实际: {other:?}"),
    }
}

// ==========================================
// 测试用例 3: 数据质量违规阻断
// ==========================================

#[test]
fn test_registrations_over_capacity_blocks_import() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "over_capacity.csv",
        &["D001,Alice Chen,Engineering,ACT-1,Rust Basics,VILT,2.0,Technical,2026-03-10,30,35,20"],
    );

    let err = PlanImporter::new().import_csv(&path).unwrap_err();
    match err {
        ImportError::Validation(inner) => {
            assert!(inner.to_string().contains("ACT-1"));
        }
        other => panic!("期望Validation错误, 实际: {other:?}"),
    }
}

#[test]
fn test_completion_over_registrations_blocks_import() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "over_completion.csv",
        &["D001,Alice Chen,Engineering,ACT-1,Rust Basics,ILT,2.0,Technical,2026-03-10,30,25,26"],
    );

    assert!(matches!(
        PlanImporter::new().import_csv(&path),
        Err(ImportError::Validation(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does_not_exist.csv");

    let err = PlanImporter::new().import_csv(&path).unwrap_err();
    assert!(matches!(err, ImportError::Csv(_) | ImportError::Io(_)));
}
