// ==========================================
// RiskClassifier 引擎集成测试
// ==========================================
// 测试目标: 验证阈值分级与未触发规则的缺席语义
// 覆盖范围: 场次/小时/能力域缺口 + 报名/完课比率
// ==========================================

use aop_planner::domain::aggregate::PlanAggregate;
use aop_planner::domain::gap::{GapAnalysis, GapRecord};
use aop_planner::domain::types::RiskLevel;
use aop_planner::engine::RiskClassifier;
use std::collections::BTreeMap;

// ==========================================
// 测试辅助函数
// ==========================================

/// 构造指定缺口的差距分析 (其余指标达标)
fn create_test_gaps(vilt_gap: f64, ilt_gap: f64, hours_gap: f64) -> GapAnalysis {
    GapAnalysis {
        vilt: GapRecord::new(100.0 + vilt_gap, 100.0),
        ilt: GapRecord::new(50.0 + ilt_gap, 50.0),
        learning_hours: GapRecord::new(1000.0 + hours_gap, 1000.0),
        competency: BTreeMap::new(),
    }
}

/// 构造达标比率的聚合 (不触发比率规则)
fn create_test_aggregate() -> PlanAggregate {
    PlanAggregate {
        total_vilt_count: 100,
        total_ilt_count: 50,
        total_learning_hours: 1000.0,
        competency_hours: BTreeMap::new(),
        avg_registration_rate: 0.90,
        avg_completion_rate: 0.90,
        per_director: Vec::new(),
    }
}

fn vilt_severity(gap: f64) -> Option<RiskLevel> {
    let classifier = RiskClassifier::new();
    let findings = classifier.classify(&create_test_gaps(gap, 0.0, 0.0), &create_test_aggregate());
    findings
        .iter()
        .find(|f| f.area == "VILT Session Count")
        .map(|f| f.severity)
}

// ==========================================
// 测试用例 1: VILT 档位单调性
// ==========================================

#[test]
fn test_vilt_severity_monotonicity() {
    assert_eq!(vilt_severity(51.0), Some(RiskLevel::High));
    assert_eq!(vilt_severity(50.0), Some(RiskLevel::Medium));
    assert_eq!(vilt_severity(21.0), Some(RiskLevel::Medium));
    assert_eq!(vilt_severity(20.0), Some(RiskLevel::Low));
    assert_eq!(vilt_severity(1.0), Some(RiskLevel::Low));
    // 无缺口: 规则缺席,不产出 Low 占位
    assert_eq!(vilt_severity(0.0), None);
    assert_eq!(vilt_severity(-10.0), None);
}

// ==========================================
// 测试用例 2: 能力域逐域判定
// ==========================================

#[test]
fn test_competency_findings_per_area() {
    let classifier = RiskClassifier::new();
    let mut gaps = create_test_gaps(0.0, 0.0, 0.0);
    gaps.competency.insert(
        "Technical".to_string(),
        GapRecord::new(1000.0, 400.0), // gap 600 -> High
    );
    gaps.competency.insert(
        "Leadership".to_string(),
        GapRecord::new(500.0, 200.0), // gap 300 -> Medium
    );
    gaps.competency.insert(
        "Process".to_string(),
        GapRecord::new(300.0, 300.0), // 达标 -> 无判定
    );

    let findings = classifier.classify(&gaps, &create_test_aggregate());

    let technical = findings
        .iter()
        .find(|f| f.area == "Technical Competency")
        .unwrap();
    assert_eq!(technical.severity, RiskLevel::High);
    assert!(technical.impact.contains("600 hours"));
    assert!(technical.mitigation.contains("Technical courses"));

    let leadership = findings
        .iter()
        .find(|f| f.area == "Leadership Competency")
        .unwrap();
    assert_eq!(leadership.severity, RiskLevel::Medium);

    assert!(!findings.iter().any(|f| f.area == "Process Competency"));
}

// ==========================================
// 测试用例 3: 比率规则
// ==========================================

#[test]
fn test_rate_findings() {
    let classifier = RiskClassifier::new();
    let gaps = create_test_gaps(0.0, 0.0, 0.0);

    // 报名率 0.75 -> Medium; 完课率 0.65 -> High
    let mut aggregate = create_test_aggregate();
    aggregate.avg_registration_rate = 0.75;
    aggregate.avg_completion_rate = 0.65;

    let findings = classifier.classify(&gaps, &aggregate);
    assert_eq!(findings.len(), 2);

    let registration = findings
        .iter()
        .find(|f| f.area == "Registration Rate")
        .unwrap();
    assert_eq!(registration.severity, RiskLevel::Medium);
    assert_eq!(registration.current_value, "75%");
    assert_eq!(registration.target_value, "80%");

    let completion = findings
        .iter()
        .find(|f| f.area == "Completion Rate")
        .unwrap();
    assert_eq!(completion.severity, RiskLevel::High);
}

// ==========================================
// 测试用例 4: 全部达标时零判定
// ==========================================

#[test]
fn test_no_findings_when_all_on_track() {
    let classifier = RiskClassifier::new();
    let findings = classifier.classify(
        &create_test_gaps(0.0, 0.0, 0.0),
        &create_test_aggregate(),
    );
    assert!(findings.is_empty());
}
