// ==========================================
// AOP培训目标分解系统 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 培训活动类型 (Activity Kind)
// ==========================================
// VILT: 虚拟讲师授课 (时长短,容量大)
// ILT: 现场讲师授课 (时长长,容量小)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    Vilt, // 虚拟讲师授课
    Ilt,  // 现场讲师授课
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::Vilt => write!(f, "VILT"),
            ActivityKind::Ilt => write!(f, "ILT"),
        }
    }
}

impl ActivityKind {
    /// 从字符串解析活动类型
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "VILT" => Some(ActivityKind::Vilt),
            "ILT" => Some(ActivityKind::Ilt),
            _ => None,
        }
    }
}

// ==========================================
// 风险等级 (Risk Level)
// ==========================================
// 顺序: Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,    // 关注
    Medium, // 紧张
    High,   // 危险
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

impl RiskLevel {
    /// 从字符串解析风险等级
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "LOW" => Some(RiskLevel::Low),
            "MEDIUM" => Some(RiskLevel::Medium),
            "HIGH" => Some(RiskLevel::High),
            _ => None,
        }
    }
}
