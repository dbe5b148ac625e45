//! 图配置
//!
//! 目前只控制自环的处理方式

use serde::{Deserialize, Serialize};

/// 自环策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelfLoopPolicy {
    /// 允许自环，`add_edge(v, v)` 把 v 加入自身的邻接集合
    #[default]
    Allow,
    /// 拒绝自环，`add_edge(v, v)` 返回错误
    Reject,
}

/// 图配置
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// 自环策略
    pub self_loops: SelfLoopPolicy,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置自环策略
    pub fn with_self_loops(mut self, policy: SelfLoopPolicy) -> Self {
        self.self_loops = policy;
        self
    }

    pub fn allows_self_loops(&self) -> bool {
        self.self_loops == SelfLoopPolicy::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_self_loops() {
        assert!(GraphConfig::default().allows_self_loops());
    }

    #[test]
    fn test_with_self_loops() {
        let config = GraphConfig::new().with_self_loops(SelfLoopPolicy::Reject);
        assert!(!config.allows_self_loops());
    }
}
