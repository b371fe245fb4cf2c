//! 可观测性模块
//!
//! 提供轻量指标、健康检查和 Prometheus 文本端点。

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

// ===== Simple Metrics (using atomics for zero-dep implementation) =====

/// 简单应用指标
#[derive(Clone, Default, Debug)]
pub struct AppMetrics {
    pub chat_requests_total: Arc<AtomicU64>,
    pub greetings_total: Arc<AtomicU64>,
    pub matches_total: Arc<AtomicU64>,
    pub fallbacks_total: Arc<AtomicU64>,
    pub history_requests_total: Arc<AtomicU64>,
    pub errors_total: Arc<AtomicU64>,
}

impl AppMetrics {
    /// 记录一次问答及其结果
    pub fn record_chat(&self, matched: bool, greeting: bool) {
        self.chat_requests_total.fetch_add(1, Ordering::SeqCst);
        if greeting {
            self.greetings_total.fetch_add(1, Ordering::SeqCst);
        } else if matched {
            self.matches_total.fetch_add(1, Ordering::SeqCst);
        } else {
            self.fallbacks_total.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// 记录历史查询
    pub fn record_history_request(&self) {
        self.history_requests_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录错误
    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        format!(
            r#"# HELP chat_requests_total Total chat messages processed
# TYPE chat_requests_total counter
chat_requests_total {}
# HELP chat_greetings_total Chat messages answered by the greeting map
# TYPE chat_greetings_total counter
chat_greetings_total {}
# HELP chat_matches_total Chat messages matched to an FAQ entry
# TYPE chat_matches_total counter
chat_matches_total {}
# HELP chat_fallbacks_total Chat messages answered with the default reply
# TYPE chat_fallbacks_total counter
chat_fallbacks_total {}
# HELP history_requests_total Transcript history lookups
# TYPE history_requests_total counter
history_requests_total {}
# HELP errors_total Total errors surfaced to callers
# TYPE errors_total counter
errors_total {}
"#,
            self.chat_requests_total.load(Ordering::SeqCst),
            self.greetings_total.load(Ordering::SeqCst),
            self.matches_total.load(Ordering::SeqCst),
            self.fallbacks_total.load(Ordering::SeqCst),
            self.history_requests_total.load(Ordering::SeqCst),
            self.errors_total.load(Ordering::SeqCst),
        )
    }
}

/// 可观测性状态
#[derive(Clone, Debug)]
pub struct ObservabilityState {
    /// 服务版本
    pub version: String,
    /// 启动时间
    pub started_at: DateTime<Utc>,
    /// 应用指标
    pub metrics: AppMetrics,
}

impl ObservabilityState {
    /// 创建可观测性状态
    pub fn new(version: String, metrics: AppMetrics) -> Self {
        Self {
            version,
            started_at: Utc::now(),
            metrics,
        }
    }
}

/// 健康检查响应
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    uptime_seconds: i64,
}

async fn health(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: state.version.clone(),
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
    })
}

async fn readiness() -> impl IntoResponse {
    // 无外部依赖需要探测，进程起来即就绪
    Json(serde_json::json!({ "ready": true }))
}

async fn metrics(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    state.metrics.gather()
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/metrics", get(metrics))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_chat_buckets() {
        let metrics = AppMetrics::default();
        metrics.record_chat(false, true);
        metrics.record_chat(true, false);
        metrics.record_chat(false, false);

        assert_eq!(metrics.chat_requests_total.load(Ordering::SeqCst), 3);
        assert_eq!(metrics.greetings_total.load(Ordering::SeqCst), 1);
        assert_eq!(metrics.matches_total.load(Ordering::SeqCst), 1);
        assert_eq!(metrics.fallbacks_total.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_gather_renders_counters() {
        let metrics = AppMetrics::default();
        metrics.record_chat(true, false);
        let text = metrics.gather();
        assert!(text.contains("chat_requests_total 1"));
        assert!(text.contains("chat_matches_total 1"));
    }
}
