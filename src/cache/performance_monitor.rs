use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

/// 缓存性能监控器
#[derive(Clone)]
pub struct CachePerformanceMonitor {
    metrics: Arc<CacheMetrics>,
}

/// 缓存指标
#[derive(Default)]
pub struct CacheMetrics {
    /// 缓存命中次数
    pub cache_hits: AtomicUsize,
    /// 缓存未命中次数
    pub cache_misses: AtomicUsize,
    /// 缓存写入次数
    pub cache_writes: AtomicUsize,
    /// 缓存错误次数
    pub cache_errors: AtomicUsize,
    /// 总节省的推理时间（毫秒）
    pub total_inference_time_saved: AtomicU64,
    /// 分类统计数据
    pub category_metrics: std::sync::RwLock<HashMap<String, CategoryMetrics>>,
}

/// 分类指标数据
#[derive(Default)]
pub struct CategoryMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub time_saved: AtomicU64,
}

/// 缓存性能报告
#[derive(Debug, Serialize, Deserialize)]
pub struct CachePerformanceReport {
    /// 缓存命中率
    pub hit_rate: f64,
    /// 总缓存操作次数
    pub total_operations: usize,
    /// 缓存命中次数
    pub cache_hits: usize,
    /// 缓存未命中次数
    pub cache_misses: usize,
    /// 缓存写入次数
    pub cache_writes: usize,
    /// 缓存错误次数
    pub cache_errors: usize,
    /// 节省的推理时间（秒）
    pub inference_time_saved: f64,
    /// 分类统计
    pub category_stats: HashMap<String, CategoryPerformanceStats>,
}

/// 分类性能统计
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryPerformanceStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub time_saved: f64,
}

impl CachePerformanceMonitor {
    pub fn new() -> Self {
        Self {
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    /// 记录缓存命中
    pub fn record_cache_hit(&self, category: &str, inference_time_saved: Duration) {
        self.metrics.cache_hits.fetch_add(1, Ordering::Relaxed);
        self.metrics
            .total_inference_time_saved
            .fetch_add(inference_time_saved.as_millis() as u64, Ordering::Relaxed);

        // 更新分类统计
        if let Ok(mut category_map) = self.metrics.category_metrics.write() {
            let category_metrics = category_map.entry(category.to_string()).or_default();
            category_metrics.hits.fetch_add(1, Ordering::Relaxed);
            category_metrics
                .time_saved
                .fetch_add(inference_time_saved.as_millis() as u64, Ordering::Relaxed);
        }

        println!(
            "   💰 缓存命中 [{}] - 节省推理时间约 {:.2} 秒",
            category,
            inference_time_saved.as_secs_f64()
        );
    }

    /// 记录缓存未命中
    pub fn record_cache_miss(&self, category: &str) {
        self.metrics.cache_misses.fetch_add(1, Ordering::Relaxed);

        // 更新分类统计
        if let Ok(mut category_map) = self.metrics.category_metrics.write() {
            let category_metrics = category_map.entry(category.to_string()).or_default();
            category_metrics.misses.fetch_add(1, Ordering::Relaxed);
        }

        println!("   ⌛ 缓存未命中 [{}] - 需要进行AI推理", category);
    }

    /// 记录缓存写入
    pub fn record_cache_write(&self, category: &str) {
        self.metrics.cache_writes.fetch_add(1, Ordering::Relaxed);
        println!("   💾 缓存写入 [{}] - 结果已缓存", category);
    }

    /// 记录缓存错误
    pub fn record_cache_error(&self, category: &str, error: &str) {
        self.metrics.cache_errors.fetch_add(1, Ordering::Relaxed);
        eprintln!("   ❌ 缓存错误 [{}]: {}", category, error);
    }

    /// 生成性能报告
    pub fn generate_report(&self) -> CachePerformanceReport {
        let hits = self.metrics.cache_hits.load(Ordering::Relaxed);
        let misses = self.metrics.cache_misses.load(Ordering::Relaxed);
        let writes = self.metrics.cache_writes.load(Ordering::Relaxed);
        let errors = self.metrics.cache_errors.load(Ordering::Relaxed);
        let total_operations = hits + misses;

        let hit_rate = if total_operations > 0 {
            hits as f64 / total_operations as f64
        } else {
            0.0
        };

        let inference_time_saved = self
            .metrics
            .total_inference_time_saved
            .load(Ordering::Relaxed) as f64
            / 1000.0;

        let category_stats = if let Ok(category_map) = self.metrics.category_metrics.read() {
            category_map
                .iter()
                .map(|(category, metrics)| {
                    let cat_hits = metrics.hits.load(Ordering::Relaxed);
                    let cat_misses = metrics.misses.load(Ordering::Relaxed);
                    let cat_time_saved = metrics.time_saved.load(Ordering::Relaxed);

                    let cat_hit_rate = if cat_hits + cat_misses > 0 {
                        cat_hits as f64 / (cat_hits + cat_misses) as f64
                    } else {
                        0.0
                    };

                    (
                        category.clone(),
                        CategoryPerformanceStats {
                            hits: cat_hits,
                            misses: cat_misses,
                            hit_rate: cat_hit_rate,
                            time_saved: cat_time_saved as f64 / 1000.0,
                        },
                    )
                })
                .collect()
        } else {
            HashMap::new()
        };

        CachePerformanceReport {
            hit_rate,
            total_operations,
            cache_hits: hits,
            cache_misses: misses,
            cache_writes: writes,
            cache_errors: errors,
            inference_time_saved,
            category_stats,
        }
    }
}

impl Default for CachePerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}
