//! 报告持久层 - 请求、章节与结构化摘要的存取

use async_trait::async_trait;
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::report::sections::SectionKind;
use crate::types::{AnalysisRequest, ReportSection, RequestStatus, StructuredSummary};

/// 持久层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("report request not found: {0}")]
    RequestNotFound(Uuid),
    #[error("status conflict for request {id}: expected {expected}, found {actual}")]
    StatusConflict {
        id: Uuid,
        expected: RequestStatus,
        actual: RequestStatus,
    },
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// 报告存储接口
///
/// 编排器只依赖该接口，文件实现与测试替身均可注入。
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// 创建新的报告请求记录
    async fn create_request(&self, request: &AnalysisRequest) -> Result<(), StoreError>;

    /// 按ID读取请求
    async fn get_request(&self, id: Uuid) -> Result<Option<AnalysisRequest>, StoreError>;

    /// 状态迁移（compare-and-set）
    ///
    /// 仅当当前状态等于expected时迁移到next，否则返回StatusConflict。
    /// 并发触发同一请求时，先到者完成迁移，后到者据此让路。
    async fn update_status(
        &self,
        id: Uuid,
        expected: RequestStatus,
        next: RequestStatus,
    ) -> Result<AnalysisRequest, StoreError>;

    /// 标记请求失败并记录原因
    ///
    /// 已完成的请求不会被降级为失败。
    async fn mark_failed(&self, id: Uuid, error_message: &str) -> Result<(), StoreError>;

    /// 合并附加参数（只增不改）
    ///
    /// patch中已存在于parameters的键被忽略，原值保留。
    async fn append_parameters(&self, id: Uuid, patch: Value)
    -> Result<AnalysisRequest, StoreError>;

    /// 写入或更新章节（同名章节覆盖内容，保留创建时间）
    async fn upsert_sections(
        &self,
        request_id: Uuid,
        sections: Vec<ReportSection>,
    ) -> Result<(), StoreError>;

    /// 读取请求的全部章节
    async fn get_sections(&self, request_id: Uuid) -> Result<Vec<ReportSection>, StoreError>;

    /// 写入或更新结构化摘要（按deal键覆盖，保留创建时间）
    async fn upsert_summary(&self, summary: StructuredSummary) -> Result<(), StoreError>;

    /// 按deal键读取结构化摘要
    async fn get_summary(&self, deal_id: &str) -> Result<Option<StructuredSummary>, StoreError>;

    /// 记录deal与最新报告请求的对应关系
    async fn record_deal_report(&self, deal_id: &str, request_id: Uuid) -> Result<(), StoreError>;

    /// 查询deal当前对应的报告请求
    async fn get_deal_report(&self, deal_id: &str) -> Result<Option<Uuid>, StoreError>;
}

/// deal与报告请求的对应记录
#[derive(Debug, Serialize, Deserialize)]
struct DealRecord {
    deal_id: String,
    request_id: Uuid,
}

/// 基于JSON文件的存储实现
///
/// 目录布局：requests/、sections/、summaries/、deals/，
/// deal键经MD5哈希后作为文件名，原始键保存在记录内。
pub struct JsonFileStore {
    store_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            store_dir: config.store_dir.clone(),
            write_lock: Mutex::new(()),
        }
    }

    fn hash_key(key: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(key.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn request_path(&self, id: Uuid) -> PathBuf {
        self.store_dir.join("requests").join(format!("{}.json", id))
    }

    fn sections_path(&self, request_id: Uuid) -> PathBuf {
        self.store_dir
            .join("sections")
            .join(format!("{}.json", request_id))
    }

    fn summary_path(&self, deal_id: &str) -> PathBuf {
        self.store_dir
            .join("summaries")
            .join(format!("{}.json", Self::hash_key(deal_id)))
    }

    fn deal_path(&self, deal_id: &str) -> PathBuf {
        self.store_dir
            .join("deals")
            .join(format!("{}.json", Self::hash_key(deal_id)))
    }

    async fn write_json<T: Serialize>(&self, path: &PathBuf, value: &T) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(value)?;
        fs::write(path, content).await?;
        Ok(())
    }

    async fn read_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &PathBuf,
    ) -> Result<Option<T>, StoreError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).await?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    async fn load_request(&self, id: Uuid) -> Result<AnalysisRequest, StoreError> {
        self.read_json::<AnalysisRequest>(&self.request_path(id))
            .await?
            .ok_or(StoreError::RequestNotFound(id))
    }
}

#[async_trait]
impl ReportStore for JsonFileStore {
    async fn create_request(&self, request: &AnalysisRequest) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write_json(&self.request_path(request.id), request)
            .await
    }

    async fn get_request(&self, id: Uuid) -> Result<Option<AnalysisRequest>, StoreError> {
        self.read_json(&self.request_path(id)).await
    }

    async fn update_status(
        &self,
        id: Uuid,
        expected: RequestStatus,
        next: RequestStatus,
    ) -> Result<AnalysisRequest, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut request = self.load_request(id).await?;

        if request.status != expected {
            return Err(StoreError::StatusConflict {
                id,
                expected,
                actual: request.status,
            });
        }

        request.status = next;
        request.updated_at = chrono::Utc::now();
        if next == RequestStatus::Processing {
            // 重试入口，清理上一轮的失败原因
            request.error_message = None;
        }
        self.write_json(&self.request_path(id), &request).await?;
        Ok(request)
    }

    async fn mark_failed(&self, id: Uuid, error_message: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut request = self.load_request(id).await?;

        if request.status == RequestStatus::Completed {
            return Ok(());
        }

        request.status = RequestStatus::Failed;
        request.error_message = Some(error_message.to_string());
        request.updated_at = chrono::Utc::now();
        self.write_json(&self.request_path(id), &request).await
    }

    async fn append_parameters(
        &self,
        id: Uuid,
        patch: Value,
    ) -> Result<AnalysisRequest, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut request = self.load_request(id).await?;

        if !request.parameters.is_object() {
            request.parameters = Value::Object(serde_json::Map::new());
        }
        if let (Some(target), Some(source)) =
            (request.parameters.as_object_mut(), patch.as_object())
        {
            for (key, value) in source {
                if !target.contains_key(key) {
                    target.insert(key.clone(), value.clone());
                }
            }
        }
        request.updated_at = chrono::Utc::now();
        self.write_json(&self.request_path(id), &request).await?;
        Ok(request)
    }

    async fn upsert_sections(
        &self,
        request_id: Uuid,
        sections: Vec<ReportSection>,
    ) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.load_request(request_id).await?;

        let path = self.sections_path(request_id);
        let mut existing: Vec<ReportSection> =
            self.read_json(&path).await?.unwrap_or_default();

        for section in sections {
            match existing.iter_mut().find(|s| s.name == section.name) {
                Some(slot) => {
                    slot.content = section.content;
                    slot.updated_at = chrono::Utc::now();
                }
                None => existing.push(section),
            }
        }

        self.write_json(&path, &existing).await
    }

    async fn get_sections(&self, request_id: Uuid) -> Result<Vec<ReportSection>, StoreError> {
        let mut sections: Vec<ReportSection> = self
            .read_json(&self.sections_path(request_id))
            .await?
            .unwrap_or_default();

        // 读取端始终按章节编号排序，与生成完成顺序无关
        sections.sort_by_key(|s| {
            SectionKind::from_key(&s.name)
                .map(|kind| kind.number())
                .unwrap_or(usize::MAX)
        });
        Ok(sections)
    }

    async fn upsert_summary(&self, summary: StructuredSummary) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let path = self.summary_path(&summary.deal_id);

        let record = match self.read_json::<StructuredSummary>(&path).await? {
            Some(mut existing) => {
                existing.request_id = summary.request_id;
                existing.data = summary.data;
                existing.updated_at = chrono::Utc::now();
                existing
            }
            None => summary,
        };

        self.write_json(&path, &record).await
    }

    async fn get_summary(&self, deal_id: &str) -> Result<Option<StructuredSummary>, StoreError> {
        self.read_json(&self.summary_path(deal_id)).await
    }

    async fn record_deal_report(&self, deal_id: &str, request_id: Uuid) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let record = DealRecord {
            deal_id: deal_id.to_string(),
            request_id,
        };
        self.write_json(&self.deal_path(deal_id), &record).await
    }

    async fn get_deal_report(&self, deal_id: &str) -> Result<Option<Uuid>, StoreError> {
        Ok(self
            .read_json::<DealRecord>(&self.deal_path(deal_id))
            .await?
            .map(|record| record.request_id))
    }
}
