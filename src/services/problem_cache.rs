//! 题目缓存服务 - 业务能力层
//!
//! 读穿透缓存：命中时直接读取磁盘文件，未命中时抓取、转写并写入磁盘
//!
//! 缓存文件一旦写入就被视为权威内容，不会过期也不会失效。
//! 同一题号的并发未命中会各自抓取并写入，最后写入者生效。

use std::path::PathBuf;

use tokio::fs;
use tracing::debug;

use crate::clients::ProblemFetcher;
use crate::error::{AppError, AppResult, StorageError};
use crate::models::ProblemId;
use crate::services::Transcriber;

/// 缓存文件扩展名
const ENTRY_EXTENSION: &str = "txt";

/// 题目缓存服务
pub struct ProblemCache<F> {
    dir: PathBuf,
    fetcher: F,
    transcriber: Transcriber,
}

impl<F: ProblemFetcher> ProblemCache<F> {
    /// 创建新的缓存服务
    pub fn new(dir: impl Into<PathBuf>, fetcher: F) -> AppResult<Self> {
        Ok(Self {
            dir: dir.into(),
            fetcher,
            transcriber: Transcriber::new()?,
        })
    }

    /// 题目对应的缓存文件路径
    pub fn entry_path(&self, id: ProblemId) -> PathBuf {
        self.dir.join(format!("{}.{}", id.cache_key(), ENTRY_EXTENSION))
    }

    /// 是否已有缓存（仅用于日志，无法判断时视为没有）
    pub async fn contains(&self, id: ProblemId) -> bool {
        fs::try_exists(self.entry_path(id)).await.unwrap_or(false)
    }

    /// 读取题目文本
    ///
    /// 命中缓存时不会发起任何网络请求
    pub async fn load(&self, id: ProblemId) -> AppResult<String> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| StorageError::CreateDirFailed {
                path: self.dir.clone(),
                source,
            })?;

        let path = self.entry_path(id);

        let exists = fs::try_exists(&path)
            .await
            .map_err(|e| AppError::read_failed(&path, e))?;

        if exists {
            debug!("缓存命中: {}", path.display());
            return fs::read_to_string(&path)
                .await
                .map_err(|e| AppError::read_failed(&path, e));
        }

        let html = self.fetcher.fetch(id).await?;
        let text = self.transcriber.transcribe(&html)?;

        fs::write(&path, &text)
            .await
            .map_err(|e| AppError::write_failed(&path, e))?;
        debug!("已写入缓存: {}", path.display());

        Ok(text)
    }
}
