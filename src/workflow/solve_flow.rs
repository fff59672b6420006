//! 求解流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整处理流程
//!
//! 流程顺序：
//! 1. 读取题目文本（缓存未命中时抓取并转写）
//! 2. 按固定大小分块（只用于诊断，求解使用完整文本）
//! 3. 交给程序辅助推理链求解

use tracing::{info, warn};

use crate::clients::{LanguageModel, ProblemFetcher};
use crate::error::AppResult;
use crate::models::{ProblemId, Solution};
use crate::services::{PalChain, ProblemCache, ProgramRunner, TextChunker};
use crate::utils::logging::truncate_text;

/// 单题求解报告
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub problem_id: ProblemId,
    /// 转写后的完整题目文本
    pub text: String,
    /// 文本被切分成的块数
    pub chunk_count: usize,
    pub solution: Solution,
}

/// 求解流程
///
/// - 编排 缓存 → 分块 → 推理
/// - 不直接持有网络或文件资源，只依赖业务能力（services）
pub struct SolveFlow<F, M, R> {
    cache: ProblemCache<F>,
    chunker: TextChunker,
    solver: PalChain<M, R>,
}

impl<F, M, R> SolveFlow<F, M, R>
where
    F: ProblemFetcher,
    M: LanguageModel,
    R: ProgramRunner,
{
    pub fn new(cache: ProblemCache<F>, chunker: TextChunker, solver: PalChain<M, R>) -> Self {
        Self {
            cache,
            chunker,
            solver,
        }
    }

    pub async fn run(&self, id: ProblemId) -> AppResult<SolveReport> {
        info!("题号: {}", id);
        info!("缓存键: {}", id.cache_key());

        if self.cache.contains(id).await {
            info!("📂 从缓存读取: {}", self.cache.entry_path(id).display());
        } else {
            info!("🔍 缓存未命中，准备抓取第 {} 题", id);
        }
        let text = self.cache.load(id).await?;
        info!("题目: {}", truncate_text(&text, 80));

        info!("✂️ 正在将题目切分为文本块...");
        let chunk_count = self.chunker.chunks(&text).count();
        info!(
            "✓ 分块完成: {} 块 (每块最多 {} 字符)",
            chunk_count,
            self.chunker.max_chars()
        );
        if chunk_count > 1 {
            warn!(
                "⚠️ 题目文本超过单块上限 ({} 块)，仍以完整文本提交",
                chunk_count
            );
        }

        info!("🤖 正在向程序辅助推理链发起查询...");
        let solution = self.solver.solve(&text).await?;
        info!("✓ 求解完成，答案: {}", solution.answer);

        Ok(SolveReport {
            problem_id: id,
            text,
            chunk_count,
            solution,
        })
    }
}
