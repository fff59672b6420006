use anyhow::{Context, Result};

use crate::clients::{EulerClient, LlmClient};
use crate::config::Config;
use crate::models::ProblemId;
use crate::services::{PalChain, ProblemCache, PythonRunner, TextChunker};
use crate::utils::logging::{log_finished, log_startup};
use crate::workflow::{SolveFlow, SolveReport};

/// 生产环境下的求解流程
pub type LiveFlow = SolveFlow<EulerClient, LlmClient, PythonRunner>;

/// 应用主结构
pub struct App {
    config: Config,
    flow: LiveFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        config.validate()?;
        log_startup(config.problem_id, &config.llm_model_name);

        let fetcher = EulerClient::new(&config).context("无法创建题目页面客户端")?;
        let cache = ProblemCache::new(&config.cache_dir, fetcher)?;
        let chunker = TextChunker::new(config.chunk_size)?;
        let solver = PalChain::new(LlmClient::new(&config), PythonRunner::from_config(&config))?
            .verbose(config.verbose_logging);

        Ok(Self {
            flow: SolveFlow::new(cache, chunker, solver),
            config,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<SolveReport> {
        let id = ProblemId::new(self.config.problem_id)?;

        let report = self
            .flow
            .run(id)
            .await
            .with_context(|| format!("求解第 {} 题失败", id))?;

        log_finished(&report.solution.answer, report.chunk_count);
        Ok(report)
    }
}
