use std::path::Path;

use serde::Deserialize;

use crate::error::{AppResult, ConfigError};
use crate::models::ProblemId;

/// 模拟桌面浏览器的 User-Agent
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_2) AppleWebKit/601.3.9 (KHTML, like Gecko) Version/9.0.2 Safari/601.3.9";

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 要求解的题号
    pub problem_id: u32,
    /// 题目缓存目录
    pub cache_dir: String,
    // --- 抓取配置 ---
    /// 题目站点根地址，题目页为 `{base_url}/problem={id}`
    pub base_url: String,
    pub user_agent: String,
    /// 请求超时（秒），0 表示不设超时
    pub request_timeout_secs: u64,
    // --- 分块配置 ---
    /// 每块最多包含的字符数
    pub chunk_size: usize,
    /// 块之间的重叠字符数，只支持 0
    pub chunk_overlap: usize,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    pub llm_temperature: f32,
    pub llm_max_tokens: u32,
    // --- 程序执行配置 ---
    /// 执行生成程序的 Python 解释器
    pub python_bin: String,
    /// 程序执行超时（秒），0 表示不设超时
    pub program_timeout_secs: u64,
    /// 是否显示详细日志（打印生成的程序）
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            problem_id: 1,
            cache_dir: "euler_problems".to_string(),
            base_url: "https://projecteuler.net".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 30,
            chunk_size: 1000,
            chunk_overlap: 0,
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o-mini".to_string(),
            llm_temperature: 0.0,
            llm_max_tokens: 512,
            python_bin: "python3".to_string(),
            program_timeout_secs: 30,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果设置了 `EULER_CONFIG`，先读取该 TOML 文件，再用其余环境变量覆盖
    pub fn load() -> AppResult<Self> {
        let base = match std::env::var("EULER_CONFIG") {
            Ok(path) => Self::from_toml_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        let config = base.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 只使用默认值和环境变量
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件读取配置，缺失的字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileLoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::FileLoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(config)
    }

    fn with_env_overrides(self) -> Self {
        Self {
            problem_id: env_parse("EULER_PROBLEM_ID").unwrap_or(self.problem_id),
            cache_dir: std::env::var("EULER_CACHE_DIR").unwrap_or(self.cache_dir),
            base_url: std::env::var("EULER_BASE_URL").unwrap_or(self.base_url),
            user_agent: std::env::var("EULER_USER_AGENT").unwrap_or(self.user_agent),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS")
                .unwrap_or(self.request_timeout_secs),
            chunk_size: env_parse("CHUNK_SIZE").unwrap_or(self.chunk_size),
            chunk_overlap: env_parse("CHUNK_OVERLAP").unwrap_or(self.chunk_overlap),
            llm_api_key: std::env::var("OPENAI_API_KEY").unwrap_or(self.llm_api_key),
            llm_api_base_url: std::env::var("OPENAI_API_BASE").unwrap_or(self.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(self.llm_model_name),
            llm_temperature: env_parse("LLM_TEMPERATURE").unwrap_or(self.llm_temperature),
            llm_max_tokens: env_parse("LLM_MAX_TOKENS").unwrap_or(self.llm_max_tokens),
            python_bin: std::env::var("PYTHON_BIN").unwrap_or(self.python_bin),
            program_timeout_secs: env_parse("PROGRAM_TIMEOUT_SECS")
                .unwrap_or(self.program_timeout_secs),
            verbose_logging: env_parse("VERBOSE_LOGGING").unwrap_or(self.verbose_logging),
        }
    }

    /// 检查配置是否合法
    pub fn validate(&self) -> AppResult<()> {
        ProblemId::new(self.problem_id)?;
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize.into());
        }
        if self.chunk_overlap != 0 {
            return Err(ConfigError::UnsupportedOverlap {
                overlap: self.chunk_overlap,
            }
            .into());
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
