use std::path::{Path, PathBuf};

use thiserror::Error;

/// 应用程序错误类型
///
/// 所有错误都直接向调用方传播，不做任何重试
#[derive(Debug, Error)]
pub enum AppError {
    /// 网络相关错误
    #[error("网络错误: {0}")]
    Network(#[from] NetworkError),
    /// 页面结构不符合预期
    #[error("文档错误: {0}")]
    Document(#[from] DocumentError),
    /// 缓存文件读写错误
    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),
    /// 求解器（LLM + 程序执行）错误
    #[error("求解错误: {0}")]
    Solver(#[from] SolverError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 网络相关错误
#[derive(Debug, Error)]
pub enum NetworkError {
    /// 构建 HTTP 客户端失败
    #[error("无法创建 HTTP 客户端: {source}")]
    ClientBuildFailed {
        #[source]
        source: reqwest::Error,
    },
    /// 请求发送或读取响应失败
    #[error("请求 {url} 失败: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务端返回非成功状态码
    #[error("请求 {url} 返回状态码 {status}")]
    BadStatus { url: String, status: u16 },
}

/// 文档结构错误
#[derive(Debug, Error)]
pub enum DocumentError {
    /// 页面中没有标题元素
    #[error("页面中没有找到标题元素 <{tag}>")]
    MissingTitle { tag: String },
    /// CSS 选择器无效
    #[error("无效的选择器 '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// 缓存存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    /// 创建缓存目录失败
    #[error("创建目录失败 ({}): {source}", path.display())]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 读取缓存文件失败
    #[error("读取文件失败 ({}): {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入缓存文件失败
    #[error("写入文件失败 ({}): {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 求解器错误
#[derive(Debug, Error)]
pub enum SolverError {
    /// LLM API 调用失败
    #[error("LLM API调用失败 (模型: {model}): {message}")]
    ModelFailed { model: String, message: String },
    /// LLM 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyCompletion { model: String },
    /// 程序提取正则无效
    #[error("无效的程序提取正则: {message}")]
    InvalidPattern { message: String },
    /// LLM 生成的程序中没有 solution() 函数
    #[error("生成的程序中没有 solution() 函数: {program}")]
    MalformedProgram { program: String },
    /// 无法启动解释器
    #[error("无法启动解释器 {interpreter}: {source}")]
    SpawnFailed {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },
    /// 程序执行超时
    #[error("程序执行超过 {seconds} 秒")]
    ProgramTimedOut { seconds: u64 },
    /// 程序以非零状态退出
    #[error("程序执行失败 (退出码: {code:?}): {stderr}")]
    ProgramFailed { code: Option<i32>, stderr: String },
    /// 程序没有输出答案
    #[error("程序没有输出任何答案")]
    EmptyAnswer,
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 题号超出范围
    #[error("题号 {value} 无效，必须在 1..=9999 范围内")]
    InvalidProblemId { value: String },
    /// 分块大小为 0
    #[error("分块大小必须大于 0")]
    InvalidChunkSize,
    /// 不支持重叠分块
    #[error("不支持分块重叠 (chunk_overlap = {overlap})")]
    UnsupportedOverlap { overlap: usize },
    /// 配置文件读取或解析失败
    #[error("无法加载配置文件 {}: {message}", path.display())]
    FileLoadFailed { path: PathBuf, message: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建网络请求失败错误
    pub fn request_failed(url: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Network(NetworkError::RequestFailed {
            url: url.into(),
            source,
        })
    }

    /// 创建文件读取错误
    pub fn read_failed(path: &Path, source: std::io::Error) -> Self {
        AppError::Storage(StorageError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn write_failed(path: &Path, source: std::io::Error) -> Self {
        AppError::Storage(StorageError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 创建 LLM API 调用错误
    pub fn model_failed(model: impl Into<String>, source: impl std::fmt::Display) -> Self {
        AppError::Solver(SolverError::ModelFailed {
            model: model.into(),
            message: source.to_string(),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
