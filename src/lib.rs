//! # Euler Solver
//!
//! 抓取 Project Euler 题目，转写为轻量 markdown 文本并缓存到磁盘，
//! 再交给程序辅助推理链（LLM 写程序 + 执行程序）求解
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 封装外部系统调用
//! - `EulerClient` - 抓取题目页面 HTML
//! - `LlmClient` - 调用兼容 OpenAI API 的模型
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个题目
//! - `Transcriber` - HTML → 文本
//! - `ProblemCache` - 读穿透磁盘缓存
//! - `TextChunker` - 固定大小分块
//! - `PalChain` / `PythonRunner` - 程序辅助推理
//!
//! ### ③ 流程层（Workflow）
//! - `SolveFlow` - 缓存 → 分块 → 推理
//!
//! ### ④ 应用层
//! - `App` - 由配置组装整个流程

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ProblemId, Solution};
pub use workflow::{SolveFlow, SolveReport};
