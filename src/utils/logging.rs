/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，未设置时默认 `info`
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `problem_id`: 题号
/// - `model_name`: 模型名称
pub fn log_startup(problem_id: u32, model_name: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始求解 Project Euler 第 {} 题", problem_id);
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🤖 模型: {}", model_name);
    info!("{}", "=".repeat(60));
}

/// 打印最终结果
///
/// # 参数
/// - `answer`: 答案
/// - `chunk_count`: 分块数量
pub fn log_finished(answer: &str, chunk_count: usize) {
    info!("\n{}", "─".repeat(60));
    info!("✅ 答案: {}", answer);
    info!("📦 分块数量: {}", chunk_count);
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
