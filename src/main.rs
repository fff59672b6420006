use anyhow::Result;
use euler_solver::utils::logging;
use euler_solver::{App, Config, ProblemId};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置，第一个参数可覆盖题号
    let mut config = Config::load()?;
    if let Some(arg) = std::env::args().nth(1) {
        config.problem_id = arg.parse::<ProblemId>()?.get();
    }

    // 初始化并运行应用
    let report = App::initialize(config)?.run().await?;

    println!("{}", report.solution);

    Ok(())
}
