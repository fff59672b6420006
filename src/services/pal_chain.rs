//! 程序辅助推理服务 - 业务能力层
//!
//! 让 LLM 为数学应用题写一个 Python `solution()` 函数，执行它并取回答案
//!
//! 流程：
//! 1. 用少样本提示词构造请求
//! 2. LLM 生成程序
//! 3. 提取程序并追加 `print(solution())`
//! 4. 执行程序，标准输出即答案

use regex::Regex;
use tracing::{debug, info};

use crate::clients::LanguageModel;
use crate::error::{AppResult, SolverError};
use crate::models::Solution;
use crate::services::ProgramRunner;

const FEW_SHOT_EXAMPLES: &str = r#"Q: Olivia has $23. She bought five bagels for $3 each. How much money does she have left?

# solution in Python:


def solution():
    """Olivia has $23. She bought five bagels for $3 each. How much money does she have left?"""
    money_initial = 23
    bagels = 5
    bagel_cost = 3
    money_spent = bagels * bagel_cost
    money_left = money_initial - money_spent
    result = money_left
    return result





Q: Michael had 58 golf balls. On tuesday, he lost 23 golf balls. On wednesday, he lost 2 more. How many golf balls did he have at the end of wednesday?

# solution in Python:


def solution():
    """Michael had 58 golf balls. On tuesday, he lost 23 golf balls. On wednesday, he lost 2 more. How many golf balls did he have at the end of wednesday?"""
    golf_balls_initial = 58
    golf_balls_lost_tuesday = 23
    golf_balls_lost_wednesday = 2
    golf_balls_left = golf_balls_initial - golf_balls_lost_tuesday - golf_balls_lost_wednesday
    result = golf_balls_left
    return result





Q: Find the sum of all the even numbers below 20.

# solution in Python:


def solution():
    """Find the sum of all the even numbers below 20."""
    total = 0
    for n in range(20):
        if n % 2 == 0:
            total += n
    result = total
    return result





"#;

/// 提取 markdown 代码块内容
const CODE_FENCE_PATTERN: &str = r"(?s)```(?:python|py)?[^\n]*\n(.*?)```";

/// 程序入口函数
const ENTRY_POINT: &str = "def solution(";

/// 程序辅助推理链
pub struct PalChain<M, R> {
    model: M,
    runner: R,
    code_fence: Regex,
    verbose: bool,
}

impl<M: LanguageModel, R: ProgramRunner> PalChain<M, R> {
    /// 创建推理链
    pub fn new(model: M, runner: R) -> AppResult<Self> {
        let code_fence = Regex::new(CODE_FENCE_PATTERN).map_err(|e| SolverError::InvalidPattern {
            message: e.to_string(),
        })?;
        Ok(Self {
            model,
            runner,
            code_fence,
            verbose: false,
        })
    }

    /// 是否打印生成的程序
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 求解一道题目
    pub async fn solve(&self, question: &str) -> AppResult<Solution> {
        let prompt = build_prompt(question);
        debug!("提示词长度: {} 字符", prompt.len());

        let completion = self.model.complete(&prompt).await?;
        let program = self.extract_program(&completion)?;

        if self.verbose {
            info!("🧾 生成的程序:\n{}", program);
        }

        let script = format!("{}\n\nprint(solution())\n", program);
        let output = self.runner.run(&script).await?;

        let answer = output.stdout.trim().to_string();
        if answer.is_empty() {
            return Err(SolverError::EmptyAnswer.into());
        }
        debug!("程序输出: {}", answer);

        let trace = vec![
            format!("模型: {}", self.model.model_name()),
            format!("程序:\n{}", program),
            format!("输出: {}", answer),
        ];

        Ok(Solution {
            answer,
            program,
            trace,
        })
    }

    /// 从 LLM 输出中提取程序
    ///
    /// 有代码块时取第一个代码块，否则使用整个输出；程序必须定义 `solution()`
    fn extract_program(&self, completion: &str) -> AppResult<String> {
        let program = self
            .code_fence
            .captures(completion)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
            .unwrap_or(completion)
            .trim_matches('\n')
            .trim_end()
            .to_string();

        if !program.contains(ENTRY_POINT) {
            return Err(SolverError::MalformedProgram { program }.into());
        }

        Ok(program)
    }
}

/// 构造少样本提示词
pub fn build_prompt(question: &str) -> String {
    format!(
        "{}Q: {}\n\n# solution in Python:\n\n\n",
        FEW_SHOT_EXAMPLES,
        question.trim()
    )
}
