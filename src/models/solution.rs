//! 求解结果模型

use std::fmt::{self, Display};

/// 程序辅助推理的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// 程序输出的答案
    pub answer: String,
    /// LLM 生成并被执行的程序
    pub program: String,
    /// 执行轨迹
    pub trace: Vec<String>,
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.answer, self.trace)
    }
}
