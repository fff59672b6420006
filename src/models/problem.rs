//! 题号模型

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::{AppError, AppResult, ConfigError};

/// 题号
///
/// 取值范围 1..=9999，缓存文件名固定为 4 位补零
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProblemId(u16);

impl ProblemId {
    /// 允许的最大题号
    pub const MAX: u32 = 9999;

    /// 创建题号，超出 1..=9999 时返回错误
    pub fn new(value: u32) -> AppResult<Self> {
        if value == 0 || value > Self::MAX {
            return Err(ConfigError::InvalidProblemId {
                value: value.to_string(),
            }
            .into());
        }
        Ok(Self(value as u16))
    }

    pub fn get(self) -> u32 {
        u32::from(self.0)
    }

    /// 缓存键：4 位补零的题号
    pub fn cache_key(self) -> String {
        format!("{:04}", self.0)
    }
}

impl Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProblemId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<u32>().map_err(|_| ConfigError::InvalidProblemId {
            value: s.to_string(),
        })?;
        Self::new(value)
    }
}
