//! 文本分块服务 - 业务能力层
//!
//! 按固定字符数把文本切成互不重叠的块，可能在单词中间切开，
//! 但不会切开一个 UTF-8 字符

use crate::error::{AppResult, ConfigError};

/// 固定大小的文本分块器
#[derive(Debug, Clone, Copy)]
pub struct TextChunker {
    max_chars: usize,
}

impl TextChunker {
    /// 创建分块器，`max_chars` 必须大于 0
    pub fn new(max_chars: usize) -> AppResult<Self> {
        if max_chars == 0 {
            return Err(ConfigError::InvalidChunkSize.into());
        }
        Ok(Self { max_chars })
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// 惰性地切分文本；每次调用都从头开始
    pub fn chunks<'a>(&self, text: &'a str) -> Chunks<'a> {
        Chunks {
            rest: text,
            max_chars: self.max_chars,
        }
    }
}

/// 分块迭代器
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    rest: &'a str,
    max_chars: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let end = self
            .rest
            .char_indices()
            .nth(self.max_chars)
            .map(|(idx, _)| idx)
            .unwrap_or(self.rest.len());

        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}

impl std::iter::FusedIterator for Chunks<'_> {}
