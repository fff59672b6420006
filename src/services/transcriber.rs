//! 题目转写服务 - 业务能力层
//!
//! 只负责把题目 HTML 转成轻量的 markdown 风格文本
//!
//! 转写规则：
//! - 第一个 `<h2>` 作为标题，后接 `": "`
//! - 除最后一个（页脚导航）外的所有 `<p>`，逐个处理其直接子节点
//! - 每个段落之后追加一个空格，最后删除所有制表符
//!
//! 嵌套标签不会递归转写，只取其纯文本

use scraper::{ElementRef, Html, Node, Selector};

use crate::error::{AppResult, DocumentError};

const TITLE_TAG: &str = "h2";
const PARAGRAPH_TAG: &str = "p";

/// 段落内的行内节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    Text(String),
    Link { text: String, href: String },
    Subscript(String),
    Superscript(String),
    Bold(String),
    Italic(String),
    Code(String),
    /// 注释或未识别的标签，不产生任何输出
    Other,
}

impl InlineNode {
    /// 根据元素标签分类
    pub fn from_element(element: ElementRef<'_>) -> Self {
        let text = || element.text().collect::<String>();
        match element.value().name() {
            "a" => InlineNode::Link {
                text: text(),
                href: element.value().attr("href").unwrap_or_default().to_string(),
            },
            "sub" => InlineNode::Subscript(text()),
            "sup" => InlineNode::Superscript(text()),
            "strong" => InlineNode::Bold(text()),
            "em" => InlineNode::Italic(text()),
            "code" => InlineNode::Code(text()),
            _ => InlineNode::Other,
        }
    }

    /// 追加到输出
    pub fn write_to(&self, out: &mut String) {
        match self {
            InlineNode::Text(text) => out.push_str(text),
            InlineNode::Link { text, href } => {
                out.push_str(&format!("[{}]({})", text, href));
            }
            InlineNode::Subscript(text) => out.push_str(&format!("<sub>{}</sub>", text)),
            InlineNode::Superscript(text) => out.push_str(&format!("<sup>{}</sup>", text)),
            InlineNode::Bold(text) => out.push_str(&format!("**{}**", text)),
            InlineNode::Italic(text) => out.push_str(&format!("*{}*", text)),
            InlineNode::Code(text) => out.push_str(&format!("`{}`", text)),
            InlineNode::Other => {}
        }
    }
}

/// 题目转写服务
pub struct Transcriber {
    title_selector: Selector,
    paragraph_selector: Selector,
}

impl Transcriber {
    /// 创建新的转写服务
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            title_selector: parse_selector(TITLE_TAG)?,
            paragraph_selector: parse_selector(PARAGRAPH_TAG)?,
        })
    }

    /// 把题目页面转写为文本
    ///
    /// 页面中没有标题时返回 `DocumentError::MissingTitle`
    pub fn transcribe(&self, html: &str) -> AppResult<String> {
        let document = Html::parse_document(html);

        let title = document
            .select(&self.title_selector)
            .next()
            .ok_or_else(|| DocumentError::MissingTitle {
                tag: TITLE_TAG.to_string(),
            })?;

        let mut markdown = title.text().collect::<String>();
        markdown.push_str(": ");

        let paragraphs: Vec<ElementRef<'_>> = document.select(&self.paragraph_selector).collect();
        let content = paragraphs.split_last().map(|(_, rest)| rest).unwrap_or(&[]);

        for paragraph in content {
            for node in inline_nodes(*paragraph) {
                node.write_to(&mut markdown);
            }
            markdown.push(' ');
        }

        Ok(markdown.replace('\t', ""))
    }
}

/// 段落的直接子节点，按文档顺序
pub fn inline_nodes(paragraph: ElementRef<'_>) -> Vec<InlineNode> {
    paragraph
        .children()
        .map(|child| match child.value() {
            Node::Text(text) => InlineNode::Text(String::from(&**text)),
            Node::Element(_) => ElementRef::wrap(child)
                .map(InlineNode::from_element)
                .unwrap_or(InlineNode::Other),
            _ => InlineNode::Other,
        })
        .collect()
}

fn parse_selector(selector: &str) -> AppResult<Selector> {
    Selector::parse(selector).map_err(|e| {
        DocumentError::InvalidSelector {
            selector: selector.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;

    fn transcribe(html: &str) -> AppResult<String> {
        Transcriber::new().unwrap().transcribe(html)
    }

    #[test]
    fn test_transcribe_fixture() {
        let html = r#"<html><body>
<h2>Problem 1</h2>
<p>Find the sum of <a href="/x">multiples</a> below <strong>1000</strong></p>
<p>Project Euler: Copyright Information | Privacy Policy</p>
</body></html>"#;

        assert_eq!(
            transcribe(html).unwrap(),
            "Problem 1: Find the sum of [multiples](/x) below **1000** "
        );
    }

    #[test]
    fn test_transcribe_all_inline_kinds() {
        let html = "<h2>Problem 6</h2>\
            <p>a<sub>1</sub> b<sup>2</sup> <em>c</em> <code>d</code></p>\
            <p>footer</p>";

        assert_eq!(
            transcribe(html).unwrap(),
            "Problem 6: a<sub>1</sub> b<sup>2</sup> *c* `d` "
        );
    }

    #[test]
    fn test_ignored_nodes_contribute_nothing() {
        let html = "<h2>T</h2>\
            <p><!-- comment --><span>hidden</span><br><b>bold</b></p>\
            <p>footer</p>";

        assert_eq!(transcribe(html).unwrap(), "T:  ");
    }

    #[test]
    fn test_nested_markup_is_flattened() {
        let html = r#"<h2>T</h2><p><strong>see <a href="/y">here</a></strong></p><p>footer</p>"#;

        assert_eq!(transcribe(html).unwrap(), "T: **see here** ");
    }

    #[test]
    fn test_tabs_are_stripped_and_paragraphs_spaced() {
        let html = "<h2>\tTitle</h2><p>one\t</p><p>\ttwo</p><p>footer</p>";

        assert_eq!(transcribe(html).unwrap(), "Title: one two ");
    }

    #[test]
    fn test_link_without_href() {
        let html = "<h2>T</h2><p><a>anchor</a></p><p>footer</p>";

        assert_eq!(transcribe(html).unwrap(), "T: [anchor]() ");
    }

    #[test]
    fn test_only_boilerplate_paragraph() {
        assert_eq!(transcribe("<h2>T</h2><p>footer</p>").unwrap(), "T: ");
        assert_eq!(transcribe("<h2>T</h2>").unwrap(), "T: ");
    }

    #[test]
    fn test_missing_title_is_malformed_document() {
        let err = transcribe("<p>no heading</p><p>footer</p>").unwrap_err();

        assert!(matches!(
            err,
            AppError::Document(DocumentError::MissingTitle { .. })
        ));
    }

    #[test]
    fn test_inline_nodes_classification() {
        let document = Html::parse_fragment(r#"<p>x<a href="/z">y</a><!--c--><i>i</i></p>"#);
        let selector = Selector::parse("p").unwrap();
        let paragraph = document.select(&selector).next().unwrap();

        assert_eq!(
            inline_nodes(paragraph),
            vec![
                InlineNode::Text("x".to_string()),
                InlineNode::Link {
                    text: "y".to_string(),
                    href: "/z".to_string()
                },
                InlineNode::Other,
                InlineNode::Other,
            ]
        );
    }
}
