//! 原始查询条件

use bookstore_domain::BookFilter;
use serde::Deserialize;

/// 未经校验的查询条件，字段都以字符串形式给出
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchCriteria {
    /// 标题子串
    #[serde(default)]
    pub title: Option<String>,
    /// 作者子串
    #[serde(default)]
    pub author: Option<String>,
    /// 价格，取开头的数字部分
    #[serde(default)]
    pub price: Option<String>,
}

impl SearchCriteria {
    /// 转换为图书查询条件
    ///
    /// 空字符串的标题和作者被丢弃，只含空白的值原样保留。
    /// 价格取开头的数字部分（`"25abc"` 视为 25），没有数字时丢弃。
    pub fn into_filter(self) -> BookFilter {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        BookFilter {
            title: non_empty(self.title),
            author: non_empty(self.author),
            price: self
                .price
                .as_deref()
                .and_then(leading_number),
        }
    }
}

/// 解析字符串开头的十进制数，忽略前导空白和数字之后的内容
fn leading_number(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let integer = digits(end);
    end += integer;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits(end + 1);
        if integer + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if integer + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = digits(exponent);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }

    text[..end].parse().ok()
}
