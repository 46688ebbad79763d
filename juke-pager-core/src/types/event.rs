//! 分页事件类型定义

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PagerError;

/// 事件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PagerEventType {
    /// 页码变更
    ChangePage,
    /// 每页条数变更
    ChangePageSize,
}

impl PagerEventType {
    /// 对外暴露的事件名
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChangePage => "changePage",
            Self::ChangePageSize => "changePageSize",
        }
    }
}

impl fmt::Display for PagerEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PagerEventType {
    type Err = PagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "changePage" => Ok(Self::ChangePage),
            "changePageSize" => Ok(Self::ChangePageSize),
            other => Err(PagerError::UnknownEventType(other.to_string())),
        }
    }
}

/// 分页器发出的事件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum PagerEvent {
    /// 请求跳转到某页
    ChangePage(u32),
    /// 请求切换每页条数
    ChangePageSize(u32),
}

impl PagerEvent {
    /// 事件类型
    #[must_use]
    pub fn event_type(&self) -> PagerEventType {
        match self {
            Self::ChangePage(_) => PagerEventType::ChangePage,
            Self::ChangePageSize(_) => PagerEventType::ChangePageSize,
        }
    }

    /// 事件携带的值（页码或条数）
    #[must_use]
    pub fn value(&self) -> u32 {
        match self {
            Self::ChangePage(v) | Self::ChangePageSize(v) => *v,
        }
    }

    /// 由类型和值构造事件
    #[must_use]
    pub fn new(event_type: PagerEventType, value: u32) -> Self {
        match event_type {
            PagerEventType::ChangePage => Self::ChangePage(value),
            PagerEventType::ChangePageSize => Self::ChangePageSize(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_names_roundtrip() {
        for ty in [PagerEventType::ChangePage, PagerEventType::ChangePageSize] {
            assert_eq!(ty.as_str().parse::<PagerEventType>().unwrap(), ty);
        }
        assert!("click".parse::<PagerEventType>().is_err());
    }

    #[test]
    fn event_serializes_tagged() {
        let json = serde_json::to_string(&PagerEvent::ChangePage(3)).unwrap();
        assert_eq!(json, r#"{"type":"changePage","value":3}"#);
    }

    #[test]
    fn event_value_and_type() {
        let e = PagerEvent::new(PagerEventType::ChangePageSize, 20);
        assert_eq!(e, PagerEvent::ChangePageSize(20));
        assert_eq!(e.value(), 20);
        assert_eq!(e.event_type(), PagerEventType::ChangePageSize);
    }
}
