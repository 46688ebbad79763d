//! 分页器配置类型定义

use serde::{Deserialize, Serialize};

/// 默认挂载选择器
fn default_el() -> String {
    "body".to_string()
}

fn default_page_sizes() -> Vec<u32> {
    vec![5, 10, 20, 50]
}

/// 分页器构造配置
///
/// 缺省字段由 [`Default`] 补齐，与用户传入的配置合并。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagerOptions {
    /// 当前页（从 1 开始）
    pub current_page: u32,
    /// 总页数
    pub page_count: u32,
    /// 快速跳页步长
    pub page_step: u32,
    /// 是否显示「跳至」输入框
    pub has_to_page: bool,
    /// 上一页按钮文字
    pub prev_text: String,
    /// 下一页按钮文字
    pub next_text: String,
    /// 是否显示每页条数选择
    pub has_select_page_size: bool,
    /// 可选的每页条数
    pub page_sizes: Vec<u32>,
    /// 当前每页条数
    pub page_size: u32,
    /// 容器选择器
    #[serde(default = "default_el")]
    pub el: String,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_count: 1,
            page_step: 5,
            has_to_page: true,
            prev_text: "«".to_string(),
            next_text: "»".to_string(),
            has_select_page_size: true,
            page_sizes: default_page_sizes(),
            page_size: 5,
            el: default_el(),
        }
    }
}

impl PagerOptions {
    /// 以当前页与总页数创建配置，其余字段取默认值
    #[must_use]
    pub fn new(current_page: u32, page_count: u32) -> Self {
        Self {
            current_page,
            page_count,
            ..Self::default()
        }
    }

    /// 从 JSON 解析配置（缺省字段取默认值）
    pub fn from_json(json: &str) -> crate::PagerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 总页数，至少为 1
    #[must_use]
    pub fn effective_page_count(&self) -> u32 {
        self.page_count.max(1)
    }

    /// 当前页，限制在 `[1, page_count]` 内
    #[must_use]
    pub fn effective_current_page(&self) -> u32 {
        self.current_page.clamp(1, self.effective_page_count())
    }

    /// 快速跳页步长，至少为 1
    #[must_use]
    pub fn effective_page_step(&self) -> u32 {
        self.page_step.max(1)
    }

    /// 当前页是否为首页
    #[must_use]
    pub fn is_first_page(&self) -> bool {
        self.effective_current_page() == 1
    }

    /// 当前页是否为末页
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.effective_current_page() == self.effective_page_count()
    }

    /// 仅有一页（或没有页）时整个分页器隐藏
    #[must_use]
    pub fn is_single_page(&self) -> bool {
        self.page_count <= 1
    }
}

/// 分页器配置更新请求（支持部分更新）
///
/// `refresh` 时合并到现有配置之上。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagerOptionsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_step: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_to_page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_select_page_size: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_sizes: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub el: Option<String>,
}

impl PagerOptionsPatch {
    /// 只更新当前页
    #[must_use]
    pub fn page(current_page: u32) -> Self {
        Self {
            current_page: Some(current_page),
            ..Self::default()
        }
    }

    /// 从 JSON 解析更新请求
    pub fn from_json(json: &str) -> crate::PagerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 应用更新到现有配置
    pub fn apply_to(&self, options: &mut PagerOptions) {
        if let Some(current_page) = self.current_page {
            options.current_page = current_page;
        }
        if let Some(page_count) = self.page_count {
            options.page_count = page_count;
        }
        if let Some(page_step) = self.page_step {
            options.page_step = page_step;
        }
        if let Some(has_to_page) = self.has_to_page {
            options.has_to_page = has_to_page;
        }
        if let Some(ref prev_text) = self.prev_text {
            options.prev_text.clone_from(prev_text);
        }
        if let Some(ref next_text) = self.next_text {
            options.next_text.clone_from(next_text);
        }
        if let Some(has_select_page_size) = self.has_select_page_size {
            options.has_select_page_size = has_select_page_size;
        }
        if let Some(ref page_sizes) = self.page_sizes {
            options.page_sizes.clone_from(page_sizes);
        }
        if let Some(page_size) = self.page_size {
            options.page_size = page_size;
        }
        if let Some(ref el) = self.el {
            options.el.clone_from(el);
        }
    }
}
