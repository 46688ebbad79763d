//! 应用主状态

use juke_pager_core::{
    InMemoryContainer, InMemoryDocument, PagerEvent, PagerEventType, PagerOptions, PagerResult,
    Pagination,
};

use super::{EventLog, PagerItem};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 分页器（渲染到内存容器）
    pub pager: Pagination<InMemoryContainer>,

    /// 焦点所在的分页条元素下标
    pub focus: usize,

    /// 跳页输入框内容
    pub page_input: String,

    /// 每页条数下拉框当前选中的下标
    pub size_index: usize,

    /// 是否显示渲染出的标记
    pub show_markup: bool,

    /// 事件日志
    pub event_log: EventLog,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 按配置挂载分页器，并注册记录事件的处理器
    pub fn new(options: PagerOptions) -> PagerResult<Self> {
        let document = InMemoryDocument::with_selectors([options.el.clone()]);
        let mut pager = Pagination::mount(options, &document)?;

        let event_log = EventLog::new();
        for event_type in [PagerEventType::ChangePage, PagerEventType::ChangePageSize] {
            let sink = event_log.clone();
            pager.on(event_type, move |value| {
                sink.push(PagerEvent::new(event_type, value));
            });
        }

        let mut app = Self {
            should_quit: false,
            pager,
            focus: 0,
            page_input: String::new(),
            size_index: 0,
            show_markup: true,
            event_log,
            status_message: None,
        };
        app.sync_with_pager(None);
        Ok(app)
    }

    /// 当前可见的分页条元素
    pub fn items(&self) -> Vec<PagerItem> {
        PagerItem::layout(self.pager.options(), self.pager.window())
    }

    /// 焦点所在的元素
    pub fn focused_item(&self) -> Option<PagerItem> {
        self.items().get(self.focus).copied()
    }

    /// 分页器重新渲染后同步输入框、下拉框与焦点
    ///
    /// `keep` 仍然可见时焦点留在它上面，否则移到当前页。
    pub fn sync_with_pager(&mut self, keep: Option<PagerItem>) {
        let options = self.pager.options();
        self.page_input = options.effective_current_page().to_string();
        self.size_index = options
            .page_sizes
            .iter()
            .position(|size| *size == options.page_size)
            .unwrap_or(0);

        let current = PagerItem::Number(options.effective_current_page());
        let items = self.items();
        self.focus = keep
            .and_then(|item| items.iter().position(|i| *i == item))
            .or_else(|| items.iter().position(|i| *i == current))
            .unwrap_or(0);
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
