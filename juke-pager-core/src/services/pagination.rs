//! 分页器组件

use crate::error::{PagerError, PagerResult};
use crate::services::{
    clamp_page_input, generate_pagers, render_markup, resolve_click, ClickTarget, EventHub,
};
use crate::traits::{Container, ContainerResolver};
use crate::types::{PageWindow, PagerEvent, PagerEventType, PagerOptions, PagerOptionsPatch};

/// 分页器组件 - 持有配置、派生状态、容器与事件总线
///
/// 构造时立即渲染；每次 `refresh` 合并配置后整体重新渲染。
#[derive(Debug)]
pub struct Pagination<C: Container> {
    options: PagerOptions,
    window: PageWindow,
    container: C,
    events: EventHub,
}

impl<C: Container> Pagination<C> {
    /// 在给定容器中创建分页器
    pub fn new(options: PagerOptions, container: C) -> Self {
        let mut pagination = Self {
            options,
            window: PageWindow::default(),
            container,
            events: EventHub::new(),
        };
        pagination.render();
        pagination
    }

    /// 按 `options.el` 查找容器并创建分页器
    ///
    /// 找不到容器时返回 [`PagerError::MissingContainer`]。
    pub fn mount<R>(options: PagerOptions, resolver: &R) -> PagerResult<Self>
    where
        R: ContainerResolver<Container = C>,
    {
        let Some(container) = resolver.query_selector(&options.el) else {
            let err = PagerError::MissingContainer(options.el.clone());
            err.log();
            return Err(err);
        };
        Ok(Self::new(options, container))
    }

    /// 合并部分配置并重新渲染
    ///
    /// 容器在构造时确定，修改 `el` 只更新配置本身。
    pub fn refresh(&mut self, patch: &PagerOptionsPatch) {
        patch.apply_to(&mut self.options);
        log::debug!(
            "Refreshing pager: page {}/{}",
            self.options.current_page,
            self.options.page_count
        );
        self.render();
    }

    /// 重新计算页码窗口并替换容器内容
    pub fn render(&mut self) {
        self.window = generate_pagers(self.options.current_page, self.options.page_count);
        let markup = render_markup(&self.options, &self.window);
        self.container.set_inner_html(&markup);
    }

    /// 解析点击但不触发事件
    pub fn resolve_click(&self, target: &ClickTarget) -> PagerResult<Vec<PagerEvent>> {
        resolve_click(&self.options, target)
    }

    /// 处理一次点击：解析并依次触发事件，返回已触发的事件
    pub fn click(&mut self, target: &ClickTarget) -> PagerResult<Vec<PagerEvent>> {
        let events = self.resolve_click(target).inspect_err(PagerError::log)?;
        for event in &events {
            self.events.trigger(*event);
        }
        Ok(events)
    }

    /// 跳页输入框内容变化，返回修正后的值
    #[must_use]
    pub fn page_input_changed(&self, value: &str) -> String {
        clamp_page_input(value, self.options.effective_page_count())
    }

    /// 注册事件处理器
    pub fn on(&mut self, event_type: PagerEventType, handler: impl FnMut(u32) + 'static) {
        self.events.on(event_type, handler);
    }

    /// 注册只触发一次的事件处理器
    pub fn once(&mut self, event_type: PagerEventType, handler: impl FnMut(u32) + 'static) {
        self.events.once(event_type, handler);
    }

    /// 移除某类型的全部事件处理器
    pub fn off(&mut self, event_type: PagerEventType) -> usize {
        self.events.off(event_type)
    }

    /// 手动触发事件
    pub fn trigger(&mut self, event: PagerEvent) -> usize {
        self.events.trigger(event)
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{demo_options, Recorder};
    use crate::traits::{InMemoryContainer, InMemoryDocument};

    #[test]
    fn construction_renders_once() {
        let p = Pagination::new(demo_options(), InMemoryContainer::new());
        assert_eq!(p.container().render_count(), 1);
        assert!(p.container().markup().contains(r#"data-page="5""#));
        assert_eq!(p.window().pages, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn mount_without_container_fails() {
        let doc = InMemoryDocument::with_selectors(["#other"]);
        let err = Pagination::mount(demo_options(), &doc).unwrap_err();
        assert!(matches!(err, PagerError::MissingContainer(ref sel) if sel == ".page"));
    }

    #[test]
    fn mount_resolves_selector() {
        let doc = InMemoryDocument::with_selectors([".page"]);
        let p = Pagination::mount(demo_options(), &doc).unwrap();
        assert_eq!(p.container().render_count(), 1);
    }

    #[test]
    fn refresh_merges_and_rerenders() {
        let mut p = Pagination::new(demo_options(), InMemoryContainer::new());
        p.refresh(&PagerOptionsPatch::page(2));

        assert_eq!(p.options().current_page, 2);
        assert_eq!(p.options().page_count, 20);
        assert_eq!(p.container().render_count(), 2);
        assert_eq!(p.window().pages, vec![2, 3, 4, 5, 6]);
        assert!(p
            .container()
            .markup()
            .contains(r#"class="juke-number number active" data-page="2""#));
    }

    #[test]
    fn click_triggers_registered_handlers() {
        let rec = Recorder::new();
        let mut p = Pagination::new(demo_options(), InMemoryContainer::new());
        p.on(PagerEventType::ChangePage, rec.tagged("page"));

        let events = p.click(&ClickTarget::number(7)).unwrap();
        assert_eq!(events, vec![PagerEvent::ChangePage(7)]);
        assert_eq!(rec.take(), vec!["page:7"]);
        // 受控组件：当前页不变
        assert_eq!(p.options().current_page, 5);
    }

    #[test]
    fn click_on_unknown_classes_is_ignored() {
        let mut p = Pagination::new(demo_options(), InMemoryContainer::new());
        assert!(p.click(&ClickTarget::new("a b c")).unwrap().is_empty());
    }

    #[test]
    fn page_input_is_clamped_to_page_count() {
        let p = Pagination::new(demo_options(), InMemoryContainer::new());
        assert_eq!(p.page_input_changed("30"), "20");
        assert_eq!(p.page_input_changed("7"), "7");
    }

    #[test]
    fn page_input_and_confirm_agree_without_pages() {
        use crate::services::class_names::CONFIRM_BTN;

        let mut p = Pagination::new(PagerOptions::new(1, 0), InMemoryContainer::new());
        assert_eq!(p.page_input_changed("5"), "1");

        let confirm = ClickTarget::new(CONFIRM_BTN).with_input_value("5");
        assert_eq!(p.click(&confirm).unwrap(), vec![PagerEvent::ChangePage(1)]);
    }

    #[test]
    fn once_and_off() {
        let rec = Recorder::new();
        let mut p = Pagination::new(demo_options(), InMemoryContainer::new());
        p.once(PagerEventType::ChangePageSize, rec.tagged("size"));
        p.on(PagerEventType::ChangePage, rec.tagged("page"));

        p.trigger(PagerEvent::ChangePageSize(10));
        p.trigger(PagerEvent::ChangePageSize(20));
        assert_eq!(p.off(PagerEventType::ChangePage), 1);
        p.trigger(PagerEvent::ChangePage(1));

        assert_eq!(rec.take(), vec!["size:10"]);
    }
}
