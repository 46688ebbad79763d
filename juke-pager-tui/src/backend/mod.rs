//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │ AppMessage│          └────┬─────┘         │   │
//！│  │        ▲               │ PagerMsg  │               │ 修改          │   │
//！│  │   ┌─────────┐          └───────────┘          ┌────▼─────┐         │   │
//！│  │   │  View   │ ◀──────── 读取 ───────────────── │  Model   │         │   │
//！│  │   │   层    │                                  │    层    │         │   │
//！│  │   └────┬────┘                                  └────┬─────┘         │   │
//！│  └────────│────────────────────────────────────────────│───────────────┘   │
//！│           ▼                                            ▼                   │
//！│      ┌─────────┐                                 ┌──────────┐              │
//！│      │  终端   │                                 │ Backend  │              │
//！│      │ (Util)  │                                 │    层    │              │
//！│      └─────────┘                                 └────┬─────┘              │
//！│                                                       ▼                    │
//！│                                            ┌───────────────────┐           │
//！│                                            │  juke-pager-core  │           │
//！│                                            └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：启动前的基础服务
//!
//! 分页器本身（`juke_pager_core::Pagination`）是同步、纯内存的，
//! 直接放在 Model 层里。Backend 层只负责进程级的准备工作。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件读写（JSON）
//!         mod logging;            // 日志订阅器（写入文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：~/.config/juke-pager/config.json
//!
//!         {
//!             "pager": { "currentPage": 5, "pageCount": 20, "pageStep": 5, ... },
//!             "logFilter": "info",
//!             "theme": "dark"
//!         }
//!
//!         文件不存在时返回默认配置（第 5 页，共 20 页）。
//!         缺省字段逐项取默认值。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、日志（init_logging）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/logging.rs 中定义：
//!
//!         终端被 TUI 占用，日志写入 ~/.local/share/juke-pager/juke-pager.log。
//!         过滤规则优先取 RUST_LOG，其次取配置文件中的 logFilter。
//!

mod config_service;
mod logging;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use logging::init_logging;
