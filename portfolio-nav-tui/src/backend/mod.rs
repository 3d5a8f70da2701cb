//!
//! src/backend/mod.rs
//! Backend 层：启动时的外部数据
//!
//! 这个应用没有远程服务，Backend 层只负责在启动时读取配置：
//! 主题以及（可选的）自定义内容目录。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（settings.json / catalog.json）
//!

mod config_service;

pub use config_service::{ConfigService, LocalConfigService};
