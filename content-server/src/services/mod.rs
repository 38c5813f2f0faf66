//! 服务层 - 内容操作的外部协作者
//!
//! # 服务列表
//!
//! - [`MediaCleanup`] - 图床媒体清理 (尽力而为)
//! - [`ContactNotifier`] - 联系表单邮件通知

pub mod media;
pub mod notify;

pub use media::{CleanupReport, MediaCleanup, MediaConfig, MediaHost};
pub use notify::{ContactNotifier, LogMailer, Mailer, NotifyConfig};
