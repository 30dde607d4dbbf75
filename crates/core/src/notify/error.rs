use std::fmt;
use thiserror::Error;

/// # Summary
/// 通知渠道枚举，标记一条通知走哪条投递路径。
///
/// # Invariants
/// - 渠道集合是封闭的，新增渠道需要同时提供实体与发送器实现。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    // 电子邮件渠道 (SMTP 提交)
    Email,
    // 社交发帖渠道 (提及 + 正文)
    Social,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Email => write!(f, "email"),
            Channel::Social => write!(f, "social"),
        }
    }
}

/// # Summary
/// 通知服务错误枚举。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
/// - 每个错误都携带渠道标记，调度层依赖它对各渠道独立决策。
#[derive(Error, Debug)]
pub enum NotifyError {
    /// 配置错误 (渠道设置缺失或非法，在构造阶段抛出，早于任何网络活动)
    #[error("Configuration error [{channel}]: {reason}")]
    Config { channel: Channel, reason: String },

    /// 投递错误 (认证被拒、网络不可达、收件人非法、超长内容等传输层失败)
    #[error("Delivery error [{channel}]: {reason}")]
    Delivery { channel: Channel, reason: String },
}

impl NotifyError {
    /// # Summary
    /// 返回错误归属的渠道标记。
    ///
    /// # Returns
    /// * 产生该错误的渠道。
    pub fn channel(&self) -> Channel {
        match self {
            NotifyError::Config { channel, .. } => *channel,
            NotifyError::Delivery { channel, .. } => *channel,
        }
    }
}
