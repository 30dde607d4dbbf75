use crate::notify::error::NotifyError;
use async_trait::async_trait;

/// # Summary
/// 通知实体的渲染契约：把消息内容与路由元数据渲染为渠道特定的载荷。
///
/// # Invariants
/// - `payload` 是字段的纯函数：无副作用、无隐藏状态，重复调用结果结构相等。
/// - 渲染永不失败；字段在实体构造前已完成校验。
pub trait Notification: Send + Sync {
    /// 渠道特定的载荷形态 (如邮件头 + 正文、提及字符串)。
    type Payload: PartialEq + Send;

    /// # Summary
    /// 将通知渲染为底层传输客户端期望的载荷。
    ///
    /// # Returns
    /// * 渲染后的渠道载荷。
    fn payload(&self) -> Self::Payload;
}

/// # Summary
/// 发送通知到外部系统的接口定义。
///
/// # Invariants
/// - 实现必须是 `Send` 和 `Sync` 以支持并发调用。
/// - 凭据在构造时注入并独占持有，此后不可变；`send` 调用之间没有内部状态。
/// - 每次 `send` 恰好渲染一次载荷；不重试、不排队、不吞错。
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 与该发送器配对的通知类型。渠道匹配由类型系统在编译期保证，
    /// 而不是运行时分支。
    type Notification: Notification;

    /// # Summary
    /// 发送一条通知。
    ///
    /// # Logic
    /// 1. 渲染通知载荷。
    /// 2. 将持有的凭据与载荷原样交给底层传输客户端。
    /// 3. 传输层失败归类为 `NotifyError::Delivery` 上抛。
    ///
    /// # Arguments
    /// * `notification` - 待发送的通知实体。
    ///
    /// # Returns
    /// * 成功返回 `Ok(())`。
    /// * 失败返回 `Err(NotifyError)`。
    async fn send(&self, notification: &Self::Notification) -> Result<(), NotifyError>;
}
