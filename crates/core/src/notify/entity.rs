use crate::notify::port::Notification;
use serde::{Deserialize, Serialize};

/// # Summary
/// 电子邮件通知实体，持有消息内容与路由元数据。
///
/// # Invariants
/// - 构造后不可变；每个实例独占自己的收件人列表。
/// - `subject` 为空串时渲染的载荷不携带 Subject 头。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailNotification {
    // 发件人地址 (From 头)
    pub originator: String,
    // 收件人地址列表 (To 头按此顺序拼接)
    pub recipients: Vec<String>,
    // 邮件主题 (可为空)
    pub subject: String,
    // 纯文本正文
    pub content: String,
}

/// # Summary
/// 渲染后的邮件载荷：SMTP 传输客户端期望的头部 + 正文形态。
///
/// # Invariants
/// - `to` 是收件人列表按 ", " 拼接后的 To 头。
/// - `subject` 为 `None` 时消息不输出 Subject 头。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailPayload {
    // From 头
    pub from: String,
    // To 头 (", " 拼接)
    pub to: String,
    // Subject 头；None 表示省略
    pub subject: Option<String>,
    // 纯文本正文
    pub body: String,
}

impl Notification for EmailNotification {
    type Payload = EmailPayload;

    /// # Summary
    /// 将邮件通知渲染为头部 + 正文的载荷。
    ///
    /// # Logic
    /// 1. To 头由收件人列表按 ", " 拼接。
    /// 2. 主题为空串时省略 Subject 头，这是邮件渠道特有的约定。
    ///
    /// # Returns
    /// * 渲染后的邮件载荷。
    fn payload(&self) -> EmailPayload {
        EmailPayload {
            from: self.originator.clone(),
            to: self.recipients.join(", "),
            subject: if self.subject.is_empty() {
                None
            } else {
                Some(self.subject.clone())
            },
            body: self.content.clone(),
        }
    }
}

/// # Summary
/// 社交发帖通知实体：向若干账号提及并附带正文。
///
/// # Invariants
/// - 构造后不可变；每个实例独占自己的收件人列表。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialNotification {
    // 被提及的账号列表 (不含 "@" 前缀)
    pub recipients: Vec<String>,
    // 帖子正文
    pub content: String,
}

impl Notification for SocialNotification {
    type Payload = String;

    /// # Summary
    /// 渲染社交渠道的提及串。
    ///
    /// # Logic
    /// 1. 每个收件人加 "@" 前缀，按 ", " 拼接。
    /// 2. 拼接串与正文之间以 " - " 连接，顺序固定。
    ///
    /// # Returns
    /// * 渲染后的发帖文本。
    fn payload(&self) -> String {
        let mentions = self
            .recipients
            .iter()
            .map(|r| format!("@{}", r))
            .collect::<Vec<_>>()
            .join(", ");

        format!("{} - {}", mentions, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_payload_single_recipient() {
        let notification = SocialNotification {
            recipients: vec!["alice".to_string()],
            content: "hello".to_string(),
        };
        assert_eq!(notification.payload(), "@alice - hello");
    }

    #[test]
    fn test_social_payload_multiple_recipients() {
        let notification = SocialNotification {
            recipients: vec!["alice".to_string(), "bob".to_string()],
            content: "x".to_string(),
        };
        assert_eq!(notification.payload(), "@alice, @bob - x");
    }

    #[test]
    fn test_email_payload_headers() {
        let notification = EmailNotification {
            originator: "a@x.com".to_string(),
            recipients: vec!["b@y.com".to_string(), "c@z.com".to_string()],
            subject: "status".to_string(),
            content: "hi".to_string(),
        };
        let payload = notification.payload();
        assert_eq!(payload.from, "a@x.com");
        assert_eq!(payload.to, "b@y.com, c@z.com");
        assert_eq!(payload.subject, Some("status".to_string()));
        assert_eq!(payload.body, "hi");
    }

    #[test]
    fn test_email_payload_empty_subject_omitted() {
        let notification = EmailNotification {
            originator: "a@x.com".to_string(),
            recipients: vec!["b@y.com".to_string()],
            subject: String::new(),
            content: "hi".to_string(),
        };
        let payload = notification.payload();
        assert_eq!(payload.subject, None);
        assert_eq!(payload.to, "b@y.com");
    }

    #[test]
    fn test_payload_is_idempotent() {
        let email = EmailNotification {
            originator: "a@x.com".to_string(),
            recipients: vec!["b@y.com".to_string()],
            subject: "s".to_string(),
            content: "body".to_string(),
        };
        assert_eq!(email.payload(), email.payload());

        let social = SocialNotification {
            recipients: vec!["alice".to_string()],
            content: "hello".to_string(),
        };
        assert_eq!(social.payload(), social.payload());
    }
}
