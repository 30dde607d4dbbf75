use serde::{Deserialize, Serialize};

/// 全局应用配置 (settings 文件的完整形态)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub me: ProfileConfig,
    pub email: Option<EmailConfig>,
    pub social: Option<SocialConfig>,
}

/// 通知接收人档案 ([me] 小节)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    // 接收通知的邮箱地址
    pub email: String,
    // 接收提及的社交账号 (不含 "@" 前缀)
    pub social: String,
}

/// SMTP 渠道配置 ([email] 小节)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    // SMTP 登录用户名
    pub smtp_username: String,
    // SMTP 登录密码 (或应用专用密码)
    pub smtp_password: String,
    // SMTP 服务器主机名
    pub smtp_server: String,
    // SMTP 提交端口 (587 为 STARTTLS 默认)
    pub smtp_port: u16,
    // 发件人地址 (From 头)
    pub sender_email: String,
}

/// 社交渠道配置 ([social] 小节，四个不透明凭据串)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialConfig {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_key: String,
    pub access_secret: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            me: ProfileConfig::default(),
            email: Some(EmailConfig {
                smtp_username: String::new(),
                smtp_password: String::new(),
                smtp_server: String::new(),
                smtp_port: 587,
                sender_email: String::new(),
            }),
            social: Some(SocialConfig {
                consumer_key: String::new(),
                consumer_secret: String::new(),
                access_key: String::new(),
                access_secret: String::new(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.me.email, "");
        assert_eq!(config.me.social, "");

        let email = config.email.expect("template email section");
        assert_eq!(email.smtp_port, 587);
        assert_eq!(email.smtp_server, "");

        let social = config.social.expect("template social section");
        assert_eq!(social.consumer_key, "");
    }
}
