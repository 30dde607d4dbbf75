use crate::cli::Args;
use config::Config;
use oshirase_core::config::{EmailConfig, ProfileConfig, SocialConfig};
use oshirase_core::notify::entity::{EmailNotification, SocialNotification};
use oshirase_core::notify::error::{Channel, NotifyError};
use oshirase_core::notify::port::{Notification, Notifier};
use oshirase_notify::email::EmailNotifier;
use oshirase_notify::social::SocialNotifier;
use std::io::Read;
use tracing::{debug, error, info};

/// 主题缺省时从组合后消息截取的最大字符数。
const SUBJECT_PREFIX_CHARS: usize = 10;

/// # Summary
/// 通知调度入口：读取设置，按请求的渠道独立构造并发送通知。
///
/// # Logic
/// 1. 读取设置文件。
/// 2. 组合最终消息（命令行正文，`--input` 时追加 stdin）。
/// 3. 逐渠道构造 Notification/Notifier 并发送；单渠道失败只记录日志，
///    不中断其余渠道。
/// 4. 任一渠道失败时整体返回错误（非零退出）。
///
/// # Arguments
/// * `args` - 解析后的命令行参数。
///
/// # Returns
/// * 所有请求的渠道都成功时返回 `Ok(())`。
pub async fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let settings = crate::settings::load(&args.settings)?;

    let message = compose_message(args)?;
    let subject = resolve_subject(&args.subject, &message);

    let mut failed: Vec<Channel> = Vec::new();

    if args.email {
        info!("Using email notifier");
        if let Err(e) = notify_email(&settings, &subject, &message, args.dry_run).await {
            error!("Email notification failed: {}", e);
            failed.push(e.channel());
        }
    }

    if args.social {
        info!("Using social notifier");
        if let Err(e) = notify_social(&settings, &message, args.dry_run).await {
            error!("Social notification failed: {}", e);
            failed.push(e.channel());
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        let channels = failed
            .iter()
            .map(Channel::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Err(format!("Notification failed for: {}", channels).into())
    }
}

/// # Summary
/// 组合最终要发送的消息。
///
/// # Logic
/// 命令行正文在前，`--input` 开启时把 stdin 的全部内容追加在后。
fn compose_message(args: &Args) -> Result<String, std::io::Error> {
    let mut message = args.message.clone();

    if args.input {
        let mut captured = String::new();
        std::io::stdin().read_to_string(&mut captured)?;
        message.push_str(&captured);
    }

    Ok(message)
}

/// # Summary
/// 解析邮件主题。
///
/// # Logic
/// 显式主题优先；缺省时截取组合后消息的前若干字符
/// （按字符而非字节截取，避免切断多字节字符）。
fn resolve_subject(subject: &str, message: &str) -> String {
    if subject.is_empty() {
        message.chars().take(SUBJECT_PREFIX_CHARS).collect()
    } else {
        subject.to_string()
    }
}

/// # Summary
/// 反序列化设置文件中的单个小节。
///
/// # Logic
/// 小节缺失或字段非法都归类为对应渠道的配置错误，
/// 使各渠道的构造互不影响。
fn section<T>(settings: &Config, key: &str, channel: Channel) -> Result<T, NotifyError>
where
    T: serde::de::DeserializeOwned,
{
    settings.get::<T>(key).map_err(|e| NotifyError::Config {
        channel,
        reason: format!("Failed to read [{}] settings: {}", key, e),
    })
}

/// # Summary
/// 构造并发送邮件渠道的通知。
///
/// # Logic
/// 1. 读取 `[email]` 与 `[me]` 小节，任一缺失/非法即返回配置错误。
/// 2. 构造 EmailNotifier 与 EmailNotification。
/// 3. 渲染载荷；`--dry-run` 时到此为止，否则发出。
async fn notify_email(
    settings: &Config,
    subject: &str,
    message: &str,
    dry_run: bool,
) -> Result<(), NotifyError> {
    let email: EmailConfig = section(settings, "email", Channel::Email)?;
    let me: ProfileConfig = section(settings, "me", Channel::Email)?;

    let notifier = EmailNotifier::new(
        &email.smtp_server,
        email.smtp_port,
        &email.smtp_username,
        &email.smtp_password,
    )?;
    let notification = EmailNotification {
        originator: email.sender_email,
        recipients: vec![me.email],
        subject: subject.to_string(),
        content: message.to_string(),
    };

    debug!("Rendered email payload: {:?}", notification.payload());

    if dry_run {
        info!("Dry run, not sending notification");
        return Ok(());
    }

    info!("Sending notification");
    notifier.send(&notification).await
}

/// # Summary
/// 构造并发送社交渠道的通知。
///
/// # Logic
/// 1. 读取 `[social]` 与 `[me]` 小节，任一缺失/非法即返回配置错误。
/// 2. 构造 SocialNotifier 与 SocialNotification。
/// 3. 渲染载荷；`--dry-run` 时到此为止，否则发帖。
async fn notify_social(settings: &Config, message: &str, dry_run: bool) -> Result<(), NotifyError> {
    let social: SocialConfig = section(settings, "social", Channel::Social)?;
    let me: ProfileConfig = section(settings, "me", Channel::Social)?;

    let notifier = SocialNotifier::new(
        social.consumer_key,
        social.consumer_secret,
        social.access_key,
        social.access_secret,
    );
    let notification = SocialNotification {
        recipients: vec![me.social],
        content: message.to_string(),
    };

    debug!("Rendered social payload: {}", notification.payload());

    if dry_run {
        info!("Dry run, not sending notification");
        return Ok(());
    }

    info!("Sending notification");
    notifier.send(&notification).await
}
