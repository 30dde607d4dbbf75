use async_trait::async_trait;
use lettre::message::{Mailboxes, Message, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use oshirase_core::notify::entity::EmailNotification;
use oshirase_core::notify::error::{Channel, NotifyError};
use oshirase_core::notify::port::{Notification, Notifier};

/// # Summary
/// A notifier implementation that delivers rendered email payloads via SMTP
/// (e.g., Gmail, QQ Mail).
///
/// # Invariants
/// - Requires valid SMTP credentials and server configuration.
/// - The `AsyncSmtpTransport` is reused for multiple notifications; no open
///   connection is held between sends.
pub struct EmailNotifier {
    /// The asynchronous SMTP transport.
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailNotifier {
    /// # Summary
    /// Creates a new `EmailNotifier`.
    ///
    /// # Logic
    /// 1. Sets up the SMTP credentials.
    /// 2. Configures the relay transport with STARTTLS on the configured
    ///    submission port.
    ///
    /// # Arguments
    /// * `host` - The SMTP server host (e.g., "smtp.gmail.com").
    /// * `port` - The SMTP submission port (587 with STARTTLS by default).
    /// * `user` - The SMTP username.
    /// * `pass` - The SMTP password or app-specific password.
    ///
    /// # Returns
    /// * A new instance of `EmailNotifier`, or `NotifyError::Config` when the
    ///   host is not a usable relay target.
    pub fn new(host: &str, port: u16, user: &str, pass: &str) -> Result<Self, NotifyError> {
        let creds = Credentials::new(user.to_string(), pass.to_string());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| NotifyError::Config {
                channel: Channel::Email,
                reason: format!("Invalid SMTP host: {}", e),
            })?
            .port(port)
            .credentials(creds)
            .build();

        Ok(Self { mailer })
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    type Notification = EmailNotification;

    /// # Summary
    /// Sends a notification email.
    ///
    /// # Logic
    /// 1. Renders the notification into its header/body payload.
    /// 2. Builds the SMTP message: From, one To mailbox per recipient, an
    ///    optional Subject, and a plain-text body.
    /// 3. Submits the message over the authenticated SMTP session.
    ///
    /// # Arguments
    /// * `notification` - The email notification to deliver.
    ///
    /// # Returns
    /// * `Ok(())` if the email was successfully sent.
    /// * `Err(NotifyError::Delivery)` on malformed addresses, message build
    ///   failures, or SMTP/network errors.
    async fn send(&self, notification: &EmailNotification) -> Result<(), NotifyError> {
        let payload = notification.payload();

        let from = payload.from.parse().map_err(|e| NotifyError::Delivery {
            channel: Channel::Email,
            reason: format!("Invalid from address: {}", e),
        })?;

        let recipients: Mailboxes = payload.to.parse().map_err(|e| NotifyError::Delivery {
            channel: Channel::Email,
            reason: format!("Invalid recipient list: {}", e),
        })?;

        let mut builder = Message::builder().from(from);
        for mailbox in recipients {
            builder = builder.to(mailbox);
        }
        if let Some(subject) = payload.subject {
            builder = builder.subject(subject);
        }

        let email = builder
            .header(ContentType::TEXT_PLAIN)
            .body(payload.body)
            .map_err(|e| NotifyError::Delivery {
                channel: Channel::Email,
                reason: format!("Failed to build email: {}", e),
            })?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| NotifyError::Delivery {
                channel: Channel::Email,
                reason: format!("SMTP error: {}", e),
            })?;

        Ok(())
    }
}
