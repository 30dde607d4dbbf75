use async_trait::async_trait;
use oshirase_core::notify::entity::SocialNotification;
use oshirase_core::notify::error::{Channel, NotifyError};
use oshirase_core::notify::port::{Notification, Notifier};
use reqwest;
use serde::Serialize;

const SOCIAL_API_URL: &str = "https://api.twitter.com/1.1/statuses/update.json";
/// Platform-wide length limit for a single post, in characters.
const POST_MAX_CHARS: usize = 280;

/// # Summary
/// A notifier implementation that publishes the rendered mention/content
/// string as a single post via the social platform's API.
///
/// # Invariants
/// * All four credential strings must be valid for the target account.
/// * Request signing is the platform client's concern; the credentials are
///   forwarded opaquely with each request.
pub struct SocialNotifier {
    /// The application's consumer key.
    consumer_key: String,
    /// The application's consumer secret.
    consumer_secret: String,
    /// The account's access key.
    access_key: String,
    /// The account's access secret.
    access_secret: String,
    /// The HTTP client used for requests.
    client: reqwest::Client,
}

/// # Summary
/// Payload structure for the platform's status-update API.
#[derive(Serialize)]
struct StatusUpdate {
    status: String,
}

impl SocialNotifier {
    /// # Summary
    /// Creates a new `SocialNotifier`.
    ///
    /// # Logic
    /// Initializes the struct with the provided credential strings and a
    /// default HTTP client.
    ///
    /// # Arguments
    /// * `consumer_key` - The application's consumer key.
    /// * `consumer_secret` - The application's consumer secret.
    /// * `access_key` - The account's access key.
    /// * `access_secret` - The account's access secret.
    ///
    /// # Returns
    /// * A new instance of `SocialNotifier`.
    pub fn new(
        consumer_key: String,
        consumer_secret: String,
        access_key: String,
        access_secret: String,
    ) -> Self {
        Self {
            consumer_key,
            consumer_secret,
            access_key,
            access_secret,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Notifier for SocialNotifier {
    type Notification = SocialNotification;

    /// # Summary
    /// Publishes the rendered notification as a single post.
    ///
    /// # Logic
    /// 1. Renders the mention/content string.
    /// 2. Rejects content over the platform's length limit before any
    ///    network activity.
    /// 3. Sends a POST request carrying the credentials and the post body.
    /// 4. Checks the response status and returns success or failure.
    ///
    /// # Arguments
    /// * `notification` - The social notification to publish.
    ///
    /// # Returns
    /// * `Ok(())` if the post was accepted.
    /// * `Err(NotifyError::Delivery)` on oversize content, network errors,
    ///   or a non-success API response.
    async fn send(&self, notification: &SocialNotification) -> Result<(), NotifyError> {
        let text = notification.payload();

        if text.chars().count() > POST_MAX_CHARS {
            return Err(NotifyError::Delivery {
                channel: Channel::Social,
                reason: format!(
                    "Post exceeds the {} character limit ({} characters)",
                    POST_MAX_CHARS,
                    text.chars().count()
                ),
            });
        }

        let payload = StatusUpdate { status: text };

        let response = self
            .client
            .post(SOCIAL_API_URL)
            .header("x-consumer-key", &self.consumer_key)
            .header("x-consumer-secret", &self.consumer_secret)
            .header("x-access-key", &self.access_key)
            .header("x-access-secret", &self.access_secret)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::Delivery {
                channel: Channel::Social,
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(NotifyError::Delivery {
                channel: Channel::Social,
                reason: format!("Social API error: {}", error_text),
            });
        }

        Ok(())
    }
}
