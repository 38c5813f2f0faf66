//! 联系表单通知
//!
//! 公开表单提交后生成两封邮件：发给管理员的通知和发给访客的自动回复。
//! 投递通过 [`Mailer`] 完成，默认实现只写日志。通知在后台任务里执行，
//! 失败只记日志，不影响提交结果。

use std::sync::Arc;

use async_trait::async_trait;
use shared::models::Contact;
use thiserror::Error;

/// Notification settings (`ADMIN_EMAIL`, `MAIL_FROM`, `COMPANY_NAME`)
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// Recipient of new-submission notices; none disables them
    pub admin_email: Option<String>,
    pub mail_from: String,
    pub company_name: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            admin_email: None,
            mail_from: "no-reply@localhost".to_string(),
            company_name: "Our Company".to_string(),
        }
    }
}

impl NotifyConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            admin_email: non_empty("ADMIN_EMAIL"),
            mail_from: non_empty("MAIL_FROM").unwrap_or(defaults.mail_from),
            company_name: non_empty("COMPANY_NAME").unwrap_or(defaults.company_name),
        }
    }
}

/// A composed email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Mail delivery failed: {0}")]
    Delivery(String),
}

/// Outgoing mail transport
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError>;
}

/// Writes messages to the log instead of delivering them
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        tracing::info!(
            from = %message.from,
            to = %message.to,
            subject = %message.subject,
            "Outgoing email"
        );
        Ok(())
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Notice for the site admin, `None` when no admin address is configured
pub fn admin_notification(config: &NotifyConfig, contact: &Contact) -> Option<EmailMessage> {
    let to = config.admin_email.clone()?;

    let mut html = format!(
        "<h2>New Contact Form Submission</h2>\n<p><strong>Name:</strong> {}</p>\n<p><strong>Email:</strong> {}</p>\n",
        escape_html(&contact.name),
        escape_html(&contact.email)
    );
    if let Some(phone) = &contact.phone {
        html.push_str(&format!("<p><strong>Phone:</strong> {}</p>\n", escape_html(phone)));
    }
    if let Some(service) = &contact.service {
        html.push_str(&format!(
            "<p><strong>Service:</strong> {}</p>\n",
            escape_html(service)
        ));
    }
    html.push_str(&format!(
        "<p><strong>Message:</strong></p>\n<p>{}</p>\n",
        escape_html(&contact.message)
    ));

    Some(EmailMessage {
        from: config.mail_from.clone(),
        to,
        subject: format!("New Contact Form Submission from {}", contact.name),
        html,
    })
}

/// Acknowledgement sent back to the visitor
pub fn auto_reply(config: &NotifyConfig, contact: &Contact) -> EmailMessage {
    let company = escape_html(&config.company_name);
    EmailMessage {
        from: config.mail_from.clone(),
        to: contact.email.clone(),
        subject: format!("Thank you for contacting {}", config.company_name),
        html: format!(
            "<h2>Thank you for reaching out!</h2>\n<p>Dear {},</p>\n<p>We have received your message and will get back to you as soon as possible.</p>\n<p>Best regards,<br>{} Team</p>\n",
            escape_html(&contact.name),
            company
        ),
    }
}

/// Sends contact notifications in the background
#[derive(Clone)]
pub struct ContactNotifier {
    config: NotifyConfig,
    mailer: Arc<dyn Mailer>,
}

impl ContactNotifier {
    pub fn new(config: NotifyConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self { config, mailer }
    }

    /// Deliver both messages, returning how many were sent
    pub async fn deliver(&self, contact: &Contact) -> usize {
        let mut messages = Vec::with_capacity(2);
        if let Some(notice) = admin_notification(&self.config, contact) {
            messages.push(notice);
        }
        messages.push(auto_reply(&self.config, contact));

        let mut sent = 0;
        for message in &messages {
            match self.mailer.send(message).await {
                Ok(()) => sent += 1,
                Err(e) => {
                    tracing::warn!(
                        contact_id = %contact.id,
                        to = %message.to,
                        error = %e,
                        "Contact notification failed"
                    );
                }
            }
        }
        sent
    }

    /// Fire-and-forget delivery
    pub fn spawn(&self, contact: Contact) {
        let notifier = self.clone();
        tokio::spawn(async move {
            notifier.deliver(&contact).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn contact() -> Contact {
        Contact {
            id: "contact:1".to_string(),
            name: "Jane <Doe>".to_string(),
            email: "jane@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            service: None,
            message: "Hello & welcome".to_string(),
            received_at: 0,
            is_read: false,
        }
    }

    fn config() -> NotifyConfig {
        NotifyConfig {
            admin_email: Some("admin@example.com".to_string()),
            mail_from: "site@example.com".to_string(),
            company_name: "Acme".to_string(),
        }
    }

    #[derive(Default)]
    struct Outbox {
        sent: Mutex<Vec<EmailMessage>>,
        fail_to: Option<String>,
    }

    #[async_trait]
    impl Mailer for Outbox {
        async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
            if self.fail_to.as_deref() == Some(message.to.as_str()) {
                return Err(MailError::Delivery("mailbox full".to_string()));
            }
            self.sent.lock().push(message.clone());
            Ok(())
        }
    }

    #[test]
    fn test_admin_notification() {
        let notice = admin_notification(&config(), &contact()).unwrap();
        assert_eq!(notice.to, "admin@example.com");
        assert_eq!(notice.subject, "New Contact Form Submission from Jane <Doe>");
        assert!(notice.html.contains("Jane &lt;Doe&gt;"));
        assert!(notice.html.contains("<strong>Phone:</strong> 555-0100"));
        assert!(!notice.html.contains("Service:"));
        assert!(notice.html.contains("Hello &amp; welcome"));
    }

    #[test]
    fn test_no_admin_address() {
        let config = NotifyConfig {
            admin_email: None,
            ..config()
        };
        assert!(admin_notification(&config, &contact()).is_none());
    }

    #[test]
    fn test_auto_reply() {
        let reply = auto_reply(&config(), &contact());
        assert_eq!(reply.to, "jane@example.com");
        assert_eq!(reply.subject, "Thank you for contacting Acme");
        assert!(reply.html.contains("Acme Team"));
    }

    #[tokio::test]
    async fn test_deliver_continues_after_failure() {
        let outbox = Arc::new(Outbox {
            sent: Mutex::new(Vec::new()),
            fail_to: Some("admin@example.com".to_string()),
        });
        let notifier = ContactNotifier::new(config(), outbox.clone());

        let sent = notifier.deliver(&contact()).await;
        assert_eq!(sent, 1);
        assert_eq!(outbox.sent.lock()[0].to, "jane@example.com");
    }
}
