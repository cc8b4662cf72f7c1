use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};

use crate::modules::contact::application::ports::outgoing::contact_notifier::{
    ContactMessage, ContactNotifier, EmailError,
};

/// Thin seam over the SMTP transport so delivery can be faked in tests.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, message: Message) -> Result<(), String> {
        AsyncTransport::send(self, message)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Relays contact-form submissions to the portfolio owner's inbox.
pub struct SmtpContactSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
    inbox_email: String,
}

impl SmtpContactSender {
    pub fn new(
        server: &str,
        username: &str,
        password: &str,
        from_email: String,
        inbox_email: String,
    ) -> Result<Self, EmailError> {
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(server)
            .map_err(|e| EmailError::DeliveryFailed(e.to_string()))?
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .build();

        Ok(Self {
            mailer: Box::new(mailer),
            from_email,
            inbox_email,
        })
    }

    /// Unauthenticated transport to localhost:25, for development.
    pub fn new_local(from_email: String, inbox_email: String) -> Self {
        let mailer =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous("localhost").build();

        Self {
            mailer: Box::new(mailer),
            from_email,
            inbox_email,
        }
    }

    pub fn new_with_mailer(
        mailer: Box<dyn Mailer>,
        from_email: String,
        inbox_email: String,
    ) -> Self {
        Self {
            mailer,
            from_email,
            inbox_email,
        }
    }
}

fn contact_email_html(contact: &ContactMessage) -> String {
    let message_html = contact.message.replace('\n', "<br>");
    format!(
        "<h2>New contact form submission</h2>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Subject:</strong> {}</p>\
         <p><strong>Message:</strong></p>\
         <p>{}</p>",
        contact.name,
        contact.email,
        contact.subject.as_deref().unwrap_or("(none)"),
        message_html,
    )
}

#[async_trait]
impl ContactNotifier for SmtpContactSender {
    async fn notify(&self, contact: &ContactMessage) -> Result<(), EmailError> {
        let subject = match &contact.subject {
            Some(s) => format!("Portfolio Contact: {s}"),
            None => format!("Portfolio Contact from {}", contact.name),
        };

        let message = Message::builder()
            .from(
                self.from_email
                    .parse()
                    .map_err(|_| EmailError::InvalidAddress(self.from_email.clone()))?,
            )
            .reply_to(
                contact
                    .email
                    .parse()
                    .map_err(|_| EmailError::InvalidAddress(contact.email.clone()))?,
            )
            .to(self
                .inbox_email
                .parse()
                .map_err(|_| EmailError::InvalidAddress(self.inbox_email.clone()))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(contact_email_html(contact))
            .map_err(|e| EmailError::DeliveryFailed(e.to_string()))?;

        self.mailer.send(message).await.map_err(|e| {
            error!("SMTP delivery failed: {e}");
            EmailError::DeliveryFailed(e)
        })?;

        info!(from = %contact.email, "Contact message relayed");
        Ok(())
    }
}
