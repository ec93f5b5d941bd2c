//! Email delivery of a published digest.

use std::error::Error;
use std::fs;
use std::path::Path;

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

const SMTP_HOST: &str = "smtp.gmail.com";
const SMTP_PORT: u16 = 465;

const MESSAGE_BODY: &str = "Here is your AI-generated summary of The Economist (Latest Issue).";

/// Sender account and recipient list.
#[derive(Debug, Clone, Default)]
pub struct MailSettings {
    /// SMTP login, also the sender and first recipient
    pub user: Option<String>,
    /// SMTP password
    pub password: Option<String>,
    /// Additional recipients
    pub recipients: Vec<String>,
}

/// Outcome of a delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Sent to this many recipients
    Sent(usize),
    /// Nothing sent, with the reason
    Skipped(&'static str),
}

impl MailSettings {
    /// The sender followed by the extra recipients, keeping only entries
    /// that contain `@`.
    pub fn valid_recipients(&self) -> Vec<String> {
        self.user
            .iter()
            .chain(self.recipients.iter())
            .map(|r| r.trim())
            .filter(|r| r.contains('@'))
            .map(str::to_string)
            .collect()
    }

    /// Send the PDF at `path` as an attachment.
    ///
    /// Skips without error when the credentials are missing or no recipient
    /// is valid.
    pub fn send_digest(&self, path: &Path) -> Result<Delivery, Box<dyn Error>> {
        let recipients = self.valid_recipients();
        log::info!("Sending email to {} recipients", recipients.len());

        let (user, password) = match (&self.user, &self.password) {
            (Some(user), Some(password)) if !user.is_empty() && !password.is_empty() => {
                (user, password)
            }
            _ => return Ok(Delivery::Skipped("email credentials missing")),
        };
        if recipients.is_empty() {
            return Ok(Delivery::Skipped("no valid recipients"));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or("digest path has no file name")?;
        let data = fs::read(path)?;
        let message = build_message(user, &recipients, &file_name, data)?;

        let mailer = SmtpTransport::relay(SMTP_HOST)?
            .port(SMTP_PORT)
            .credentials(Credentials::new(user.clone(), password.clone()))
            .build();
        mailer.send(&message)?;

        Ok(Delivery::Sent(recipients.len()))
    }
}

/// Subject line for a digest file.
pub fn subject(file_name: &str) -> String {
    format!("The Weekly Digest - {}", file_name)
}

/// Build the message: a short plain-text note with the PDF attached.
pub fn build_message(
    from: &str,
    recipients: &[String],
    file_name: &str,
    pdf: Vec<u8>,
) -> Result<Message, Box<dyn Error>> {
    let mut builder = Message::builder()
        .from(from.parse::<Mailbox>()?)
        .subject(subject(file_name));
    for recipient in recipients {
        builder = builder.to(recipient.parse::<Mailbox>()?);
    }

    let attachment =
        Attachment::new(file_name.to_string()).body(pdf, ContentType::parse("application/pdf")?);
    let message = builder.multipart(
        MultiPart::mixed()
            .singlepart(SinglePart::plain(MESSAGE_BODY.to_string()))
            .singlepart(attachment),
    )?;

    Ok(message)
}
