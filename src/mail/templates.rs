//! Bodies for the two contact-pipeline emails. Each returns
//! `(subject, html, text)`.

use crate::db::NewContact;

fn field(label: &str, value: &str) -> String {
    format!(
        r#"<div class="field"><div class="label">{label}:</div><div class="value">{value}</div></div>"#
    )
}

/// Admin-facing notification of a new submission.
pub fn contact_notification(contact: &NewContact) -> (String, String, String) {
    let subject = format!("New Contact Form Submission from {}", contact.name);

    let mut fields = String::new();
    fields.push_str(&field("Name", &contact.name));
    fields.push_str(&field("Email", &contact.email));
    if let Some(phone) = &contact.phone {
        fields.push_str(&field("Phone", phone));
    }
    if let Some(service) = &contact.service {
        fields.push_str(&field("Service Interested In", service));
    }
    fields.push_str(&field("Message", &contact.message.replace('\n', "<br>")));

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<style>
  body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
  .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
  .header {{ background: linear-gradient(135deg, #7c3aed 0%, #06b6d4 100%); color: white; padding: 20px; border-radius: 8px 8px 0 0; }}
  .content {{ background: #f9fafb; padding: 20px; border: 1px solid #e5e7eb; }}
  .field {{ margin-bottom: 15px; }}
  .label {{ font-weight: bold; color: #7c3aed; }}
  .value {{ margin-top: 5px; padding: 10px; background: white; border-radius: 4px; }}
  .footer {{ text-align: center; padding: 20px; color: #6b7280; font-size: 12px; }}
</style>
</head>
<body>
<div class="container">
  <div class="header"><h2>New Contact Form Submission</h2></div>
  <div class="content">{fields}</div>
  <div class="footer"><p>This email was sent from the WebNirvaan contact form.</p></div>
</div>
</body>
</html>"#
    );

    let mut text = format!(
        "New Contact Form Submission\n\nName: {}\nEmail: {}\n",
        contact.name, contact.email
    );
    if let Some(phone) = &contact.phone {
        text.push_str(&format!("Phone: {phone}\n"));
    }
    if let Some(service) = &contact.service {
        text.push_str(&format!("Service: {service}\n"));
    }
    text.push_str(&format!("Message:\n{}", contact.message));

    (subject, html, text)
}

/// Confirmation sent back to the submitter.
pub fn contact_confirmation(name: &str) -> (String, String, String) {
    let subject = "Thank You for Contacting WebNirvaan".to_string();

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<style>
  body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
  .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
  .header {{ background: linear-gradient(135deg, #7c3aed 0%, #06b6d4 100%); color: white; padding: 20px; border-radius: 8px 8px 0 0; text-align: center; }}
  .content {{ background: #f9fafb; padding: 20px; border: 1px solid #e5e7eb; }}
  .footer {{ text-align: center; padding: 20px; color: #6b7280; font-size: 12px; }}
</style>
</head>
<body>
<div class="container">
  <div class="header"><h2>Thank You for Contacting Us!</h2></div>
  <div class="content">
    <p>Dear {name},</p>
    <p>Thank you for reaching out to WebNirvaan. We have received your message and will get back to you as soon as possible.</p>
    <p>Our team typically responds within 24-48 hours.</p>
    <p>Best regards,<br>The WebNirvaan Team</p>
  </div>
  <div class="footer"><p>This is an automated confirmation email.</p></div>
</div>
</body>
</html>"#
    );

    let text = format!(
        "Thank You for Contacting Us!\n\nDear {name},\n\nThank you for reaching out to WebNirvaan. \
We have received your message and will get back to you as soon as possible.\n\n\
Our team typically responds within 24-48 hours.\n\nBest regards,\nThe WebNirvaan Team"
    );

    (subject, html, text)
}
