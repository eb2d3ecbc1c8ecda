use folio_contact::DeliveryPayload;

#[derive(askama::Template)]
#[template(path = "contact-message.txt")]
pub struct ContactMessageTemplate<'a> {
    pub payload: &'a DeliveryPayload,
}

impl<'a> ContactMessageTemplate<'a> {
    pub fn new(payload: &'a DeliveryPayload) -> Self {
        Self { payload }
    }

    pub fn subject(&self) -> String {
        format!("New message from contact page: {}", self.payload.subject)
    }
}
