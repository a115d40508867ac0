use rocket::http::{ContentType, Header};

const CONTENT_DISPOSITION: &str = "Content-Disposition";

/// A response the browser downloads instead of displaying it.
#[derive(Responder)]
pub struct Attachment {
    inner: (ContentType, Vec<u8>),
    content_disposition: Header<'static>,
}

impl Attachment {
    pub fn new(content_type: ContentType, content: Vec<u8>, file_name: &str) -> Self {
        Self {
            inner: (content_type, content),
            content_disposition: Header::new(
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        }
    }
}
