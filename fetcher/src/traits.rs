#[derive(Debug, Clone, Copy)]
pub enum HttpMethod {
    GET,
    POST,
}

pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
