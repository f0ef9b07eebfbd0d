use serde_json::Value;

use crate::traits::HttpMethod;

#[derive(Debug)]
pub struct Request {
    pub(crate) method: HttpMethod,
    pub(crate) url: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) json: Option<Value>,
    pub(crate) headers: Option<Vec<(String, String)>>,
}

pub struct RequestBuilder {
    request: Request,
}

impl Request {
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }
}

impl Default for Request {
    fn default() -> Self {
        Request {
            method: HttpMethod::GET,
            url: Default::default(),
            query: Vec::new(),
            json: None,
            headers: None,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            request: Request::default(),
        }
    }

    pub fn set_method(mut self, method: HttpMethod) -> Self {
        self.request.method = method;

        self
    }

    pub fn set_url(mut self, url: impl Into<String>) -> Self {
        self.request.url = url.into();

        self
    }

    pub fn add_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.query.push((key.into(), value.into()));

        self
    }

    pub fn set_json_body(mut self, json: Value) -> Self {
        self.request.json = Some(json);

        self
    }

    pub fn set_headers(mut self, headers: &[(String, String)]) -> Self {
        self.request.headers = Some(headers.to_vec());

        self
    }

    pub fn build(self) -> Request {
        self.request
    }
}
