//! Rebuildable request descriptions.
//!
//! A logical call may be replayed once after a token refresh. Requests are
//! described declaratively and rebuilt per attempt, so a replayed multipart
//! body carries the same bytes as the first attempt. Nothing is re-encoded.

use reqwest::multipart;
use reqwest::{Client, Method, RequestBuilder};
use tokio_util::sync::CancellationToken;

use crate::error::{ClientError, ClientResult};

/// Body of an [`ApiRequest`].
#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<MultipartField>),
}

/// One field of a multipart form.
#[derive(Debug, Clone)]
pub struct MultipartField {
    pub name: String,
    pub value: FieldValue,
}

#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    File {
        bytes: Vec<u8>,
        filename: String,
        mime: String,
    },
}

/// Description of one logical API call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    /// Abandons the call, including a pending refresh/retry, when triggered.
    pub cancel: Option<CancellationToken>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            cancel: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }

    /// Append a text field, switching the body to multipart.
    pub fn text_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_field(MultipartField {
            name: name.into(),
            value: FieldValue::Text(value.into()),
        });
        self
    }

    /// Append a file field, switching the body to multipart.
    pub fn file_field(
        mut self,
        name: impl Into<String>,
        bytes: Vec<u8>,
        filename: impl Into<String>,
        mime: impl Into<String>,
    ) -> Self {
        self.push_field(MultipartField {
            name: name.into(),
            value: FieldValue::File {
                bytes,
                filename: filename.into(),
                mime: mime.into(),
            },
        });
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn push_field(&mut self, field: MultipartField) {
        match &mut self.body {
            RequestBody::Multipart(fields) => fields.push(field),
            _ => self.body = RequestBody::Multipart(vec![field]),
        }
    }

    /// Build one concrete attempt against `base_url`, attaching `token` as a
    /// bearer credential when present.
    pub(crate) fn build(
        &self,
        http: &Client,
        base_url: &str,
        token: Option<&str>,
    ) -> ClientResult<RequestBuilder> {
        let url = format!("{}{}", base_url, self.path);
        let mut builder = http.request(self.method.clone(), url);

        if !self.query.is_empty() {
            builder = builder.query(&self.query);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        match &self.body {
            RequestBody::Empty => Ok(builder),
            RequestBody::Json(value) => Ok(builder.json(value)),
            RequestBody::Multipart(fields) => {
                let mut form = multipart::Form::new();
                for field in fields {
                    form = match &field.value {
                        FieldValue::Text(text) => form.text(field.name.clone(), text.clone()),
                        FieldValue::File {
                            bytes,
                            filename,
                            mime,
                        } => {
                            let part = multipart::Part::bytes(bytes.clone())
                                .file_name(filename.clone())
                                .mime_str(mime)
                                .map_err(|e| {
                                    ClientError::InvalidResponse(format!(
                                        "invalid MIME type {mime:?}: {e}"
                                    ))
                                })?;
                            form.part(field.name.clone(), part)
                        }
                    };
                }
                Ok(builder.multipart(form))
            }
        }
    }
}
