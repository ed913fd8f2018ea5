use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::{BoxFuture, HttpRequest, HttpResponse, HttpTransport, TransportFailure};
use crate::transport::HttpMethod;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub token: String,
    pub body: Option<Value>,
}

type FailureFactory = fn() -> TransportFailure;

#[derive(Debug, Clone)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    last_request: Option<RecordedRequest>,
    response_status: u16,
    response_body: String,
    failure: Option<FailureFactory>,
}

impl FakeTransport {
    pub fn new(response_status: u16, response_body: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                last_request: None,
                response_status,
                response_body: response_body.into(),
                failure: None,
            })),
        }
    }

    pub fn failing(failure: FailureFactory) -> Self {
        let transport = Self::new(0, "");
        transport.state.lock().unwrap().failure = Some(failure);
        transport
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.lock().unwrap().last_request.clone()
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest<'a>,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            state.last_request = Some(RecordedRequest {
                method: request.method,
                url: request.url.to_string(),
                token: request.token.to_owned(),
                body: request.body.cloned(),
            });
            if let Some(failure) = state.failure {
                return Err(failure());
            }
            Ok(HttpResponse {
                status: state.response_status,
                body: state.response_body.clone(),
            })
        })
    }
}
